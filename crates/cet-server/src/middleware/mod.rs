//! Response middleware.

pub(crate) mod error_pages;
