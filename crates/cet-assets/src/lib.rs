//! Embedded templates and static assets for the CET website.
//!
//! Two asset sets are compiled into the binary via `rust-embed`:
//!
//! - **Templates** (`templates/`): Jinja-style HTML page templates
//! - **Static files** (`static/`): stylesheets and scripts served under `/static/`
//!
//! In debug builds `rust-embed` reads the files from disk, so template edits
//! show up without recompiling.

use std::borrow::Cow;

#[derive(rust_embed::RustEmbed)]
#[folder = "templates/"]
struct Templates;

#[derive(rust_embed::RustEmbed)]
#[folder = "static/"]
struct Static;

/// Get a template source by name (relative to `templates/`, e.g. `"about/story.html"`).
///
/// Returns `None` if the template does not exist or is not valid UTF-8.
pub fn template(name: &str) -> Option<String> {
    let file = Templates::get(name)?;
    String::from_utf8(file.data.into_owned()).ok()
}

/// Get a static asset by path (relative to `static/`, e.g. `"css/site.css"`).
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Static::get(path).map(|f| f.data)
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}
