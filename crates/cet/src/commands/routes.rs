//! `cet routes` command implementation.

use cet_site::Route;
use cet_site::routes::ROUTES;
use clap::Args;
use serde_json::json;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Print routes as JSON.
    #[arg(long)]
    json: bool,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.json {
            let routes: Vec<_> = ROUTES.iter().map(route_json).collect();
            output.result(&serde_json::to_string_pretty(&routes)?);
            return Ok(());
        }

        let width = ROUTES.iter().map(|r| r.endpoint.len()).max().unwrap_or(0);
        for route in ROUTES {
            output.result(&format_route(route, width));
        }
        Ok(())
    }
}

fn methods(route: &Route) -> String {
    route
        .methods
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn format_route(route: &Route, width: usize) -> String {
    format!(
        "{:<width$}  {:<8}  {}",
        route.endpoint,
        methods(route),
        route.path
    )
}

fn route_json(route: &Route) -> serde_json::Value {
    json!({
        "endpoint": route.endpoint,
        "path": route.path,
        "methods": route.methods.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
        "title": route.title,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_route() {
        let contact = cet_site::routes::route("contact").unwrap();
        assert_eq!(format_route(contact, 10), "contact     GET,POST  /contact");
    }

    #[test]
    fn test_route_json() {
        let webhook = cet_site::routes::route("handle_webhook").unwrap();
        let json = route_json(webhook);
        assert_eq!(json["path"], "/webhooks/webhook");
        assert_eq!(json["methods"], json!(["GET", "POST"]));
    }
}
