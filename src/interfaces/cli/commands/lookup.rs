use std::sync::Arc;

use colored::Colorize;
use tracing::debug;

use crate::config::AppConfig;
use crate::controller::{ControllerOptions, LookupController, LookupView};
use crate::errors::{LocatorError, Result};
use crate::interfaces::display_value;
use crate::notify::notification_channel;
use crate::services::{HttpLocationClient, LocationService};

/// Run one lookup through the controller
///
/// Returns the resulting view, or the notification text when the lookup failed.
pub async fn perform_lookup(
    service: Arc<dyn LocationService>,
    options: ControllerOptions,
    address: Option<&str>,
) -> std::result::Result<LookupView, String> {
    let (tx, mut rx) = notification_channel();
    let controller = LookupController::new(service, Arc::new(tx), options);

    controller.submit(address.unwrap_or_default()).await;
    controller.destroy();

    match rx.try_recv() {
        Ok(notification) => Err(notification.message),
        Err(_) => Ok(controller.current_view()),
    }
}

/// Label/value pairs in display order, empty values shown as the placeholder
pub fn render_lines(view: &LookupView) -> Vec<(&'static str, String)> {
    view.labeled_fields()
        .iter()
        .map(|(label, value)| (*label, display_value(value).to_string()))
        .collect()
}

pub async fn lookup(config: &AppConfig, address: Option<&str>, json: bool) -> Result<()> {
    let service = Arc::new(HttpLocationClient::new(&config.service.base_url));
    debug!(
        "CLI lookup for {:?} via {}",
        address, config.service.base_url
    );

    let view = perform_lookup(service, ControllerOptions::from_config(config), address)
        .await
        .map_err(LocatorError::lookup)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", "Location Information:".bold().cyan());
    for (label, value) in render_lines(&view) {
        println!("  {:<10} {}", format!("{}:", label).yellow(), value.white());
    }
    Ok(())
}
