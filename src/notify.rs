//! Desktop notification dispatch
//!
//! Hands the digest text to `notify-send`. The transport is deliberately a
//! plain child process: the host environment decides how notifications look.

use std::process::Command;
use thiserror::Error;

/// Fixed title of the delivery-dates notification
const NOTIFICATION_TITLE: &str = "Posten Delivery Dates";

/// Errors that can occur when dispatching a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification command could not be spawned
    #[error("Failed to run notify-send: {0}")]
    Spawn(#[from] std::io::Error),

    /// The notification command ran but reported failure
    #[error("notify-send exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Sends the digest as a desktop notification with the fixed title.
pub fn send_notification(body: &str) -> Result<(), NotifyError> {
    let status = Command::new("notify-send")
        .arg(NOTIFICATION_TITLE)
        .arg(body)
        .status()?;

    if !status.success() {
        return Err(NotifyError::Failed(status));
    }
    Ok(())
}
