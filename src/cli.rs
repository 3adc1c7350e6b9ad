//! Command-line interface parsing for postbar
//!
//! The surface is one optional positional argument: `notify` selects the
//! desktop-notification digest, anything else (or nothing) selects the
//! status-bar line. Unknown values fall back to bar mode on purpose, so a
//! misconfigured bar module still renders instead of erroring.

use clap::Parser;

/// Status-bar token and desktop notifications for Posten delivery dates
#[derive(Parser, Debug)]
#[command(name = "postbar")]
#[command(about = "Upcoming Posten.no mail-delivery dates for your status bar")]
#[command(version)]
pub struct Cli {
    /// Output mode: `notify` sends a desktop notification, anything else
    /// prints the status-bar line
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,
}

/// The two output modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One-line status-bar token
    Bar,
    /// Desktop notification listing all upcoming dates
    Notify,
}

impl Mode {
    /// Resolves the positional argument into a mode.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("notify") => Mode::Notify,
            _ => Mode::Bar,
        }
    }
}

impl Cli {
    /// The output mode selected by this invocation.
    pub fn mode(&self) -> Mode {
        Mode::from_arg(self.mode.as_deref())
    }
}
