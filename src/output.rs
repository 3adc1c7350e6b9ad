//! Output rendering for the status bar and the notification digest

use crate::config::Config;
use crate::dates::{classify, strip_relative_marker};

/// Icon shown in front of the delivery date in the bar
const BAR_ICON: &str = "\u{f0e0}";

/// Column width each digest line is right-justified to
const DIGEST_WIDTH: usize = 25;

/// One status-bar record: `<icon> <color><date>` when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarOutput {
    pub icon: String,
    pub color: String,
    pub date: String,
    pub unit: String,
}

impl BarOutput {
    /// Renders the single status-bar line.
    pub fn render(&self) -> String {
        format!("{} {}{}{}", self.icon, self.color, self.date, self.unit)
    }
}

/// Capitalizes the first character of a token.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds the status-bar record for the soonest delivery-date entry.
///
/// The label is the entry's leading token, capitalized ("Today", "Tomorrow",
/// or a weekday name); the color comes from the config via classification.
pub fn bar_output(first_entry: &str, config: &Config) -> BarOutput {
    let classification = classify(first_entry);
    let color = format!("%{{F{}}}", config.color_for(classification));
    let leading = first_entry.split_whitespace().next().unwrap_or_default();

    BarOutput {
        icon: BAR_ICON.to_string(),
        color,
        date: capitalize(leading),
        unit: String::new(),
    }
}

/// Builds the notification body: one line per entry, relative markers
/// stripped, right-justified to a fixed width. Each line ends in a newline.
pub fn notification_digest(entries: &[String]) -> String {
    let mut digest = String::new();
    for entry in entries {
        let stripped = strip_relative_marker(entry);
        digest.push_str(&format!("{:>width$}\n", stripped, width = DIGEST_WIDTH));
    }
    digest
}
