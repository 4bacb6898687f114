//! Terminal rendering helpers

use sprint_rhythm::sprints::SprintStatus;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const CYAN: &'static str = "\x1b[36m";
    pub const MAGENTA: &'static str = "\x1b[35m";
    pub const GRAY: &'static str = "\x1b[90m";
}

/// Wrap `text` in a color code when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Color for a status label
pub fn status_color(status: SprintStatus) -> &'static str {
    match status {
        SprintStatus::Past => Color::GRAY,
        SprintStatus::Current => Color::GREEN,
        SprintStatus::Future => Color::CYAN,
    }
}

/// Render the weekly review flags as "[x][ ][ ][ ]"
pub fn review_boxes(reviews: &[bool]) -> String {
    reviews
        .iter()
        .map(|done| if *done { "[x]" } else { "[ ]" })
        .collect()
}
