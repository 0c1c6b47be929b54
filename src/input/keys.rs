//! Keyboard answers for terminal play.

use super::InputEvent;

/// Parse a typed line. Accepts English and French answers.
#[must_use]
pub fn parse_key(line: &str) -> Option<InputEvent> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" | "o" | "oui" | "+" => Some(InputEvent::YES),
        "n" | "no" | "non" | "-" => Some(InputEvent::NO),
        "r" | "restart" => Some(InputEvent::Restart),
        _ => None,
    }
}
