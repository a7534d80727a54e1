//! Reply placeholders.
//!
//! `{name}` is filled with the bot name once, when the category table is
//! built. `{time}`, `{date}` and `{datetime}` are filled from the clock each
//! time a reply is produced.

use chrono::{DateTime, Local};

pub const NAME: &str = "{name}";
pub const TIME: &str = "{time}";
pub const DATE: &str = "{date}";
pub const DATETIME: &str = "{datetime}";

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%A, %B %d, %Y";
const DATETIME_FORMAT: &str = "%I:%M %p on %B %d, %Y";

/// Substitute the bot name into a reply.
pub fn render_name(reply: &str, bot_name: &str) -> String {
    reply.replace(NAME, bot_name)
}

/// Whether a reply needs the clock to render.
pub fn is_time_dependent(reply: &str) -> bool {
    reply.contains(TIME) || reply.contains(DATE) || reply.contains(DATETIME)
}

/// Substitute clock placeholders into a reply.
pub fn render_time(reply: &str, now: DateTime<Local>) -> String {
    if !is_time_dependent(reply) {
        return reply.to_string();
    }
    // Longest token first.
    reply
        .replace(DATETIME, &now.format(DATETIME_FORMAT).to_string())
        .replace(DATE, &now.format(DATE_FORMAT).to_string())
        .replace(TIME, &now.format(TIME_FORMAT).to_string())
}

/// Format a ledger timestamp for display.
pub fn clock_label(at: DateTime<Local>) -> String {
    at.format(TIME_FORMAT).to_string()
}
