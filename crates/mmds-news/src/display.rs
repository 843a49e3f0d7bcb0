use jiff::tz::{self, TimeZone};
use jiff::Timestamp;

/// Shown for records that carry no creation time.
pub const UNKNOWN_CREATED_AT: &str = "Chưa có thông tin";

/// Renders a creation time the way the public pages show it:
/// `dd/mm/yyyy HH:MM` in Vietnam time (UTC+7).
pub fn format_created_at(created_at: Option<Timestamp>) -> String {
    match created_at {
        Some(ts) => ts
            .to_zoned(TimeZone::fixed(tz::offset(7)))
            .strftime("%d/%m/%Y %H:%M")
            .to_string(),
        None => UNKNOWN_CREATED_AT.to_string(),
    }
}
