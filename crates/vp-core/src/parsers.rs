//! Parsing helpers for date strings.
//!
//! Holiday sources hand dates over as ISO 8601 strings; these helpers split
//! them into raw components. Range checks on the components are the job of
//! the date type that consumes them.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. Surrounding whitespace is
/// ignored; anything other than three dash-separated numbers is rejected.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.trim().split('-');
    let year: u16 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}
