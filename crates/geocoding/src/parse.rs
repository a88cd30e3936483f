//! Coordinate parsing for subscriber-typed locations.

use std::sync::OnceLock;

use alert_core::Location;
use regex::Regex;

fn dms_regex() -> &'static Regex {
    static DMS: OnceLock<Regex> = OnceLock::new();
    DMS.get_or_init(|| Regex::new(r#"^(\d+)°(\d+)'([\d.]+)"?([NSEW])$"#).expect("valid regex"))
}

/// Parse coordinates from a string.
///
/// Accepted formats:
/// - decimal: `"lat lon"` or `"lat,lon"`
/// - DMS: `41°24'12.2"N 2°10'26.5"E`
///
/// Returns `None` for anything unparsable.
pub fn parse_coordinates(raw: &str) -> Option<Location> {
    let raw = raw.trim();

    if raw
        .to_uppercase()
        .chars()
        .any(|c| matches!(c, 'N' | 'S' | 'E' | 'W'))
    {
        parse_dms_coordinates(raw)
    } else {
        parse_decimal_coordinates(raw)
    }
}

fn parse_decimal_coordinates(raw: &str) -> Option<Location> {
    let mut parts = if raw.contains(' ') {
        raw.split_whitespace()
    } else {
        return parse_decimal_pair(raw.split(','));
    };

    let latitude: f64 = parts.next()?.parse().ok()?;
    let longitude: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(Location::new(latitude, longitude))
}

fn parse_decimal_pair<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<Location> {
    let latitude: f64 = parts.next()?.trim().parse().ok()?;
    let longitude: f64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(Location::new(latitude, longitude))
}

fn parse_dms_coordinates(raw: &str) -> Option<Location> {
    let upper = raw.to_uppercase();
    let mut parts = upper.split_whitespace();
    let first = parse_dms(parts.next()?)?;
    let second = parse_dms(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    // One component must be a latitude (N/S), the other a longitude (E/W),
    // in either order.
    match (first, second) {
        ((lat, 'N' | 'S'), (lon, 'E' | 'W')) | ((lon, 'E' | 'W'), (lat, 'N' | 'S')) => {
            Some(Location::new(lat, lon))
        }
        _ => None,
    }
}

/// Parse one DMS component into signed decimal degrees plus its axis letter.
fn parse_dms(raw: &str) -> Option<(f64, char)> {
    let captures = dms_regex().captures(raw)?;

    let degrees: f64 = captures[1].parse().ok()?;
    let minutes: f64 = captures[2].parse().ok()?;
    let seconds: f64 = captures[3].parse().ok()?;
    let direction = captures[4].chars().next()?;

    let mut decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if matches!(direction, 'S' | 'W') {
        decimal = -decimal;
    }

    Some((decimal, direction))
}
