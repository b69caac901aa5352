//! Cross client/server tokens.
//!
//! Constants and display tables shared by convention with the Tellus server.
//! Most items in here have a counterpart in the server's route wiring, so
//! renaming anything requires a matching server change.

use chrono::{DateTime, NaiveDateTime};

// Well-known query strings
pub const DNS_ACTIVE: &str = "link";
pub const DNS_ALL: &str = "dns";
pub const TOOLS: &str = "aq-tool";
pub const ALL_TELLS: &str = "all-tells";

/// Username the server reports when nobody is logged in.
pub const TELLUS_APP_USERNAME: &str = "tellus";

// Command Routes - single characters reserved for some action or internal use
pub const R_GO: &str = "g"; // redirects to a GO URL
pub const R_TELL: &str = "t"; // returns json for a single Tell
pub const R_TELLS: &str = "q"; // returns minimal json for a queried group of tells
pub const R_SOURCES: &str = "o"; // routes for controlling sources
pub const R_USER: &str = "u"; // routes for information pertaining to a tellus user
pub const R_MGMT: &str = "m"; // routes for management functions and controls
pub const R_TESTING: &str = "x"; // routes for testing endpoints

/// Separator between the view name and its parameter in a hash fragment.
/// Not `-`, because Tellus aliases may contain dashes.
pub const PARAM_SEPARATOR: char = '.';

pub const UNKNOWN_DISPLAY_NAME: &str = "???";
pub const NO_DESCRIPTION: &str = "No description available.";

/// Tellus Categories that should be displayed, in order:
/// (category key, display name, display description).
const DISPLAY_TELLUS_CATEGORIES: &[(&str, &str, &str)] = &[
    ("", "ALL", "All Tells"),
    ("tellus-go", "go", "Go Links"),
    (
        "tellus-user",
        "user modified",
        "Human-modified (tellus will limit systematic updates)",
    ),
    ("tellus-link", "dns", "Active DNS Entries"),
    ("tellus-aq-tool", "tools", "Tools (tellus.yml primary entries)"),
    (
        "tellus-aq-tool-related",
        "tools*",
        "Tool-related (tellus.yml related entries)",
    ),
    ("tellus-dns", "dns", "All DNS entries"),
    (
        "tellus-dns-other",
        "dns other",
        "Non-link DNS Entries (hidden in 'All Tells' list by default)",
    ),
    ("tellus-aquanaut", "user", "Aquanauts"),
    (
        "tellus-internal",
        "tellus",
        "Has a special Tellus function (please be careful if editing).",
    ),
];

/// Data block IDs that should be displayed, in display order. Any data block
/// not in this list is not displayed on the Tell page.
const DISPLAY_TELLUS_DATA_BLOCKS: &[(&str, &str, &str)] = &[
    ("user-info", "User Info", "User Info"),
    ("tellus-aq-tool", "tellus.yml info", "Data from tellus.yml"),
    ("tellus-dns", "DNS Info", "DNS Info"),
    ("tellus-debug-info", "Debugging", "Debugging"),
];

/// The category keys that should be displayed, in display order.
pub fn display_categories() -> impl Iterator<Item = &'static str> {
    DISPLAY_TELLUS_CATEGORIES.iter().map(|(key, _, _)| *key)
}

/// The data block IDs that should be displayed, in display order.
pub fn display_data_blocks() -> impl Iterator<Item = &'static str> {
    DISPLAY_TELLUS_DATA_BLOCKS.iter().map(|(key, _, _)| *key)
}

fn lookup_display_info(lookup_key: &str, data_block: bool) -> Option<(&'static str, &'static str)> {
    if data_block {
        if let Some((_, name, description)) = DISPLAY_TELLUS_DATA_BLOCKS
            .iter()
            .find(|(key, _, _)| *key == lookup_key)
        {
            return Some((name, description));
        }
    }
    DISPLAY_TELLUS_CATEGORIES
        .iter()
        .find(|(key, _, _)| *key == lookup_key)
        .map(|(_, name, description)| (*name, *description))
}

/// The display name associated with a category or data block key, or `"???"`
/// when the key is unrecognized.
pub fn display_name(lookup_key: &str, data_block: bool) -> &'static str {
    lookup_display_info(lookup_key, data_block)
        .map(|(name, _)| name)
        .unwrap_or(UNKNOWN_DISPLAY_NAME)
}

/// The display description associated with a category or data block key, if
/// the key is recognized.
pub fn lookup_description(lookup_key: &str, data_block: bool) -> Option<&'static str> {
    lookup_display_info(lookup_key, data_block).map(|(_, description)| description)
}

/// The display description associated with a category or data block key,
/// degrading to a generic message for unrecognized keys.
pub fn display_description(lookup_key: &str, data_block: bool) -> &'static str {
    lookup_description(lookup_key, data_block).unwrap_or(NO_DESCRIPTION)
}

/// Relative URL to query the server for a chunk of tell data.
pub fn query_route(data_route: &str, query_string: &str) -> String {
    format!("/{}/{}", data_route, query_string)
}

/// Hash link that lists all Tells matching a tag/category query string.
pub fn link_query(query_string: &str) -> String {
    format!("#l{}{}", PARAM_SEPARATOR, query_string)
}

/// Render an ISO datetime as `MM-DD-YYYY hh:mm` for display. The server sends
/// `'None'` for missing timestamps in some payloads.
pub fn display_timestamp(iso_date_string: Option<&str>) -> String {
    let Some(raw) = iso_date_string else {
        return "No Timestamp".to_string();
    };
    if raw == "None" || raw.is_empty() {
        return "No Timestamp".to_string();
    }
    match parse_iso(raw) {
        Some(parsed) => parsed.format("%m-%d-%Y %I:%M").to_string(),
        None => raw.to_string(),
    }
}

fn parse_iso(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_known_category() {
        assert_eq!(display_name("tellus-go", false), "go");
        assert_eq!(display_name("", false), "ALL");
    }

    #[test]
    fn display_name_unknown_key_degrades_to_placeholder() {
        assert_eq!(display_name("no-such-category", false), "???");
    }

    #[test]
    fn data_block_lookup_consults_block_table_first() {
        // 'tellus-aq-tool' exists in both tables with different names
        assert_eq!(display_name("tellus-aq-tool", true), "tellus.yml info");
        assert_eq!(display_name("tellus-aq-tool", false), "tools");
    }

    #[test]
    fn display_description_unknown_key_degrades_to_generic() {
        assert_eq!(
            display_description("no-such-category", false),
            "No description available."
        );
        assert_eq!(lookup_description("no-such-category", false), None);
    }

    #[test]
    fn category_order_is_stable() {
        let categories: Vec<_> = display_categories().collect();
        assert_eq!(categories[0], "");
        assert_eq!(categories[1], "tellus-go");
        assert_eq!(categories.len(), 10);
    }

    #[test]
    fn query_route_builds_relative_path() {
        assert_eq!(query_route(R_TELLS, "all-tells"), "/q/all-tells");
    }

    #[test]
    fn link_query_builds_tells_hash() {
        assert_eq!(link_query("coffee-bot"), "#l.coffee-bot");
    }

    #[test]
    fn display_timestamp_handles_missing_values() {
        assert_eq!(display_timestamp(None), "No Timestamp");
        assert_eq!(display_timestamp(Some("None")), "No Timestamp");
    }

    #[test]
    fn display_timestamp_formats_iso_datetimes() {
        assert_eq!(
            display_timestamp(Some("2023-04-05T14:30:00")),
            "04-05-2023 02:30"
        );
    }
}
