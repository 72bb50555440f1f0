//! Zone classification and its presentation lookup table.
//!
//! Every view (gauge, stats cards, distribution bars, history tooltip, CLI)
//! resolves colors and emoji through [`Zone::style`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Boundary between the GREEN and YELLOW zones.
pub const GREEN_YELLOW_THRESHOLD: f64 = 0.7;

/// Boundary between the YELLOW and RED zones.
pub const YELLOW_RED_THRESHOLD: f64 = 1.0;

/// Qualitative classification of a Zc value, as reported by the backend.
///
/// Any zone string the backend sends other than GREEN/YELLOW/RED
/// deserializes to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Zone {
    Green,
    Yellow,
    Red,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Presentation attributes for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneStyle {
    /// Hex color used by the web views
    pub color: &'static str,
    pub emoji: &'static str,
    /// ANSI SGR sequence for terminal output (empty for no color)
    pub ansi: &'static str,
}

const GREEN_STYLE: ZoneStyle = ZoneStyle {
    color: "#16a34a",
    emoji: "🟢",
    ansi: "\x1b[92m",
};
const YELLOW_STYLE: ZoneStyle = ZoneStyle {
    color: "#f59e0b",
    emoji: "🟡",
    ansi: "\x1b[93m",
};
const RED_STYLE: ZoneStyle = ZoneStyle {
    color: "#dc2626",
    emoji: "🔴",
    ansi: "\x1b[91m",
};
const UNKNOWN_STYLE: ZoneStyle = ZoneStyle {
    color: "#808080",
    emoji: "⚪",
    ansi: "",
};

/// ANSI reset sequence.
pub const ANSI_RESET: &str = "\x1b[0m";

impl Zone {
    /// Zones in the order the distribution bars are drawn.
    pub const DISTRIBUTION_ORDER: [Zone; 3] = [Zone::Green, Zone::Yellow, Zone::Red];

    pub const fn style(self) -> &'static ZoneStyle {
        match self {
            Zone::Green => &GREEN_STYLE,
            Zone::Yellow => &YELLOW_STYLE,
            Zone::Red => &RED_STYLE,
            Zone::Unknown => &UNKNOWN_STYLE,
        }
    }

    pub const fn color(self) -> &'static str {
        self.style().color
    }

    pub const fn emoji(self) -> &'static str {
        self.style().emoji
    }

    /// Upper-case wire label ("GREEN", ...).
    pub const fn label(self) -> &'static str {
        match self {
            Zone::Green => "GREEN",
            Zone::Yellow => "YELLOW",
            Zone::Red => "RED",
            Zone::Unknown => "UNKNOWN",
        }
    }

    /// Title-case label used next to the distribution bars.
    pub const fn title(self) -> &'static str {
        match self {
            Zone::Green => "Green",
            Zone::Yellow => "Yellow",
            Zone::Red => "Red",
            Zone::Unknown => "Unknown",
        }
    }

    /// Wrap `text` in this zone's terminal color.
    pub fn paint(self, text: &str) -> String {
        let ansi = self.style().ansi;
        if ansi.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", ansi, text, ANSI_RESET)
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup_is_total() {
        assert_eq!(Zone::Green.color(), "#16a34a");
        assert_eq!(Zone::Yellow.color(), "#f59e0b");
        assert_eq!(Zone::Red.color(), "#dc2626");
        assert_eq!(Zone::Unknown.color(), "#808080");
    }

    #[test]
    fn test_emoji_lookup() {
        assert_eq!(Zone::Green.emoji(), "🟢");
        assert_eq!(Zone::Yellow.emoji(), "🟡");
        assert_eq!(Zone::Red.emoji(), "🔴");
        assert_eq!(Zone::Unknown.emoji(), "⚪");
    }

    #[test]
    fn test_unrecognized_zone_deserializes_to_unknown() {
        let zone: Zone = serde_json::from_str("\"PURPLE\"").unwrap();
        assert_eq!(zone, Zone::Unknown);
        assert_eq!(zone.color(), "#808080");

        let zone: Zone = serde_json::from_str("\"YELLOW\"").unwrap();
        assert_eq!(zone, Zone::Yellow);
    }

    #[test]
    fn test_paint_skips_unknown() {
        assert_eq!(Zone::Unknown.paint("1.00"), "1.00");
        assert_eq!(Zone::Red.paint("1.20"), "\x1b[91m1.20\x1b[0m");
    }
}
