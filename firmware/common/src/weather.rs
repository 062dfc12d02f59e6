//! Weather condition classification.
//!
//! The companion app sends a free-form conditions string ("Clear", "Partly Cloudy",
//! "Light Rain"). It is mapped onto one of five icon categories by case-sensitive
//! substring search in a fixed priority order; the first match wins:
//!
//! | Priority | Keyword(s)        | Icon                      |
//! |----------|-------------------|---------------------------|
//! | 1        | `Sun` or `Clear`  | [`WeatherIcon::Sunny`]    |
//! | 2        | `Cloud`           | [`WeatherIcon::Cloudy`]   |
//! | 3        | `Rain`            | [`WeatherIcon::Rainy`]    |
//! | 4        | `Snow`            | [`WeatherIcon::Snowy`]    |
//! | -        | anything else     | [`WeatherIcon::Unknown`]  |

use crate::text::TextBuffer;

/// Weather icon categories.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WeatherIcon {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    /// Fallback for conditions matching no keyword.
    Unknown,
}

/// Keyword table in priority order.
const KEYWORDS: [(&str, WeatherIcon); 5] = [
    ("Sun", WeatherIcon::Sunny),
    ("Clear", WeatherIcon::Sunny),
    ("Cloud", WeatherIcon::Cloudy),
    ("Rain", WeatherIcon::Rainy),
    ("Snow", WeatherIcon::Snowy),
];

impl WeatherIcon {
    /// Classify a conditions string.
    pub fn classify(conditions: &str) -> Self {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| conditions.contains(keyword))
            .map_or(Self::Unknown, |&(_, icon)| icon)
    }

    /// Short name used in log records.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Unknown => "unknown",
        }
    }
}

/// Write the weather line (`"<temperature>, <conditions>"`) into `buffer`.
pub fn format_report<const N: usize>(
    buffer: &mut TextBuffer<N>,
    temperature: &str,
    conditions: &str,
) {
    buffer.set_fmt(format_args!("{temperature}, {conditions}"));
}

// =============================================================================
// Tests
// =============================================================================
