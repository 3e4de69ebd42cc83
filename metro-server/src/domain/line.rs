//! Line labels and their display classification.

use std::fmt;

/// Label shown when no line can be resolved for a station.
pub const NO_LINE: &str = "N/A";

/// A normalized line label, e.g. "Blue Line".
///
/// Labels are trimmed and converted to title case: the first letter of
/// every word is upper case and the rest are lower case, where a word
/// starts after any non-letter character. The label is a display name
/// only; two edges sharing a label are not known to be the same service.
///
/// # Examples
///
/// ```
/// use metro_server::domain::LineLabel;
///
/// let label = LineLabel::normalize("  yellow LINE ");
/// assert_eq!(label.as_str(), "Yellow Line");
///
/// let label = LineLabel::normalize("blue line (branch)");
/// assert_eq!(label.as_str(), "Blue Line (Branch)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineLabel(String);

impl LineLabel {
    /// Normalize a raw label from the dataset.
    pub fn normalize(raw: &str) -> Self {
        LineLabel(title_case(raw.trim()))
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the display category for this label.
    pub fn category(&self) -> LineCategory {
        LineCategory::classify(&self.0)
    }
}

impl fmt::Debug for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineLabel({})", self.0)
    }
}

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert text to title case: a letter is upper case when it starts a
/// word and lower case otherwise.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }

    out
}

/// Coarse display category of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCategory {
    Blue,
    Yellow,
    Red,
    Green,
    Pink,
    Violet,
    Orange,
    Magenta,
    Grey,
    AirportExpress,
    Unknown,
}

/// Ordered (prefix, category) table. The first matching prefix wins.
const PREFIXES: &[(&str, LineCategory)] = &[
    ("Blue Line", LineCategory::Blue),
    ("Yellow Line", LineCategory::Yellow),
    ("Red Line", LineCategory::Red),
    ("Green Line", LineCategory::Green),
    ("Pink Line", LineCategory::Pink),
    ("Violet Line", LineCategory::Violet),
    ("Orange Line", LineCategory::Orange),
    ("Magenta Line", LineCategory::Magenta),
    ("Grey Line", LineCategory::Grey),
    ("Airport Express", LineCategory::AirportExpress),
];

impl LineCategory {
    /// Classify a label by the first matching prefix.
    ///
    /// Matching is case-sensitive against normalized labels, so callers
    /// should pass the output of [`LineLabel::normalize`].
    pub fn classify(label: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| label.starts_with(prefix))
            .map(|(_, category)| *category)
            .unwrap_or(LineCategory::Unknown)
    }

    /// Emoji marker shown next to the line name.
    pub fn marker(&self) -> &'static str {
        match self {
            LineCategory::Blue => "🔵",
            LineCategory::Yellow => "🟡",
            LineCategory::Red => "🔴",
            LineCategory::Green => "🟢",
            LineCategory::Pink => "🩷",
            LineCategory::Violet => "🔹",
            LineCategory::Orange => "🟠",
            LineCategory::Magenta => "🔹",
            LineCategory::Grey => "⚫",
            LineCategory::AirportExpress => "🟤",
            LineCategory::Unknown => "⚪",
        }
    }

    /// CSS colour used for the line badge.
    pub fn colour(&self) -> &'static str {
        match self {
            LineCategory::Blue => "#1f5fbf",
            LineCategory::Yellow => "#f2c200",
            LineCategory::Red => "#d62828",
            LineCategory::Green => "#2a9d3f",
            LineCategory::Pink => "#e0559b",
            LineCategory::Violet => "#7b3fb5",
            LineCategory::Orange => "#f28c28",
            LineCategory::Magenta => "#b5179e",
            LineCategory::Grey => "#7a7a7a",
            LineCategory::AirportExpress => "#8c5a2b",
            LineCategory::Unknown => "#f1f3f5",
        }
    }

    /// Short machine-readable name, used in JSON responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCategory::Blue => "blue",
            LineCategory::Yellow => "yellow",
            LineCategory::Red => "red",
            LineCategory::Green => "green",
            LineCategory::Pink => "pink",
            LineCategory::Violet => "violet",
            LineCategory::Orange => "orange",
            LineCategory::Magenta => "magenta",
            LineCategory::Grey => "grey",
            LineCategory::AirportExpress => "airport_express",
            LineCategory::Unknown => "unknown",
        }
    }
}
