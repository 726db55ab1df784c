//! Creation timestamps that survive parse failures
//!
//! Exports write `createdAt` as extended ISO-8601, usually with a `Z` suffix.
//! Anything that does not parse is kept verbatim and shown as-is.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use std::fmt;

/// Display format for parsed timestamps (day/month/year hour:minute)
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M%:z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// `createdAt` value: structured when it parses, raw text otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedAt {
    Parsed {
        /// Wall-clock time as written in the source
        local: NaiveDateTime,
        /// UTC offset, when the source carried one
        offset: Option<FixedOffset>,
    },
    Raw(String),
}

impl CreatedAt {
    /// Parse a timestamp, falling back to [`CreatedAt::Raw`].
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        let normalized = match text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
            Some(rest) => format!("{}+00:00", rest),
            None => text.to_string(),
        };

        if let Some(dt) = parse_with_offset(&normalized) {
            return CreatedAt::Parsed {
                local: dt.naive_local(),
                offset: Some(*dt.offset()),
            };
        }

        if let Some(local) = parse_naive(&normalized) {
            return CreatedAt::Parsed { local, offset: None };
        }

        CreatedAt::Raw(raw.to_string())
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, CreatedAt::Parsed { .. })
    }

    /// Timestamp with its offset, if it was parsed and carried one
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            CreatedAt::Parsed {
                local,
                offset: Some(offset),
            } => local.and_local_timezone(*offset).single(),
            _ => None,
        }
    }

    /// Text shown to users
    pub fn display(&self) -> String {
        match self {
            CreatedAt::Parsed { local, .. } => local.format(DISPLAY_FORMAT).to_string(),
            CreatedAt::Raw(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn parse_with_offset(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    })
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
