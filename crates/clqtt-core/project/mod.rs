//! Typed schema for `.clqtt` project files.
//!
//! A clqtt project is a JSON document with two top-level mappings: `meta`
//! (frame rate and language) and `events` (keyed timed-text events whose
//! insertion order is the display order). The schema here materializes every
//! field with a declared default once during decoding, so downstream code
//! never consults the raw JSON again.
//!
//! Decoding is strict about shape and lenient about content: a value that is
//! not an object where an object is required fails the whole conversion,
//! while any missing field inside a well-formed object takes its default.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// UTF-8 byte-order mark, tolerated at the start of input files.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// A parsed `.clqtt` project: metadata plus ordered events.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project-wide metadata (frame rate, language).
    pub meta: Meta,

    /// Timed-text events keyed by arbitrary strings. Iteration order is the
    /// JSON insertion order, which defines subtitle numbering.
    pub events: IndexMap<String, Event>,
}

impl Project {
    /// Decode a project from raw input bytes.
    ///
    /// A leading UTF-8 BOM is skipped. Unknown fields at any level are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConvertError::Parse`] when the bytes are not valid
    /// JSON or the top-level shape does not decode into a project.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Project metadata with defaulted fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Frame rate as a fixed-point digit string scaled by 100, e.g. `"2400"`
    /// for 24 fps. Non-digit values fall back to 24 fps at resolution time.
    pub fps: String,

    /// Language code. Only `"ar"` is special-cased, for right-to-left text.
    pub lang: String,
}

impl Meta {
    /// Text direction for rendered subtitle content.
    #[must_use]
    pub fn direction(&self) -> TextDirection {
        if self.lang == "ar" {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            fps: "2400".into(),
            lang: "en".into(),
        }
    }
}

/// Rendering direction for subtitle text blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Default direction, used for every language except Arabic.
    LeftToRight,
    /// Used when the project language is `"ar"`.
    RightToLeft,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::LeftToRight => "ltr",
            Self::RightToLeft => "rtl",
        }
    }
}

/// One timed subtitle event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Caption text, possibly multi-line.
    pub txt: String,

    /// First frame of the event.
    pub start: u64,

    /// Last frame of the event.
    pub end: u64,

    /// Event type. `"fn"` marks a forced narrative.
    #[serde(rename = "type")]
    pub kind: String,

    /// Screen region. `"top"` marks top-positioned captions.
    pub rgn: String,

    /// Keyed annotation entries. Kept as raw values because real-world files
    /// mix object-shaped annotations with stray scalars; see
    /// [`Event::annotations`].
    pub annotations: IndexMap<String, Value>,
}

impl Event {
    /// Valid annotations attached to this event, in insertion order.
    ///
    /// Only object-shaped entries count; scalar or array values are skipped
    /// silently. A missing or non-string `description` reads as empty.
    pub fn annotations(&self) -> impl Iterator<Item = Annotation<'_>> {
        self.annotations.values().filter_map(|value| {
            value.as_object().map(|obj| Annotation {
                description: obj.get("description").and_then(Value::as_str).unwrap_or(""),
            })
        })
    }

    /// Whether the event is a forced narrative (`type == "fn"`).
    #[must_use]
    pub fn is_forced_narrative(&self) -> bool {
        self.kind == "fn"
    }

    /// Whether the event renders in the top region (`rgn == "top"`).
    #[must_use]
    pub fn is_top_region(&self) -> bool {
        self.rgn == "top"
    }
}

/// A free-text note attached to an event, borrowed from the raw entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// Note text, empty when the entry carried none.
    pub description: &'a str,
}
