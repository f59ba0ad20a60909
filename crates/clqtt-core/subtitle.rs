//! Derivation of numbered subtitles from project events.
//!
//! Each event yields exactly one [`Subtitle`], numbered by its 1-based
//! position in the project's event order. Derivation is where user text
//! becomes markup-safe: it is HTML-escaped first, then newlines are replaced
//! with `<br>` so multi-line captions survive single-line-oriented markup.
//! The same treatment applies to annotation descriptions, which are joined
//! into one string per subtitle.

use crate::{
    project::{Event, Project},
    timecode::FrameRate,
};

/// Line-break marker substituted for newlines in caption and note text.
const LINE_BREAK: &str = "<br>";

/// One display-ready subtitle derived from an event.
///
/// All strings are markup-safe: renderers insert them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    number: usize,
    text: String,
    annotations: String,
    start_time: String,
    end_time: String,
    forced_narrative: bool,
    top_region: bool,
}

impl Subtitle {
    fn derive(number: usize, event: &Event, rate: FrameRate) -> Self {
        let annotations = event
            .annotations()
            .map(|a| escape_multiline(a.description))
            .collect::<Vec<_>>()
            .join(LINE_BREAK);

        Self {
            number,
            text: escape_multiline(&event.txt),
            annotations,
            start_time: rate.timecode(event.start),
            end_time: rate.timecode(event.end),
            forced_narrative: event.is_forced_narrative(),
            top_region: event.is_top_region(),
        }
    }

    /// 1-based position in the project's event order.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Caption text, escaped, with newlines rendered as `<br>`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All annotation descriptions joined with `<br>`; empty when the event
    /// carried no valid annotations.
    #[must_use]
    pub fn annotations(&self) -> &str {
        &self.annotations
    }

    /// Formatted `HH:MM:SS:FF` start position.
    #[must_use]
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Formatted `HH:MM:SS:FF` end position.
    #[must_use]
    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    /// Markup fragment for forced-narrative events, empty otherwise.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        if self.forced_narrative {
            "<span class='type-tag'>FN</span>"
        } else {
            ""
        }
    }

    /// Markup fragment for top-region events, empty otherwise.
    #[must_use]
    pub const fn rgn_tag(&self) -> &'static str {
        if self.top_region {
            "<span class='rgn-tag'>Top</span>"
        } else {
            ""
        }
    }

    /// Whether either tag fragment is non-empty.
    #[must_use]
    pub const fn has_tags(&self) -> bool {
        self.forced_narrative || self.top_region
    }
}

/// Derive the ordered subtitle list for a project.
///
/// The frame rate is resolved once from `meta.fps` and applied to every
/// timecode.
#[must_use]
pub fn derive_subtitles(project: &Project) -> Vec<Subtitle> {
    let rate = FrameRate::resolve(&project.meta.fps);
    project
        .events
        .values()
        .enumerate()
        .map(|(i, event)| Subtitle::derive(i + 1, event, rate))
        .collect()
}

/// HTML-escape text, then replace newlines with the line-break marker.
///
/// Escaping runs first so the inserted markers are the only markup in the
/// result.
fn escape_multiline(text: &str) -> String {
    html_escape::encode_text(text).replace('\n', LINE_BREAK)
}
