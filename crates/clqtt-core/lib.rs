//! # clqtt-core
//!
//! Converter for `.clqtt` timed-text project files. Takes the raw bytes of a
//! JSON project and produces two standalone text artifacts: an HTML
//! rendering of the subtitle events (timecodes, tags, annotations) and a CSV
//! export of annotation text keyed by subtitle number.
//!
//! The pipeline is parse → derive → render: the project schema is
//! materialized once with defaulted fields, subtitles are numbered in event
//! insertion order with frame-rate-aware timecodes, and both renderers walk
//! the same derived list. Conversion is pure and deterministic — the same
//! input always yields byte-identical outputs.
//!
//! ## Quick Start
//!
//! ```rust
//! let input = br#"{
//!     "meta": {"fps": "2400", "lang": "en"},
//!     "events": {
//!         "e1": {"txt": "Hello", "start": 0, "end": 36}
//!     }
//! }"#;
//!
//! let output = clqtt_core::convert(input)?;
//! assert!(output.html.contains("00:00:00:00 - 00:00:01:12"));
//! assert!(output.csv.starts_with('\u{feff}'));
//! # Ok::<(), clqtt_core::ConvertError>(())
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod project;
pub mod render;
pub mod subtitle;
pub mod timecode;

pub use errors::ConvertError;
pub use project::{Annotation, Event, Meta, Project, TextDirection};
pub use render::{render_csv, render_html};
pub use subtitle::{derive_subtitles, Subtitle};
pub use timecode::FrameRate;

/// Crate version for runtime compatibility checks.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for conversion operations.
pub type Result<T> = core::result::Result<T, ConvertError>;

/// The two text artifacts produced by a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    /// Annotation table: UTF-8 BOM, header row, one row per annotated
    /// subtitle, RFC 4180 quoting.
    pub csv: String,

    /// Complete standalone HTML document rendering every subtitle.
    pub html: String,
}

/// Convert raw `.clqtt` bytes into the CSV and HTML artifacts.
///
/// This is the only error boundary: either both outputs are produced or
/// neither is. Field-level anomalies inside a well-formed project are
/// absorbed by defaulting during decoding.
///
/// # Errors
///
/// Returns [`ConvertError`] when the input is not valid JSON or its
/// top-level shape cannot be decoded, and on CSV writer failures.
pub fn convert(bytes: &[u8]) -> Result<ConversionOutput> {
    let project = Project::from_slice(bytes)?;
    let subtitles = derive_subtitles(&project);

    let csv = render_csv(&subtitles)?;
    let html = render_html(&subtitles, project.meta.direction());

    Ok(ConversionOutput { csv, html })
}
