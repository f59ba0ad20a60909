//! Output renderers for derived subtitles.
//!
//! Two text artifacts are produced from the same subtitle list: a standalone
//! HTML document for review in a browser, and a CSV table of annotation text
//! for spreadsheet tools. Both renderers are pure string builders.

mod csv;
mod html;

pub use csv::render_csv;
pub use html::render_html;
