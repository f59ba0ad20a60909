//! Standalone HTML rendering of the subtitle list.
//!
//! The document is self-contained: a fixed inline stylesheet, then one
//! container block per subtitle with its index/timecode header, caption
//! text, and optional tag and annotation blocks. Subtitle and annotation
//! strings arrive already markup-safe from derivation, so they are inserted
//! verbatim here.

use crate::{project::TextDirection, subtitle::Subtitle};

/// Document head with the fixed stylesheet.
const DOCUMENT_HEAD: &str = r"<!DOCTYPE html>
<html lang='en'>
<head>
    <meta charset='UTF-8'>
    <meta name='viewport' content='width=device-width, initial-scale=1.0'>
    <title>Converted</title>
    <style>
        body { background-color: #121212; color: #ffffff; font-family: Arial, sans-serif; padding: 20px; }
        .TimedTextEvent {
            padding: 10px;
            width: 50rem;
            content-visibility: visible;
            contain: none;
            margin-bottom: 20px;
            border-radius: 5px;
            transition: background-color 0.3s;
        }
        .TimedTextEvent:hover {
            background-color: #333333;
        }
        .timing {
            display: flex;
            justify-content: flex-start;
            align-items: center;
            font-variant: tabular-nums;
            color: #aaaaaa;
        }
        .timing .index {
            margin-right: 1rem;
            font-weight: bold;
            color: white;
        }
        .timing .timecode {
            font-size: 0.9em;
        }
        .subtitle-content {
            margin-top: 10px;
            font-size: 20px;
            white-space: pre;
        }
        .tags {
            margin-top: 10px;
        }
        .tags span {
            background: rgb(156, 39, 176);
            padding: 4px 8px;
            border-radius: 5px;
            color: white;
            font-size: 0.9em;
        }
        .annotations {
            margin-top: 10px;
            font-style: italic;
        }
        .annotations .annotation-label {
            color: rgb(33, 150, 243);
            font-weight: bold;
        }
        .download-link {
            display: block;
            margin-bottom: 20px;
            color: #1e90ff;
            text-decoration: none;
            font-weight: bold;
        }
        .download-link:hover {
            text-decoration: underline;
        }
    </style>
</head>
<body>
";

const DOCUMENT_FOOT: &str = "\n</body>\n</html>\n";

/// Render the complete HTML document for an ordered subtitle list.
///
/// `direction` applies to every subtitle's text block; it comes from the
/// project language.
#[must_use]
pub fn render_html(subtitles: &[Subtitle], direction: TextDirection) -> String {
    let mut out = String::with_capacity(DOCUMENT_HEAD.len() + subtitles.len() * 256);
    out.push_str(DOCUMENT_HEAD);

    for subtitle in subtitles {
        render_subtitle(&mut out, subtitle, direction);
    }

    out.push_str(DOCUMENT_FOOT);
    out
}

fn render_subtitle(out: &mut String, subtitle: &Subtitle, direction: TextDirection) {
    out.push_str(&format!(
        r#"
<div class="TimedTextEvent">
    <div class="timing">
        <span class="index">{:04}</span>
        <span class="timecode">{} - {}</span>
    </div>
    <div class="subtitle-content" dir="{}">{}</div>
"#,
        subtitle.number(),
        subtitle.start_time(),
        subtitle.end_time(),
        direction.as_attr(),
        subtitle.text(),
    ));

    if subtitle.has_tags() {
        out.push_str(&format!(
            "    <div class=\"tags\">\n        {} {}\n    </div>\n",
            subtitle.type_tag(),
            subtitle.rgn_tag(),
        ));
    }

    if !subtitle.annotations().is_empty() {
        out.push_str(&format!(
            "    <div class=\"annotations\">\n        <span class=\"annotation-label\">Annotation:</span> {}\n    </div>\n",
            subtitle.annotations(),
        ));
    }

    out.push_str("</div>");
}
