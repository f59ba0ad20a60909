//! End-to-end conversion tests over the public `convert` entry point.

use clqtt_core::{convert, ConvertError};

/// A small but representative project: mixed frame rate, multi-line text,
/// tags, and a mixture of annotated and plain events.
const SAMPLE: &[u8] = br#"{
    "meta": {"fps": "2500", "lang": "en"},
    "events": {
        "intro": {
            "txt": "Welcome back",
            "start": 0,
            "end": 50
        },
        "sign": {
            "txt": "NO ENTRY\n(sign)",
            "start": 75,
            "end": 150,
            "type": "fn",
            "rgn": "top",
            "annotations": {
                "qc1": {"description": "verify sign translation"},
                "qc2": {"description": "timing feels late"}
            }
        },
        "outro": {
            "txt": "See you, soon",
            "start": 1500,
            "end": 90000,
            "annotations": {
                "bad": 12,
                "qc": {"description": "comma in caption"}
            }
        }
    }
}"#;

#[test]
fn html_lists_every_event_in_order() {
    let output = convert(SAMPLE).unwrap();

    let first = output.html.find("0001").unwrap();
    let second = output.html.find("0002").unwrap();
    let third = output.html.find("0003").unwrap();
    assert!(first < second && second < third);

    // 25 fps timecodes.
    assert!(output.html.contains("00:00:00:00 - 00:00:02:00"));
    assert!(output.html.contains("00:00:03:00 - 00:00:06:00"));
    assert!(output.html.contains("00:01:00:00 - 01:00:00:00"));
}

#[test]
fn html_carries_tags_and_annotations_for_the_right_events() {
    let output = convert(SAMPLE).unwrap();

    assert!(output.html.contains("NO ENTRY<br>(sign)"));
    assert!(output.html.contains("<span class='type-tag'>FN</span>"));
    assert!(output.html.contains("<span class='rgn-tag'>Top</span>"));
    assert!(output
        .html
        .contains("verify sign translation<br>timing feels late"));

    // The unannotated, untagged first event gets neither optional block.
    let intro_start = output.html.find("0001").unwrap();
    let sign_start = output.html.find("0002").unwrap();
    let intro_block = &output.html[intro_start..sign_start];
    assert!(!intro_block.contains("class=\"tags\""));
    assert!(!intro_block.contains("class=\"annotations\""));
}

#[test]
fn csv_contains_only_annotated_subtitles() {
    let output = convert(SAMPLE).unwrap();

    let body = output.csv.strip_prefix('\u{feff}').unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("Subtitle Number,Subtitle Text,Annotation"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("2,"));
    assert!(rows[0].contains("verify sign translation<br>timing feels late"));
    // Caption with an embedded comma is quoted.
    assert!(rows[1].starts_with("3,\"See you, soon\","));
}

#[test]
fn malformed_json_fails_without_output() {
    let truncated = &SAMPLE[..SAMPLE.len() / 2];
    assert!(matches!(convert(truncated), Err(ConvertError::Parse(_))));
}

#[test]
fn structural_type_mismatch_fails() {
    assert!(convert(br#"{"events": {"k": {"start": "soon"}}}"#).is_err());
}

#[test]
fn empty_project_still_produces_both_documents() {
    let output = convert(b"{}").unwrap();
    assert!(output.html.contains("</html>"));
    assert_eq!(
        output.csv,
        "\u{feff}Subtitle Number,Subtitle Text,Annotation\n"
    );
}

#[test]
fn outputs_are_byte_identical_across_runs() {
    assert_eq!(convert(SAMPLE).unwrap(), convert(SAMPLE).unwrap());
}
