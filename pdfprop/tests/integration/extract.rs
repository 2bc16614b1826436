//! Integration tests for property extraction.

use lopdf::{Object, dictionary};
use pdfprop::config::{ExtractConfig, NameStyle, ReportFormat};
use pdfprop::error::PdfPropError;
use pdfprop::extract;
use rstest::rstest;
use std::path::PathBuf;

use crate::common::{PdfBuilder, Workspace};

fn titled_pdf(ws: &Workspace, name: &str) -> PathBuf {
    let path = ws.path(name);
    PdfBuilder::new(1, 612)
        .info(dictionary! {
            "Title" => Object::string_literal("T"),
            "Author" => Object::string_literal("A"),
        })
        .save(&path);
    path
}

fn annotated_pdf(ws: &Workspace, name: &str) -> PathBuf {
    let path = ws.path(name);
    PdfBuilder::new(2, 612)
        .info(dictionary! {
            "Title" => Object::string_literal("T"),
        })
        .annotation(
            1,
            dictionary! {
                "Type" => "Annot",
                "Subtype" => "Text",
                "CreationDate" => Object::string_literal("D:20240101120000Z"),
                "Contents" => Object::string_literal("note"),
            },
        )
        .save(&path);
    path
}

#[tokio::test]
async fn test_extract_title_and_author() {
    let ws = Workspace::new();
    let input = titled_pdf(&ws, "in.pdf");
    let output = ws.path("out.txt");

    let info = extract(&ExtractConfig::new(&input, &output, false))
        .await
        .unwrap();

    assert_eq!(info.file_path, input);
    let report = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        report,
        format!(
            "PDF_file_path = {}\n\nproperty_num: 2\nTitle = T\nAuthor = A\n\nannotation_num: 0\n",
            input.display()
        )
    );
}

#[tokio::test]
async fn test_extract_text_annotation() {
    let ws = Workspace::new();
    let input = annotated_pdf(&ws, "in.pdf");
    let output = ws.path("out.txt");

    let info = extract(&ExtractConfig::new(&input, &output, true))
        .await
        .unwrap();

    assert_eq!(info.annotations.len(), 1);
    assert_eq!(info.annotations[0].page, 2);

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("annotation_num: 1\n"));
    assert!(report.contains(
        "\nAnnotation 1:\n\
         Type = Annot\n\
         Subtype = Text\n\
         CreationDate = D:20240101120000Z\n\
         Contents = note\n"
    ));
}

#[tokio::test]
async fn test_extract_skips_annotations_unless_requested() {
    let ws = Workspace::new();
    let input = annotated_pdf(&ws, "in.pdf");
    let output = ws.path("out.txt");

    let info = extract(&ExtractConfig::new(&input, &output, false))
        .await
        .unwrap();

    assert!(info.annotations.is_empty());
    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.ends_with("annotation_num: 0\n"));
}

#[tokio::test]
async fn test_extract_existing_output_left_untouched() {
    let ws = Workspace::new();
    let input = titled_pdf(&ws, "in.pdf");
    let output = ws.path("out.txt");
    std::fs::write(&output, "earlier report").unwrap();

    let err = extract(&ExtractConfig::new(&input, &output, true))
        .await
        .unwrap_err();

    match err {
        PdfPropError::OutputExists { path } => assert_eq!(path, output),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "earlier report");
}

#[tokio::test]
async fn test_extract_report_over_input_is_output_exists() {
    let ws = Workspace::new();
    let input = titled_pdf(&ws, "in.pdf");
    let before = std::fs::read(&input).unwrap();

    let err = extract(&ExtractConfig::new(&input, &input, false))
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPropError::OutputExists { ref path } if *path == input));
    assert_eq!(err.exit_code(), 4);
    assert_eq!(std::fs::read(&input).unwrap(), before);
}

#[tokio::test]
async fn test_extract_is_deterministic() {
    let ws = Workspace::new();
    let input = annotated_pdf(&ws, "in.pdf");
    let first = ws.path("first.txt");
    let second = ws.path("second.txt");

    extract(&ExtractConfig::new(&input, &first, true))
        .await
        .unwrap();
    extract(&ExtractConfig::new(&input, &second, true))
        .await
        .unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[rstest]
#[case::bare(NameStyle::Bare, "Subtype = Text\n")]
#[case::prefixed(NameStyle::Prefixed, "/Subtype = /Text\n")]
#[tokio::test]
async fn test_extract_name_style(#[case] style: NameStyle, #[case] expected: &str) {
    let ws = Workspace::new();
    let input = annotated_pdf(&ws, "in.pdf");
    let output = ws.path("out.txt");

    let mut config = ExtractConfig::new(&input, &output, true);
    config.name_style = style;
    extract(&config).await.unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains(expected), "report was:\n{report}");
}

#[tokio::test]
async fn test_extract_property_count_matches_lines() {
    let ws = Workspace::new();
    let input = ws.path("in.pdf");
    PdfBuilder::new(1, 612)
        .info(dictionary! {
            "Title" => Object::string_literal("T"),
            "Producer" => Object::string_literal("P"),
            "WPS-PROCLEVEL" => Object::string_literal("2"),
            "CreationDate" => Object::string_literal("D:19970812183011"),
        })
        .save(&input);
    let output = ws.path("out.txt");

    extract(&ExtractConfig::new(&input, &output, false))
        .await
        .unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    let mut lines = report.lines().skip_while(|line| !line.starts_with("property_num:"));
    let declared: usize = lines
        .next()
        .and_then(|line| line.strip_prefix("property_num: "))
        .and_then(|n| n.parse().ok())
        .unwrap();
    let entries = lines.take_while(|line| line.contains(" = ")).count();
    assert_eq!(declared, 4);
    assert_eq!(entries, declared);
}

#[tokio::test]
async fn test_extract_json_report() {
    let ws = Workspace::new();
    let input = annotated_pdf(&ws, "in.pdf");
    let output = ws.path("out.json");

    let mut config = ExtractConfig::new(&input, &output, true);
    config.format = ReportFormat::Json;
    extract(&config).await.unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["properties"]["Title"], "T");
    assert_eq!(json["annotations"][0]["entries"]["Contents"], "note");
    assert_eq!(json["annotations"][0]["page"], 2);
}

#[tokio::test]
async fn test_extract_without_info_dictionary() {
    let ws = Workspace::new();
    let input = ws.pdf("in.pdf", 1, 612);
    let output = ws.path("out.txt");

    let info = extract(&ExtractConfig::new(&input, &output, true))
        .await
        .unwrap();

    assert!(info.properties.is_empty());
    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("property_num: 0\n\nannotation_num: 0\n"));
}
