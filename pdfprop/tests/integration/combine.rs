//! Integration tests for combining PDF files.

use pdfprop::combine;
use pdfprop::config::MergeConfig;
use pdfprop::error::PdfPropError;
use rstest::rstest;

use crate::common::{Workspace, page_widths};

fn quiet_config(output: std::path::PathBuf, inputs: Vec<std::path::PathBuf>) -> MergeConfig {
    let mut config = MergeConfig::new(output, inputs);
    config.quiet = true;
    config
}

#[tokio::test]
async fn test_combine_two_and_three_pages() {
    let ws = Workspace::new();
    let first = ws.pdf("first.pdf", 2, 100);
    let second = ws.pdf("second.pdf", 3, 200);
    let output = ws.path("combined.pdf");

    let summary = combine(&quiet_config(output.clone(), vec![first, second]))
        .await
        .unwrap();

    assert_eq!(summary.merge.files_merged, 2);
    assert_eq!(summary.merge.total_pages, 5);
    assert_eq!(page_widths(&output), vec![100, 101, 200, 201, 202]);
}

#[rstest]
#[case::single(vec![1])]
#[case::pair(vec![2, 3])]
#[case::many(vec![1, 4, 2, 1])]
#[tokio::test]
async fn test_combine_page_count_is_sum(#[case] pages: Vec<usize>) {
    let ws = Workspace::new();
    let inputs: Vec<_> = pages
        .iter()
        .enumerate()
        .map(|(i, &n)| ws.pdf(&format!("in{i}.pdf"), n, 100 * (i as i64 + 1)))
        .collect();
    let output = ws.path("out.pdf");

    let summary = combine(&quiet_config(output.clone(), inputs)).await.unwrap();

    let expected: usize = pages.iter().sum();
    assert_eq!(summary.merge.total_pages, expected);
    assert_eq!(page_widths(&output).len(), expected);
}

#[tokio::test]
async fn test_combine_preserves_input_order() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", 1, 300);
    let b = ws.pdf("b.pdf", 1, 100);
    let output = ws.path("out.pdf");

    combine(&quiet_config(output.clone(), vec![a.clone(), b, a]))
        .await
        .unwrap();

    assert_eq!(page_widths(&output), vec![300, 100, 300]);
}

#[rstest]
#[case::first(0)]
#[case::middle(1)]
#[case::last(2)]
#[tokio::test]
async fn test_combine_missing_input_names_path(#[case] missing_index: usize) {
    let ws = Workspace::new();
    let mut inputs: Vec<_> = (0..3)
        .map(|i| ws.pdf(&format!("in{i}.pdf"), 1, 100))
        .collect();
    let missing = ws.path("missing.pdf");
    inputs[missing_index] = missing.clone();
    let output = ws.path("out.pdf");

    let err = combine(&quiet_config(output.clone(), inputs)).await.unwrap_err();

    match err {
        PdfPropError::FileNotFound { path } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_combine_reports_first_missing_input() {
    let ws = Workspace::new();
    let gone1 = ws.path("gone1.pdf");
    let gone2 = ws.path("gone2.pdf");
    let output = ws.path("out.pdf");

    let err = combine(&quiet_config(output, vec![gone1.clone(), gone2]))
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPropError::FileNotFound { path } if path == gone1));
}

#[tokio::test]
async fn test_combine_overwrites_existing_output() {
    let ws = Workspace::new();
    let input = ws.pdf("in.pdf", 2, 100);
    let output = ws.path("out.pdf");
    std::fs::write(&output, b"stale").unwrap();

    combine(&quiet_config(output.clone(), vec![input]))
        .await
        .unwrap();

    assert_eq!(page_widths(&output), vec![100, 101]);
    let mut names: Vec<_> = std::fs::read_dir(ws.path(""))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    names.sort();
    assert_eq!(names, vec!["in.pdf", "out.pdf"]);
}

#[tokio::test]
async fn test_combine_invalid_pdf_fails_to_load() {
    let ws = Workspace::new();
    let good = ws.pdf("good.pdf", 1, 100);
    let bad = ws.path("bad.pdf");
    std::fs::write(&bad, b"not a pdf").unwrap();
    let output = ws.path("out.pdf");

    let err = combine(&quiet_config(output.clone(), vec![good, bad]))
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPropError::FailedToLoadPdf { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_combine_output_may_be_an_input() {
    let ws = Workspace::new();
    let first = ws.pdf("first.pdf", 1, 100);
    let second = ws.pdf("second.pdf", 2, 200);

    combine(&quiet_config(first.clone(), vec![first.clone(), second]))
        .await
        .unwrap();

    assert_eq!(page_widths(&first), vec![100, 200, 201]);
}

#[tokio::test]
async fn test_combine_output_among_inputs_still_reports_missing_input() {
    let ws = Workspace::new();
    let first = ws.pdf("first.pdf", 1, 100);
    let missing = ws.path("missing.pdf");

    let err = combine(&quiet_config(first.clone(), vec![first.clone(), missing.clone()]))
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPropError::FileNotFound { ref path } if *path == missing));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(page_widths(&first), vec![100]);
}

#[tokio::test]
async fn test_combine_keeps_input_named_like_a_temp_file() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", 1, 100);
    let lookalike = ws.pdf("out.pdf.tmp", 2, 300);
    let before = std::fs::read(&lookalike).unwrap();
    let output = ws.path("out.pdf");

    combine(&quiet_config(output.clone(), vec![a, lookalike.clone()]))
        .await
        .unwrap();

    assert_eq!(page_widths(&output), vec![100, 300, 301]);
    assert_eq!(std::fs::read(&lookalike).unwrap(), before);
}
