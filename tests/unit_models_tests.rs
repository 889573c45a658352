//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Unit tests for the conversion summary structures.
//!
//! 转换摘要结构的单元测试。

use loctext_converter::core::models::{ConversionSummary, FileReport};
use std::path::PathBuf;

#[test]
fn test_empty_summary() {
    let summary = ConversionSummary::default();

    assert_eq!(summary.total_replacements(), 0);
    assert!(summary.files.is_empty());
}

#[test]
fn test_record_accumulates_files() {
    let mut summary = ConversionSummary::default();
    summary.record(PathBuf::from("a.cpp"), 3);
    summary.record(PathBuf::from("b.cpp"), 0);
    summary.record(PathBuf::from("c.cpp"), 7);

    assert_eq!(summary.files.len(), 3);
    assert_eq!(summary.total_replacements(), 10);
}

#[test]
fn test_file_report_conversion_flag() {
    let converted = FileReport {
        path: PathBuf::from("a.cpp"),
        replacements: 1,
    };
    let unchanged = FileReport {
        path: PathBuf::from("b.cpp"),
        replacements: 0,
    };

    assert!(converted.is_converted());
    assert!(!unchanged.is_converted());
}
