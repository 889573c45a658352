//! # Conversion Integration Tests / 转换集成测试
//!
//! End-to-end tests that run the `convert` subcommand against a fixture
//! project and inspect the rewritten target file on disk.
//!
//! 端到端测试，针对 fixture 项目运行 `convert` 子命令，
//! 并检查磁盘上重写后的目标文件。

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

mod common;

fn run_convert(project: &Path, config: &Path) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("loctext-converter").unwrap();
    cmd.arg("convert")
        .arg("--config")
        .arg(config)
        .arg("--project-dir")
        .arg(project);
    cmd.assert()
}

#[test]
fn test_convert_rewrites_all_macro_calls() {
    let project = common::setup_test_environment();

    run_convert(project.path(), &project.path().join("Localize.toml")).success();

    let converted =
        fs::read_to_string(project.path().join("Source/GameWidget.cpp")).unwrap();

    // Translated key: Chinese from the catalog, English falls back to the default.
    assert!(converted.contains(r#"BP_LOCTEXT("Hello", "你好", "Hello")"#));
    // Key absent from both catalogs: the default text fills both positions.
    assert!(converted.contains(r#"BP_LOCTEXT("Missing", "Fallback", "Fallback")"#));
    // Quotes inside translations are escaped in both substituted positions.
    assert!(converted.contains(r#"BP_LOCTEXT("Quote", "带\"引号\"的文本", "Text with \"quotes\"")"#));
    // No two-argument calls survive the rewrite.
    assert!(!converted.contains("= LOCTEXT("));
}

#[test]
fn test_second_run_is_noop() {
    let project = common::setup_test_environment();
    let config = project.path().join("Localize.toml");
    let target = project.path().join("Source/GameWidget.cpp");

    run_convert(project.path(), &config).success();
    let after_first = fs::read_to_string(&target).unwrap();

    // Rerunning over converted content matches nothing and changes nothing.
    run_convert(project.path(), &config)
        .success()
        .stdout(predicate::str::contains("(0 replacements)"));
    let after_second = fs::read_to_string(&target).unwrap();

    assert_eq!(after_first, after_second);
}

#[test]
fn test_no_targets_is_reported() {
    let project = common::setup_test_environment();
    let config = common::create_no_targets_config(&project);

    run_convert(project.path(), &config)
        .success()
        .stdout(predicate::str::contains("No target files configured"))
        .stdout(predicate::str::contains("Done!"));
}

#[test]
fn test_unrelated_content_preserved() {
    let project = common::setup_test_environment();

    run_convert(project.path(), &project.path().join("Localize.toml")).success();

    let converted =
        fs::read_to_string(project.path().join("Source/GameWidget.cpp")).unwrap();

    // Lines around the macro calls are carried over untouched.
    assert!(converted.contains("void SGameWidget::Construct()"));
    assert!(converted.starts_with("void"));
    assert!(converted.ends_with("}\n"));
}
