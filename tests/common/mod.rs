// Shared test helpers for integration tests
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Builds a temporary project with two catalogs, one target source file and
/// a `Localize.toml` pointing at them.
pub fn setup_test_environment() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let project_path = temp_dir.path();

    let zh_dir = project_path.join("Localization/zh-Hans");
    let en_dir = project_path.join("Localization/en");
    let src_dir = project_path.join("Source");
    fs::create_dir_all(&zh_dir).expect("Failed to create zh-Hans directory");
    fs::create_dir_all(&en_dir).expect("Failed to create en directory");
    fs::create_dir_all(&src_dir).expect("Failed to create Source directory");

    let chinese_catalog = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"
"Language: zh-Hans\n"

msgid "Hello"
msgstr "你好"

msgid "Quote"
msgstr "带\"引号\"的文本"
"#;
    fs::write(zh_dir.join("Game.po"), chinese_catalog).expect("Failed to write Chinese catalog");

    let english_catalog = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"
"Language: en\n"

msgid "Quote"
msgstr "Text with \"quotes\""
"#;
    fs::write(en_dir.join("Game.po"), english_catalog).expect("Failed to write English catalog");

    let widget_source = r#"void SGameWidget::Construct()
{
    TitleText = LOCTEXT("Hello", "Hello");
    MissingText = LOCTEXT("Missing", "Fallback");
    QuoteText = LOCTEXT("Quote", "Default");
}
"#;
    fs::write(src_dir.join("GameWidget.cpp"), widget_source).expect("Failed to write target file");

    let config = r#"language = "en"

[catalogs]
chinese = "Localization/zh-Hans/Game.po"
english = "Localization/en/Game.po"

[[targets]]
path = "Source/GameWidget.cpp"

[macros]
source = "LOCTEXT"
replacement = "BP_LOCTEXT"
"#;
    fs::write(project_path.join("Localize.toml"), config).expect("Failed to write Localize.toml");

    temp_dir
}

/// Helper function to create an invalid TOML configuration
pub fn create_invalid_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("invalid.toml");
    let content = r#"
language = "en"
# Invalid TOML - missing closing bracket
[catalogs
chinese = "a.po"
english = "b.po"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create a configuration pointing at catalogs that do not exist
pub fn create_missing_catalog_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("missing_catalog.toml");
    let content = r#"
language = "en"

[catalogs]
chinese = "does/not/exist/zh.po"
english = "does/not/exist/en.po"

[[targets]]
path = "Source/GameWidget.cpp"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create a configuration with a target file that does not exist
pub fn create_missing_target_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("missing_target.toml");
    let content = r#"
language = "en"

[catalogs]
chinese = "Localization/zh-Hans/Game.po"
english = "Localization/en/Game.po"

[[targets]]
path = "Source/DoesNotExist.cpp"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Helper function to create a configuration without any targets
pub fn create_no_targets_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("no_targets.toml");
    let content = r#"
language = "en"

[catalogs]
chinese = "Localization/zh-Hans/Game.po"
english = "Localization/en/Game.po"
"#;
    fs::write(&config_path, content).unwrap();
    config_path
}
