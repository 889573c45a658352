use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths to the two translation catalogs consumed by a conversion.
/// Relative paths are resolved against the project directory.
/// 转换所使用的两个翻译目录的路径。
/// 相对路径会基于项目目录解析。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogPaths {
    /// Path to the Chinese `.po` catalog.
    /// 中文 `.po` 目录的路径。
    pub chinese: PathBuf,
    /// Path to the English `.po` catalog.
    /// 英文 `.po` 目录的路径。
    pub english: PathBuf,
}

/// A single source file to be rewritten in place.
/// 要就地重写的单个源文件。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetFile {
    /// Path to the file, relative to the project directory unless absolute.
    /// 文件路径，除非是绝对路径，否则相对于项目目录。
    pub path: PathBuf,
}

/// The macro invocation pair driving the rewrite: every
/// `source("Key", "Default")` call becomes a three-argument
/// `replacement("Key", "Chinese", "English")` call.
///
/// 驱动重写的宏调用对：每个 `source("Key", "Default")` 调用
/// 都会变为三参数的 `replacement("Key", "Chinese", "English")` 调用。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MacroNames {
    /// The macro to look for in the target files.
    /// 在目标文件中查找的宏。
    #[serde(default = "default_source_macro")]
    pub source: String,
    /// The macro written in its place.
    /// 替换时写入的宏。
    #[serde(default = "default_replacement_macro")]
    pub replacement: String,
}

impl Default for MacroNames {
    fn default() -> Self {
        Self {
            source: default_source_macro(),
            replacement: default_replacement_macro(),
        }
    }
}

/// Represents the entire conversion configuration, loaded from a TOML file
/// (`Localize.toml` by default). It names the catalogs, the target files,
/// and the macro pair.
///
/// 代表从 TOML 文件（默认为 `Localize.toml`）加载的整个转换配置。
/// 它指定目录、目标文件和宏对。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionConfig {
    /// The language for the converter's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 转换器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The Chinese and English catalog paths.
    /// 中英文目录路径。
    pub catalogs: CatalogPaths,

    /// The source files to rewrite. An empty list makes the run a no-op.
    /// 要重写的源文件。空列表会使运行成为空操作。
    #[serde(default)]
    pub targets: Vec<TargetFile>,

    /// The macro pair. Defaults to `LOCTEXT` -> `BP_LOCTEXT`.
    /// 宏对。默认为 `LOCTEXT` -> `BP_LOCTEXT`。
    #[serde(default)]
    pub macros: MacroNames,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_source_macro() -> String {
    "LOCTEXT".to_string()
}

fn default_replacement_macro() -> String {
    "BP_LOCTEXT".to_string()
}
