//! # LOCTEXT Converter Library / LOCTEXT 转换器库
//!
//! This library provides the core functionality for the LOCTEXT Converter tool,
//! a configuration-driven build utility that rewrites `LOCTEXT("Key", "Text")`
//! macro calls into `BP_LOCTEXT("Key", "中文", "English")` calls, embedding the
//! Chinese and English translations from gettext catalogs directly in the source.
//!
//! 此库为 LOCTEXT 转换器工具提供核心功能，
//! 这是一个配置驱动的构建工具，它将 `LOCTEXT("Key", "Text")` 宏调用
//! 重写为 `BP_LOCTEXT("Key", "中文", "English")` 调用，
//! 将 gettext 目录中的中英文翻译直接嵌入源代码。
//!
//! ## Modules / 模块
//!
//! - `core` - Catalog parsing, conversion config, and the rewrite engine
//! - `infra` - Infrastructure services like file system operations
//! - `reporting` - Conversion result reporting
//! - `cli` - Command-line interface
//! - `commands` - Subcommand implementations
//!
//! - `core` - 目录解析、转换配置和重写引擎
//! - `infra` - 基础设施服务，如文件系统操作
//! - `reporting` - 转换结果报告
//! - `cli` - 命令行接口
//! - `commands` - 子命令实现

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::catalog::Catalog;
pub use crate::core::config::ConversionConfig;
pub use crate::core::rewrite::Rewriter;

// Re-export i18n functions for easier access
pub use rust_i18n::t;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
