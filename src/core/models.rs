//! # Data Models Module / 数据模型模块
//!
//! This module defines the result structures produced by a conversion run
//! and consumed by the console reporter.
//!
//! 此模块定义转换运行产生并由控制台报告器使用的结果结构。

use std::path::PathBuf;

/// The outcome of rewriting a single target file.
/// 重写单个目标文件的结果。
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The target path as named in the configuration.
    /// 配置中指定的目标路径。
    pub path: PathBuf,
    /// Number of macro calls rewritten in this file. Zero means the file
    /// contained no matching calls (for example, it was already converted).
    /// 此文件中重写的宏调用数量。零表示文件中没有匹配的调用
    /// （例如，它已经被转换过）。
    pub replacements: usize,
}

impl FileReport {
    /// `true` if at least one call was rewritten.
    pub fn is_converted(&self) -> bool {
        self.replacements > 0
    }
}

/// Summary of an entire conversion run: catalog sizes and per-file outcomes.
/// 整个转换运行的摘要：目录大小和每个文件的结果。
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    /// Entries parsed from the Chinese catalog.
    /// 从中文目录解析的条目数。
    pub chinese_entries: usize,
    /// Entries parsed from the English catalog.
    /// 从英文目录解析的条目数。
    pub english_entries: usize,
    /// Per-file outcomes, in configuration order.
    /// 每个文件的结果，按配置顺序排列。
    pub files: Vec<FileReport>,
}

impl ConversionSummary {
    /// Total number of replacements across all target files.
    /// 所有目标文件的替换总数。
    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(|f| f.replacements).sum()
    }

    /// Records the outcome for one target file.
    /// 记录一个目标文件的结果。
    pub fn record(&mut self, path: PathBuf, replacements: usize) {
        self.files.push(FileReport { path, replacements });
    }
}
