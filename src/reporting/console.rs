//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of conversion summaries in the console.
//! It prints a colorful, formatted table with internationalization support.
//!
//! 此模块处理控制台中转换摘要的显示。
//! 它打印彩色格式化的表格，支持国际化。

use colored::*;

use crate::core::models::ConversionSummary;
use crate::infra::t;

/// Prints a formatted summary of a conversion run to the console.
/// Displays the catalog entry counts and a table with one row per target
/// file, using color coding to distinguish converted files from files that
/// contained no matching calls.
///
/// 在控制台打印转换运行的格式化摘要。
/// 显示目录条目数和一个每个目标文件一行的表格，
/// 使用颜色编码区分已转换的文件和不包含匹配调用的文件。
///
/// # Arguments / 参数
/// * `summary` - The conversion summary to render
///               要渲染的转换摘要
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Conversion Summary ---
///   - Converted  | Source/UI/SProfilerWidget.cpp       |     42
///   - Unchanged  | Source/UI/SToolbarWidget.cpp        |      0
/// Total replacements: 42
/// ```
pub fn print_summary(summary: &ConversionSummary, locale: &str) {
    println!("\n{}", t!("summary_banner", locale = locale).bold());

    println!(
        "  {}",
        t!(
            "summary_catalog_entries",
            locale = locale,
            chinese = summary.chinese_entries,
            english = summary.english_entries
        )
        .cyan()
    );

    for file in &summary.files {
        let status_str = if file.is_converted() {
            t!("summary_status_converted", locale = locale).green()
        } else {
            t!("summary_status_unchanged", locale = locale).dimmed()
        };

        println!(
            "  - {:<12} | {:<50} | {:>6}",
            status_str,
            file.path.display(),
            file.replacements
        );
    }

    println!(
        "{}",
        t!(
            "summary_total_replacements",
            locale = locale,
            count = summary.total_replacements()
        )
        .bold()
    );
}
