//! # Rewrite Engine Module / 重写引擎模块
//!
//! This module performs the single-pass find-and-replace over target file
//! content: every `LOCTEXT("Key", "Default")` occurrence is rewritten to
//! `BP_LOCTEXT("Key", "Chinese", "English")`, where the translated strings
//! come from the catalogs and fall back to the call's own default text.
//!
//! 此模块对目标文件内容执行单遍查找替换：
//! 每个 `LOCTEXT("Key", "Default")` 都会被重写为
//! `BP_LOCTEXT("Key", "Chinese", "English")`，
//! 其中翻译字符串来自目录，并回退到调用自身的默认文本。

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::borrow::Cow;

use crate::core::catalog::Catalog;
use crate::core::config::MacroNames;

/// Rewrites macro calls in source text using two translation catalogs.
/// The match pattern is compiled once per rewriter from the configured
/// source macro name.
///
/// 使用两个翻译目录重写源文本中的宏调用。
/// 匹配模式根据配置的源宏名称为每个重写器编译一次。
#[derive(Debug)]
pub struct Rewriter<'a> {
    chinese: &'a Catalog,
    english: &'a Catalog,
    pattern: Regex,
    replacement: String,
}

impl<'a> Rewriter<'a> {
    /// Builds a rewriter for the given catalogs and macro pair.
    ///
    /// 为给定的目录和宏对构建重写器。
    pub fn new(chinese: &'a Catalog, english: &'a Catalog, macros: &MacroNames) -> Result<Self> {
        // Matches `SOURCE("Key", "Default")`. The quoted arguments cannot
        // contain literal quote characters, which keeps already-converted
        // three-argument calls from matching again.
        let pattern = Regex::new(&format!(
            r#"{}\("([^"]+)",\s*"([^"]+)"\)"#,
            regex::escape(&macros.source)
        ))
        .with_context(|| format!("Invalid source macro name: {}", macros.source))?;

        Ok(Self {
            chinese,
            english,
            pattern,
            replacement: macros.replacement.clone(),
        })
    }

    /// Rewrites every macro call in `content` and returns the transformed
    /// text together with the number of replacements made. Content without
    /// matches is returned unchanged with a count of zero.
    ///
    /// 重写 `content` 中的每个宏调用，返回转换后的文本和替换次数。
    /// 没有匹配的内容将原样返回，计数为零。
    pub fn rewrite(&self, content: &str) -> (String, usize) {
        let mut count = 0usize;
        let rewritten = self.pattern.replace_all(content, |caps: &Captures<'_>| {
            count += 1;
            let key = &caps[1];
            let default_text = &caps[2];

            let chinese = escape_quotes(self.chinese.lookup(key, default_text));
            let english = escape_quotes(self.english.lookup(key, default_text));

            format!(
                r#"{}("{}", "{}", "{}")"#,
                self.replacement, key, chinese, english
            )
        });

        (rewritten.into_owned(), count)
    }
}

/// Escapes literal quote characters so a substituted value stays a
/// well-formed quoted string literal in the rewritten call.
///
/// 转义字面引号字符，使替换后的值在重写的调用中
/// 仍然是格式正确的带引号字符串字面量。
fn escape_quotes(text: &str) -> Cow<'_, str> {
    if text.contains('"') {
        Cow::Owned(text.replace('"', "\\\""))
    } else {
        Cow::Borrowed(text)
    }
}
