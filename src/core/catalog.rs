//! # Translation Catalog Module / 翻译目录模块
//!
//! This module parses gettext `.po` translation catalogs into an in-memory
//! key-to-translation mapping. Only the subset of the format needed by the
//! converter is supported: `msgid` / `msgstr` records, `#` comments, quoted
//! continuation lines, and `msgctxt` markers (recognized but not used for
//! lookup).
//!
//! 此模块将 gettext `.po` 翻译目录解析为内存中的键到翻译的映射。
//! 仅支持转换器所需的格式子集：`msgid` / `msgstr` 记录、`#` 注释、
//! 带引号的续行以及 `msgctxt` 标记（可识别但不用于查找）。

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Which record field the parser is currently accumulating.
/// 解析器当前正在累积的记录字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    /// Not inside a recognized field / 不在可识别的字段内
    None,
    /// Accumulating a `msgctxt` string (discarded) / 正在累积 `msgctxt` 字符串（丢弃）
    Context,
    /// Accumulating the `msgid` string / 正在累积 `msgid` 字符串
    Key,
    /// Accumulating the `msgstr` string / 正在累积 `msgstr` 字符串
    Value,
}

/// A translation catalog mapping message keys to localized text.
/// Built once from a `.po` file and held only for the duration of a run.
///
/// 将消息键映射到本地化文本的翻译目录。
/// 从 `.po` 文件构建一次，仅在运行期间保留。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Reads and parses a catalog file.
    /// A missing or unreadable file aborts the run; there are no retries.
    ///
    /// 读取并解析目录文件。
    /// 文件缺失或不可读会中止运行；没有重试。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parses catalog content into a key-to-translation mapping.
    ///
    /// Records with an empty `msgid` (including the standard `.po` header
    /// entry) are discarded. Malformed or partial records are silently
    /// skipped. Duplicate keys: the last occurrence wins.
    ///
    /// 将目录内容解析为键到翻译的映射。
    ///
    /// `msgid` 为空的记录（包括标准的 `.po` 头条目）会被丢弃。
    /// 格式错误或不完整的记录会被静默跳过。重复的键以最后一次出现为准。
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        let mut key = String::new();
        let mut value = String::new();
        let mut field = Field::None;

        for line in content.lines() {
            let line = line.trim();

            // Comments carry no record data
            if line.starts_with('#') {
                continue;
            }

            // A blank line ends the current record
            if line.is_empty() {
                commit_record(&mut entries, &mut key, &mut value, field);
                field = Field::None;
                continue;
            }

            if line.strip_prefix("msgctxt ").is_some() {
                // A msgctxt also starts a new record; its value is not used for lookup
                commit_record(&mut entries, &mut key, &mut value, field);
                field = Field::Context;
            } else if let Some(rest) = line.strip_prefix("msgid ") {
                // Records are not always separated by blank lines
                commit_record(&mut entries, &mut key, &mut value, field);
                key = unquote(rest);
                field = Field::Key;
            } else if let Some(rest) = line.strip_prefix("msgstr ") {
                value = unquote(rest);
                field = Field::Value;
            } else if line.starts_with('"') {
                // Continuation of a multi-line string
                let continued = unquote(line);
                match field {
                    Field::Key => key.push_str(&continued),
                    Field::Value => value.push_str(&continued),
                    _ => {}
                }
            }
            // Anything else is a malformed line and is skipped silently.
        }

        // The file may not end with a blank line
        commit_record(&mut entries, &mut key, &mut value, field);

        Self { entries }
    }

    /// Looks up the translation for `key`, falling back to `default` when the
    /// key is absent from the catalog.
    ///
    /// 查找 `key` 的翻译，当目录中没有该键时回退到 `default`。
    pub fn lookup<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Returns the translation for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Commits the pending record into the map if it is complete.
/// Partial records (a `msgid` with no `msgstr`) and records with an empty key
/// are dropped. The pending buffers are cleared either way.
///
/// 如果待处理记录完整，则将其提交到映射中。
/// 不完整的记录（有 `msgid` 但没有 `msgstr`）和键为空的记录会被丢弃。
/// 无论如何都会清空待处理缓冲区。
fn commit_record(
    entries: &mut HashMap<String, String>,
    key: &mut String,
    value: &mut String,
    field: Field,
) {
    if field == Field::Value && !key.is_empty() {
        entries.insert(std::mem::take(key), std::mem::take(value));
    } else {
        key.clear();
        value.clear();
    }
}

/// Strips the surrounding quotes from a `.po` string segment and unescapes it
/// in a single pass, so sequences like `\\n` are not double-unescaped.
///
/// 从 `.po` 字符串段中去掉两侧的引号并在一次遍历中反转义，
/// 这样 `\\n` 之类的序列不会被二次反转义。
fn unquote(segment: &str) -> String {
    let segment = segment.trim();
    let segment = segment.strip_prefix('"').unwrap_or(segment);
    let segment = segment.strip_suffix('"').unwrap_or(segment);

    let mut result = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('"') => result.push('"'),
                Some('\\') => result.push('\\'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }
    result
}
