//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as reading and overwriting target files and resolving
//! configuration paths.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如读取和覆盖目标文件以及解析配置路径。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a file fully into memory.
///
/// # Arguments
/// * `path` - Path to the file to read
///
/// # Returns
/// The file content as a `String`, or an error with the path attached
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Writes content to a file, overwriting it in place.
/// There is no backup and no atomic rename; the target is replaced directly.
///
/// # Arguments
/// * `path` - Path to the file to overwrite
/// * `content` - The full content to write
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// Resolves a configured path against the project root.
/// `~` is expanded first; absolute paths are kept as-is, relative paths are
/// joined onto `root`.
///
/// 基于项目根目录解析配置的路径。
/// 先展开 `~`；绝对路径保持不变，相对路径拼接到 `root` 上。
pub fn resolve_path(raw: &Path, root: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(&raw.to_string_lossy()).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    }
}
