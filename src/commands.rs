//! # Commands Module / 命令模块
//!
//! Subcommand implementations for the command-line interface.
//!
//! 命令行接口的子命令实现。

pub mod convert;
pub mod init;
