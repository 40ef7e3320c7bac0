//! # scripts 子命令 CLI 定义
//!
//! 列出或执行 YAML 脚本表中的脚本
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scripts.rs`

use clap::Args;
use std::path::PathBuf;

/// scripts 子命令参数
#[derive(Args, Debug)]
pub struct ScriptsArgs {
    /// YAML file mapping script names to commands
    pub file: PathBuf,

    /// Dotted name of the script to run; lists all scripts when omitted
    pub name: Option<String>,
}
