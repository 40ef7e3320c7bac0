//! # stage 子命令 CLI 定义
//!
//! 对项目的 `.tsconfig` 与 `.npsrc` 目录并发执行 convert
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/stage.rs`

use clap::Args;
use std::path::PathBuf;

/// stage 子命令参数
#[derive(Args, Debug)]
pub struct StageArgs {
    /// Project root containing the .tsconfig and .npsrc directories
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output directory for converted files
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Do not print errors for individual files or directories
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Skip files that fail instead of aborting the batch
    #[arg(short, long, default_value_t = false)]
    pub keep_going: bool,
}
