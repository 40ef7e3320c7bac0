//! # convert 子命令 CLI 定义
//!
//! 批量转换 YAML 文件为 JSON
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::pipeline::Encoding;
use crate::presets::PresetKind;

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directories containing YAML files (not searched recursively)
    #[arg(default_value = ".")]
    pub inputs: Vec<PathBuf>,

    /// Output directory for converted files
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Conversion preset
    #[arg(short, long, value_enum)]
    pub preset: PresetKind,

    /// Glob pattern an input file name must also match
    #[arg(long)]
    pub pattern: Option<String>,

    /// Do not print errors for individual files or directories
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Skip files that fail instead of aborting the batch
    #[arg(short, long, default_value_t = false)]
    pub keep_going: bool,

    /// Encoding of the input files
    #[arg(long, value_enum, default_value_t = Encoding::Utf8)]
    pub encoding: Encoding,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
