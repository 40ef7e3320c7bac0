//! # run 子命令 CLI 定义
//!
//! 批量执行 shell 命令
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Args;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Shell commands to run
    #[arg(required = true)]
    pub commands: Vec<String>,

    /// Run one command at a time; failures do not stop the remaining commands
    #[arg(short, long, default_value_t = false)]
    pub serial: bool,

    /// Print the captured standard output of every command
    #[arg(long, default_value_t = false)]
    pub show_output: bool,
}
