//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `pipeline/`, `presets/`, `process/`, `utils/`
//! - 子模块: convert, run, scripts, stage

pub mod convert;
pub mod run;
pub mod scripts;
pub mod stage;

use crate::cli::Commands;
use crate::error::Result;
use crate::utils::env::EnvConfig;

/// 执行命令
pub fn run(cmd: Commands, env: &EnvConfig) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args, env),
        Commands::Run(args) => run::execute(args, env),
        Commands::Stage(args) => stage::execute(args, env),
        Commands::Scripts(args) => scripts::execute(args, env),
    }
}
