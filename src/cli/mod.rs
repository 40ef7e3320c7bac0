//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: YAML → JSON 批量转换
//! - `run`: 并发或串行执行 shell 命令
//! - `stage`: 对项目的 `.tsconfig` 与 `.npsrc` 目录并发执行转换
//! - `scripts`: 列出或执行 YAML 脚本表中的脚本
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, run, scripts, stage

pub mod convert;
pub mod run;
pub mod scripts;
pub mod stage;

use clap::{Parser, Subcommand};

/// prestage - 项目预处理工具
#[derive(Parser)]
#[command(name = "prestage")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Batch YAML-to-JSON conversion and command fan-out for pre-stage chores",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (otherwise RUST_LOG, default: warn)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert YAML files in one or more directories to JSON
    Convert(convert::ConvertArgs),

    /// Run shell commands concurrently (default) or serially
    Run(run::RunArgs),

    /// Convert a project's .tsconfig and .npsrc directories in parallel
    Stage(stage::StageArgs),

    /// List or run scripts from a YAML scripts table
    Scripts(scripts::ScriptsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::PresetKind;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from([
            "prestage", "convert", "--preset", "tsconfig", "a", "b", "--out", "dist", "-k",
        ]);
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.preset, PresetKind::Tsconfig);
                assert_eq!(args.inputs.len(), 2);
                assert!(args.keep_going);
                assert!(!args.quiet);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_run_serial() {
        let cli = Cli::parse_from(["prestage", "-v", "run", "--serial", "echo a", "echo b"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.serial);
                assert_eq!(args.commands, vec!["echo a", "echo b"]);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
