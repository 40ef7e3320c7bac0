//! # prestage - 项目预处理工具
//!
//! 把项目里零散的预处理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `convert` - YAML → JSON 批量转换（npsrc / tsconfig 预设）
//! - `run`     - 并发或串行执行 shell 命令
//! - `stage`   - 并发转换项目的 `.tsconfig` 与 `.npsrc` 目录
//! - `scripts` - 列出或执行 YAML 脚本表中的脚本
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── pipeline/  (目录扫描与单文件流水线)
//!   │     ├── transform/ (字符串/文件名/内容转换器)
//!   │     ├── parsers/   (YAML 读取、JSON 写出)
//!   │     ├── presets/   (转换预设)
//!   │     ├── process/   (外部命令批次)
//!   │     └── scripts.rs (脚本表)
//!   ├── utils/      (输出、进度条、环境检测)
//!   └── error.rs    (错误处理)
//! ```

use clap::Parser;
use prestage::cli::Cli;
use prestage::commands;
use prestage::utils::{env::EnvConfig, output};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // --verbose 开启 debug，否则使用 RUST_LOG，默认 warn
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let env = EnvConfig::from_env();
    if env.is_test_env {
        colored::control::set_override(false);
    }
    tracing::debug!(test_env = env.is_test_env, ci = ?env.ci_provider(), "environment detected");

    if let Err(e) = commands::run(cli.command, &env) {
        output::print_error(&output::error_chain(&e));
        std::process::exit(1);
    }
}
