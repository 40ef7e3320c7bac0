//! # run 命令实现
//!
//! 并发或串行执行一组 shell 命令，并以表格汇总结果。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `process/`, `utils/output.rs`, `utils/progress.rs`
//! - 使用 `tabled` 输出结果表

use crate::cli::run::RunArgs;
use crate::error::{PrestageError, Result};
use crate::process::{wait_all, ConcurrentProcesses, Process, ProcessResult, SerialProcesses};
use crate::utils::env::EnvConfig;
use crate::utils::{output, progress};

use std::thread;
use std::time::Duration;
use tabled::{Table, Tabled};

/// 结果表的一行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Command")]
    command: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Output")]
    output: String,
}

/// 执行 run 命令
pub fn execute(args: RunArgs, env: &EnvConfig) -> Result<()> {
    let mode = if args.serial { "serially" } else { "concurrently" };
    output::print_header(&format!("Running {} command(s) {}", args.commands.len(), mode));

    let (processes, results) = if args.serial {
        let batch = SerialProcesses::new(&args.commands);
        let results = batch.start();
        (batch.processes().to_vec(), results)
    } else {
        let batch = ConcurrentProcesses::new(&args.commands);
        (batch.processes().to_vec(), run_concurrent(&batch, env))
    };

    let failed = print_results(&processes, &results, args.show_output);

    // 串行模式容忍单个失败
    if failed > 0 && !args.serial {
        return Err(PrestageError::Other(format!(
            "{} of {} command(s) failed",
            failed,
            results.len()
        )));
    }

    output::print_done(&format!(
        "{} succeeded, {} failed",
        results.len() - failed,
        failed
    ));
    Ok(())
}

/// 启动并等待一组并发命令
pub(crate) fn run_concurrent(batch: &ConcurrentProcesses, env: &EnvConfig) -> Vec<ProcessResult> {
    let pending = batch.start();

    let spinner = if env.is_test_env {
        indicatif::ProgressBar::hidden()
    } else {
        progress::create_spinner(&format!("Waiting for {} process(es)", pending.len()))
    };

    if !spinner.is_hidden() {
        let total = pending.len();
        loop {
            let done = pending.iter().filter(|p| p.is_finished()).count();
            spinner.set_message(format!("{}/{} process(es) finished", done, total));
            if done == total {
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }
    }

    let results = wait_all(pending);
    spinner.finish_and_clear();
    results
}

/// 打印结果表，返回失败数
pub(crate) fn print_results(
    processes: &[Process],
    results: &[ProcessResult],
    show_output: bool,
) -> usize {
    let rows: Vec<ResultRow> = processes
        .iter()
        .zip(results)
        .enumerate()
        .map(|(i, (process, result))| ResultRow {
            index: i + 1,
            command: process.cmd().to_string(),
            status: match result {
                Ok(_) => "ok".to_string(),
                Err(PrestageError::CommandFailed { code: Some(code), .. }) => {
                    format!("failed ({})", code)
                }
                Err(_) => "failed".to_string(),
            },
            output: match result {
                Ok(out) => first_line(&out.stdout),
                Err(PrestageError::CommandFailed { stderr, .. }) => first_line(stderr),
                Err(e) => e.to_string(),
            },
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    let mut failed = 0;
    for (process, result) in processes.iter().zip(results) {
        match result {
            Ok(out) if show_output => {
                output::print_info(process.cmd());
                print!("{}", out.stdout);
                eprint!("{}", out.stderr);
            }
            Ok(_) => {}
            Err(e) => {
                failed += 1;
                output::print_error(&output::error_chain(e));
            }
        }
    }

    failed
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(commands: &[&str], serial: bool) -> RunArgs {
        RunArgs {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            serial,
            show_output: false,
        }
    }

    #[test]
    fn test_concurrent_failure_is_error() {
        let env = EnvConfig::default();
        assert!(execute(args(&["true", "false"], false), &env).is_err());
        assert!(execute(args(&["true", "echo ok"], false), &env).is_ok());
    }

    #[test]
    fn test_serial_tolerates_failure() {
        let env = EnvConfig::default();
        assert!(execute(args(&["false", "true"], true), &env).is_ok());
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("  a  \nb\n"), "a");
        assert_eq!(first_line(""), "");
    }
}
