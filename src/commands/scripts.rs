//! # scripts 命令实现
//!
//! 列出脚本表中的全部脚本，或执行其中一个：
//! 单条命令直接执行，列表并发执行。
//!
//! ## 依赖关系
//! - 使用 `cli/scripts.rs` 定义的参数
//! - 使用 `scripts.rs`, `commands/run.rs`, `utils/output.rs`

use crate::cli::scripts::ScriptsArgs;
use crate::commands::run::{print_results, run_concurrent};
use crate::error::{PrestageError, Result};
use crate::scripts::{Script, ScriptsTable};
use crate::utils::env::EnvConfig;
use crate::utils::output;

/// 执行 scripts 命令
pub fn execute(args: ScriptsArgs, env: &EnvConfig) -> Result<()> {
    let table = ScriptsTable::load(&args.file)?;

    let Some(name) = args.name else {
        output::print_header(&format!("Scripts in {}", args.file.display()));
        for name in table.names() {
            println!("  {}", name);
        }
        return Ok(());
    };

    match table.get(&name)? {
        Script::Command(process) => {
            output::print_info(&format!("{}: {}", name, process.cmd()));
            let out = process.start()?;
            print!("{}", out.stdout);
            eprint!("{}", out.stderr);
            output::print_success(&name);
            Ok(())
        }
        Script::Parallel(batch) => {
            output::print_info(&format!(
                "{}: {} command(s) in parallel",
                name,
                batch.processes().len()
            ));
            let results = run_concurrent(batch, env);
            let failed = print_results(batch.processes(), &results, true);
            if failed > 0 {
                return Err(PrestageError::Other(format!(
                    "{} of {} command(s) in '{}' failed",
                    failed,
                    results.len(),
                    name
                )));
            }
            output::print_success(&name);
            Ok(())
        }
        Script::Group(_) => Err(PrestageError::NotRunnable(name)),
    }
}
