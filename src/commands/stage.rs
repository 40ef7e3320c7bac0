//! # stage 命令实现
//!
//! 以并发子进程的方式，对项目根目录下的 `.tsconfig` 与 `.npsrc`
//! 分别运行本程序的 `convert` 子命令。任一子进程失败则整体失败。
//!
//! ## 依赖关系
//! - 使用 `cli/stage.rs` 定义的参数
//! - 使用 `process/`, `presets/`, `commands/run.rs`

use crate::cli::stage::StageArgs;
use crate::commands::run::{print_results, run_concurrent};
use crate::error::{PrestageError, Result};
use crate::presets::PresetKind;
use crate::process::{shell_quote, ConcurrentProcesses};
use crate::utils::env::EnvConfig;
use crate::utils::output;

use std::path::Path;

/// 预处理目录与对应预设
const STAGES: &[(&str, PresetKind)] = &[
    (".tsconfig", PresetKind::Tsconfig),
    (".npsrc", PresetKind::Npsrc),
];

/// 执行 stage 命令
pub fn execute(args: StageArgs, env: &EnvConfig) -> Result<()> {
    output::print_header(&format!("Pre-staging {}", args.root.display()));

    let exe = std::env::current_exe()
        .map_err(|e| PrestageError::Other(format!("Cannot locate prestage executable: {}", e)))?;

    let batch = ConcurrentProcesses::new(stage_commands(&exe, &args));
    let results = run_concurrent(&batch, env);
    let failed = print_results(batch.processes(), &results, true);

    if failed > 0 {
        return Err(PrestageError::Other(format!(
            "{} of {} stage(s) failed",
            failed,
            results.len()
        )));
    }

    output::print_done(&format!("Staged into '{}'", args.out.display()));
    Ok(())
}

/// 为每个预处理目录生成 convert 命令行
fn stage_commands(exe: &Path, args: &StageArgs) -> Vec<String> {
    let mut flags = vec![
        "--out".to_string(),
        shell_quote(&args.out.display().to_string()),
    ];
    if args.quiet {
        flags.push("--quiet".to_string());
    }
    if args.keep_going {
        flags.push("--keep-going".to_string());
    }
    let flags = flags.join(" ");

    STAGES
        .iter()
        .map(|(dir, preset)| {
            format!(
                "{} convert --preset {} {} {}",
                shell_quote(&exe.display().to_string()),
                preset,
                shell_quote(&args.root.join(dir).display().to_string()),
                flags
            )
        })
        .collect()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_stage_commands() {
        let args = StageArgs {
            root: PathBuf::from("/work/app"),
            out: PathBuf::from("dist"),
            quiet: true,
            keep_going: false,
        };
        let cmds = stage_commands(Path::new("/bin/prestage"), &args);
        assert_eq!(
            cmds,
            vec![
                "'/bin/prestage' convert --preset tsconfig '/work/app/.tsconfig' --out 'dist' --quiet",
                "'/bin/prestage' convert --preset npsrc '/work/app/.npsrc' --out 'dist' --quiet",
            ]
        );
    }
}
