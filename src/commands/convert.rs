//! # convert 命令实现
//!
//! 使用预设把一个或多个目录中的 YAML 文件转换为 JSON。
//!
//! ## 功能
//! - 只处理 .yml/.yaml 普通文件，可再用 glob 模式收窄
//! - 并行处理，单文件错误按 `--keep-going` / `--quiet` 处理
//! - 汇总输出转换结果
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `pipeline/`, `presets/`, `parsers/`
//! - 使用 `utils/output.rs`

use crate::cli::convert::ConvertArgs;
use crate::error::{PrestageError, Result};
use crate::parsers::{json_output_writer, yaml_safe_load};
use crate::pipeline::{is_yaml_file, process_files, DirEntryInfo, ProcessingOptions};
use crate::utils::env::EnvConfig;
use crate::utils::output;

use std::fs;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs, env: &EnvConfig) -> Result<()> {
    output::print_header(&format!("Converting YAML with the {} preset", args.preset));

    // 创建输出目录
    fs::create_dir_all(&args.out).map_err(|e| PrestageError::FileWriteError {
        path: args.out.display().to_string(),
        source: e,
    })?;

    let preset = args.preset.build()?;

    let pattern = args
        .pattern
        .as_deref()
        .map(glob::Pattern::new)
        .transpose()
        .map_err(|e| PrestageError::InvalidArgument(format!("Invalid pattern: {}", e)))?;

    let filter = move |entry: &DirEntryInfo| {
        is_yaml_file(entry) && pattern.as_ref().map_or(true, |p| p.matches(&entry.name))
    };

    let options = ProcessingOptions::new()
        .with_filter(filter)
        .encoding(args.encoding)
        .suppress_errors(args.quiet)
        .quit_on_error(!args.keep_going)
        .jobs(args.jobs)
        .show_progress(!env.is_test_env);

    tracing::debug!(?options, inputs = ?args.inputs, "starting conversion");

    let report = process_files(
        &args.inputs,
        yaml_safe_load,
        json_output_writer(preset.content.clone()),
        &args.out,
        &*preset.filename,
        &options,
    )?;

    for (name, path) in &report.outputs {
        output::print_conversion(name, &path.display().to_string());
    }

    if report.total() == 0 && report.directory_failures.is_empty() {
        output::print_warning(&format!(
            "No YAML files found in {} director{}",
            args.inputs.len(),
            if args.inputs.len() == 1 { "y" } else { "ies" }
        ));
        return Ok(());
    }

    output::print_separator();
    output::print_done(&format!(
        "Converted {} file(s) into '{}' ({} failed, {} unreadable director{})",
        report.written(),
        args.out.display(),
        report.failed(),
        report.directory_failures.len(),
        if report.directory_failures.len() == 1 { "y" } else { "ies" }
    ));

    Ok(())
}
