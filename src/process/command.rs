//! # 单个命令单元
//!
//! 通过宿主 shell 执行命令字符串（Unix 为 `sh -c`，Windows 为 `cmd /C`），
//! 捕获标准输出与标准错误。非零退出码视为失败。
//!
//! ## 依赖关系
//! - 被 `process/batch.rs` 使用

use crate::error::{PrestageError, Result};

use std::process::Command;

/// 命令成功时捕获的输出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// 命令执行结果
pub type ProcessResult = Result<ProcessOutput>;

/// 不可变的命令单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    cmd: String,
}

impl Process {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self { cmd: cmd.into() }
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    /// 阻塞执行，直到命令结束
    pub fn start(&self) -> ProcessResult {
        tracing::debug!(command = %self.cmd, "starting process");

        let output = shell_command(&self.cmd)
            .output()
            .map_err(|e| PrestageError::CommandSpawn {
                command: self.cmd.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!(
            command = %self.cmd,
            code = ?output.status.code(),
            "process finished"
        );

        if output.status.success() {
            Ok(ProcessOutput { stdout, stderr })
        } else {
            Err(PrestageError::CommandFailed {
                command: self.cmd.clone(),
                code: output.status.code(),
                stderr,
            })
        }
    }
}

/// 把参数包装为宿主 shell 的单个字面量
#[cfg(windows)]
pub fn shell_quote(arg: &str) -> String {
    format!("\"{}\"", arg.replace('"', "\"\""))
}

/// 把参数包装为宿主 shell 的单个字面量
#[cfg(not(windows))]
pub fn shell_quote(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(windows)]
fn shell_command(cmd: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", cmd]);
    command
}

#[cfg(not(windows))]
fn shell_command(cmd: &str) -> Command {
    let mut command = Command::new("sh");
    command.args(["-c", cmd]);
    command
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_and_stderr() {
        let out = Process::new("echo out; echo err 1>&2").start().unwrap();
        assert_eq!(out.stdout, "out\n");
        assert_eq!(out.stderr, "err\n");
    }

    #[test]
    fn test_shell_quote_round_trips() {
        let arg = "it's a $HOME \"path\"";
        let out = Process::new(format!("printf %s {}", shell_quote(arg)))
            .start()
            .unwrap();
        assert_eq!(out.stdout, arg);
    }

    #[test]
    fn test_non_zero_exit_fails() {
        let err = Process::new("echo nope 1>&2; exit 3").start().unwrap_err();
        match err {
            PrestageError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "nope\n");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
