//! # 命令批次
//!
//! 由命令字符串列表构造的有序、不可变命令单元序列，提供两种执行方式：
//! - [`ConcurrentProcesses`]：同时启动全部命令，立即返回待定结果
//! - [`SerialProcesses`]：前一个结束后才启动下一个，失败只警告不中断
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `process/command.rs`、`utils/output.rs`

use crate::error::PrestageError;
use crate::process::command::{Process, ProcessResult};
use crate::utils::output;

use std::thread::{self, JoinHandle};

/// 有序的命令单元序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processes {
    processes: Vec<Process>,
}

impl Processes {
    pub fn new<I, S>(cmds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            processes: cmds.into_iter().map(Process::new).collect(),
        }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

/// 尚未等待的命令结果
#[derive(Debug)]
pub struct PendingProcess {
    cmd: String,
    state: PendingState,
}

#[derive(Debug)]
enum PendingState {
    Running(JoinHandle<ProcessResult>),
    Settled(ProcessResult),
}

impl PendingProcess {
    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    /// 命令是否已经结束
    pub fn is_finished(&self) -> bool {
        match &self.state {
            PendingState::Running(handle) => handle.is_finished(),
            PendingState::Settled(_) => true,
        }
    }

    /// 阻塞直到命令结束
    pub fn wait(self) -> ProcessResult {
        match self.state {
            PendingState::Running(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(PrestageError::CommandPanicked { command: self.cmd })),
            PendingState::Settled(result) => result,
        }
    }
}

/// 按顺序等待全部待定结果
pub fn wait_all(pending: Vec<PendingProcess>) -> Vec<ProcessResult> {
    pending.into_iter().map(PendingProcess::wait).collect()
}

/// 并发执行：所有命令同时启动，不限并发数
#[derive(Debug, Clone)]
pub struct ConcurrentProcesses {
    inner: Processes,
}

impl ConcurrentProcesses {
    pub fn new<I, S>(cmds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Processes::new(cmds),
        }
    }

    pub fn processes(&self) -> &[Process] {
        self.inner.processes()
    }

    /// 启动全部命令，立即返回与输入顺序一致的待定结果
    pub fn start(&self) -> Vec<PendingProcess> {
        self.inner
            .processes()
            .iter()
            .enumerate()
            .map(|(i, process)| {
                let cmd = process.cmd().to_string();
                let worker = process.clone();
                let state = match thread::Builder::new()
                    .name(format!("process-{}", i))
                    .spawn(move || worker.start())
                {
                    Ok(handle) => PendingState::Running(handle),
                    Err(e) => PendingState::Settled(Err(PrestageError::CommandSpawn {
                        command: cmd.clone(),
                        source: e,
                    })),
                };
                PendingProcess { cmd, state }
            })
            .collect()
    }
}

/// 串行执行：每个命令在前一个结束后才启动
#[derive(Debug, Clone)]
pub struct SerialProcesses {
    inner: Processes,
}

impl SerialProcesses {
    pub fn new<I, S>(cmds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Processes::new(cmds),
        }
    }

    pub fn processes(&self) -> &[Process] {
        self.inner.processes()
    }

    /// 依次执行全部命令，返回与输入顺序一致的结果
    ///
    /// 失败的命令以警告形式输出，不影响后续命令。
    /// 直接按顺序循环执行，不设置预先完成的空起始单元。
    pub fn start(&self) -> Vec<ProcessResult> {
        let mut results = Vec::with_capacity(self.inner.len());

        for process in self.inner.processes() {
            let result = process.start();
            if let Err(e) = &result {
                output::print_warning(&output::error_chain(e));
            }
            results.push(result);
        }

        results
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_processes_preserve_order() {
        let batch = ConcurrentProcesses::new(["echo a", "echo b"]);
        let cmds: Vec<_> = batch.processes().iter().map(Process::cmd).collect();
        assert_eq!(cmds, vec!["echo a", "echo b"]);
    }

    #[test]
    fn test_concurrent_returns_before_completion() {
        let batch = ConcurrentProcesses::new(vec!["sleep 1"; 3]);

        let started = Instant::now();
        let pending = batch.start();
        assert!(started.elapsed() < Duration::from_millis(900));
        assert_eq!(pending.len(), 3);

        let results = wait_all(pending);
        assert!(results.iter().all(|r| r.is_ok()));
        // 三个命令同时运行
        assert!(started.elapsed() < Duration::from_millis(2900));
    }

    #[test]
    fn test_concurrent_keeps_failures_in_place() {
        let batch = ConcurrentProcesses::new(["echo one", "exit 2", "echo three"]);
        let results = wait_all(batch.start());

        assert_eq!(results[0].as_ref().unwrap().stdout, "one\n");
        assert!(matches!(
            results[1],
            Err(PrestageError::CommandFailed { code: Some(2), .. })
        ));
        assert_eq!(results[2].as_ref().unwrap().stdout, "three\n");
    }

    #[test]
    fn test_serial_continues_after_failure() {
        let batch = SerialProcesses::new(["echo A", "exit 1", "echo C"]);
        let results = batch.start();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().stdout, "A\n");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().stdout, "C\n");
    }

    #[test]
    fn test_serial_runs_one_at_a_time() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("log");
        let log = log.display();
        let batch = SerialProcesses::new([
            format!("sleep 0.2; echo 1 >> '{}'", log),
            format!("echo 2 >> '{}'", log),
            format!("echo 3 >> '{}'", log),
        ]);

        batch.start();

        let text = std::fs::read_to_string(dir.path().join("log")).unwrap();
        assert_eq!(text, "1\n2\n3\n");
    }
}
