//! # 外部命令模块
//!
//! 把 shell 命令包装为工作单元，并以并发或串行方式批量执行。
//!
//! ## 状态
//! 每个单元：`pending → succeeded(stdout, stderr) | failed(error)`，结束后不再变化，不重试。
//! 没有超时或取消机制。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`、`commands/stage.rs`、`commands/scripts.rs` 使用
//! - 使用 `utils/output.rs`
//! - 子模块: command, batch

pub mod batch;
pub mod command;

pub use batch::{wait_all, ConcurrentProcesses, PendingProcess, Processes, SerialProcesses};
pub use command::{shell_quote, Process, ProcessOutput, ProcessResult};
