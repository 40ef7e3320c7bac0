//! # 文件流水线模块
//!
//! 扫描目录 → 过滤 → 解析 → 转换文件名 → 写出。
//!
//! ## 功能
//! - 单个或多个输入目录（不递归）
//! - 按扩展名/类型过滤目录项
//! - 基于 rayon 的并行单文件处理
//! - 单文件错误隔离与可配置的错误升级
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `transform/`、`utils/output.rs`、`utils/progress.rs`

pub mod matcher;
pub mod runner;

pub use matcher::{accept_all, has_extension, is_yaml_file, DirEntryInfo, Extensions};
pub use runner::{
    process_files, Encoding, ErrorReporter, FileResult, PipelineReport, ProcessingOptions,
};
