//! # 统一错误处理模块
//!
//! 定义 prestage 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 配置错误：调用时立即返回（缺少扩展名、空环境变量名等）
//! - 单文件错误：读取/解析/写入失败，由 `ProcessingOptions` 决定升级或记录
//! - 目录错误：无法列出目录，只记录不传播
//! - 外部命令错误：保存在每个命令单元的结果中
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// prestage 统一错误类型
#[derive(Error, Debug)]
pub enum PrestageError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not list directory: {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid {encoding}: {path}")]
    Decode { path: String, encoding: String },

    // ─────────────────────────────────────────────────────────────
    // 解析与序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Failed to serialize {path}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 文件名与扩展名
    // ─────────────────────────────────────────────────────────────
    #[error("Please provide an extension")]
    MissingExtension,

    #[error("Filename {name} does not end with any of: {candidates}")]
    UnrecognizedExtension { name: String, candidates: String },

    // ─────────────────────────────────────────────────────────────
    // 流水线
    // ─────────────────────────────────────────────────────────────
    #[error("Could not read file `{name}`")]
    FileProcessing {
        name: String,
        #[source]
        source: Box<PrestageError>,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to start command: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed ({}): {command}\n{stderr}", exit_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Command runner crashed: {command}")]
    CommandPanicked { command: String },

    // ─────────────────────────────────────────────────────────────
    // 脚本表
    // ─────────────────────────────────────────────────────────────
    #[error("No script named '{0}'")]
    ScriptNotFound(String),

    #[error("'{0}' is a group of scripts, not a runnable script")]
    NotRunnable(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Please supply a non-empty environment variable name")]
    EmptyVariableName,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PrestageError>;
