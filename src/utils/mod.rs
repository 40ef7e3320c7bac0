//! # 工具函数模块
//!
//! 提供美化输出、进度条、环境检测等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`、`pipeline/`、`process/` 使用
//! - 子模块: env, output, progress

pub mod env;
pub mod output;
pub mod progress;
