//! # prestage 库
//!
//! 批量文件转换流水线与外部命令批次，供 `prestage` 可执行文件使用，
//! 也可以直接在其他工具中调用。
//!
//! ## 模块
//! - `pipeline`  - 目录扫描、过滤与单文件流水线
//! - `transform` - 字符串、文件名、内容转换器
//! - `parsers`   - YAML 读取与 JSON 写出
//! - `presets`   - npsrc / tsconfig 转换预设
//! - `process`   - 并发/串行命令批次
//! - `scripts`   - YAML 脚本表
//! - `utils`     - 输出、进度条、环境检测

pub mod cli;
pub mod commands;
pub mod error;
pub mod parsers;
pub mod pipeline;
pub mod presets;
pub mod process;
pub mod scripts;
pub mod transform;
pub mod utils;

pub use error::{PrestageError, Result};
