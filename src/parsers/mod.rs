//! # 解析器模块
//!
//! 提供流水线使用的输入解析器与输出写入器。
//!
//! ## 依赖关系
//! - 被 `commands/`、`presets/` 使用
//! - 使用 `transform/content.rs`
//! - 子模块: yaml, json

pub mod json;
pub mod yaml;

pub use json::{json_output_writer, write_json};
pub use yaml::yaml_safe_load;
