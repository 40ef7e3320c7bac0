//! # 转换器模块
//!
//! 基于正则表达式的字符串、文件名与内容转换器。
//!
//! ## 依赖关系
//! - 被 `pipeline/`、`presets/`、`parsers/json.rs` 使用
//! - 子模块: string, filename, content

pub mod content;
pub mod filename;
pub mod string;

pub use content::{apply_stringify_filter, make_stringify_filter, pass_through, StringifyFilter};
pub use filename::{rename, ExtensionSwap, FilenameTransformer, PatternRename};
pub use string::{make_string_transformer, MatchContext, StringTransformer};
