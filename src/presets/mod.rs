//! # 转换预设
//!
//! 把流水线的可插拔部分（过滤器、解析器、文件名转换、内容过滤）打包成
//! 可直接使用的 YAML → JSON 转换方案。
//!
//! ## 预设
//! - `npsrc`：扩展名替换为 `.json`，内容不变
//! - `tsconfig`：文件名规范化为 `tsconfig[.<variant>].json`，并改写内容中的 YAML 路径
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `transform/`、`parsers/`、`pipeline/`
//! - 子模块: npsrc, tsconfig

pub mod npsrc;
pub mod tsconfig;

use crate::error::Result;
use crate::transform::{FilenameTransformer, StringifyFilter};

/// 一个完整的转换方案
pub struct Preset {
    /// 输出文件名转换
    pub filename: Box<dyn FilenameTransformer + Send>,
    /// 写出前应用于内容的过滤器
    pub content: StringifyFilter,
}

/// 可用的预设
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetKind {
    /// YAML -> JSON with an extension swap
    Npsrc,
    /// YAML -> JSON with tsconfig file naming and path rewriting
    Tsconfig,
}

impl PresetKind {
    pub fn build(self) -> Result<Preset> {
        match self {
            PresetKind::Npsrc => Ok(npsrc::preset()),
            PresetKind::Tsconfig => tsconfig::preset(),
        }
    }
}

impl std::fmt::Display for PresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetKind::Npsrc => write!(f, "npsrc"),
            PresetKind::Tsconfig => write!(f, "tsconfig"),
        }
    }
}
