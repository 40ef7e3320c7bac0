//! # JSON 写入器
//!
//! 先经序列化过滤器改写，再以两空格缩进写出 JSON，末尾带换行。
//! 父目录不存在时自动创建。
//!
//! ## 依赖关系
//! - 被 `presets/` 使用
//! - 使用 `transform/content.rs`, `serde_json`

use crate::error::{PrestageError, Result};
use crate::transform::content::{apply_stringify_filter, StringifyFilter};

use serde_json::Value;
use std::fs;
use std::path::Path;

/// 写出单个 JSON 文件
pub fn write_json(value: Value, path: &Path, filter: &StringifyFilter) -> Result<()> {
    let value = apply_stringify_filter(value, filter);

    let mut text = serde_json::to_string_pretty(&value).map_err(|e| PrestageError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;
    text.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PrestageError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    fs::write(path, text).map_err(|e| PrestageError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 绑定过滤器的写入器，供流水线使用
pub fn json_output_writer(filter: StringifyFilter) -> impl Fn(Value, &Path) -> Result<()> + Sync {
    move |value, path| write_json(value, path, &filter)
}
