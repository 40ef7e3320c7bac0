//! # 脚本表
//!
//! 从 YAML 文件加载"名称 → 命令"映射：
//!
//! ```text
//! build: cargo build            # 单条命令
//! lint:                         # 列表 => 并发执行
//!   - cargo fmt --check
//!   - cargo clippy
//! docs:                         # 嵌套表，用 docs.serve 访问
//!   serve: mdbook serve
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/scripts.rs` 使用
//! - 使用 `process/`、`serde_yaml`、`indexmap`

use crate::error::{PrestageError, Result};
use crate::process::{ConcurrentProcesses, Process};

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 文件中的原始形式
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScript {
    Command(String),
    Parallel(Vec<String>),
    Group(IndexMap<String, RawScript>),
}

/// 脚本节点
#[derive(Debug, Clone)]
pub enum Script {
    /// 单条命令
    Command(Process),
    /// 一组并发执行的命令
    Parallel(ConcurrentProcesses),
    /// 嵌套脚本表
    Group(IndexMap<String, Script>),
}

impl From<RawScript> for Script {
    fn from(raw: RawScript) -> Self {
        match raw {
            RawScript::Command(cmd) => Script::Command(Process::new(cmd)),
            RawScript::Parallel(cmds) => Script::Parallel(ConcurrentProcesses::new(cmds)),
            RawScript::Group(map) => {
                Script::Group(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// 脚本表（保持文件中的顺序）
#[derive(Debug, Clone)]
pub struct ScriptsTable {
    scripts: IndexMap<String, Script>,
}

impl ScriptsTable {
    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PrestageError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml_str(&content, &path.display().to_string())
    }

    /// 从 YAML 文本解析
    pub fn from_yaml_str(content: &str, source_name: &str) -> Result<Self> {
        let raw: IndexMap<String, RawScript> =
            serde_yaml::from_str(content).map_err(|e| PrestageError::ParseError {
                format: "scripts".to_string(),
                path: source_name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            scripts: raw.into_iter().map(|(k, v)| (k, v.into())).collect(),
        })
    }

    /// 所有可执行脚本的点分名称
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_names(&self.scripts, "", &mut names);
        names
    }

    /// 按点分名称查找
    pub fn get(&self, name: &str) -> Result<&Script> {
        let mut parts = name.split('.');
        let first = parts.next().unwrap_or_default();
        let mut node = self
            .scripts
            .get(first)
            .ok_or_else(|| PrestageError::ScriptNotFound(name.to_string()))?;

        for part in parts {
            node = match node {
                Script::Group(children) => children
                    .get(part)
                    .ok_or_else(|| PrestageError::ScriptNotFound(name.to_string()))?,
                _ => return Err(PrestageError::ScriptNotFound(name.to_string())),
            };
        }

        Ok(node)
    }
}

fn collect_names(scripts: &IndexMap<String, Script>, prefix: &str, names: &mut Vec<String>) {
    for (key, script) in scripts {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match script {
            Script::Group(children) => collect_names(children, &name, names),
            _ => names.push(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
build: cargo build
lint:
  - cargo fmt --check
  - cargo clippy
docs:
  serve: mdbook serve
  check:
    - mdbook test
"#;

    #[test]
    fn test_names_keep_file_order() {
        let table = ScriptsTable::from_yaml_str(TABLE, "scripts.yml").unwrap();
        assert_eq!(
            table.names(),
            vec!["build", "lint", "docs.serve", "docs.check"]
        );
    }

    #[test]
    fn test_lists_become_concurrent_batches() {
        let table = ScriptsTable::from_yaml_str(TABLE, "scripts.yml").unwrap();
        match table.get("lint").unwrap() {
            Script::Parallel(batch) => assert_eq!(batch.processes().len(), 2),
            other => panic!("unexpected script: {:?}", other),
        }
        match table.get("docs.serve").unwrap() {
            Script::Command(process) => assert_eq!(process.cmd(), "mdbook serve"),
            other => panic!("unexpected script: {:?}", other),
        }
    }

    #[test]
    fn test_missing_script() {
        let table = ScriptsTable::from_yaml_str(TABLE, "scripts.yml").unwrap();
        assert!(matches!(
            table.get("docs.deploy"),
            Err(PrestageError::ScriptNotFound(_))
        ));
        assert!(matches!(
            table.get("build.release"),
            Err(PrestageError::ScriptNotFound(_))
        ));
        assert!(matches!(table.get("docs"), Ok(Script::Group(_))));
    }

    #[test]
    fn test_invalid_table() {
        let err = ScriptsTable::from_yaml_str("build: 42\n", "scripts.yml");
        assert!(matches!(err, Err(PrestageError::ParseError { .. })));
    }
}
