//! # 运行环境检测
//!
//! 判断是否处于测试/CI 环境以及所在的 CI 平台。
//! 结果在启动时由 `EnvConfig::from_env` 计算一次，显式传递给各命令。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`commands/` 使用
//! - 无外部模块依赖

use crate::error::{PrestageError, Result};

/// 视为"真"的取值
const TRUTHY: &[&str] = &[
    "true", "True", "TRUE", "1", "yes", "Yes", "YES", "on", "On", "ON",
];

/// 视为"假"的取值（未设置同样为假）
const FALSY: &[&str] = &[
    "false", "False", "FALSE", "0", "-0", "no", "No", "NO", "off", "Off", "OFF", "[]", "{}",
    "undefined", "Undefined", "UNDEFINED", "null", "Null", "NULL", "NaN", "",
];

/// 对环境变量取值的期望
#[derive(Debug, Clone, Copy)]
pub enum EnvValue<'a> {
    /// 未设置或为空
    Unset,
    /// 属于真值集合
    Truthy,
    /// 属于假值集合或未设置
    Falsy,
    /// 精确匹配；真/假值集合中的字面量按 Truthy/Falsy 处理
    Exact(&'a str),
    /// 满足任一期望；空集合等同于 Unset
    AnyOf(&'a [EnvValue<'a>]),
}

/// 使用给定的查找函数检查环境变量
pub fn env_variable_is<F>(lookup: &F, name: &str, expected: EnvValue<'_>) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    if name.is_empty() {
        return Err(PrestageError::EmptyVariableName);
    }

    let actual = lookup(name);
    let actual = actual.as_deref();

    let matched = match expected {
        EnvValue::AnyOf([]) => is_unset(actual),
        EnvValue::AnyOf(options) => {
            for option in options {
                if env_variable_is(lookup, name, *option)? {
                    return Ok(true);
                }
            }
            false
        }
        EnvValue::Unset => is_unset(actual),
        EnvValue::Truthy => actual.is_some_and(|v| TRUTHY.contains(&v)),
        EnvValue::Falsy => actual.map_or(true, |v| FALSY.contains(&v)),
        EnvValue::Exact(value) if value.is_empty() => is_unset(actual),
        EnvValue::Exact(value) if TRUTHY.contains(&value) => {
            actual.is_some_and(|v| TRUTHY.contains(&v))
        }
        EnvValue::Exact(value) if FALSY.contains(&value) => {
            actual.map_or(true, |v| FALSY.contains(&v))
        }
        EnvValue::Exact(value) => actual == Some(value),
    };

    Ok(matched)
}

fn is_unset(actual: Option<&str>) -> bool {
    matches!(actual, None | Some("") | Some("NaN"))
}

/// 支持识别的 CI 平台
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiProvider {
    AppVeyor,
    CircleCi,
    Travis,
    GithubActions,
    GitlabCi,
}

impl CiProvider {
    pub const ALL: [CiProvider; 5] = [
        CiProvider::AppVeyor,
        CiProvider::CircleCi,
        CiProvider::Travis,
        CiProvider::GithubActions,
        CiProvider::GitlabCi,
    ];

    /// 平台设置的环境变量名
    pub fn variable(self) -> &'static str {
        match self {
            CiProvider::AppVeyor => "APPVEYOR",
            CiProvider::CircleCi => "CIRCLECI",
            CiProvider::Travis => "TRAVIS",
            CiProvider::GithubActions => "GITHUB_ACTIONS",
            CiProvider::GitlabCi => "GITLAB_CI",
        }
    }
}

impl std::fmt::Display for CiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CiProvider::AppVeyor => write!(f, "AppVeyor"),
            CiProvider::CircleCi => write!(f, "CircleCI"),
            CiProvider::Travis => write!(f, "Travis CI"),
            CiProvider::GithubActions => write!(f, "GitHub Actions"),
            CiProvider::GitlabCi => write!(f, "GitLab CI"),
        }
    }
}

/// 进程级环境配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// 测试或 CI 环境
    pub is_test_env: bool,
    /// 检测到的 CI 平台（仅在测试环境中检测）
    pub providers: Vec<CiProvider>,
}

impl EnvConfig {
    /// 从当前进程环境构建
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意查找函数构建
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let check = |name: &str, expected: EnvValue<'_>| {
            env_variable_is(&lookup, name, expected).unwrap_or(false)
        };

        let is_test_env = check("NODE_ENV", EnvValue::Exact("test"))
            || check("CI", EnvValue::Truthy)
            || check("CONTINUOUS_INTEGRATION", EnvValue::Truthy);

        let providers = if is_test_env {
            CiProvider::ALL
                .into_iter()
                .filter(|p| check(p.variable(), EnvValue::Truthy))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            is_test_env,
            providers,
        }
    }

    /// 是否运行在指定 CI 平台
    pub fn is(&self, provider: CiProvider) -> bool {
        self.providers.contains(&provider)
    }

    /// 第一个检测到的 CI 平台
    pub fn ci_provider(&self) -> Option<CiProvider> {
        self.providers.first().copied()
    }
}
