//! # 字符串转换器
//!
//! 将一次正则替换包装为可复用的转换器。替换内容由处理函数根据
//! 结构化的 [`MatchContext`] 计算，而不是按位置接收捕获参数。
//!
//! ## 依赖关系
//! - 被 `transform/filename.rs`、`transform/content.rs`、`presets/` 使用
//! - 使用 `regex` crate

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::Arc;

/// 一次匹配的结构化视图
#[derive(Debug, Clone)]
pub struct MatchContext<'h> {
    /// 命名捕获组（未参与匹配的组为 `None`）
    pub groups: HashMap<String, Option<&'h str>>,
    /// 完整输入字符串
    pub whole_string: &'h str,
    /// 匹配起始字节偏移
    pub offset: usize,
    /// 位置捕获组，下标 0 为整个匹配
    pub matches: Vec<Option<&'h str>>,
    /// 整个匹配的子串
    pub whole_match: &'h str,
}

impl<'h> MatchContext<'h> {
    fn from_captures(pattern: &Regex, caps: &Captures<'h>, whole_string: &'h str) -> Self {
        let whole = caps.get(0);

        let groups = pattern
            .capture_names()
            .flatten()
            .map(|name| (name.to_string(), caps.name(name).map(|m| m.as_str())))
            .collect();

        let matches = caps.iter().map(|m| m.map(|m| m.as_str())).collect();

        Self {
            groups,
            whole_string,
            offset: whole.map(|m| m.start()).unwrap_or(0),
            matches,
            whole_match: whole.map(|m| m.as_str()).unwrap_or(""),
        }
    }

    /// 命名组的匹配内容；空匹配视为缺失
    pub fn group(&self, name: &str) -> Option<&'h str> {
        self.groups
            .get(name)
            .copied()
            .flatten()
            .filter(|s| !s.is_empty())
    }

    /// 匹配之前的部分
    pub fn prior(&self) -> &'h str {
        &self.whole_string[..self.offset]
    }

    /// 匹配之后的部分
    pub fn posterior(&self) -> &'h str {
        &self.whole_string[self.offset + self.whole_match.len()..]
    }
}

type Handler = dyn Fn(&MatchContext<'_>) -> String + Send + Sync;

/// 正则替换转换器
#[derive(Clone)]
pub struct StringTransformer {
    handler: Arc<Handler>,
    global: bool,
}

/// 由处理函数创建转换器
pub fn make_string_transformer<F>(handler: F) -> StringTransformer
where
    F: Fn(&MatchContext<'_>) -> String + Send + Sync + 'static,
{
    StringTransformer {
        handler: Arc::new(handler),
        global: true,
    }
}

impl StringTransformer {
    /// 只替换第一处匹配
    pub fn first_only(mut self) -> Self {
        self.global = false;
        self
    }

    /// 对单个字符串或字符串序列应用替换
    pub fn apply<I: TransformInput>(&self, pattern: &Regex, input: I) -> I::Output {
        input.transform_with(self, pattern)
    }

    fn replace(&self, pattern: &Regex, input: &str) -> String {
        let limit = if self.global { 0 } else { 1 };
        pattern
            .replacen(input, limit, |caps: &Captures<'_>| {
                (self.handler)(&MatchContext::from_captures(pattern, caps, input))
            })
            .into_owned()
    }
}

impl std::fmt::Debug for StringTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringTransformer")
            .field("global", &self.global)
            .finish_non_exhaustive()
    }
}

/// 可被 [`StringTransformer`] 处理的输入
pub trait TransformInput {
    type Output;

    fn transform_with(self, transformer: &StringTransformer, pattern: &Regex) -> Self::Output;
}

impl TransformInput for &str {
    type Output = String;

    fn transform_with(self, transformer: &StringTransformer, pattern: &Regex) -> String {
        transformer.replace(pattern, self)
    }
}

impl TransformInput for &String {
    type Output = String;

    fn transform_with(self, transformer: &StringTransformer, pattern: &Regex) -> String {
        transformer.replace(pattern, self)
    }
}

impl<S: AsRef<str>> TransformInput for &[S] {
    type Output = Vec<String>;

    fn transform_with(self, transformer: &StringTransformer, pattern: &Regex) -> Vec<String> {
        self.iter()
            .map(|s| transformer.replace(pattern, s.as_ref()))
            .collect()
    }
}

impl<S: AsRef<str>> TransformInput for &Vec<S> {
    type Output = Vec<String>;

    fn transform_with(self, transformer: &StringTransformer, pattern: &Regex) -> Vec<String> {
        self.as_slice().transform_with(transformer, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper_word() -> StringTransformer {
        make_string_transformer(|ctx| ctx.whole_match.to_uppercase())
    }

    #[test]
    fn test_replaces_every_match() {
        let re = Regex::new(r"o+").unwrap();
        assert_eq!(upper_word().apply(&re, "foo boo"), "fOO bOO");
    }

    #[test]
    fn test_first_only() {
        let re = Regex::new(r"o+").unwrap();
        assert_eq!(upper_word().first_only().apply(&re, "foo boo"), "fOO boo");
    }

    #[test]
    fn test_no_match_is_identity() {
        let re = Regex::new(r"z+").unwrap();
        assert_eq!(upper_word().apply(&re, "foo boo"), "foo boo");
    }

    #[test]
    fn test_sequence_preserves_order() {
        let re = Regex::new(r"^\w").unwrap();
        let out = upper_word().apply(&re, &["alpha", "beta", "gamma"][..]);
        assert_eq!(out, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_match_context_fields() {
        let re = Regex::new(r"(?P<name>\w+)=(?P<value>\d+)?").unwrap();
        let transformer = make_string_transformer(move |ctx| {
            format!(
                "{}|{}|{}|{:?}|{:?}",
                ctx.offset,
                ctx.prior(),
                ctx.posterior(),
                ctx.group("name"),
                ctx.group("value")
            )
        });
        let out = transformer.apply(&re, "x key= y");
        assert_eq!(out, "x 2|x | y|Some(\"key\")|None y");
    }

    #[test]
    fn test_positional_matches() {
        let re = Regex::new(r"(a)(b)?").unwrap();
        let transformer = make_string_transformer(|ctx| {
            assert_eq!(ctx.matches.len(), 3);
            assert_eq!(ctx.matches[0], Some(ctx.whole_match));
            assert!(ctx.groups.is_empty());
            format!("{}", ctx.matches.iter().filter(|m| m.is_some()).count())
        });
        assert_eq!(transformer.apply(&re, "ab a"), "3 2");
    }
}
