//! # 流水线执行器
//!
//! 对每个输入目录执行一次扫描-解析-转换-写出。
//!
//! ## 执行模型
//! - 同一目录下的文件作为相互独立的单元分派到 rayon 线程池
//! - 单个文件失败不会中断同目录的其他文件
//! - `quit_on_error` 时，等已分派的单元全部结束后返回第一个失败（按文件名顺序），
//!   后续目录不再处理
//! - 无法列出目录时只记录，不向调用方返回错误
//! - 未返回给调用方的失败（文件、目录、目录项）在 `suppress_errors` 为假时逐条输出
//! - 返回前等待所有单元完成，结果汇总在 [`PipelineReport`] 中
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `pipeline/matcher.rs`、`transform/filename.rs`
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::{PrestageError, Result};
use crate::pipeline::matcher::{accept_all, DirEntryInfo};
use crate::transform::filename::FilenameTransformer;
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// 输入文件编码
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Encoding {
    /// UTF-8 (invalid sequences are an error)
    #[default]
    Utf8,
    /// ISO-8859-1, every byte maps to one character
    Latin1,
}

impl Encoding {
    fn decode(self, bytes: Vec<u8>, path: &Path) -> Result<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes).map_err(|_| PrestageError::Decode {
                path: path.display().to_string(),
                encoding: self.to_string(),
            }),
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf-8"),
            Encoding::Latin1 => write!(f, "latin1"),
        }
    }
}

/// 目录项过滤谓词
pub type EntryFilter = Box<dyn Fn(&DirEntryInfo) -> bool + Send + Sync>;

/// 错误输出目标，接收一条完整的错误信息
pub type ErrorReporter = Box<dyn Fn(&str) + Send + Sync>;

/// 流水线选项，每次调用构造一次，之后只读
pub struct ProcessingOptions {
    /// 决定哪些目录项进入流水线
    pub input_file_filter: EntryFilter,
    /// 读取输入文件的编码
    pub encoding: Encoding,
    /// 不输出任何错误信息
    pub suppress_errors: bool,
    /// 任一文件失败即终止整批
    pub quit_on_error: bool,
    /// 并行作业数（0 = CPU 数）
    pub jobs: usize,
    /// 显示进度条
    pub show_progress: bool,
    /// `suppress_errors` 为假时，未返回给调用方的错误都写到这里
    pub error_reporter: ErrorReporter,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            input_file_filter: Box::new(accept_all),
            encoding: Encoding::Utf8,
            suppress_errors: false,
            quit_on_error: true,
            jobs: 0,
            show_progress: false,
            error_reporter: Box::new(output::print_error),
        }
    }
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&DirEntryInfo) -> bool + Send + Sync + 'static,
    {
        self.input_file_filter = Box::new(filter);
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn suppress_errors(mut self, suppress: bool) -> Self {
        self.suppress_errors = suppress;
        self
    }

    pub fn quit_on_error(mut self, quit: bool) -> Self {
        self.quit_on_error = quit;
        self
    }

    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_reporter<F>(mut self, reporter: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.error_reporter = Box::new(reporter);
        self
    }

    fn report(&self, msg: &str) {
        if !self.suppress_errors {
            (self.error_reporter)(msg);
        }
    }
}

impl std::fmt::Debug for ProcessingOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessingOptions")
            .field("encoding", &self.encoding)
            .field("suppress_errors", &self.suppress_errors)
            .field("quit_on_error", &self.quit_on_error)
            .field("jobs", &self.jobs)
            .field("show_progress", &self.show_progress)
            .finish_non_exhaustive()
    }
}

/// 单个文件处理结果
#[derive(Debug)]
pub enum FileResult {
    /// 已写出 (文件名, 输出路径)
    Written(String, PathBuf),
    /// 处理失败 (文件名, 原始错误)
    Failed(String, PrestageError),
}

/// 流水线处理结果统计
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// 已写出的文件 (输入文件名, 输出路径)
    pub outputs: Vec<(String, PathBuf)>,
    /// 失败详情 (文件名, 错误信息)
    pub failures: Vec<(String, String)>,
    /// 无法列出的目录 (目录, 错误信息)
    pub directory_failures: Vec<(String, String)>,
}

impl PipelineReport {
    pub fn written(&self) -> usize {
        self.outputs.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.written() + self.failed()
    }
}

/// 对一个或多个目录执行流水线
///
/// `parse` 接收 (文件内容, 文件名)，`write` 接收 (解析结果, 输出路径)。
/// 目录按给定顺序依次处理。
pub fn process_files<I, V, P, W, T>(
    input_dirs: I,
    parse: P,
    write: W,
    output_dir: &Path,
    transform_filename: &T,
    options: &ProcessingOptions,
) -> Result<PipelineReport>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
    P: Fn(&str, &str) -> Result<V> + Sync,
    W: Fn(V, &Path) -> Result<()> + Sync,
    T: FilenameTransformer + ?Sized,
{
    let jobs = if options.jobs == 0 {
        num_cpus::get()
    } else {
        options.jobs
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| PrestageError::Other(format!("Failed to start worker pool: {}", e)))?;

    let mut report = PipelineReport::default();

    for dir in input_dirs {
        let dir = dir.as_ref();

        let entries = match list_entries(dir, options, &mut report) {
            Ok(entries) => entries,
            Err(e) => {
                options.report(&format!(
                    "Could not complete task. {}",
                    output::error_chain(&e)
                ));
                report
                    .directory_failures
                    .push((dir.display().to_string(), e.to_string()));
                continue;
            }
        };

        tracing::debug!(
            dir = %dir.display(),
            files = entries.len(),
            jobs,
            "dispatching directory"
        );

        let pb = if options.show_progress {
            progress::create_progress_bar(entries.len() as u64, "Processing")
        } else {
            indicatif::ProgressBar::hidden()
        };

        let results: Vec<FileResult> = pool.install(|| {
            entries
                .par_iter()
                .map(|entry| {
                    let result = match process_file(
                        dir,
                        entry,
                        &parse,
                        &write,
                        output_dir,
                        transform_filename,
                        options,
                    ) {
                        Ok(path) => FileResult::Written(entry.name.clone(), path),
                        Err(e) => FileResult::Failed(entry.name.clone(), e),
                    };
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut fatal: Option<PrestageError> = None;

        for result in results {
            match result {
                FileResult::Written(name, path) => {
                    tracing::debug!(input = %name, output = %path.display(), "wrote file");
                    report.outputs.push((name, path));
                }
                FileResult::Failed(name, error) => {
                    report
                        .failures
                        .push((name.clone(), output::error_chain(&error)));

                    if options.quit_on_error && fatal.is_none() {
                        fatal = Some(PrestageError::FileProcessing {
                            name,
                            source: Box::new(error),
                        });
                    } else {
                        options.report(&format!(
                            "Could not read file {}: {}",
                            name,
                            output::error_chain(&error)
                        ));
                    }
                }
            }
        }

        if let Some(error) = fatal {
            tracing::debug!(
                written = report.written(),
                failed = report.failed(),
                "stopping after first failure"
            );
            return Err(error);
        }
    }

    Ok(report)
}

/// 列出目录中通过过滤的目录项（不递归，按名称排序）
///
/// 无法读取的单个目录项记入 `report.directory_failures`，其余照常返回。
fn list_entries(
    dir: &Path,
    options: &ProcessingOptions,
    report: &mut PipelineReport,
) -> Result<Vec<DirEntryInfo>> {
    let read_dir = fs::read_dir(dir).map_err(|e| PrestageError::DirectoryRead {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => {
                let info = DirEntryInfo::from_dir_entry(&entry);
                if (options.input_file_filter)(&info) {
                    entries.push(info);
                }
            }
            Err(e) => {
                let error = PrestageError::DirectoryRead {
                    path: dir.display().to_string(),
                    source: e,
                };
                options.report(&format!(
                    "Could not read directory entry. {}",
                    output::error_chain(&error)
                ));
                report
                    .directory_failures
                    .push((dir.display().to_string(), error.to_string()));
            }
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// 处理单个文件，返回输出路径
fn process_file<V, P, W, T>(
    dir: &Path,
    entry: &DirEntryInfo,
    parse: &P,
    write: &W,
    output_dir: &Path,
    transform_filename: &T,
    options: &ProcessingOptions,
) -> Result<PathBuf>
where
    P: Fn(&str, &str) -> Result<V>,
    W: Fn(V, &Path) -> Result<()>,
    T: FilenameTransformer + ?Sized,
{
    let input_path = dir.join(&entry.name);

    let bytes = fs::read(&input_path).map_err(|e| PrestageError::FileReadError {
        path: input_path.display().to_string(),
        source: e,
    })?;
    let contents = options.encoding.decode(bytes, &input_path)?;

    let parsed = parse(&contents, &entry.name)?;
    let output_path = output_dir.join(transform_filename.transform(&entry.name)?);
    write(parsed, &output_path)?;

    Ok(output_path)
}
