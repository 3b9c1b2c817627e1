//! 便捷 API 函数
//!
//! 提供了一组方便使用的高层 API，用于快速解析传感器日志。

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::columnar::SensorLog;
use crate::error::ParseError;
use crate::parser::accumulator::SensorLogBuilder;
use crate::parser::constants::COMMENT_MARKER;
use crate::parser::parse_functions::{parse_logical_record, parse_metadata_line};
use crate::parser::splitter::split_logical_lines;
use crate::parser_config::ParserConfig;
use crate::sensor::SensorRecord;

/// 可复用的传感器日志解析器
///
/// 持有一份 [`ParserConfig`]；模块级的便捷函数都使用 `SensorLogParser::default()`。
#[derive(Debug, Clone, Default)]
pub struct SensorLogParser {
    config: ParserConfig,
}

impl SensorLogParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// 逐行解析并把每条记录交给 `f`，返回被忽略的未知类型记录数
    fn visit_lines<I, S, F>(&self, lines: I, mut f: F) -> Result<usize, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(usize, SensorRecord),
    {
        let mut unknown = 0usize;

        for (index, raw_line) in lines.into_iter().enumerate() {
            let line_no = index + 1;
            let line = raw_line.as_ref().trim();

            if let Some(metadata) = parse_metadata_line(line_no, line)? {
                f(line_no, metadata);
                continue;
            }

            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            let records = split_logical_lines(line_no, line)?;
            let prefix = records.prefix();
            if !prefix.is_empty() {
                if self.config.strict_line_prefix {
                    return Err(ParseError::MalformedLine {
                        line_no,
                        raw: line.to_string(),
                    });
                }
                warn!(line_no, prefix, "dropping text before first record header");
            }

            for record in records {
                match parse_logical_record(line_no, record, &self.config)? {
                    Some(parsed) => f(line_no, parsed),
                    None => unknown += 1,
                }
            }
        }

        Ok(unknown)
    }

    /// 解析一组物理行
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<SensorLog, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = SensorLogBuilder::new();
        let unknown = self.visit_lines(lines, |line_no, record| builder.push(line_no, record))?;

        debug!(
            records = builder.record_count(),
            unknown, "parsed sensor log"
        );
        Ok(builder.build())
    }

    /// 解析整段文本（支持 `\n` 与 `\r\n` 换行）
    pub fn parse_str(&self, text: &str) -> Result<SensorLog, ParseError> {
        self.parse_lines(text.lines())
    }

    /// 读取整个 UTF-8 文件后解析
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<SensorLog, ParseError> {
        let path_ref = path.as_ref();
        let content = fs::read_to_string(path_ref).map_err(|e| ParseError::Io {
            path: path_ref.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(path = %path_ref.display(), bytes = content.len(), "reading sensor log");
        self.parse_str(&content)
    }

    /// 逐条回调，不做累积
    pub fn for_each_record<F>(&self, text: &str, f: F) -> Result<(), ParseError>
    where
        F: FnMut(usize, SensorRecord),
    {
        self.visit_lines(text.lines(), f).map(|_| ())
    }
}

/// 解析一组物理行
///
/// # 示例
///
/// ```
/// use indoor_sensor_log::parse_lines;
///
/// let lines = [
///     "#\tstartTime:1500000000000\tutc",
///     "1500000000123\tTYPE_WAYPOINT\t3.5\t4.25",
/// ];
/// let log = parse_lines(lines).unwrap();
///
/// assert_eq!(log.start_time, Some(1500000000000));
/// assert_eq!(log.end_time, None);
/// assert_eq!(log.waypoint.len(), 1);
/// ```
pub fn parse_lines<I, S>(lines: I) -> Result<SensorLog, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SensorLogParser::default().parse_lines(lines)
}

/// 解析整段文本
pub fn parse_str(text: &str) -> Result<SensorLog, ParseError> {
    SensorLogParser::default().parse_str(text)
}

/// 从文件解析
///
/// # 示例
///
/// ```no_run
/// use indoor_sensor_log::parse_file;
///
/// let log = parse_file("path_data.txt")?;
/// println!("加速度计 {} 条, Wi-Fi {} 条", log.acce.len(), log.wifi.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SensorLog, ParseError> {
    SensorLogParser::default().parse_file(path)
}

/// 并行解析多个文件
///
/// 每个文件独立解析，结果顺序与输入顺序一致；单个文件失败不影响其他文件。
pub fn parse_files<P>(paths: &[P]) -> Vec<Result<SensorLog, ParseError>>
where
    P: AsRef<Path> + Sync,
{
    let parser = SensorLogParser::default();
    paths.par_iter().map(|path| parser.parse_file(path)).collect()
}

/// 流式处理：对每条解析出的记录调用回调
///
/// 元数据行以 [`SensorRecord::StartTime`] / [`SensorRecord::EndTime`] 的形式回调。
///
/// # 示例
///
/// ```
/// use indoor_sensor_log::{SensorRecord, for_each_record};
///
/// let text = "1500000000200\tTYPE_BEACON\tUUID1\t10\t2\tzz\t-67\n";
/// let mut keys = Vec::new();
/// for_each_record(text, |_line_no, record| {
///     if let SensorRecord::Beacon(scan) = record {
///         keys.push(scan.key);
///     }
/// })
/// .unwrap();
///
/// assert_eq!(keys, vec!["UUID1_10_2".to_string()]);
/// ```
pub fn for_each_record<F>(text: &str, f: F) -> Result<(), ParseError>
where
    F: FnMut(usize, SensorRecord),
{
    SensorLogParser::default().for_each_record(text, f)
}
