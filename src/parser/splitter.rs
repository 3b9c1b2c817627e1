//! 逻辑行切分
//!
//! 一个物理行中可能首尾相接地拼着多条记录，记录之间没有分隔符，只能依靠记录头
//! （13 位时间戳 + `\t` + `TYPE_`）定位。本模块按记录头把物理行切成逻辑记录。

use std::iter::FusedIterator;

use crate::error::ParseError;
use crate::tools::find_record_headers;

/// 一个物理行中的逻辑记录迭代器
///
/// 每条逻辑记录从一个记录头开始，到下一个记录头（或行尾）之前结束。
/// 迭代器只能消费一次，切分新行需要重新调用 [`split_logical_lines`]。
#[derive(Debug, Clone)]
pub struct LogicalLines<'a> {
    line: &'a str,
    starts: Vec<usize>,
    next: usize,
}

impl<'a> LogicalLines<'a> {
    /// 第一个记录头之前的文本（格式正确的行为空串）
    pub fn prefix(&self) -> &'a str {
        match self.starts.first() {
            Some(&first) => &self.line[..first],
            None => self.line,
        }
    }

    /// 记录头个数
    pub fn header_count(&self) -> usize {
        self.starts.len()
    }
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.starts.get(self.next)?;
        let end = self
            .starts
            .get(self.next + 1)
            .copied()
            .unwrap_or(self.line.len());
        self.next += 1;
        Some(&self.line[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.starts.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LogicalLines<'_> {}

impl FusedIterator for LogicalLines<'_> {}

/// 把一个物理行切分为逻辑记录
///
/// # 参数
///
/// * `line_no` - 行号（仅用于错误信息）
/// * `line` - 物理行内容
///
/// # 错误
///
/// 行中不含任何记录头时返回 `MalformedLine`。
///
/// # 示例
///
/// ```
/// use indoor_sensor_log::parser::split_logical_lines;
///
/// let line = "1500000000123\tTYPE_WAYPOINT\t3.5\t4.25\
///             1500000000124\tTYPE_WAYPOINT\t3.6\t4.3";
/// let records: Vec<&str> = split_logical_lines(1, line).unwrap().collect();
///
/// assert_eq!(records, vec![
///     "1500000000123\tTYPE_WAYPOINT\t3.5\t4.25",
///     "1500000000124\tTYPE_WAYPOINT\t3.6\t4.3",
/// ]);
/// ```
pub fn split_logical_lines(line_no: usize, line: &str) -> Result<LogicalLines<'_>, ParseError> {
    let starts = find_record_headers(line);
    if starts.is_empty() {
        return Err(ParseError::MalformedLine {
            line_no,
            raw: line.to_string(),
        });
    }

    Ok(LogicalLines {
        line,
        starts,
        next: 0,
    })
}
