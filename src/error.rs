//! 错误类型定义
//!
//! 定义了传感器日志解析过程中可能出现的所有错误类型。任何一个错误都会中止整次解析，
//! 不会返回部分结果。

use thiserror::Error;

/// 解析错误类型
///
/// 行号从 1 开始计数，对应输入中的物理行。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 数据行中找不到任何记录头（13 位时间戳 + `\tTYPE_`）
    #[error("malformed line {line_no}: no record header found: {raw}")]
    MalformedLine {
        /// 行号
        line_no: usize,
        /// 原始行内容
        raw: String,
    },

    /// 数值字段转换失败
    #[error("field conversion error at line {line_no}, field {field}: cannot convert '{value}' ({raw})")]
    FieldConversion {
        /// 行号
        line_no: usize,
        /// 字段在记录中的下标（按制表符切分后）
        field: usize,
        /// 无法转换的字段值
        value: String,
        /// 出错的逻辑记录（元数据行为整行）
        raw: String,
    },

    /// 已知类型的记录字段数不足
    #[error("missing field {field} in {record_type} record at line {line_no}: only {found} fields present")]
    MissingField {
        /// 行号
        line_no: usize,
        /// 记录类型标签
        record_type: &'static str,
        /// 需要的字段下标
        field: usize,
        /// 实际字段数
        found: usize,
    },

    /// 文件打开、读取或 UTF-8 解码失败
    #[error("io error on {path}: {message}")]
    Io {
        /// 文件路径
        path: String,
        /// 底层错误信息
        message: String,
    },
}

impl ParseError {
    /// 出错的行号（文件级错误返回 `None`）
    pub fn line_no(&self) -> Option<usize> {
        match self {
            ParseError::MalformedLine { line_no, .. }
            | ParseError::FieldConversion { line_no, .. }
            | ParseError::MissingField { line_no, .. } => Some(*line_no),
            ParseError::Io { .. } => None,
        }
    }
}
