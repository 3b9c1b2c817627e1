//! Parser 模块 - 解析室内定位传感器日志
//!
//! 此模块提供了完整的日志解析功能,包括:
//! - 物理行到逻辑记录的切分
//! - 按类型标签分派解析
//! - 按传感器累积并组装列式结果
//! - 便捷 API 函数

mod accumulator;
mod api;
mod constants;
pub(crate) mod parse_functions;
pub mod splitter;

pub use accumulator::SensorLogBuilder;
pub use api::{
    SensorLogParser, for_each_record, parse_file, parse_files, parse_lines, parse_str,
};
pub use parse_functions::{parse_logical_record, parse_metadata_line};
pub use splitter::{LogicalLines, split_logical_lines};
