//! # Indoor Sensor Log
//!
//! 室内定位传感器日志解析器：把混合了多种传感器读数与元数据行的文本日志，
//! 解析为按传感器分类、保持原始顺序的列式数值表。
//!
//! ## 功能特性
//!
//! - **逻辑行切分**: 一个物理行中首尾相接的多条记录按记录头（13 位时间戳 + `\tTYPE_`）切开
//! - **类型分派**: 按类型标签解析十种记录，未知类型直接忽略
//! - **变长记录**: 未校准传感器记录按字段数区分 4 列与 8 列两种形状，不做填充
//! - **列式输出**: 结果转换为 `ndarray` 数组，便于后续数值处理
//! - **严格失败**: 任何格式或数值错误都中止整次解析，不返回部分结果
//!
//! ## 快速开始
//!
//! ```rust
//! use indoor_sensor_log::parse_str;
//!
//! let log_content = "#\tstartTime:1500000000000\tutc\n\
//!     1500000000010\tTYPE_ACCELEROMETER\t0.1\t0.2\t9.8\
//!     1500000000010\tTYPE_GYROSCOPE\t0.01\t0.02\t0.03\n\
//!     1500000000123\tTYPE_WAYPOINT\t3.5\t4.25\n\
//!     #\tendTime:1500000009999\tutc\n";
//!
//! let log = parse_str(log_content).unwrap();
//!
//! assert_eq!(log.start_time, Some(1500000000000));
//! assert_eq!(log.end_time, Some(1500000009999));
//! assert_eq!(log.acce.values.shape(), &[1, 3]);
//! assert_eq!(log.gyro.len(), 1);
//! assert_eq!(log.waypoint.positions[[0, 1]], 4.25);
//! ```
//!
//! ### 流式处理
//!
//! ```rust
//! use indoor_sensor_log::{SensorRecord, for_each_record};
//!
//! let log_content = "1500000000010\tTYPE_WIFI\tap\t00:11:22:33:44:55\t-50\t2412\t1500000000001\n";
//!
//! for_each_record(log_content, |line_no, record| {
//!     if let SensorRecord::Wifi(scan) = record {
//!         println!("第 {} 行: {} {}", line_no, scan.bssid, scan.rssi);
//!     }
//! })
//! .unwrap();
//! ```
//!
//! ## 日志格式
//!
//! ```text
//! #\tstartTime:1500000000000\t...
//! 1500000000010\tTYPE_ACCELEROMETER\tx\ty\tz
//! 1500000000010\tTYPE_ACCELEROMETER_UNCALIBRATED\tx\ty\tz[\tbias_x\tbias_y\tbias_z\taccuracy]
//! 1500000000010\tTYPE_WIFI\tssid\tbssid\trssi\tfrequency\tlast_seen_ts
//! 1500000000010\tTYPE_BEACON\tuuid\tmajor\tminor\ttx_power\trssi\t...
//! 1500000000010\tTYPE_WAYPOINT\tx\ty
//! #\tendTime:1500000009999\t...
//! ```

pub mod columnar;
pub mod error;
pub mod parser;
pub mod parser_config;
pub mod record_types;
pub mod sensor;
pub mod tools;

pub use columnar::{
    AxisTable, BiasTable, SensorLog, SensorLogSummary, UncalibratedTable, WaypointTable,
};
pub use error::ParseError;
pub use parser::{
    SensorLogBuilder, SensorLogParser, for_each_record, parse_file, parse_files, parse_lines,
    parse_str,
};
pub use parser_config::ParserConfig;
pub use record_types::RecordType;
pub use sensor::{AxisSample, BeaconScan, SensorRecord, UncalibratedSample, WifiScan, Waypoint};
