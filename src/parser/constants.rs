//! 解析器使用的常量定义
//!
//! 定义了元数据行标记以及各记录类型的字段下标。

/// 会话开始时间元数据行前缀
pub static START_TIME_MARKER: &str = "#\tstartTime";

/// 会话结束时间元数据行前缀
pub static END_TIME_MARKER: &str = "#\tendTime";

/// 注释行前缀
pub const COMMENT_MARKER: char = '#';

/// 元数据行按 `:` 和 `\t` 切分后，取值所在的下标
pub const METADATA_VALUE_INDEX: usize = 2;

/// 记录字段分隔符
pub const FIELD_SEPARATOR: char = '\t';

// 通用字段下标

/// 时间戳
pub const TS_INDEX: usize = 0;

/// 类型标签
pub const TAG_INDEX: usize = 1;

/// 第一个数据字段
pub const FIRST_VALUE_INDEX: usize = 2;

// 未校准传感器

/// 偏置字段起始下标（bias_x, bias_y, bias_z）
pub const BIAS_START_INDEX: usize = 5;

/// 精度字段下标
pub const ACCURACY_INDEX: usize = 8;

// Wi-Fi: ts, tag, ssid, bssid, rssi, (跳过), last_seen_ts

pub const WIFI_SSID_INDEX: usize = 2;
pub const WIFI_BSSID_INDEX: usize = 3;
pub const WIFI_RSSI_INDEX: usize = 4;
pub const WIFI_LAST_SEEN_INDEX: usize = 6;

// iBeacon: ts, tag, uuid, major, minor, (跳过), rssi

pub const BEACON_UUID_INDEX: usize = 2;
pub const BEACON_MAJOR_INDEX: usize = 3;
pub const BEACON_MINOR_INDEX: usize = 4;
pub const BEACON_RSSI_INDEX: usize = 6;

/// iBeacon 键的连接符
pub const BEACON_KEY_SEPARATOR: &str = "_";
