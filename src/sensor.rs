//! 传感器记录的行类型
//!
//! 每个逻辑记录经解析后得到一个 [`SensorRecord`]，随后按类型追加到对应的累加器中。

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 三轴传感器样本（加速度计、陀螺仪、磁力计、旋转矢量）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisSample {
    /// 时间戳（epoch 毫秒）
    pub ts: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 未校准传感器样本
///
/// 部分日志来源不记录偏置和精度，因此同一张表中两种形状会混合出现。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UncalibratedSample {
    /// `[ts, x, y, z]`
    Basic { ts: i64, x: f64, y: f64, z: f64 },
    /// `[ts, x, y, z, bias_x, bias_y, bias_z, accuracy]`
    WithBias {
        ts: i64,
        x: f64,
        y: f64,
        z: f64,
        bias_x: f64,
        bias_y: f64,
        bias_z: f64,
        accuracy: i32,
    },
}

impl UncalibratedSample {
    /// 时间戳
    pub fn ts(&self) -> i64 {
        match self {
            UncalibratedSample::Basic { ts, .. } | UncalibratedSample::WithBias { ts, .. } => *ts,
        }
    }

    /// 测量值 `[x, y, z]`
    pub fn axes(&self) -> [f64; 3] {
        match *self {
            UncalibratedSample::Basic { x, y, z, .. }
            | UncalibratedSample::WithBias { x, y, z, .. } => [x, y, z],
        }
    }

    /// 偏置 `[bias_x, bias_y, bias_z]`，Basic 形状返回 `None`
    pub fn bias(&self) -> Option<[f64; 3]> {
        match *self {
            UncalibratedSample::Basic { .. } => None,
            UncalibratedSample::WithBias {
                bias_x,
                bias_y,
                bias_z,
                ..
            } => Some([bias_x, bias_y, bias_z]),
        }
    }

    /// 精度，Basic 形状返回 `None`
    pub fn accuracy(&self) -> Option<i32> {
        match *self {
            UncalibratedSample::Basic { .. } => None,
            UncalibratedSample::WithBias { accuracy, .. } => Some(accuracy),
        }
    }

    /// 行宽：Basic 为 4，WithBias 为 8
    pub fn width(&self) -> usize {
        match self {
            UncalibratedSample::Basic { .. } => 4,
            UncalibratedSample::WithBias { .. } => 8,
        }
    }
}

/// Wi-Fi 扫描结果，保持原始字符串
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WifiScan {
    pub ts: String,
    pub ssid: String,
    pub bssid: String,
    pub rssi: String,
    /// 最近一次被扫描到的时间戳（源记录下标 6 的字段，下标 5 不读取）
    pub last_seen_ts: String,
}

impl WifiScan {
    /// 按列顺序返回 `[ts, ssid, bssid, rssi, last_seen_ts]`
    pub fn as_row(&self) -> [&str; 5] {
        [
            self.ts.as_str(),
            self.ssid.as_str(),
            self.bssid.as_str(),
            self.rssi.as_str(),
            self.last_seen_ts.as_str(),
        ]
    }
}

/// iBeacon 扫描结果，保持原始字符串
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeaconScan {
    pub ts: String,
    /// `uuid_major_minor`
    pub key: String,
    pub rssi: String,
}

impl BeaconScan {
    /// 按列顺序返回 `[ts, key, rssi]`
    pub fn as_row(&self) -> [&str; 3] {
        [self.ts.as_str(), self.key.as_str(), self.rssi.as_str()]
    }
}

/// 路径点（人工标注的位置）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub ts: i64,
    pub x: f64,
    pub y: f64,
}

/// 一个逻辑记录（或元数据行）的解析结果
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorRecord {
    Accelerometer(AxisSample),
    AccelerometerUncalibrated(UncalibratedSample),
    Gyroscope(AxisSample),
    GyroscopeUncalibrated(UncalibratedSample),
    MagneticField(AxisSample),
    MagneticFieldUncalibrated(UncalibratedSample),
    RotationVector(AxisSample),
    Wifi(WifiScan),
    Beacon(BeaconScan),
    Waypoint(Waypoint),
    /// `#\tstartTime:` 元数据行
    StartTime(i64),
    /// `#\tendTime:` 元数据行
    EndTime(i64),
}
