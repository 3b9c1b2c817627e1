//! 记录类型模块
//!
//! 定义日志中出现的记录类型标签（`TYPE_*`），以及按类型标签进行分派所需的枚举。

use std::fmt;

/// 记录类型
///
/// 每个已知的类型标签对应一个变体；无法识别的标签统一归为 [`RecordType::Unknown`]，
/// 分派时直接忽略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Accelerometer,
    AccelerometerUncalibrated,
    Gyroscope,
    GyroscopeUncalibrated,
    MagneticField,
    MagneticFieldUncalibrated,
    RotationVector,
    Wifi,
    Beacon,
    Waypoint,
    /// 未知类型，不是错误
    Unknown,
}

impl RecordType {
    /// 所有已知类型
    pub const KNOWN: [RecordType; 10] = [
        RecordType::Accelerometer,
        RecordType::AccelerometerUncalibrated,
        RecordType::Gyroscope,
        RecordType::GyroscopeUncalibrated,
        RecordType::MagneticField,
        RecordType::MagneticFieldUncalibrated,
        RecordType::RotationVector,
        RecordType::Wifi,
        RecordType::Beacon,
        RecordType::Waypoint,
    ];

    /// 从类型标签解析记录类型（区分大小写，需完全相等）
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "TYPE_ACCELEROMETER" => RecordType::Accelerometer,
            "TYPE_ACCELEROMETER_UNCALIBRATED" => RecordType::AccelerometerUncalibrated,
            "TYPE_GYROSCOPE" => RecordType::Gyroscope,
            "TYPE_GYROSCOPE_UNCALIBRATED" => RecordType::GyroscopeUncalibrated,
            "TYPE_MAGNETIC_FIELD" => RecordType::MagneticField,
            "TYPE_MAGNETIC_FIELD_UNCALIBRATED" => RecordType::MagneticFieldUncalibrated,
            "TYPE_ROTATION_VECTOR" => RecordType::RotationVector,
            "TYPE_WIFI" => RecordType::Wifi,
            "TYPE_BEACON" => RecordType::Beacon,
            "TYPE_WAYPOINT" => RecordType::Waypoint,
            _ => RecordType::Unknown,
        }
    }

    /// 返回类型标签
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Accelerometer => "TYPE_ACCELEROMETER",
            RecordType::AccelerometerUncalibrated => "TYPE_ACCELEROMETER_UNCALIBRATED",
            RecordType::Gyroscope => "TYPE_GYROSCOPE",
            RecordType::GyroscopeUncalibrated => "TYPE_GYROSCOPE_UNCALIBRATED",
            RecordType::MagneticField => "TYPE_MAGNETIC_FIELD",
            RecordType::MagneticFieldUncalibrated => "TYPE_MAGNETIC_FIELD_UNCALIBRATED",
            RecordType::RotationVector => "TYPE_ROTATION_VECTOR",
            RecordType::Wifi => "TYPE_WIFI",
            RecordType::Beacon => "TYPE_BEACON",
            RecordType::Waypoint => "TYPE_WAYPOINT",
            RecordType::Unknown => "TYPE_UNKNOWN",
        }
    }

    /// 是否为未校准传感器类型（字段数可变）
    pub fn is_uncalibrated(&self) -> bool {
        matches!(
            self,
            RecordType::AccelerometerUncalibrated
                | RecordType::GyroscopeUncalibrated
                | RecordType::MagneticFieldUncalibrated
        )
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip_for_known_types() {
        for ty in RecordType::KNOWN {
            assert_eq!(RecordType::from_tag(ty.as_str()), ty);
        }
    }

    #[test]
    fn unknown_tags() {
        for tag in ["TYPE_PRESSURE", "TYPE_wifi", "", "TYPE_", "WIFI"] {
            assert_eq!(RecordType::from_tag(tag), RecordType::Unknown, "tag: {tag}");
        }
    }

    #[test]
    fn uncalibrated_flags() {
        let flagged: Vec<_> = RecordType::KNOWN
            .iter()
            .filter(|t| t.is_uncalibrated())
            .collect();
        assert_eq!(flagged.len(), 3);
        assert!(!RecordType::Accelerometer.is_uncalibrated());
    }
}
