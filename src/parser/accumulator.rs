//! 按传感器累积解析结果
//!
//! 解析期间每种记录类型对应一个可增长的行缓冲，解析结束后一次性转换为
//! [`SensorLog`]。构建器只归单次解析调用所有。

use tracing::warn;

use crate::columnar::{AxisTable, SensorLog, UncalibratedTable, WaypointTable};
use crate::sensor::{AxisSample, BeaconScan, SensorRecord, UncalibratedSample, WifiScan, Waypoint};

/// [`SensorLog`] 构建器
///
/// 行只追加不修改，顺序即遇到的顺序。
#[derive(Debug, Default)]
pub struct SensorLogBuilder {
    start_time: Option<i64>,
    end_time: Option<i64>,
    acce: Vec<AxisSample>,
    acce_uncali: Vec<UncalibratedSample>,
    gyro: Vec<AxisSample>,
    gyro_uncali: Vec<UncalibratedSample>,
    magn: Vec<AxisSample>,
    magn_uncali: Vec<UncalibratedSample>,
    ahrs: Vec<AxisSample>,
    wifi: Vec<WifiScan>,
    ibeacon: Vec<BeaconScan>,
    waypoint: Vec<Waypoint>,
}

impl SensorLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录到对应的表
    ///
    /// `line_no` 仅用于重复元数据行的告警。
    pub fn push(&mut self, line_no: usize, record: SensorRecord) {
        match record {
            SensorRecord::Accelerometer(s) => self.acce.push(s),
            SensorRecord::AccelerometerUncalibrated(s) => self.acce_uncali.push(s),
            SensorRecord::Gyroscope(s) => self.gyro.push(s),
            SensorRecord::GyroscopeUncalibrated(s) => self.gyro_uncali.push(s),
            SensorRecord::MagneticField(s) => self.magn.push(s),
            SensorRecord::MagneticFieldUncalibrated(s) => self.magn_uncali.push(s),
            SensorRecord::RotationVector(s) => self.ahrs.push(s),
            SensorRecord::Wifi(s) => self.wifi.push(s),
            SensorRecord::Beacon(s) => self.ibeacon.push(s),
            SensorRecord::Waypoint(p) => self.waypoint.push(p),
            SensorRecord::StartTime(ts) => set_once(&mut self.start_time, ts, line_no, "startTime"),
            SensorRecord::EndTime(ts) => set_once(&mut self.end_time, ts, line_no, "endTime"),
        }
    }

    /// 已累积的数据记录数（不含元数据）
    pub fn record_count(&self) -> usize {
        self.acce.len()
            + self.acce_uncali.len()
            + self.gyro.len()
            + self.gyro_uncali.len()
            + self.magn.len()
            + self.magn_uncali.len()
            + self.ahrs.len()
            + self.wifi.len()
            + self.ibeacon.len()
            + self.waypoint.len()
    }

    /// 转换为列式结果
    pub fn build(self) -> SensorLog {
        SensorLog {
            start_time: self.start_time,
            end_time: self.end_time,
            acce: AxisTable::from_samples(&self.acce),
            acce_uncali: UncalibratedTable {
                samples: self.acce_uncali,
            },
            gyro: AxisTable::from_samples(&self.gyro),
            gyro_uncali: UncalibratedTable {
                samples: self.gyro_uncali,
            },
            magn: AxisTable::from_samples(&self.magn),
            magn_uncali: UncalibratedTable {
                samples: self.magn_uncali,
            },
            ahrs: AxisTable::from_samples(&self.ahrs),
            wifi: self.wifi,
            ibeacon: self.ibeacon,
            waypoint: WaypointTable::from_points(&self.waypoint),
        }
    }
}

// 元数据只取第一次出现的值
fn set_once(slot: &mut Option<i64>, ts: i64, line_no: usize, name: &str) {
    if let Some(existing) = *slot {
        warn!(line_no, name, existing, ignored = ts, "duplicate metadata line");
    } else {
        *slot = Some(ts);
    }
}
