//! 列式结果
//!
//! 解析过程中按行累积的数据，在解析结束时一次性转换为 `ndarray` 列式表，
//! 并与两个元数据标量一起组装成不可变的 [`SensorLog`]。

use ndarray::{Array1, Array2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::{AxisSample, BeaconScan, UncalibratedSample, WifiScan, Waypoint};

/// 三轴传感器表：`timestamps` 长度为 n，`values` 形状为 (n, 3)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisTable {
    pub timestamps: Array1<i64>,
    pub values: Array2<f64>,
}

impl AxisTable {
    pub fn from_samples(samples: &[AxisSample]) -> Self {
        Self {
            timestamps: samples.iter().map(|s| s.ts).collect(),
            values: Array2::from_shape_fn((samples.len(), 3), |(i, j)| {
                let s = &samples[i];
                [s.x, s.y, s.z][j]
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// 取第 `index` 行，越界返回 `None`
    pub fn row(&self, index: usize) -> Option<AxisSample> {
        let ts = *self.timestamps.get(index)?;
        Some(AxisSample {
            ts,
            x: self.values[[index, 0]],
            y: self.values[[index, 1]],
            z: self.values[[index, 2]],
        })
    }
}

impl Default for AxisTable {
    fn default() -> Self {
        Self::from_samples(&[])
    }
}

/// 未校准传感器表
///
/// 行宽为 4 或 8，保持原样不做填充；需要规则矩阵时使用 [`UncalibratedTable::values`]
/// 或 [`UncalibratedTable::with_bias`]。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UncalibratedTable {
    pub samples: Vec<UncalibratedSample>,
}

/// 未校准表中带偏置的行组成的规则表
#[derive(Debug, Clone, PartialEq)]
pub struct BiasTable {
    pub timestamps: Array1<i64>,
    /// 形状 (m, 3)
    pub values: Array2<f64>,
    /// 形状 (m, 3)
    pub bias: Array2<f64>,
    pub accuracy: Array1<i32>,
}

impl UncalibratedTable {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn timestamps(&self) -> Array1<i64> {
        self.samples.iter().map(UncalibratedSample::ts).collect()
    }

    /// 所有行的测量值，形状 (n, 3)
    pub fn values(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.samples.len(), 3), |(i, j)| self.samples[i].axes()[j])
    }

    /// 只保留 8 列形状的行
    pub fn with_bias(&self) -> BiasTable {
        let rows: Vec<(i64, [f64; 3], [f64; 3], i32)> = self
            .samples
            .iter()
            .filter_map(|s| match *s {
                UncalibratedSample::WithBias {
                    ts,
                    x,
                    y,
                    z,
                    bias_x,
                    bias_y,
                    bias_z,
                    accuracy,
                } => Some((ts, [x, y, z], [bias_x, bias_y, bias_z], accuracy)),
                UncalibratedSample::Basic { .. } => None,
            })
            .collect();

        BiasTable {
            timestamps: rows.iter().map(|r| r.0).collect(),
            values: Array2::from_shape_fn((rows.len(), 3), |(i, j)| rows[i].1[j]),
            bias: Array2::from_shape_fn((rows.len(), 3), |(i, j)| rows[i].2[j]),
            accuracy: rows.iter().map(|r| r.3).collect(),
        }
    }
}

/// 路径点表：`positions` 形状为 (n, 2)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaypointTable {
    pub timestamps: Array1<i64>,
    pub positions: Array2<f64>,
}

impl WaypointTable {
    pub fn from_points(points: &[Waypoint]) -> Self {
        Self {
            timestamps: points.iter().map(|p| p.ts).collect(),
            positions: Array2::from_shape_fn((points.len(), 2), |(i, j)| {
                let p = &points[i];
                if j == 0 { p.x } else { p.y }
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<Waypoint> {
        let ts = *self.timestamps.get(index)?;
        Some(Waypoint {
            ts,
            x: self.positions[[index, 0]],
            y: self.positions[[index, 1]],
        })
    }
}

impl Default for WaypointTable {
    fn default() -> Self {
        Self::from_points(&[])
    }
}

/// 一次解析的完整结果
///
/// 构建完成后不再修改，可在多个线程间共享读取。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorLog {
    /// 会话开始时间（epoch 毫秒），缺少元数据行时为 `None`
    pub start_time: Option<i64>,
    /// 会话结束时间（epoch 毫秒），缺少元数据行时为 `None`
    pub end_time: Option<i64>,
    pub acce: AxisTable,
    pub acce_uncali: UncalibratedTable,
    pub gyro: AxisTable,
    pub gyro_uncali: UncalibratedTable,
    pub magn: AxisTable,
    pub magn_uncali: UncalibratedTable,
    pub ahrs: AxisTable,
    pub wifi: Vec<WifiScan>,
    pub ibeacon: Vec<BeaconScan>,
    pub waypoint: WaypointTable,
}

/// 每张表的行数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorLogSummary {
    pub acce: usize,
    pub acce_uncali: usize,
    pub gyro: usize,
    pub gyro_uncali: usize,
    pub magn: usize,
    pub magn_uncali: usize,
    pub ahrs: usize,
    pub wifi: usize,
    pub ibeacon: usize,
    pub waypoint: usize,
}

impl SensorLogSummary {
    pub fn total(&self) -> usize {
        self.acce
            + self.acce_uncali
            + self.gyro
            + self.gyro_uncali
            + self.magn
            + self.magn_uncali
            + self.ahrs
            + self.wifi
            + self.ibeacon
            + self.waypoint
    }
}

impl SensorLog {
    pub fn summary(&self) -> SensorLogSummary {
        SensorLogSummary {
            acce: self.acce.len(),
            acce_uncali: self.acce_uncali.len(),
            gyro: self.gyro.len(),
            gyro_uncali: self.gyro_uncali.len(),
            magn: self.magn.len(),
            magn_uncali: self.magn_uncali.len(),
            ahrs: self.ahrs.len(),
            wifi: self.wifi.len(),
            ibeacon: self.ibeacon.len(),
            waypoint: self.waypoint.len(),
        }
    }
}
