//! 核心解析函数
//!
//! 包含元数据行解析，以及按记录类型把一条逻辑记录解析为 [`SensorRecord`] 的函数。

use std::str::FromStr;

use tracing::trace;

use crate::error::ParseError;
use crate::parser::constants::*;
use crate::parser_config::ParserConfig;
use crate::record_types::RecordType;
use crate::sensor::{AxisSample, BeaconScan, SensorRecord, UncalibratedSample, WifiScan, Waypoint};

/// 一条逻辑记录的字段视图
struct Fields<'a> {
    line_no: usize,
    record_type: RecordType,
    raw: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    fn get(&self, index: usize) -> Result<&'a str, ParseError> {
        self.fields
            .get(index)
            .copied()
            .ok_or(ParseError::MissingField {
                line_no: self.line_no,
                record_type: self.record_type.as_str(),
                field: index,
                found: self.fields.len(),
            })
    }

    fn parse<T: FromStr>(&self, index: usize) -> Result<T, ParseError> {
        let value = self.get(index)?;
        value.parse().map_err(|_| ParseError::FieldConversion {
            line_no: self.line_no,
            field: index,
            value: value.to_string(),
            raw: self.raw.to_string(),
        })
    }

    fn ts(&self) -> Result<i64, ParseError> {
        self.parse(TS_INDEX)
    }

    fn axis_sample(&self) -> Result<AxisSample, ParseError> {
        Ok(AxisSample {
            ts: self.ts()?,
            x: self.parse(FIRST_VALUE_INDEX)?,
            y: self.parse(FIRST_VALUE_INDEX + 1)?,
            z: self.parse(FIRST_VALUE_INDEX + 2)?,
        })
    }

    fn uncalibrated_sample(&self, bias_field_threshold: usize) -> Result<UncalibratedSample, ParseError> {
        let ts = self.ts()?;
        let x = self.parse(FIRST_VALUE_INDEX)?;
        let y = self.parse(FIRST_VALUE_INDEX + 1)?;
        let z = self.parse(FIRST_VALUE_INDEX + 2)?;

        if self.fields.len() > bias_field_threshold {
            Ok(UncalibratedSample::WithBias {
                ts,
                x,
                y,
                z,
                bias_x: self.parse(BIAS_START_INDEX)?,
                bias_y: self.parse(BIAS_START_INDEX + 1)?,
                bias_z: self.parse(BIAS_START_INDEX + 2)?,
                accuracy: self.parse(ACCURACY_INDEX)?,
            })
        } else {
            Ok(UncalibratedSample::Basic { ts, x, y, z })
        }
    }

    fn wifi_scan(&self) -> Result<WifiScan, ParseError> {
        Ok(WifiScan {
            ts: self.get(TS_INDEX)?.to_string(),
            ssid: self.get(WIFI_SSID_INDEX)?.to_string(),
            bssid: self.get(WIFI_BSSID_INDEX)?.to_string(),
            rssi: self.get(WIFI_RSSI_INDEX)?.to_string(),
            last_seen_ts: self.get(WIFI_LAST_SEEN_INDEX)?.to_string(),
        })
    }

    fn beacon_scan(&self) -> Result<BeaconScan, ParseError> {
        let key = [
            self.get(BEACON_UUID_INDEX)?,
            self.get(BEACON_MAJOR_INDEX)?,
            self.get(BEACON_MINOR_INDEX)?,
        ]
        .join(BEACON_KEY_SEPARATOR);

        Ok(BeaconScan {
            ts: self.get(TS_INDEX)?.to_string(),
            key,
            rssi: self.get(BEACON_RSSI_INDEX)?.to_string(),
        })
    }

    fn waypoint(&self) -> Result<Waypoint, ParseError> {
        Ok(Waypoint {
            ts: self.ts()?,
            x: self.parse(FIRST_VALUE_INDEX)?,
            y: self.parse(FIRST_VALUE_INDEX + 1)?,
        })
    }
}

/// 解析一条逻辑记录
///
/// 记录按制表符切分后，以第 2 个字段（类型标签）分派到对应的解析规则。
///
/// # 参数
///
/// * `line_no` - 记录所在的物理行号（用于错误信息）
/// * `record` - 逻辑记录文本，以记录头开头
/// * `config` - 解析配置
///
/// # 返回
///
/// * `Ok(Some(SensorRecord))` - 解析成功
/// * `Ok(None)` - 未知类型，忽略
/// * `Err(ParseError)` - 字段缺失或数值转换失败
///
/// # 示例
///
/// ```
/// use indoor_sensor_log::parser::parse_logical_record;
/// use indoor_sensor_log::{ParserConfig, SensorRecord, Waypoint};
///
/// let record = "1500000000123\tTYPE_WAYPOINT\t3.5\t4.25";
/// let parsed = parse_logical_record(1, record, &ParserConfig::default()).unwrap();
///
/// assert_eq!(
///     parsed,
///     Some(SensorRecord::Waypoint(Waypoint { ts: 1500000000123, x: 3.5, y: 4.25 }))
/// );
/// ```
pub fn parse_logical_record(
    line_no: usize,
    record: &str,
    config: &ParserConfig,
) -> Result<Option<SensorRecord>, ParseError> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    let tag = fields.get(TAG_INDEX).copied().unwrap_or_default();
    let record_type = RecordType::from_tag(tag);

    let fields = Fields {
        line_no,
        record_type,
        raw: record,
        fields,
    };

    let parsed = match record_type {
        RecordType::Accelerometer => SensorRecord::Accelerometer(fields.axis_sample()?),
        RecordType::Gyroscope => SensorRecord::Gyroscope(fields.axis_sample()?),
        RecordType::MagneticField => SensorRecord::MagneticField(fields.axis_sample()?),
        RecordType::RotationVector => SensorRecord::RotationVector(fields.axis_sample()?),
        RecordType::AccelerometerUncalibrated => SensorRecord::AccelerometerUncalibrated(
            fields.uncalibrated_sample(config.bias_field_threshold)?,
        ),
        RecordType::GyroscopeUncalibrated => SensorRecord::GyroscopeUncalibrated(
            fields.uncalibrated_sample(config.bias_field_threshold)?,
        ),
        RecordType::MagneticFieldUncalibrated => SensorRecord::MagneticFieldUncalibrated(
            fields.uncalibrated_sample(config.bias_field_threshold)?,
        ),
        RecordType::Wifi => SensorRecord::Wifi(fields.wifi_scan()?),
        RecordType::Beacon => SensorRecord::Beacon(fields.beacon_scan()?),
        RecordType::Waypoint => SensorRecord::Waypoint(fields.waypoint()?),
        RecordType::Unknown => {
            if config.log_unknown_types {
                trace!(line_no, tag, "ignoring unknown record type");
            }
            return Ok(None);
        }
    };

    Ok(Some(parsed))
}

/// 解析元数据行
///
/// 行以 `#\tstartTime` 或 `#\tendTime` 开头时，按 `:` 与 `\t` 切分，取第 3 个片段作为
/// epoch 毫秒时间。其他行返回 `Ok(None)`。
///
/// # 示例
///
/// ```
/// use indoor_sensor_log::parser::parse_metadata_line;
/// use indoor_sensor_log::SensorRecord;
///
/// let parsed = parse_metadata_line(1, "#\tstartTime:1500000000000\tutc").unwrap();
/// assert_eq!(parsed, Some(SensorRecord::StartTime(1500000000000)));
/// ```
pub fn parse_metadata_line(line_no: usize, line: &str) -> Result<Option<SensorRecord>, ParseError> {
    let make: fn(i64) -> SensorRecord = if line.starts_with(START_TIME_MARKER) {
        SensorRecord::StartTime
    } else if line.starts_with(END_TIME_MARKER) {
        SensorRecord::EndTime
    } else {
        return Ok(None);
    };

    let value = line.split([':', FIELD_SEPARATOR]).nth(METADATA_VALUE_INDEX);
    let ts = value
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| ParseError::FieldConversion {
            line_no,
            field: METADATA_VALUE_INDEX,
            value: value.unwrap_or_default().to_string(),
            raw: line.to_string(),
        })?;

    Ok(Some(make(ts)))
}
