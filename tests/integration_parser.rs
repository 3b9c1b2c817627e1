//! 完整的解析流程集成测试
//!
//! 使用 `tests/data/sample_path.txt` 验证每张表的内容与顺序

use indoor_sensor_log::{SensorLog, UncalibratedSample, parse_file, parse_str};

const SAMPLE: &str = include_str!("data/sample_path.txt");

fn sample() -> SensorLog {
    parse_str(SAMPLE).expect("sample log should parse")
}

#[test]
fn metadata_scalars() {
    let log = sample();
    assert_eq!(log.start_time, Some(1574141979466));
    assert_eq!(log.end_time, Some(1574142000120));
}

#[test]
fn row_counts_per_sensor() {
    let summary = sample().summary();
    assert_eq!(summary.acce, 2);
    assert_eq!(summary.acce_uncali, 2);
    assert_eq!(summary.gyro, 2);
    assert_eq!(summary.gyro_uncali, 1);
    assert_eq!(summary.magn, 1);
    assert_eq!(summary.magn_uncali, 1);
    assert_eq!(summary.ahrs, 1);
    assert_eq!(summary.wifi, 2);
    assert_eq!(summary.ibeacon, 1);
    assert_eq!(summary.waypoint, 2);
    // TYPE_PRESSURE 被忽略
    assert_eq!(summary.total(), 15);
}

#[test]
fn axis_tables_are_columnar() {
    let log = sample();
    assert_eq!(log.acce.timestamps.to_vec(), vec![1574141979487, 1574141979507]);
    assert_eq!(log.acce.values.shape(), &[2, 3]);
    assert_eq!(log.acce.values[[0, 2]], 9.7236023);
    // 精度字段紧贴下一条记录头，不影响切分
    assert_eq!(log.acce.values[[1, 0]], -1.6);
    assert_eq!(log.gyro.timestamps[1], 1574141979507);
    assert_eq!(log.ahrs.values[[0, 2]], 0.9828999);
}

#[test]
fn uncalibrated_tables_keep_both_shapes() {
    let log = sample();
    let widths: Vec<usize> = log.acce_uncali.samples.iter().map(|s| s.width()).collect();
    assert_eq!(widths, vec![8, 4]);
    assert_eq!(
        log.acce_uncali.samples[1],
        UncalibratedSample::Basic {
            ts: 1574141979507,
            x: -1.60,
            y: -0.30,
            z: 9.70
        }
    );

    let magn = log.magn_uncali.with_bias();
    assert_eq!(magn.bias.shape(), &[1, 3]);
    assert_eq!(magn.bias[[0, 2]], -8.9);
    assert_eq!(magn.accuracy.to_vec(), vec![3]);

    let acce_biased = log.acce_uncali.with_bias();
    assert_eq!(acce_biased.timestamps.to_vec(), vec![1574141979487]);
}

#[test]
fn wifi_rows_are_raw_tokens() {
    let log = sample();
    assert_eq!(
        log.wifi[0].as_row(),
        ["1574141980311", "intime_free", "7d2df7e2cd8a6e0b", "-45", "1574141979365"]
    );
    // 空 SSID 保持为空串
    assert_eq!(log.wifi[1].ssid, "");
    assert_eq!(log.wifi[1].last_seen_ts, "1574141979201");
}

#[test]
fn beacon_key_and_rssi() {
    let log = sample();
    assert_eq!(
        log.ibeacon[0].as_row(),
        [
            "1574141980457",
            "FDA50693-A4E2-4FB1-AFCF-C6EB07647825_10073_61418",
            "-82"
        ]
    );
}

#[test]
fn waypoints_keep_encounter_order() {
    let log = sample();
    assert_eq!(log.waypoint.timestamps.to_vec(), vec![1574141979627, 1574141995600]);
    assert_eq!(log.waypoint.positions[[1, 0]], 181.75);
    assert_eq!(log.waypoint.positions[[1, 1]], 125.32);
}

#[test]
fn repeated_parses_are_identical() {
    assert_eq!(sample(), sample());
}

#[test]
fn parse_file_matches_parse_str() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample_path.txt");
    let from_file = parse_file(path).unwrap();
    assert_eq!(from_file, sample());
}
