use memchr::memmem::Finder;
use once_cell::sync::Lazy;

// 记录头格式常量
pub(crate) const TIMESTAMP_LENGTH: usize = 13;
const TYPE_PREFIX: &str = "TYPE_";

/// 记录头中紧跟时间戳的部分：一个制表符加上类型前缀
static HEADER_NEEDLE: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(b"\tTYPE_"));

/// 期望输入恰好为 13 字节，且全部为 ASCII 数字。
#[inline(always)]
pub fn is_epoch_millis_bytes(bytes: &[u8]) -> bool {
    bytes.len() == TIMESTAMP_LENGTH && bytes.iter().all(u8::is_ascii_digit)
}

///
/// 查找一行中所有记录头的起始位置（字节下标，升序、互不重叠）。
///
/// 判断标准
/// 1. 连续 13 个十进制数字 -> ts
/// 2. ts 后面紧跟一个制表符。
/// 3. 制表符后面紧跟字面量 `TYPE_`。
///
/// 数字串长于 13 位时，取紧挨制表符的 13 位作为记录头起点。
pub fn find_record_headers(line: &str) -> Vec<usize> {
    let bytes = line.as_bytes();
    HEADER_NEEDLE
        .find_iter(bytes)
        .filter(|&tab_pos| {
            tab_pos >= TIMESTAMP_LENGTH
                && is_epoch_millis_bytes(&bytes[tab_pos - TIMESTAMP_LENGTH..tab_pos])
        })
        .map(|tab_pos| tab_pos - TIMESTAMP_LENGTH)
        .collect()
}

/// 判断一行是否以记录头开头
pub fn is_record_start_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    let header_len = TIMESTAMP_LENGTH + 1 + TYPE_PREFIX.len();
    bytes.len() >= header_len
        && is_epoch_millis_bytes(&bytes[..TIMESTAMP_LENGTH])
        && bytes[TIMESTAMP_LENGTH] == b'\t'
        && &bytes[TIMESTAMP_LENGTH + 1..header_len] == TYPE_PREFIX.as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod timestamp_tests {
        use super::*;

        #[test]
        fn valid_timestamps() {
            let valid_cases: &[&[u8]] = &[b"1500000000123", b"0000000000000", b"9999999999999"];
            for ts in valid_cases {
                assert!(is_epoch_millis_bytes(ts), "Failed for: {:?}", ts);
            }
        }

        #[test]
        fn wrong_length() {
            let invalid_cases: &[&[u8]] = &[b"150000000012", b"15000000001234", b"", b"1500"];
            for ts in invalid_cases {
                assert!(!is_epoch_millis_bytes(ts), "Should fail for: {:?}", ts);
            }
        }

        #[test]
        fn non_digits() {
            let invalid_cases: &[&[u8]] = &[
                b"150000000012a",
                b"a500000000123",
                b"1500000-00123",
                b"1500000000.23",
                b"15000 0000123",
            ];
            for ts in invalid_cases {
                assert!(!is_epoch_millis_bytes(ts), "Should fail for: {:?}", ts);
            }
        }
    }

    mod header_tests {
        use super::*;

        #[test]
        fn single_header_at_start() {
            let line = "1500000000123\tTYPE_ACCELEROMETER\t0.1\t0.2\t9.8";
            assert_eq!(find_record_headers(line), vec![0]);
            assert!(is_record_start_line(line));
        }

        #[test]
        fn concatenated_headers() {
            let first = "1500000000123\tTYPE_ACCELEROMETER\t0.1\t0.2\t9.8";
            let second = "1500000000124\tTYPE_GYROSCOPE\t0.01\t0.02\t0.03";
            let line = format!("{first}{second}");
            assert_eq!(find_record_headers(&line), vec![0, first.len()]);
        }

        #[test]
        fn longer_digit_run_anchors_on_last_thirteen() {
            let line = "91500000000123\tTYPE_WAYPOINT\t1\t2";
            assert_eq!(find_record_headers(line), vec![1]);
            assert!(!is_record_start_line(line));
        }

        #[test]
        fn no_header() {
            let lines = [
                "",
                "TYPE_ACCELEROMETER\t0.1",
                "150000000012\tTYPE_WAYPOINT\t1\t2",
                "1500000000123 TYPE_WAYPOINT\t1\t2",
                "1500000000123\tWAYPOINT\t1\t2",
                "1500000000123\ttype_waypoint\t1\t2",
            ];
            for line in &lines {
                assert!(find_record_headers(line).is_empty(), "Should fail for: {}", line);
                assert!(!is_record_start_line(line), "Should fail for: {}", line);
            }
        }

        #[test]
        fn header_after_prefix_text() {
            let line = "junk1500000000123\tTYPE_WIFI\tssid";
            assert_eq!(find_record_headers(line), vec![4]);
            assert!(!is_record_start_line(line));
        }
    }
}
