//! Parser 配置模块
//!
//! 控制解析器在几个边界情况下的行为。默认配置即标准日志格式的解析规则，
//! 一般无需修改。

/// 未校准记录字段数超过该值时按带偏置的 8 列形状解析
pub const DEFAULT_BIAS_FIELD_THRESHOLD: usize = 6;

/// Parser 配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// 未校准记录的字段数（含时间戳和类型标签）大于该值时，读取偏置与精度字段
    pub bias_field_threshold: usize,

    /// 严格模式：第一个记录头之前出现其他文本时报 `MalformedLine`，否则丢弃并告警
    pub strict_line_prefix: bool,

    /// 是否为被忽略的未知记录类型输出 trace 日志
    pub log_unknown_types: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            bias_field_threshold: DEFAULT_BIAS_FIELD_THRESHOLD,
            strict_line_prefix: false,
            log_unknown_types: true,
        }
    }
}

impl ParserConfig {
    /// 严格模式配置
    pub fn strict() -> Self {
        Self {
            strict_line_prefix: true,
            ..Self::default()
        }
    }

    pub fn with_bias_field_threshold(mut self, threshold: usize) -> Self {
        self.bias_field_threshold = threshold;
        self
    }

    pub fn with_log_unknown_types(mut self, enabled: bool) -> Self {
        self.log_unknown_types = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.bias_field_threshold, 6);
        assert!(!config.strict_line_prefix);
        assert!(config.log_unknown_types);
    }

    #[test]
    fn builder_methods() {
        let config = ParserConfig::strict()
            .with_bias_field_threshold(5)
            .with_log_unknown_types(false);
        assert!(config.strict_line_prefix);
        assert_eq!(config.bias_field_threshold, 5);
        assert!(!config.log_unknown_types);
    }
}
