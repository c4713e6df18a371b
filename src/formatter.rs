//! Log line formatter
//!
//! Turns one line of a JSON log file into a human-readable, emphasis-tagged line.
//! Lines that are not structured records pass through unchanged.

use chrono::DateTime;
use serde_json::{Map, Value};

/// Display format for parsed timestamps, e.g. "Jan 15 14:30:45"
const HUMAN_TIME_FORMAT: &str = "%b %d %H:%M:%S";

/// Log level of a structured record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    /// Any level string outside the four known ones
    Other,
}

impl LogLevel {
    /// Classify a level string (case-sensitive, as the logger writes it)
    pub fn parse(level: &str) -> Self {
        match level {
            "DEBUG" => LogLevel::Debug,
            "INFO" => LogLevel::Info,
            "WARN" => LogLevel::Warn,
            "ERROR" => LogLevel::Error,
            _ => LogLevel::Other,
        }
    }
}

/// Emphasis attached to each piece of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Timestamp,
    Level(LogLevel),
    Message,
    Data,
    /// Unparsed passthrough text
    Raw,
}

/// A piece of rendered text with its emphasis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Segment {
    fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }
}

/// One formatted log line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedLine {
    pub segments: Vec<Segment>,
}

impl RenderedLine {
    /// The line as plain text, segments separated by single spaces
    pub fn plain(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the line is unparsed passthrough text
    pub fn is_raw(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment { emphasis: Emphasis::Raw, .. }])
    }
}

/// Fields of a structured record; a missing or wrong-typed field is `None`
#[derive(Debug, Default)]
struct LogRecord {
    timestamp: Option<String>,
    level: Option<String>,
    message: Option<String>,
    data: Option<Map<String, Value>>,
}

impl LogRecord {
    fn from_object(mut object: Map<String, Value>) -> Self {
        Self {
            timestamp: take_string(&mut object, "timestamp"),
            level: take_string(&mut object, "level"),
            message: take_string(&mut object, "message"),
            data: match object.remove("data") {
                Some(Value::Object(data)) => Some(data),
                _ => None,
            },
        }
    }

    fn is_empty(&self) -> bool {
        self.timestamp.is_none()
            && self.level.is_none()
            && self.message.is_none()
            && self.data.is_none()
    }
}

fn take_string(object: &mut Map<String, Value>, key: &str) -> Option<String> {
    match object.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Format a single raw log line
///
/// Never fails: anything that is not a structured record comes back as the
/// trimmed raw line.
pub fn format_line(raw: &str) -> RenderedLine {
    let line = raw.trim();
    let record = serde_json::from_str::<Map<String, Value>>(line)
        .map(LogRecord::from_object)
        .unwrap_or_default();
    if !record.is_empty() {
        return format_record(&record);
    }
    RenderedLine {
        segments: vec![Segment::new(line, Emphasis::Raw)],
    }
}

/// Format every line of a log file
pub fn format_lines<S: AsRef<str>>(lines: &[S]) -> Vec<RenderedLine> {
    lines.iter().map(|l| format_line(l.as_ref())).collect()
}

fn format_record(record: &LogRecord) -> RenderedLine {
    let mut segments = Vec::new();

    if let Some(timestamp) = record.timestamp.as_deref().filter(|t| !t.is_empty()) {
        segments.push(Segment::new(human_time(timestamp), Emphasis::Timestamp));
    }

    if let Some(level) = record.level.as_deref().filter(|l| !l.is_empty()) {
        segments.push(Segment::new(
            format!("[{}]", level),
            Emphasis::Level(LogLevel::parse(level)),
        ));
    }

    if let Some(message) = record.message.as_deref().filter(|m| !m.is_empty()) {
        segments.push(Segment::new(message, Emphasis::Message));
    }

    if let Some(data) = record.data.as_ref().filter(|d| !d.is_empty()) {
        segments.push(Segment::new(format_data(data), Emphasis::Data));
    }

    RenderedLine { segments }
}

/// RFC3339 timestamps become "Jan 15 14:30:45" in their own offset; anything else is kept verbatim
fn human_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t.format(HUMAN_TIME_FORMAT).to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Render data as `{k=v, k=v}` with keys in sorted order
fn format_data(data: &Map<String, Value>) -> String {
    let mut pairs: Vec<(&String, &Value)> = data.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    let pairs: Vec<String> = pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, format_value(v)))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_record() {
        let line = r#"{"timestamp":"2024-01-15T14:30:45Z","level":"INFO","message":"hi","data":{"x":1}}"#;
        let rendered = format_line(line);
        let plain = rendered.plain();

        let time = plain.find("Jan 15 14:30:45").unwrap();
        let tag = plain.find("[INFO]").unwrap();
        let msg = plain.find("hi").unwrap();
        let data = plain.find("{x=1}").unwrap();
        assert!(time < tag && tag < msg && msg < data);
        assert_eq!(plain, "Jan 15 14:30:45 [INFO] hi {x=1}");
    }

    #[test]
    fn test_malformed_line_passthrough() {
        let rendered = format_line("not json");
        assert!(rendered.is_raw());
        assert_eq!(rendered.plain(), "not json");
    }

    #[test]
    fn test_passthrough_is_trimmed() {
        assert_eq!(format_line("   legacy text  ").plain(), "legacy text");
    }

    #[test]
    fn test_json_without_record_fields_passes_through() {
        assert!(format_line(r#"{"foo":"bar"}"#).is_raw());
        assert!(format_line("[1,2,3]").is_raw());
        assert!(format_line("42").is_raw());
    }

    #[test]
    fn test_wrong_field_type_is_dropped() {
        let rendered = format_line(r#"{"level":30,"message":"hi","data":"x"}"#);
        assert!(!rendered.is_raw());
        assert_eq!(rendered.plain(), "hi");
        assert_eq!(rendered.segments[0].emphasis, Emphasis::Message);
    }

    #[test]
    fn test_only_wrong_typed_fields_passes_through() {
        let line = r#"{"level":5,"timestamp":12}"#;
        let rendered = format_line(line);
        assert!(rendered.is_raw());
        assert_eq!(rendered.plain(), line);
    }

    #[test]
    fn test_unparseable_timestamp_kept_verbatim() {
        let rendered = format_line(r#"{"timestamp":"yesterday","message":"m"}"#);
        assert_eq!(rendered.plain(), "yesterday m");
        assert_eq!(rendered.segments[0].emphasis, Emphasis::Timestamp);
    }

    #[test]
    fn test_timestamp_keeps_its_offset() {
        let rendered = format_line(r#"{"timestamp":"2024-03-02T09:05:07+02:00"}"#);
        assert_eq!(rendered.plain(), "Mar 02 09:05:07");
    }

    #[test]
    fn test_missing_fields_tolerated() {
        let rendered = format_line(r#"{"message":"only a message"}"#);
        assert_eq!(rendered.plain(), "only a message");
        assert_eq!(rendered.segments.len(), 1);
        assert_eq!(rendered.segments[0].emphasis, Emphasis::Message);
    }

    #[test]
    fn test_level_emphasis() {
        let cases = [
            ("DEBUG", LogLevel::Debug),
            ("INFO", LogLevel::Info),
            ("WARN", LogLevel::Warn),
            ("ERROR", LogLevel::Error),
            ("TRACE", LogLevel::Other),
        ];
        for (level, expected) in cases {
            let line = format!(r#"{{"level":"{}"}}"#, level);
            let rendered = format_line(&line);
            assert_eq!(rendered.segments[0].emphasis, Emphasis::Level(expected));
            assert_eq!(rendered.segments[0].text, format!("[{}]", level));
        }
    }

    #[test]
    fn test_data_keys_sorted_and_values_rendered() {
        let line = r#"{"message":"m","data":{"zeta":"s","alpha":true,"mid":[1,2],"n":null,"f":1.5}}"#;
        let rendered = format_line(line);
        assert_eq!(
            rendered.plain(),
            "m {alpha=true, f=1.5, mid=[1,2], n=null, zeta=s}"
        );
    }

    #[test]
    fn test_empty_data_omitted() {
        let rendered = format_line(r#"{"message":"m","data":{}}"#);
        assert_eq!(rendered.plain(), "m");
    }

    #[test]
    fn test_format_lines() {
        let lines = vec![r#"{"message":"a"}"#.to_string(), "b".to_string()];
        let rendered = format_lines(&lines);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].plain(), "a");
        assert!(rendered[1].is_raw());
    }
}
