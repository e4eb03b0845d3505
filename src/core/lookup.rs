use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A date to look up: either free text or a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Text(String),
    Date(NaiveDate),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Date(value.date())
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(value: DateTime<Local>) -> Self {
        DateInput::Date(value.date_naive())
    }
}

/// Normalizes a date to its `YYYY-MM-DD` key using local calendar fields.
///
/// Text that cannot be read as a date yields `None`.
pub fn to_date_key(input: impl Into<DateInput>) -> Option<String> {
    let date = match input.into() {
        DateInput::Date(date) => date,
        DateInput::Text(text) => parse_date_text(&text)?,
    };
    Some(date.format("%Y-%m-%d").to_string())
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y/%m/%d") {
        return Some(date);
    }
    // 帶時區的時間先轉成本地時間再取日期
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^\s*"(\d{4}-\d{2}-\d{2})": "(.*)",\s*$"#).expect("valid entry pattern")
    })
}

/// Read-only view of a holiday table, keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    entries: HashMap<String, String>,
}

impl HolidayTable {
    /// Builds a table from formatted `"YYYY-MM-DD": "name",` entries.
    /// A later entry for the same date replaces an earlier one.
    pub fn from_entries(entries: &[String]) -> Self {
        Self::from_lines(entries.iter().map(String::as_str))
    }

    /// Loads the table back out of a generated module.
    pub fn from_generated(source: &str) -> Self {
        Self::from_lines(source.lines())
    }

    fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Self {
        let mut entries = HashMap::new();
        for line in lines {
            if let Some(caps) = entry_pattern().captures(line) {
                entries.insert(caps[1].to_string(), caps[2].to_string());
            }
        }
        Self { entries }
    }

    pub fn is_holiday(&self, date: impl Into<DateInput>) -> bool {
        self.holiday_name(date).is_some()
    }

    pub fn holiday_name(&self, date: impl Into<DateInput>) -> Option<&str> {
        let key = to_date_key(date)?;
        self.get(&key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
