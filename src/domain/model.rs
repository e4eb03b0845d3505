use serde::Deserialize;

/// CSV 欄位名稱：國民の祝日・休日月日
pub const DATE_COLUMN: &str = "国民の祝日・休日月日";
/// CSV 欄位名稱：國民の祝日・休日名稱
pub const NAME_COLUMN: &str = "国民の祝日・休日名称";

/// One data row of the published holiday CSV.
///
/// `date` keeps the source form (`YYYY/M/D`), `name` is taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayRaw {
    #[serde(rename = "国民の祝日・休日月日")]
    pub date: String,
    #[serde(rename = "国民の祝日・休日名称")]
    pub name: String,
}

impl HolidayRaw {
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
        }
    }
}

/// Rendered artifact produced by the transform phase.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    pub from_year: i32,
    pub entry_count: usize,
    pub source: String,
}
