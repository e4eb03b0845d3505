use crate::domain::model::HolidayRaw;

/// Extracts the year from a `YYYY/M/D` date field.
pub fn parse_year(date: &str) -> Option<i32> {
    date.split('/').next()?.trim().parse().ok()
}

/// Renders one record as `"YYYY-MM-DD": "name",`.
///
/// Returns `None` unless the date has a four-digit year, a month in `1..=12`
/// and a day in `1..=31`. Whitespace around each component is ignored.
pub fn format_entry(holiday: &HolidayRaw) -> Option<String> {
    let mut parts = holiday.date.split('/');
    let year = parse_year(&holiday.date).filter(|y| (0..=9999).contains(y))?;
    parts.next()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some(format!(
        "\"{:04}-{:02}-{:02}\": \"{}\",",
        year, month, day, holiday.name
    ))
}

/// Keeps records dated `from_year` or later and renders them in source order.
///
/// Records with an unreadable date are dropped without error.
pub fn filter_and_format(holidays: &[HolidayRaw], from_year: i32) -> Vec<String> {
    holidays
        .iter()
        .filter(|h| match parse_year(&h.date) {
            Some(year) => year >= from_year,
            None => {
                tracing::debug!("Skipping row with unreadable year: {:?}", h.date);
                false
            }
        })
        .filter_map(|h| {
            let entry = format_entry(h);
            if entry.is_none() {
                tracing::warn!("Skipping row with malformed date: {:?}", h.date);
            }
            entry
        })
        .collect()
}
