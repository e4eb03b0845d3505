use crate::domain::model::{HolidayRaw, DATE_COLUMN, NAME_COLUMN};
use crate::utils::error::{HolidayError, Result};
use csv::{ReaderBuilder, StringRecord};
use encoding_rs::SHIFT_JIS;

/// Decodes a Shift_JIS byte buffer. A leading BOM (of any encoding) is honored and stripped.
pub fn decode_shift_jis(bytes: &[u8]) -> Result<String> {
    let (text, encoding, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        return Err(HolidayError::Decode {
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

/// Decodes and parses the holiday CSV into records, in source row order.
///
/// The header row must contain both the date and name columns; any other
/// layout is rejected before rows are read. Blank lines are skipped.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<HolidayRaw>> {
    let text = decode_shift_jis(bytes)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    check_columns(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: HolidayRaw = row?;
        records.push(record);
    }

    tracing::debug!("Parsed {} holiday rows", records.len());
    Ok(records)
}

fn check_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = [DATE_COLUMN, NAME_COLUMN]
        .into_iter()
        .filter(|expected| !headers.iter().any(|h| h == *expected))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(HolidayError::UnexpectedColumns {
        missing,
        found: headers.iter().map(str::to_string).collect(),
    })
}
