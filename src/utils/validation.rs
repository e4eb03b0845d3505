use crate::utils::error::{HolidayError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(flag: &str, value: &str, reason: impl Into<String>) -> HolidayError {
    HolidayError::InvalidConfigValue {
        field: flag.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// `--url` 必須是可直接 GET 的 http/https 位址
pub fn validate_source_url(url_str: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .map_err(|e| invalid("--url", url_str, format!("not a holiday CSV URL: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            "--url",
            url_str,
            format!("the CSV is fetched over HTTP, '{}' is not supported", scheme),
        )),
    }
}

/// `--output` 指向要覆寫的 .ts 檔；不檢查目錄是否存在，寫入時才會失敗
pub fn validate_output_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid("--output", path, "no file name given for the generated module"));
    }
    if path.contains('\0') {
        return Err(invalid("--output", path, "file name contains a NUL byte"));
    }
    if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(invalid("--output", path, "expected a file path, got a directory"));
    }
    Ok(())
}

/// 解析起始年份；只接受整數（前後空白會被忽略）
pub fn parse_year(value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| HolidayError::InvalidYear {
            value: value.to_string(),
        })
}
