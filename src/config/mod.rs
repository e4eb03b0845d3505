pub mod cli;

use crate::core::fetch::HOLIDAY_CSV_URL;
use crate::core::generate::default_file_name;
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{parse_year, validate_output_path, validate_source_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_START_YEAR: i32 = 1955;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "holidays-jp-gen")]
#[command(about = "Generate a TypeScript module of Japanese national holidays")]
pub struct CliConfig {
    // 以文字接收，錯誤訊息由驗證階段統一輸出
    #[arg(short = 'y', long = "year", value_name = "year", default_value = "1955", help = "Start year")]
    pub year: String,

    #[arg(short = 'o', long = "output", value_name = "path", help = "Output file path [default: holidays-jp-from-<year>.ts]")]
    pub output: Option<String>,

    #[arg(long, value_name = "url", default_value = HOLIDAY_CSV_URL, help = "Holiday CSV source URL")]
    pub url: String,

    #[arg(long, help = "Emit a frozen, readonly holiday table")]
    pub readonly: bool,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        parse_year(&self.year)?;
        validate_source_url(&self.url)?;
        if let Some(output) = &self.output {
            validate_output_path(output)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 驗證後轉成管線使用的設定
    pub fn into_config(self) -> Result<GenerateConfig> {
        self.validate()?;
        let from_year = parse_year(&self.year)?;

        Ok(GenerateConfig {
            source_url: self.url,
            from_year,
            output_path: self
                .output
                .unwrap_or_else(|| default_file_name(from_year)),
            readonly_table: self.readonly,
        })
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub source_url: String,
    pub from_year: i32,
    pub output_path: String,
    pub readonly_table: bool,
}

impl GenerateConfig {
    pub fn new(from_year: i32) -> Self {
        Self {
            source_url: HOLIDAY_CSV_URL.to_string(),
            from_year,
            output_path: default_file_name(from_year),
            readonly_table: false,
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_START_YEAR)
    }
}

impl ConfigProvider for GenerateConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn from_year(&self) -> i32 {
        self.from_year
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn readonly_table(&self) -> bool {
        self.readonly_table
    }
}
