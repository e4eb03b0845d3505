pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, GenerateConfig, DEFAULT_START_YEAR};

pub use crate::core::{
    driver::Driver,
    format::filter_and_format,
    generate::{generate_ts, RenderOptions},
    lookup::{DateInput, HolidayTable},
    parse::parse_csv,
    pipeline::HolidayPipeline,
};
pub use crate::domain::model::HolidayRaw;
pub use crate::utils::error::{HolidayError, Result};
