pub mod driver;
pub mod fetch;
pub mod format;
pub mod generate;
pub mod lookup;
pub mod parse;
pub mod pipeline;

pub use crate::domain::model::{GeneratedModule, HolidayRaw};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
