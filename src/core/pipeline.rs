use crate::core::fetch::Fetcher;
use crate::core::format::filter_and_format;
use crate::core::generate::{generate_ts, RenderOptions};
use crate::core::parse::parse_csv;
use crate::core::{ConfigProvider, GeneratedModule, HolidayRaw, Pipeline, Storage};
use crate::utils::error::Result;

pub struct HolidayPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: Fetcher,
}

impl<S: Storage, C: ConfigProvider> HolidayPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let fetcher = Fetcher::new(config.source_url());
        Self {
            storage,
            config,
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for HolidayPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<HolidayRaw>> {
        let bytes = self.fetcher.fetch().await?;
        parse_csv(&bytes)
    }

    async fn transform(&self, data: Vec<HolidayRaw>) -> Result<GeneratedModule> {
        let from_year = self.config.from_year();
        let entries = filter_and_format(&data, from_year);
        tracing::debug!(
            "Kept {} of {} rows from {} onward",
            entries.len(),
            data.len(),
            from_year
        );

        let options = RenderOptions {
            readonly: self.config.readonly_table(),
        };

        Ok(GeneratedModule {
            from_year,
            entry_count: entries.len(),
            source: generate_ts(&entries, from_year, options),
        })
    }

    async fn load(&self, module: GeneratedModule) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} bytes to {}",
            module.source.len(),
            output_path
        );
        self.storage
            .write_file(output_path, module.source.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}
