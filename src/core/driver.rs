use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs a pipeline once: extract, transform, then load.
pub struct Driver<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Driver<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Downloading holiday CSV...");
        let holidays = self.pipeline.extract().await?;
        tracing::info!("Parsed {} holiday rows", holidays.len());

        let module = self.pipeline.transform(holidays).await?;
        tracing::info!(
            "Rendered {} holidays from {} onward",
            module.entry_count,
            module.from_year
        );

        let output_path = self.pipeline.load(module).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
