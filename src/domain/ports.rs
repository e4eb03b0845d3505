use crate::domain::model::{GeneratedModule, HolidayRaw};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn from_year(&self) -> i32;
    fn output_path(&self) -> &str;
    fn readonly_table(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<HolidayRaw>>;
    async fn transform(&self, data: Vec<HolidayRaw>) -> Result<GeneratedModule>;
    async fn load(&self, module: GeneratedModule) -> Result<String>;
}
