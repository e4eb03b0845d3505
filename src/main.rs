use clap::error::ErrorKind;
use clap::Parser;
use holidays_jp_gen::utils::{error::HolidayError, logger};
use holidays_jp_gen::{CliConfig, Driver, HolidayPipeline, LocalStorage};

#[tokio::main]
async fn main() {
    // 參數錯誤一律以 1 結束；--help / --version 以 0 結束
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置（在任何網路存取之前）
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e @ HolidayError::InvalidYear { .. }) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Generating a file for {} and beyond: {}",
        config.from_year, config.output_path
    );

    let pipeline = HolidayPipeline::new(LocalStorage::new(), config);
    let driver = Driver::new(pipeline);

    match driver.run().await {
        Ok(_) => println!("Done!"),
        Err(e) => {
            tracing::error!("Generation failed: {} (Category: {:?})", e, e.category());
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
