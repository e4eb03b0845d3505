use encoding_rs::SHIFT_JIS;
use holidays_jp_gen::{
    Driver, GenerateConfig, HolidayError, HolidayPipeline, HolidayTable, LocalStorage,
};
use httpmock::prelude::*;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/syukujitsu.csv");

fn fixture_bytes() -> Vec<u8> {
    let (bytes, _, had_errors) = SHIFT_JIS.encode(FIXTURE);
    assert!(!had_errors);
    bytes.into_owned()
}

fn config_for(server: &MockServer, year: i32, output: &std::path::Path) -> GenerateConfig {
    let mut config = GenerateConfig::new(year);
    config.source_url = server.url("/chosei/shukujitsu/syukujitsu.csv");
    config.output_path = output.to_str().unwrap().to_string();
    config
}

async fn serve_fixture(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/chosei/shukujitsu/syukujitsu.csv");
            then.status(200)
                .header("Content-Type", "text/csv")
                .body(fixture_bytes());
        })
        .await
}

#[tokio::test]
async fn test_end_to_end_from_2026() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("holidays-from-2026.ts");

    let server = MockServer::start_async().await;
    let csv_mock = serve_fixture(&server).await;

    let pipeline = HolidayPipeline::new(LocalStorage::new(), config_for(&server, 2026, &output));
    let result = Driver::new(pipeline).run().await.unwrap();

    csv_mock.assert_async().await;
    assert_eq!(result, output.to_str().unwrap());

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("holidays-jp-from-2026.ts"));
    assert!(content.contains("export const holidays"));
    assert!(content.contains("\"2026-01-01\": \"元日\""));
    assert!(!content.contains("\"2025-"));

    let table = HolidayTable::from_generated(&content);
    assert_eq!(table.len(), 18);
    assert!(table.iter().all(|(key, _)| key.len() == 10 && key >= "2026"));
}

#[tokio::test]
async fn test_end_to_end_default_year_keeps_historical_data() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("holidays-from-default.ts");

    let server = MockServer::start_async().await;
    let csv_mock = serve_fixture(&server).await;

    let mut config = config_for(&server, 2026, &output);
    config.from_year = holidays_jp_gen::DEFAULT_START_YEAR;
    let pipeline = HolidayPipeline::new(LocalStorage::new(), config);
    Driver::new(pipeline).run().await.unwrap();

    csv_mock.assert_async().await;
    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("holidays-jp-from-1955.ts"));
    assert!(content.contains("\"1955-04-29\": \"天皇誕生日\""));
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.ts");
    let second = temp_dir.path().join("second.ts");

    let server = MockServer::start_async().await;
    let csv_mock = serve_fixture(&server).await;

    for output in [&first, &second] {
        let pipeline = HolidayPipeline::new(LocalStorage::new(), config_for(&server, 2024, output));
        Driver::new(pipeline).run().await.unwrap();
    }

    csv_mock.assert_hits_async(2).await;
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[tokio::test]
async fn test_generated_lookups() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("holidays-jp.ts");

    let server = MockServer::start_async().await;
    serve_fixture(&server).await;

    let pipeline = HolidayPipeline::new(LocalStorage::new(), config_for(&server, 2024, &output));
    Driver::new(pipeline).run().await.unwrap();

    let table = HolidayTable::from_generated(&std::fs::read_to_string(&output).unwrap());
    let new_year = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let next_day = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

    assert!(table.is_holiday("2024-01-01"));
    assert!(table.is_holiday(new_year));
    assert!(!table.is_holiday("2024-01-02"));
    assert!(!table.is_holiday(next_day));
    assert!(!table.is_holiday("invalid-date"));

    assert_eq!(table.holiday_name("2024-01-01"), Some("元日"));
    assert_eq!(table.holiday_name(new_year), Some("元日"));
    assert_eq!(table.holiday_name("2024-01-02"), None);
    assert_eq!(table.holiday_name(next_day), None);
    assert_eq!(table.holiday_name("invalid-date"), None);

    assert_eq!(table.get("2024-02-11"), Some("建国記念の日"));
    assert_eq!(table.get("2024-05-03"), Some("憲法記念日"));
    assert_eq!(table.get("1955-01-01"), None);
}

#[tokio::test]
async fn test_server_error_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.ts");

    let server = MockServer::start_async().await;
    let csv_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/chosei/shukujitsu/syukujitsu.csv");
            then.status(500);
        })
        .await;

    let pipeline = HolidayPipeline::new(LocalStorage::new(), config_for(&server, 2024, &output));
    let err = Driver::new(pipeline).run().await.unwrap_err();

    csv_mock.assert_async().await;
    assert!(matches!(err, HolidayError::HttpStatus { status: 500, .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_renamed_columns_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.ts");

    let server = MockServer::start_async().await;
    let body = SHIFT_JIS.encode("月日,名称\n2024/1/1,元日\n").0.into_owned();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/chosei/shukujitsu/syukujitsu.csv");
            then.status(200).body(body);
        })
        .await;

    let pipeline = HolidayPipeline::new(LocalStorage::new(), config_for(&server, 2024, &output));
    let err = Driver::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, HolidayError::UnexpectedColumns { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_output_directory_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("no-such-dir").join("holidays.ts");

    let server = MockServer::start_async().await;
    serve_fixture(&server).await;

    let pipeline = HolidayPipeline::new(LocalStorage::new(), config_for(&server, 2024, &output));
    let err = Driver::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, HolidayError::Io(_)));
}
