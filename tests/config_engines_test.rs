use anyhow::Result;
use display_api::core::{ConfigProvider, InverseNormalizer, Punctuator};
use display_api::utils::validation::Validate;
use display_api::{build_engines, ErrorKind, LanguageCode, TomlConfig};
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn test_passthrough_engines_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("display.toml");
    tokio::fs::write(
        &config_path,
        r#"
[server]
port = 8099

[engines]
kind = "passthrough"
"#,
    )
    .await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    let engines = build_engines(&config)?;

    let input = vec!["twenty five".to_string()];
    let out = engines.itn().inverse_normalize(&input, LanguageCode::Te).await?;
    assert_eq!(out, input);

    let out = engines.punctuator(LanguageCode::Te).punctuate(&input).await?;
    assert_eq!(out, input);
    Ok(())
}

#[tokio::test]
async fn test_punctuation_override_routes_one_language() -> Result<()> {
    let server = MockServer::start_async().await;
    let shared = server
        .mock_async(|when, then| {
            when.method(POST).path("/punctuate/mr");
            then.status(200).json_body(json!({"texts": ["shared."]}));
        })
        .await;
    let dedicated = server
        .mock_async(|when, then| {
            when.method(POST).path("/bengali");
            then.status(200).json_body(json!({"texts": ["dedicated."]}));
        })
        .await;

    let toml_content = format!(
        r#"
[engines]
kind = "http"
itn_url = "{itn}"
punctuation_url = "{template}"
timeout_seconds = 2

[engines.punctuation_overrides]
bn = "{bengali}"
"#,
        itn = server.url("/itn"),
        template = server.url("/punctuate/{lang}"),
        bengali = server.url("/bengali"),
    );

    let config = TomlConfig::from_toml_str(&toml_content)?;
    config.validate()?;
    assert_eq!(config.timeout_seconds(), 2);

    let engines = build_engines(&config)?;
    let input = vec!["x".to_string()];

    let out = engines.punctuator(LanguageCode::Bn).punctuate(&input).await?;
    assert_eq!(out, vec!["dedicated.".to_string()]);

    let out = engines.punctuator(LanguageCode::Mr).punctuate(&input).await?;
    assert_eq!(out, vec!["shared.".to_string()]);

    dedicated.assert_async().await;
    shared.assert_async().await;
    Ok(())
}

#[test]
fn test_bad_engine_url_fails_to_load() {
    let config = TomlConfig::from_toml_str(
        r#"
[engines]
kind = "http"
itn_url = "http://localhost:9001/itn"
punctuation_url = "mailto:{lang}@example.com"
"#,
    )
    .unwrap();

    let err = build_engines(&config).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Loading);
}
