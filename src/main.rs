use clap::Parser;
use display_api::core::ConfigProvider;
use display_api::utils::{logger, validation::Validate};
use display_api::{build_engines, serve, CliConfig, DisplayError, TomlConfig};
use std::sync::Arc;

fn exit_with(e: &DisplayError) -> ! {
    tracing::error!("❌ {} (kind: {:?})", e, e.kind());
    eprintln!("❌ {}", e.kind().message());
    eprintln!("   {}", e);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔有寫的欄位覆蓋命令列參數
    let config = match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path).and_then(|file| cli.merge_file(&file)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => cli,
    };

    logger::init_logger(config.verbose, config.json_logs, config.log_level.as_deref());
    tracing::info!("Starting display-api");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    // 所有引擎在啟動時建立一次，之後唯讀共用
    let engines = match build_engines(&config) {
        Ok(engines) => Arc::new(engines),
        Err(e) => exit_with(&e),
    };
    tracing::info!("✅ Engines loaded ({:?})", config.engine_kind());

    serve(&config, engines).await?;
    Ok(())
}
