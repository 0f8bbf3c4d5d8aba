use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// RUST_LOG 優先，其次是設定的 level，最後才是預設值
fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    let fallback = match level {
        Some(level) => level,
        None if verbose => "display_api=debug,tower_http=debug,info",
        None => "display_api=info,tower_http=info",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_logger(verbose: bool, json: bool, level: Option<&str>) {
    let registry = tracing_subscriber::registry().with(default_filter(verbose, level));

    if json {
        // 部署環境用 JSON，方便收集器解析
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}
