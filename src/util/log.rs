//! 日志初始化。
//!
//! 过滤规则读取 `DNA_TOOLKIT_LOG`（格式同 `RUST_LOG`，例如
//! `DNA_TOOLKIT_LOG=dna_toolkit::store=debug`）；未设置时按 `-v` 次数
//! 决定默认级别。日志写到 stderr，stdout 只留给 JSON 输出。

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "DNA_TOOLKIT_LOG";

static INIT: Once = Once::new();

pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "dna_toolkit=warn",
        1 => "dna_toolkit=info",
        2 => "dna_toolkit=debug",
        _ => "dna_toolkit=trace",
    }
}

/// 可重复调用，只有第一次生效
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
