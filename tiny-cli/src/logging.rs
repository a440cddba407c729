//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到 stderr，
//! 避免与写到 stdout 的报告混在一起。设置了 `RUST_LOG` 时，
//! 用其中的指令代替配置里的级别。

use std::io;
use std::sync::Mutex;

use tiny_config::{LogConfig, LogFormat, LogLevel, Phase};
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// 映射到 tracing 的级别
pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// 按配置构建目标过滤器
pub fn build_targets(config: &LogConfig) -> Targets {
    let mut targets = Targets::new().with_default(to_tracing_level(config.level));
    for phase in [Phase::Loader, Phase::Lexer, Phase::Report, Phase::Cli] {
        targets = targets.with_target(phase.target(), to_tracing_level(config.level_for(phase)));
    }
    targets
}

/// 解析 `RUST_LOG` 风格的指令；未设置、为空或无法解析时返回 `None`
pub fn env_filter_from(directives: Option<&str>) -> Option<EnvFilter> {
    let directives = directives?.trim();
    if directives.is_empty() {
        return None;
    }
    EnvFilter::try_new(directives).ok()
}

/// 给 layer 加上过滤器：优先 `RUST_LOG`，否则按配置
fn with_log_filter(layer: BoxedLayer, config: &LogConfig) -> BoxedLayer {
    let rust_log = std::env::var("RUST_LOG").ok();
    match env_filter_from(rust_log.as_deref()) {
        Some(filter) => layer.with_filter(filter).boxed(),
        None => layer.with_filter(build_targets(config)).boxed(),
    }
}

/// 使用日志配置初始化日志系统
///
/// 配置了日志文件时，额外添加一个写文件的 layer（追加模式，无颜色）。
pub fn init(config: &LogConfig) -> io::Result<()> {
    let mut layers: Vec<BoxedLayer> = vec![with_log_filter(
        create_format_layer(config.format, io::stderr),
        config,
    )];

    if let Some(path) = &config.file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .boxed();
        layers.push(with_log_filter(file_layer, config));
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(io::Error::other)
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> BoxedLayer
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
