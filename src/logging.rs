use crate::error::TrailError;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    Handle,
};
use std::str::FromStr;

pub const LOG_LEVEL_VAR: &str = "TRAIL_LOG";

pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|value| LevelFilter::from_str(&value).ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn init_logging(level: LevelFilter) -> Result<Handle, TrailError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| TrailError::Logging(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| TrailError::Logging(e.to_string()))
}
