use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Loads the YAML logging config, or falls back to a console-only logger.
pub fn init_logging(config_path: &str) {
    if Path::new(config_path).exists() {
        if let Err(err) = log4rs::init_file(config_path, Default::default()) {
            eprintln!("Failed to load log config from {config_path}: {err}");
            init_console();
        }
    } else {
        init_console();
        log::warn!("Log config {} not found, logging to console only", config_path);
    }
}

fn init_console() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info));

    match config {
        Ok(config) => {
            if let Err(err) = log4rs::init_config(config) {
                eprintln!("Failed to initialise console logging: {err}");
            }
        }
        Err(err) => eprintln!("Invalid console logging config: {err}"),
    }
}
