use std::env;

use dotenvy::dotenv;
use fern::Dispatch;

pub fn setup_logging() -> Result<(), fern::InitError> {
    dotenv().ok();

    // get log level
    let verbosity = env::var("LOGGING_LEVEL").unwrap_or_else(|_| "INFO".to_string());

    let mut base_config = fern::Dispatch::new();

    base_config = match verbosity.as_str() {
        "OFF" => base_config.level(log::LevelFilter::Off),
        "ERROR" => base_config.level(log::LevelFilter::Error),
        "WARN" => base_config.level(log::LevelFilter::Warn),
        "DEBUG" => base_config.level(log::LevelFilter::Debug),
        "TRACE" => base_config.level(log::LevelFilter::Trace),
        _ => {
            // default to info
            base_config.level(log::LevelFilter::Info)
        }
    };

    let file_logger_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(fern::log_file("tracker.log")?);

    let stdout_logger_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout());

    base_config
        .chain(file_logger_config)
        .chain(stdout_logger_config)
        .apply()?;

    Ok(())
}
