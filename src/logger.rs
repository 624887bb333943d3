use chrono::Utc;
use colored::{Color, Colorize};
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Mutex;
use uuid::Uuid;

static LOGGER: Lazy<InvocationLogger> = Lazy::new(InvocationLogger::default);

pub fn init() -> Result<(), String> {
    init_with_config(LoggerConfig::default())
}

pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    let max_level = config.min_level;
    LOGGER.reconfigure(config);

    log::set_logger(&*LOGGER).map_err(|e| format!("Failed to set logger: {:?}", e))?;
    log::set_max_level(max_level);
    Ok(())
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Trace | Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

fn level_emoji(level: Level) -> &'static str {
    match level {
        Level::Trace | Level::Debug => "🐛",
        Level::Info => "💡",
        Level::Warn => "⚠️",
        Level::Error => "❌",
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LevelFilter,
    pub colors: bool,
    pub emojis: bool,
    pub timestamps: bool,
    pub json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LevelFilter::Info,
            colors: true,
            emojis: true,
            timestamps: true,
            json: false,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Plain JSON lines on stdout, the shape function platforms collect.
    pub fn production() -> Self {
        Self {
            colors: false,
            emojis: false,
            json: true,
            ..Default::default()
        }
    }

    pub fn development() -> Self {
        Self {
            min_level: LevelFilter::Debug,
            ..Default::default()
        }
    }
}

/// One emitted line in JSON mode. Each entry gets its own id so lines can be
/// correlated when the platform interleaves invocations.
#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    id: String,
    timestamp: String,
    level: &'a str,
    target: &'a str,
    message: String,
}

pub struct InvocationLogger {
    config: Mutex<LoggerConfig>,
}

impl Default for InvocationLogger {
    fn default() -> Self {
        Self {
            config: Mutex::new(LoggerConfig::default()),
        }
    }
}

impl InvocationLogger {
    pub fn reconfigure(&self, config: LoggerConfig) {
        if let Ok(mut current) = self.config.lock() {
            *current = config;
        }
    }

    fn render(&self, record: &Record, config: &LoggerConfig) -> String {
        let level = record.level();

        let mut line = String::new();
        if config.timestamps {
            let ts = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            let ts = if config.colors {
                ts.bright_black().to_string()
            } else {
                ts
            };
            line.push_str(&ts);
            line.push(' ');
        }

        let tag = if config.emojis {
            format!("{} {}", level_emoji(level), level)
        } else {
            level.to_string()
        };
        let tag = if config.colors {
            tag.color(level_color(level)).bold().to_string()
        } else {
            tag
        };
        line.push_str(&format!("[{}] ", tag));

        if !record.target().is_empty() {
            line.push_str(record.target());
            line.push_str(": ");
        }
        line.push_str(&record.args().to_string());
        line
    }

    fn render_json(&self, record: &Record) -> String {
        let entry = JsonLine {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            level: record.level().as_str(),
            target: record.target(),
            message: record.args().to_string(),
        };
        serde_json::to_string(&entry).unwrap_or_default()
    }
}

impl log::Log for InvocationLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.config.lock() {
            Ok(config) => metadata.level() <= config.min_level,
            Err(_) => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(config) = self.config.lock() {
            if config.json {
                println!("{}", self.render_json(record));
            } else {
                println!("{}", self.render(record, &config));
            }
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_decorations() {
        assert_eq!(level_emoji(Level::Error), "❌");
        assert_eq!(level_color(Level::Debug), Color::Blue);
        assert_eq!(level_color(Level::Warn), Color::Yellow);
    }

    #[test]
    fn test_presets() {
        let dev = LoggerConfig::development();
        assert_eq!(dev.min_level, LevelFilter::Debug);
        assert!(dev.colors);

        let prod = LoggerConfig::production();
        assert!(!prod.colors);
        assert!(!prod.emojis);
        assert!(prod.json);
    }

    #[test]
    fn test_render_plain_line() {
        let logger = InvocationLogger::default();
        let config = LoggerConfig::new().with_colors(false);
        let line = logger.render(
            &Record::builder()
                .args(format_args!("handling request"))
                .level(Level::Info)
                .target("nanogen::handler")
                .build(),
            &config,
        );
        assert!(line.contains("[💡 INFO]"));
        assert!(line.ends_with("nanogen::handler: handling request"));
    }
}
