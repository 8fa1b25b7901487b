use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Where log lines go. `File` keeps them out of the interactive board output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogTarget {
    Stdout,
    Stderr,
    #[default]
    File,
}

enum Sink {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: Sink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: Sink) -> Self {
        Self { prefix, sink }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let entry = format_entry(&timestamp, self.prefix.as_deref(), file, line, message);

        match &self.sink {
            Sink::Stdout => println!("{}", entry),
            Sink::Stderr => eprintln!("{}", entry),
            Sink::File(file) => {
                if let Ok(mut file) = file.lock()
                    && let Err(e) = writeln!(file, "{}", entry)
                {
                    eprintln!("Failed to write log entry: {}", e);
                }
            }
        }
    }
}

fn format_entry(
    timestamp: &str,
    prefix: Option<&str>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
        None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(
    prefix: Option<String>,
    target: LogTarget,
    file_path: &str,
) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let sink = match target {
        LogTarget::Stdout => Sink::Stdout,
        LogTarget::Stderr => Sink::Stderr,
        LogTarget::File => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)
                .map_err(|e| format!("Failed to open log file {}: {}", file_path, e))?;
            Sink::File(Mutex::new(file))
        }
    };

    let _ = LOGGER.set(Logger::new(prefix, sink));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
