use gomoku_common::games::gomoku::StrategyKind;
use gomoku_common::logger::LogTarget;
use gomoku_common::storage::{FileContentProvider, Validate, YamlDocument};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "gomoku_config.yaml";
pub const MAX_DIMENSION: usize = 50;

pub type ConfigManager = YamlDocument<FileContentProvider, GomokuConfig>;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(path: Option<&str>) -> ConfigManager {
    let path = path.map(str::to_string).unwrap_or_else(get_config_path);
    YamlDocument::new(FileContentProvider::new(path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GomokuConfig {
    pub rows: usize,
    pub cols: usize,
    pub bot: StrategyKind,
    pub data_dir: String,
    pub log: LogConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub target: LogTarget,
    pub file_path: String,
}

impl Default for GomokuConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 15,
            bot: StrategyKind::Heuristic,
            data_dir: "gomoku_data".to_string(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            target: LogTarget::File,
            file_path: "gomoku.log".to_string(),
        }
    }
}

pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), String> {
    if !(1..=MAX_DIMENSION).contains(&rows) {
        return Err(format!("Rows must be between 1 and {}", MAX_DIMENSION));
    }
    if !(1..=MAX_DIMENSION).contains(&cols) {
        return Err(format!("Cols must be between 1 and {}", MAX_DIMENSION));
    }
    Ok(())
}

impl Validate for GomokuConfig {
    fn validate(&self) -> Result<(), String> {
        validate_dimensions(self.rows, self.cols)?;
        if self.data_dir.trim().is_empty() {
            return Err("Data directory must not be empty".to_string());
        }
        self.log.validate()?;
        Ok(())
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.target == LogTarget::File && self.file_path.trim().is_empty() {
            return Err("Log file path must not be empty when logging to a file".to_string());
        }
        Ok(())
    }
}
