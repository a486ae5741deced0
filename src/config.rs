use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub evaluation: EvaluationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluationConfig {
    pub fold_count: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::PhishError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::PhishError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            dataset: DatasetConfig {
                path: "CEAS_08.csv".to_string(),
            },
            evaluation: EvaluationConfig { fold_count: 10 },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dataset.path, "CEAS_08.csv");
        assert_eq!(config.evaluation.fold_count, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[dataset]
path = "emails.csv"

[evaluation]
fold_count = 5

[logging]
level = "debug"
format = "compact"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.dataset.path, "emails.csv");
        assert_eq!(config.evaluation.fold_count, 5);
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Config::from_file("/nonexistent/config.toml").is_err());
    }
}
