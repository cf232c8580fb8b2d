use crate::error::{CheckerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーを読む環境変数（.env からも読み込まれる）
pub const API_KEY_ENV: &str = "SERPER_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 読み込みに失敗しても既定値で続行する（`check` 用。キーは環境変数でも渡せる）
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            Self::default()
        })
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CheckerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("local-pack-checker").join("config.json"))
    }

    /// APIキーを取得
    ///
    /// 環境変数を優先し、なければ設定ファイルの値。空文字は未設定扱い。
    pub fn api_key(&self) -> Result<String> {
        pick_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.clone())
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(CheckerError::MissingApiKey);
        }
        self.api_key = Some(key);
        self.save()
    }
}

fn pick_api_key(from_env: Option<String>, stored: Option<String>) -> Result<String> {
    [from_env, stored]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .ok_or(CheckerError::MissingApiKey)
}

/// 表示用にAPIキーを伏せる（末尾4文字のみ）
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_env_key_takes_precedence() {
        let key = pick_api_key(Some("env-key".into()), Some("file-key".into())).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_stored_key_used_when_env_missing() {
        let key = pick_api_key(None, Some("file-key".into())).unwrap();
        assert_eq!(key, "file-key");
    }

    #[test]
    fn test_blank_env_key_falls_back() {
        let key = pick_api_key(Some("   ".into()), Some(" file-key ".into())).unwrap();
        assert_eq!(key, "file-key");
    }

    #[test]
    fn test_missing_key_fails_fast() {
        let result = pick_api_key(None, Some(String::new()));
        assert!(matches!(result, Err(CheckerError::MissingApiKey)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config { api_key: Some("abc123".into()) };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert!(loaded.api_key.is_none());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CheckerError::JsonParse(_))));
    }

    #[test]
    fn test_broken_config_does_not_block_env_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = Config::or_default(Config::load_from(&path));
        assert!(config.api_key.is_none());

        let key = pick_api_key(Some("env-key".into()), config.api_key).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("abcdef123456"), "********3456");
        assert_eq!(mask_api_key("abc"), "***");
    }
}
