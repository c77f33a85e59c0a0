use crate::error::{ReportError, Result};
use interior_report_common::StyleCatalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// parse の出力先（-o 省略時）
    pub output_file: String,
    /// 推薦スタイルがない時の既定スタイル
    pub default_style: String,
    /// 対象家具を入力しなかった時の既定値
    pub default_target_objects: String,
    /// 雰囲気セクションがない時に復旧経路を使う
    pub recover_moods: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: "parsed_report.json".into(),
            default_style: "모던".into(),
            default_target_objects: "모든 가구와 데코 요소".into(),
            recover_moods: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("interior-report").join("config.json"))
    }

    /// 既定スタイルを設定（カタログにない名前はエラー）
    ///
    /// 保存される値は正規名（韓国語名）。
    pub fn set_default_style(&mut self, name: &str) -> Result<&str> {
        let canonical = StyleCatalog::builtin().normalize(name)?;
        self.default_style = canonical.to_string();
        Ok(&self.default_style)
    }
}
