//! レポートの型定義
//!
//! - MoodDetail: 雰囲気別の確率と説明
//! - FurnitureItem / FurnitureChange: 家具の追加・除去・変更の推薦
//! - RecommendedStyle: AIが提案したスタイル
//! - Summary: まとめの箇条書き（1始まりの位置キー付き）
//! - ReportRecord: 上記をまとめた最終出力

use crate::error::Result;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::collections::HashMap;

/// 雰囲気の定義と確率（例: `모던한(80%): ...`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodDetail {
    pub word: String,
    /// 0〜100を想定するが範囲外もそのまま保持する（u64を超える桁は上限に丸める）
    pub percentage: u64,
    pub description: String,
}

/// 追加・除去する家具の推薦
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FurnitureItem {
    pub item: String,
    pub reason: String,
}

/// 変更する家具の推薦（`from_item -> to_item`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FurnitureChange {
    pub from_item: String,
    pub to_item: String,
    pub reason: String,
}

/// 推薦スタイル（表示順 = 選択番号順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendedStyle {
    pub style: String,
    pub reason: String,
}

/// 判断根拠のキー
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BasisKey {
    /// 가구 배치 및 공간 분석
    FurnitureLayout,
    /// 색감 및 질감
    ColorTexture,
    /// 소재
    Material,
    /// マッピングにないキー（原文のまま）
    Other(String),
}

impl BasisKey {
    /// 見出しラベルから内部キーへ変換
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "가구 배치 및 공간 분석" => BasisKey::FurnitureLayout,
            "색감 및 질감" => BasisKey::ColorTexture,
            "소재" => BasisKey::Material,
            other => BasisKey::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BasisKey::FurnitureLayout => "furniture_layout",
            BasisKey::ColorTexture => "color_texture",
            BasisKey::Material => "material",
            BasisKey::Other(label) => label,
        }
    }
}

impl std::fmt::Display for BasisKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// まとめの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// 1始まりの位置
    pub position: usize,
    pub text: String,
}

impl SummaryLine {
    /// 出力キー（`summary1`, `summary2`, ...）
    pub fn key(&self) -> String {
        format!("summary{}", self.position)
    }
}

/// まとめ（順序付き）
///
/// JSONでは `{"summary1": "...", "summary2": "..."}` の順序付きマップになる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    lines: Vec<SummaryLine>,
}

impl Summary {
    /// 出現順に1から番号を振る
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(idx, text)| SummaryLine { position: idx + 1, text })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[SummaryLine] {
        &self.lines
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.position == position)
            .map(|l| l.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for line in &self.lines {
            map.serialize_entry(&line.key(), &line.text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, String> = HashMap::deserialize(deserializer)?;

        // summaryN 以外のキーは無視
        let mut lines: Vec<SummaryLine> = raw
            .into_iter()
            .filter_map(|(key, text)| {
                let position = key.strip_prefix("summary")?.parse::<usize>().ok()?;
                Some(SummaryLine { position, text })
            })
            .collect();
        lines.sort_by_key(|l| l.position);

        Ok(Self { lines })
    }
}

/// レポート解析結果
///
/// どのフィールドも空・欠落でありうる。欠落は失敗ではない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRecord {
    /// 全体的な雰囲気（例: "차분하고 따뜻한 북유럽"）
    pub general_style: Option<String>,

    /// general_style から分割した雰囲気の単語
    pub mood_words: Vec<String>,

    pub mood_details: Vec<MoodDetail>,

    /// 判断根拠（furniture_layout / color_texture / material / 原文キー）
    pub basis: IndexMap<String, String>,

    #[serde(alias = "recommendations_add")]
    pub add: Vec<FurnitureItem>,

    #[serde(alias = "recommendations_remove")]
    pub remove: Vec<FurnitureItem>,

    #[serde(alias = "recommendations_change")]
    pub change: Vec<FurnitureChange>,

    pub recommended_styles: Vec<RecommendedStyle>,

    pub summary: Summary,
}

impl ReportRecord {
    /// 値が入っているフィールド名の一覧
    pub fn populated_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("general_style", self.general_style.is_some()),
            ("mood_words", !self.mood_words.is_empty()),
            ("mood_details", !self.mood_details.is_empty()),
            ("basis", !self.basis.is_empty()),
            ("add", !self.add.is_empty()),
            ("remove", !self.remove.is_empty()),
            ("change", !self.change.is_empty()),
            ("recommended_styles", !self.recommended_styles.is_empty()),
            ("summary", !self.summary.is_empty()),
        ];

        checks
            .iter()
            .filter(|(_, populated)| *populated)
            .map(|(name, _)| *name)
            .collect()
    }

    /// すべてのフィールドが空か
    pub fn is_empty(&self) -> bool {
        self.populated_fields().is_empty()
    }

    /// 判断根拠を取得
    pub fn basis_value(&self, key: &BasisKey) -> Option<&str> {
        self.basis.get(key.as_str()).map(String::as_str)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_record_default_is_empty() {
        let record = ReportRecord::default();
        assert!(record.is_empty());
        assert!(record.general_style.is_none());
        assert!(record.populated_fields().is_empty());
    }

    #[test]
    fn test_report_record_serialize_field_names() {
        let record = ReportRecord {
            general_style: Some("차분하고 따뜻한 북유럽".to_string()),
            add: vec![FurnitureItem {
                item: "플로어 램프".to_string(),
                reason: "은은한 조명".to_string(),
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"general_style\":\"차분하고 따뜻한 북유럽\""));
        assert!(json.contains("\"add\":[{\"item\":\"플로어 램프\""));
        assert!(json.contains("\"recommended_styles\":[]"));
        assert!(json.contains("\"summary\":{}"));
    }

    #[test]
    fn test_report_record_deserialize_legacy_names() {
        let json = r#"{
            "general_style": "모던",
            "recommendations_add": [{"item": "러그", "reason": "따뜻함"}],
            "recommendations_change": [{"from_item": "소파", "to_item": "패브릭 소파", "reason": "부드러움"}]
        }"#;

        let record = ReportRecord::from_json(json).unwrap();
        assert_eq!(record.general_style.as_deref(), Some("모던"));
        assert_eq!(record.add.len(), 1);
        assert_eq!(record.add[0].item, "러그");
        assert_eq!(record.change[0].to_item, "패브릭 소파");
        assert!(record.remove.is_empty()); // デフォルト値
    }

    #[test]
    fn test_summary_keeps_order_beyond_nine() {
        let summary = Summary::from_lines((1..=11).map(|i| format!("문장{}", i)));
        let json = serde_json::to_string(&summary).unwrap();

        let pos2 = json.find("\"summary2\"").unwrap();
        let pos10 = json.find("\"summary10\"").unwrap();
        assert!(pos2 < pos10);

        let restored: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, summary);
        assert_eq!(restored.get(11), Some("문장11"));
    }

    #[test]
    fn test_summary_deserialize_ignores_unknown_keys() {
        let json = r#"{"summary2": "둘", "note": "x", "summary1": "하나"}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.lines()[0].text, "하나");
        assert_eq!(summary.lines()[1].text, "둘");
    }

    #[test]
    fn test_basis_key_mapping() {
        assert_eq!(BasisKey::from_label("가구 배치 및 공간 분석"), BasisKey::FurnitureLayout);
        assert_eq!(BasisKey::from_label(" 색감 및 질감 "), BasisKey::ColorTexture);
        assert_eq!(BasisKey::from_label("소재").as_str(), "material");
        assert_eq!(BasisKey::from_label("조명").as_str(), "조명");
    }

    #[test]
    fn test_basis_value() {
        let mut record = ReportRecord::default();
        record.basis.insert("material".to_string(), "원목과 린넨".to_string());
        record.basis.insert("조명".to_string(), "간접 조명".to_string());

        assert_eq!(record.basis_value(&BasisKey::Material), Some("원목과 린넨"));
        assert_eq!(record.basis_value(&BasisKey::from_label("조명")), Some("간접 조명"));
        assert_eq!(record.basis_value(&BasisKey::ColorTexture), None);
    }

    #[test]
    fn test_basis_keeps_source_order_in_json() {
        let mut record = ReportRecord::default();
        record.basis.insert("material".to_string(), "원목".to_string());
        record.basis.insert("furniture_layout".to_string(), "넓은 동선".to_string());

        let json = record.to_json_pretty().unwrap();
        let material = json.find("\"material\"").unwrap();
        let layout = json.find("\"furniture_layout\"").unwrap();
        assert!(material < layout);

        let restored = ReportRecord::from_json(&json).unwrap();
        let keys: Vec<&str> = restored.basis.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["material", "furniture_layout"]);
    }

    #[test]
    fn test_populated_fields() {
        let record = ReportRecord {
            mood_words: vec!["차분".to_string()],
            summary: Summary::from_lines(vec!["요약".to_string()]),
            ..Default::default()
        };
        assert_eq!(record.populated_fields(), vec!["mood_words", "summary"]);
        assert!(!record.is_empty());
    }
}
