//! 旧テンプレートの家具推薦抽出
//!
//! 「## 3-1. 공간에 어울리는 가구 추천」形式の旧レポート用。
//! 雰囲気をキーにして追加・変更の家具をまとめる。

use crate::extract::{extract_lines, LineMatcher};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

lazy_static! {
    static ref ADD_SECTION_RE: Regex = Regex::new(
        r"(?s)##\s*3-1\.\s*공간에 어울리는 가구 추천(.*?)##\s*3-2\.\s*제거하면 좋을 가구 추천"
    )
    .unwrap();
    static ref REMOVE_SECTION_RE: Regex = Regex::new(
        r"(?s)##\s*3-2\.\s*제거하면 좋을 가구 추천\s*-\s*.*?기준:\s*([가-힣\s]+?),\s*.*?##\s*3-3\.\s*분위기별 바꿨으면 하는 가구 추천"
    )
    .unwrap();
    static ref CHANGE_SECTION_RE: Regex = Regex::new(
        r"(?s)##\s*3-3\.\s*분위기별 바꿨으면 하는 가구 추천(.*?)(?:##\s*4\.\s*공간 비율 및 동선 분석|\z)"
    )
    .unwrap();
    // - {분위기}: {가구1}, {가구2}
    static ref MOOD_PAIR_RE: Regex =
        Regex::new(r"^\s*-\s*(?P<mood>[가-힣\s]+?)\s*:\s*(?P<first>.*?),\s*(?P<second>.*)$").unwrap();
    // - {분위기}: {기존 가구} -> {새 가구}
    static ref MOOD_CHANGE_RE: Regex =
        Regex::new(r"^\s*-\s*(?P<mood>[가-힣\s]+?)\s*:\s*.*?\s*->\s*(?P<new>.*)$").unwrap();
}

/// 旧テンプレートの抽出結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyFurniture {
    /// 雰囲気 → 追加推薦の家具2点
    pub furniture_add_by_mood: IndexMap<String, Vec<String>>,
    /// 除去推薦の家具名
    pub furniture_remove: Option<String>,
    /// 雰囲気 → 変更後の家具
    pub furniture_new_by_mood: IndexMap<String, String>,
}

struct MoodPairLine;

impl LineMatcher for MoodPairLine {
    type Output = (String, Vec<String>);

    fn match_line(&self, line: &str) -> Option<Self::Output> {
        let caps = MOOD_PAIR_RE.captures(line)?;
        Some((
            caps["mood"].trim().to_string(),
            vec![caps["first"].trim().to_string(), caps["second"].trim().to_string()],
        ))
    }
}

struct MoodChangeLine;

impl LineMatcher for MoodChangeLine {
    type Output = (String, String);

    fn match_line(&self, line: &str) -> Option<Self::Output> {
        let caps = MOOD_CHANGE_RE.captures(line)?;
        Some((caps["mood"].trim().to_string(), caps["new"].trim().to_string()))
    }
}

/// 旧テンプレートのレポートから家具推薦を雰囲気別に抽出
pub fn extract_furniture_by_mood(report: &str) -> LegacyFurniture {
    let mut result = LegacyFurniture::default();

    if let Some(caps) = ADD_SECTION_RE.captures(report) {
        result.furniture_add_by_mood = extract_lines(&caps[1], &MoodPairLine).into_iter().collect();
    }

    if let Some(caps) = REMOVE_SECTION_RE.captures(report) {
        let name = caps[1].trim();
        if !name.is_empty() {
            result.furniture_remove = Some(name.to_string());
        }
    }

    if let Some(caps) = CHANGE_SECTION_RE.captures(report) {
        result.furniture_new_by_mood = extract_lines(&caps[1], &MoodChangeLine).into_iter().collect();
    }

    result
}
