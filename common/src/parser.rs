//! レポートパーサー
//!
//! セクション分割 → セクション別抽出 → ReportRecord の組み立てを行う。
//! どのセクションが欠けても失敗しない（該当フィールドが空になるだけ）。

use crate::catalog::{StyleCatalog, StyleEntry};
use crate::extract::{
    extract_basis, extract_changes, extract_furniture_items, extract_general_style,
    extract_mood_details, extract_recommended_styles, extract_summary, split_mood_words,
};
use crate::recovery::recover_mood_descriptions;
use crate::segmenter::{segment, SectionKind};
use crate::types::{RecommendedStyle, ReportRecord};
use indexmap::IndexMap;
use tracing::debug;

/// レポート本文を解析
///
/// # Examples
/// ```
/// use interior_report_common::parse_report;
///
/// let report = "# 전체적인 분위기는 **차분하고 따뜻한 북유럽 스타일**입니다.";
/// let record = parse_report(report);
/// assert_eq!(record.general_style.as_deref(), Some("차분하고 따뜻한 북유럽"));
/// assert_eq!(record.mood_words, vec!["차분", "따뜻", "북유럽"]);
/// ```
pub fn parse_report(text: &str) -> ReportRecord {
    let sections = segment(text);
    let mut record = ReportRecord::default();

    if let Some(general) = sections
        .get(SectionKind::OverallMood)
        .and_then(extract_general_style)
    {
        record.mood_words = split_mood_words(&general);
        record.general_style = Some(general);
    }

    if let Some(body) = sections.get(SectionKind::MoodProbability) {
        record.mood_details = extract_mood_details(body);
    }

    if let Some(body) = sections.get(SectionKind::JudgmentBasis) {
        record.basis = extract_basis(body);
    }

    if let Some(body) = sections.get(SectionKind::AddRecommendation) {
        record.add = extract_furniture_items(body);
    }

    // テンプレート上は1行だが複数行も許容
    if let Some(body) = sections.get(SectionKind::RemoveRecommendation) {
        record.remove = extract_furniture_items(body);
    }

    if let Some(body) = sections.get(SectionKind::ChangeRecommendation) {
        record.change = extract_changes(body);
    }

    if let Some(body) = sections.get(SectionKind::RecommendedStyles) {
        record.recommended_styles = extract_recommended_styles(body);
    }

    if let Some(body) = sections.get(SectionKind::Summary) {
        record.summary = extract_summary(body);
    }

    debug!(
        sections = sections.len(),
        populated = ?record.populated_fields(),
        "レポート解析完了"
    );

    record
}

/// カタログと照合した推薦スタイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle<'c> {
    pub recommended: RecommendedStyle,
    /// カタログに一致するエントリ（なければNone）
    pub entry: Option<&'c StyleEntry>,
}

impl ResolvedStyle<'_> {
    /// 表示名（カタログにあれば正規名、なければAIの表記のまま）
    pub fn display_name(&self) -> &str {
        self.entry
            .map(|e| e.ko)
            .unwrap_or(self.recommended.style.as_str())
    }
}

/// カタログ参照付きのパーサー
#[derive(Debug, Clone, Copy)]
pub struct ReportParser<'c> {
    catalog: &'c StyleCatalog,
}

impl Default for ReportParser<'static> {
    fn default() -> Self {
        Self::new(StyleCatalog::builtin())
    }
}

impl<'c> ReportParser<'c> {
    pub fn new(catalog: &'c StyleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c StyleCatalog {
        self.catalog
    }

    pub fn parse(&self, text: &str) -> ReportRecord {
        parse_report(text)
    }

    /// 雰囲気の単語 → 説明
    ///
    /// 確率セクションから取れていればそれを使い、
    /// 取れていなければ本文全体を復旧経路で解析する。
    pub fn mood_descriptions(&self, record: &ReportRecord, raw_text: &str) -> IndexMap<String, String> {
        if !record.mood_details.is_empty() {
            return record
                .mood_details
                .iter()
                .map(|d| (d.word.clone(), d.description.clone()))
                .collect();
        }

        debug!("雰囲気セクションなし、復旧経路で抽出");
        recover_mood_descriptions(raw_text)
    }

    /// 推薦スタイルをカタログと照合（一致しなくても失敗しない）
    pub fn resolve_recommended(&self, record: &ReportRecord) -> Vec<ResolvedStyle<'c>> {
        record
            .recommended_styles
            .iter()
            .map(|rec| ResolvedStyle {
                recommended: rec.clone(),
                entry: self.catalog.find(rec.style.as_str()),
            })
            .collect()
    }
}
