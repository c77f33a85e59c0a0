//! セクション別フィールド抽出
//!
//! 各抽出器は自分のセクション本文だけを受け取る。
//! パターンに合わない行は黙ってスキップする（生成AIの出力は崩れることがあるため）。

use crate::types::{BasisKey, FurnitureChange, FurnitureItem, MoodDetail, RecommendedStyle, Summary};
use lazy_static::lazy_static;
use regex::Regex;
use indexmap::IndexMap;
use tracing::trace;

lazy_static! {
    // **차분하고 따뜻한 북유럽 스타일**
    static ref GENERAL_STYLE_RE: Regex = Regex::new(r"(?s)^\s*\*\*(.*?)\s*스타일\*\*").unwrap();
    // 「하고」「한」または末尾で区切る
    static ref MOOD_WORD_RE: Regex = Regex::new(r"([가-힣\s]+?)(?:하고|한|\s*$)").unwrap();
    // - {분위기}({확률}%): {설명}
    static ref MOOD_DETAIL_RE: Regex =
        Regex::new(r"^\s*-\s*(?P<word>.*?)\s*\((?P<pct>\d+)%\)\s*:\s*(?P<desc>.*)$").unwrap();
    // - {키} : {값}
    static ref KEY_VALUE_RE: Regex = Regex::new(r"^\s*-\s*(?P<key>.*?)\s*:\s*(?P<value>.*)$").unwrap();
    // - {변경 가구} -> {추천 가구} : {근거}
    static ref CHANGE_RE: Regex =
        Regex::new(r"^\s*-\s*(?P<from>.*?)\s*->\s*(?P<to>.*?)\s*:\s*(?P<reason>.*)$").unwrap();
    // - {추천 분위기} : {근거}
    static ref RECOMMENDED_RE: Regex =
        Regex::new(r"^\s*-\s*(?P<style>[^:]+?)\s*:\s*(?P<reason>.+)$").unwrap();
    // - {문장}
    static ref BULLET_RE: Regex = Regex::new(r"^\s*-\s*(?P<text>.*)$").unwrap();
}

/// 1行を型付きの値に変換する。合わなければNone（スキップ）
pub trait LineMatcher {
    type Output;

    fn match_line(&self, line: &str) -> Option<Self::Output>;
}

/// 本文の各行にマッチャーを適用する
pub fn extract_lines<M: LineMatcher>(body: &str, matcher: &M) -> Vec<M::Output> {
    body.lines()
        .filter_map(|line| {
            let matched = matcher.match_line(line);
            if matched.is_none() && !line.trim().is_empty() {
                trace!(line, "パターン不一致の行をスキップ");
            }
            matched
        })
        .collect()
}

/// `- 모던한(80%): 설명`
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodDetailLine;

impl LineMatcher for MoodDetailLine {
    type Output = MoodDetail;

    fn match_line(&self, line: &str) -> Option<MoodDetail> {
        let caps = MOOD_DETAIL_RE.captures(line)?;
        // 数字のみなので失敗するのは桁あふれだけ
        let percentage = caps["pct"].parse::<u64>().unwrap_or(u64::MAX);
        Some(MoodDetail {
            word: caps["word"].trim().to_string(),
            percentage,
            description: caps["desc"].trim().to_string(),
        })
    }
}

/// `- 키: 값`（判断根拠・追加・除去で共通）
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValueLine;

impl LineMatcher for KeyValueLine {
    type Output = (String, String);

    fn match_line(&self, line: &str) -> Option<(String, String)> {
        let caps = KEY_VALUE_RE.captures(line)?;
        let key = caps["key"].trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), caps["value"].trim().to_string()))
    }
}

/// `- 소파 -> 패브릭 소파: 이유`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeLine;

impl LineMatcher for ChangeLine {
    type Output = FurnitureChange;

    fn match_line(&self, line: &str) -> Option<FurnitureChange> {
        let caps = CHANGE_RE.captures(line)?;
        Some(FurnitureChange {
            from_item: caps["from"].trim().to_string(),
            to_item: caps["to"].trim().to_string(),
            reason: caps["reason"].trim().to_string(),
        })
    }
}

/// `- 재팬디 : 이유`
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendedStyleLine;

impl LineMatcher for RecommendedStyleLine {
    type Output = RecommendedStyle;

    fn match_line(&self, line: &str) -> Option<RecommendedStyle> {
        let caps = RECOMMENDED_RE.captures(line)?;
        let style = caps["style"].trim();
        let reason = caps["reason"].trim();
        if style.is_empty() || reason.is_empty() {
            return None;
        }
        Some(RecommendedStyle {
            style: style.to_string(),
            reason: reason.to_string(),
        })
    }
}

/// `- 문장`
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletLine;

impl LineMatcher for BulletLine {
    type Output = String;

    fn match_line(&self, line: &str) -> Option<String> {
        let caps = BULLET_RE.captures(line)?;
        let text = caps["text"].trim();
        if text.is_empty() {
            return None;
        }
        Some(text.to_string())
    }
}

/// 全体的な雰囲気（`**` と `스타일**` の間）
pub fn extract_general_style(body: &str) -> Option<String> {
    let caps = GENERAL_STYLE_RE.captures(body)?;
    let general = caps[1].trim();
    if general.is_empty() {
        None
    } else {
        Some(general.to_string())
    }
}

/// 雰囲気の単語に分割
///
/// 例: "차분하고 따뜻한 북유럽" → ["차분", "따뜻", "북유럽"]
pub fn split_mood_words(general: &str) -> Vec<String> {
    MOOD_WORD_RE
        .captures_iter(general)
        .map(|caps| caps[1].trim().to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// 雰囲気別の確率
pub fn extract_mood_details(body: &str) -> Vec<MoodDetail> {
    extract_lines(body, &MoodDetailLine)
}

/// 判断根拠
///
/// 既知のキーは内部名に変換し、それ以外は原文のまま保持する。
/// 同じキーが複数あれば後の行が優先。
pub fn extract_basis(body: &str) -> IndexMap<String, String> {
    extract_lines(body, &KeyValueLine)
        .into_iter()
        .map(|(label, value)| (BasisKey::from_label(&label).as_str().to_string(), value))
        .collect()
}

/// 追加・除去する家具
pub fn extract_furniture_items(body: &str) -> Vec<FurnitureItem> {
    extract_lines(body, &KeyValueLine)
        .into_iter()
        .map(|(item, reason)| FurnitureItem { item, reason })
        .collect()
}

/// 変更する家具
pub fn extract_changes(body: &str) -> Vec<FurnitureChange> {
    extract_lines(body, &ChangeLine)
}

/// 推薦スタイル
///
/// 本文が空なら空のVec。呼び出し側は直接入力にフォールバックする。
pub fn extract_recommended_styles(body: &str) -> Vec<RecommendedStyle> {
    if body.trim().is_empty() {
        return Vec::new();
    }
    extract_lines(body, &RecommendedStyleLine)
}

/// まとめ
pub fn extract_summary(body: &str) -> Summary {
    Summary::from_lines(extract_lines(body, &BulletLine))
}
