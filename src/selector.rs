//! 対話式スタイル選択モジュール
//!
//! レポートの推薦スタイルから番号で1つ選ぶ。
//! 推薦がなければ直接入力にフォールバックする。

use crate::config::Config;
use crate::error::{ReportError, Result};
use dialoguer::{Input, Select};
use interior_report_common::{ReportParser, ReportRecord};
use serde::Serialize;

/// 利用者との対話
pub trait StyleChooser {
    /// 候補から1つ選ぶ（0始まりの番号を返す）
    fn choose(&self, prompt: &str, candidates: &[String]) -> Result<usize>;

    /// 自由入力（空なら default）
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
}

/// ターミナル用（dialoguer）
pub struct DialoguerChooser;

impl StyleChooser for DialoguerChooser {
    fn choose(&self, prompt: &str, candidates: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(candidates)
            .default(0)
            .interact()
            .map_err(|e| ReportError::Prompt(e.to_string()))
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ReportError::Prompt(e.to_string()))?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }
}

/// 選択結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSelection {
    /// 選ばれたスタイル（推薦の表記 または 入力値）
    pub target_style: String,
    /// カタログの正規名（一致した場合のみ）
    pub canonical_style: Option<String>,
    pub target_objects: String,
    /// 推薦から選んだか
    pub from_recommendation: bool,
}

/// 推薦スタイルの表示ラベル
pub fn recommendation_labels(record: &ReportRecord) -> Vec<String> {
    record
        .recommended_styles
        .iter()
        .enumerate()
        .map(|(idx, rec)| format!("{}. {}  -  {}", idx + 1, rec.style, rec.reason))
        .collect()
}

/// スタイルと対象家具を決める
pub fn select_style<C: StyleChooser + ?Sized>(
    record: &ReportRecord,
    config: &Config,
    chooser: &C,
) -> Result<StyleSelection> {
    let parser = ReportParser::default();
    let resolved = parser.resolve_recommended(record);

    let (target_style, canonical_style, from_recommendation) = if resolved.is_empty() {
        println!("추천 스타일이 없습니다. 원하는 스타일을 직접 입력해 주세요.");
        let style = chooser.input("원하는 스타일 (예: 미니멀리즘, 북유럽)", &config.default_style)?;
        let canonical = parser.catalog().find(style.as_str()).map(|e| e.ko.to_string());
        (style, canonical, false)
    } else {
        println!("\n리포트가 추천한 인테리어 스타일 {}가지입니다:\n", resolved.len());
        let labels = recommendation_labels(record);
        let idx = chooser.choose("원하는 스타일 번호를 선택하세요", &labels)?;

        let picked = resolved
            .get(idx)
            .ok_or_else(|| ReportError::Prompt(format!("잘못된 번호입니다: {}", idx + 1)))?;
        (
            picked.recommended.style.clone(),
            picked.entry.map(|e| e.ko.to_string()),
            true,
        )
    };

    println!("✅ 선택된 스타일: {}", target_style);

    let target_objects = chooser.input(
        "스타일을 적용할 특정 가구 (없으면 Enter)",
        &config.default_target_objects,
    )?;

    Ok(StyleSelection {
        target_style,
        canonical_style,
        target_objects,
        from_recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use interior_report_common::RecommendedStyle;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// 決められた応答を返すテスト用
    struct ScriptedChooser {
        choice: usize,
        inputs: RefCell<VecDeque<String>>,
        offered: RefCell<Vec<String>>,
    }

    impl ScriptedChooser {
        fn new(choice: usize, inputs: &[&str]) -> Self {
            Self {
                choice,
                inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
                offered: RefCell::new(Vec::new()),
            }
        }
    }

    impl StyleChooser for ScriptedChooser {
        fn choose(&self, _prompt: &str, candidates: &[String]) -> Result<usize> {
            self.offered.borrow_mut().extend_from_slice(candidates);
            Ok(self.choice)
        }

        fn input(&self, _prompt: &str, default: &str) -> Result<String> {
            let next = self.inputs.borrow_mut().pop_front().unwrap_or_default();
            if next.is_empty() {
                Ok(default.to_string())
            } else {
                Ok(next)
            }
        }
    }

    fn record_with_styles() -> ReportRecord {
        ReportRecord {
            recommended_styles: vec![
                RecommendedStyle {
                    style: "재팬디".to_string(),
                    reason: "자연 소재".to_string(),
                },
                RecommendedStyle {
                    style: "코스탈 하우스".to_string(),
                    reason: "시원한 느낌".to_string(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_select_from_recommendations() {
        let chooser = ScriptedChooser::new(0, &["소파"]);
        let selection = select_style(&record_with_styles(), &Config::default(), &chooser).unwrap();

        assert_eq!(selection.target_style, "재팬디");
        assert_eq!(selection.canonical_style.as_deref(), Some("재팬디"));
        assert_eq!(selection.target_objects, "소파");
        assert!(selection.from_recommendation);

        let offered = chooser.offered.borrow();
        assert_eq!(offered[0], "1. 재팬디  -  자연 소재");
    }

    #[test]
    fn test_select_unknown_recommendation_keeps_name() {
        let chooser = ScriptedChooser::new(1, &[""]);
        let selection = select_style(&record_with_styles(), &Config::default(), &chooser).unwrap();

        assert_eq!(selection.target_style, "코스탈 하우스");
        assert!(selection.canonical_style.is_none());
        assert_eq!(selection.target_objects, "모든 가구와 데코 요소");
    }

    #[test]
    fn test_select_out_of_range_choice() {
        let chooser = ScriptedChooser::new(5, &[]);
        let result = select_style(&record_with_styles(), &Config::default(), &chooser);
        assert!(matches!(result, Err(ReportError::Prompt(_))));
    }

    #[test]
    fn test_fallback_to_direct_input() {
        let chooser = ScriptedChooser::new(0, &["Scandinavian Home", ""]);
        let selection = select_style(&ReportRecord::default(), &Config::default(), &chooser).unwrap();

        assert_eq!(selection.target_style, "Scandinavian Home");
        assert_eq!(selection.canonical_style.as_deref(), Some("스칸디나비아/북유럽"));
        assert!(!selection.from_recommendation);
        assert!(chooser.offered.borrow().is_empty());
    }

    #[test]
    fn test_fallback_uses_default_style() {
        let chooser = ScriptedChooser::new(0, &[]);
        let selection = select_style(&ReportRecord::default(), &Config::default(), &chooser).unwrap();

        assert_eq!(selection.target_style, "모던");
        assert_eq!(selection.canonical_style.as_deref(), Some("모던"));
    }
}
