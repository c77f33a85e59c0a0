//! スタイル変換プロンプトの解析
//!
//! 生成したスタイル変換プロンプトから、対象スタイルと対象オブジェクトを読み戻す。

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref TARGET_STYLE_RE: Regex =
        Regex::new(r"스타일을\s*([가-힣a-zA-Z\s&]+)\s*스타일로 변환하세요").unwrap();
    static ref TARGET_OBJECTS_RE: Regex =
        Regex::new(r"(?s)스타일을 변경해야 하는 객체:\s*(.*?)\s*스타일 변경 예시:").unwrap();
}

/// スタイル変換の要求内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRequest {
    pub target_style: Option<String>,
    pub target_objects: Vec<String>,
}

/// プロンプトから対象スタイルと対象オブジェクトを抽出
///
/// どちらも見つからなければ空のまま返す。
pub fn parse_style_input(prompt: &str) -> StyleRequest {
    let target_style = TARGET_STYLE_RE
        .captures(prompt)
        .map(|caps| caps[1].trim().to_string())
        .filter(|style| !style.is_empty());

    let target_objects = TARGET_OBJECTS_RE
        .captures(prompt)
        .map(|caps| {
            caps[1]
                .lines()
                .map(str::trim)
                .filter(|obj| !obj.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    StyleRequest {
        target_style,
        target_objects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "
    스타일을 modern minimalism 스타일로 변환하세요.

    스타일을 변경해야 하는 객체:
    소파
    테이블

    침대

    스타일 변경 예시:
    - 예시1
    - 예시2
    ";

    #[test]
    fn test_parse_style_input() {
        let request = parse_style_input(PROMPT);
        assert_eq!(request.target_style.as_deref(), Some("modern minimalism"));
        assert_eq!(request.target_objects, vec!["소파", "테이블", "침대"]);
    }

    #[test]
    fn test_parse_korean_style_name() {
        let request = parse_style_input("스타일을 미드 센추리 모던 스타일로 변환하세요.");
        assert_eq!(request.target_style.as_deref(), Some("미드 센추리 모던"));
        assert!(request.target_objects.is_empty());
    }

    #[test]
    fn test_parse_style_input_nothing_found() {
        let request = parse_style_input("아무 관련 없는 문장");
        assert_eq!(request, StyleRequest::default());
    }
}
