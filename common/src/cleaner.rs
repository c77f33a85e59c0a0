//! テキスト整形
//!
//! 雰囲気の説明が壊れたり重複したりした時の前処理。

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// 壊れた・重複したテキストを整形する
///
/// 1. `{` `}` を除去
/// 2. 行ごとにtrimし、空行と既出の行を除去（初出を残し順序は保持）
/// 3. 残った行を半角スペースで連結
/// 4. 連続する空白を1つにまとめてtrim
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let without_braces = text.replace(['{', '}'], "");

    let mut unique_lines: Vec<&str> = Vec::new();
    for line in without_braces.lines() {
        let line = line.trim();
        if !line.is_empty() && !unique_lines.contains(&line) {
            unique_lines.push(line);
        }
    }

    let joined = unique_lines.join(" ");
    WHITESPACE_RE.replace_all(&joined, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_braces() {
        assert_eq!(clean("{아늑한: 따뜻한 분위기}"), "아늑한: 따뜻한 분위기");
    }

    #[test]
    fn test_clean_drops_duplicate_lines() {
        let text = "모던한: 깔끔한 공간\n  모던한: 깔끔한 공간  \n\n차분한: 조용한 느낌\n모던한: 깔끔한 공간";
        assert_eq!(clean(text), "모던한: 깔끔한 공간 차분한: 조용한 느낌");
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean("  a \t b   c\r\n\n d  "), "a b c d");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("{}\n  \n{ }"), "");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = [
            "",
            "{아늑한: 은은한 조명}\n{아늑한: 은은한 조명}\n",
            "a  b\n\nb\na  b\n a b ",
            "x\n{y}\n x \n\t\ty",
            "## 1. 분위기\n- 모던한(80%): 설명\n- 모던한(80%): 설명",
            "}{ }{ \n\u{3000}전각 공백\u{3000}\n",
        ];

        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_clean_dedup_after_whitespace_collapse_is_stable() {
        // 行内の空白だけが違う行は重複扱いにならないが、2回目でも結果は同じ
        let once = clean("a  b\na b");
        assert_eq!(once, "a b a b");
        assert_eq!(clean(&once), once);
    }
}
