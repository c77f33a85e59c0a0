//! 雰囲気説明の復旧
//!
//! 壊れた辞書形式・重複したテキストから「雰囲気の単語 → 説明」だけを取り出す。
//! セクション分割で雰囲気の確率セクションが取れない時の代替経路。

use crate::cleaner::clean;
use lazy_static::lazy_static;
use regex::Regex;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// 復旧対象として認める雰囲気キー
pub const MOOD_KEY_ALLOW_LIST: [&str; 8] = [
    "아늑한", "편안한", "심플한", "모던", "미니멀", "차분한", "따뜻한", "빈티지",
];

/// 値に含まれていたら家具推薦の行とみなして除外する名詞
pub const FURNITURE_NOUN_REJECT_LIST: [&str; 5] = ["러그", "쿠션", "안락의자", "스툴", "모듈형"];

/// 説明として認める最小文字数（この文字数以下は断片とみなす）
pub const MIN_DESCRIPTION_CHARS: usize = 10;

lazy_static! {
    // 候補キー: コロン直前のハングル1語（引用符付きも可）
    static ref CANDIDATE_KEY_RE: Regex = Regex::new(r#""?(?P<key>[가-힣]+)"?\s*:"#).unwrap();
    // 値の打ち切り位置: 番号付き見出し、または別の「- キー:」
    static ref VALUE_CUT_RE: Regex = Regex::new(r#"##\s*\d|-\s*"?[가-힣\s]+"?\s*:"#).unwrap();
}

pub fn is_allowed_mood_key(key: &str) -> bool {
    MOOD_KEY_ALLOW_LIST.contains(&key)
}

pub fn mentions_furniture(value: &str) -> bool {
    FURNITURE_NOUN_REJECT_LIST.iter().any(|noun| value.contains(noun))
}

pub fn is_long_enough(value: &str) -> bool {
    value.chars().count() > MIN_DESCRIPTION_CHARS
}

/// 壊れたテキストから雰囲気の説明を復旧する
///
/// 1. テキスト整形（`clean`）
/// 2. `キー: 値` の候補を抽出（値は次の候補キーまたは末尾まで）
/// 3. キーは許可リストに完全一致するものだけ
/// 4. 値は番号付き見出しや別の `- キー:` の手前で打ち切る
/// 5. 家具の名詞を含む値は除外
/// 6. 10文字以下の値は除外
///
/// 結果は最初に現れた順。同じキーは後の値で上書きする（位置は最初のまま）。
pub fn recover_mood_descriptions(broken_text: &str) -> IndexMap<String, String> {
    let cleaned = clean(broken_text);
    let mut extracted = IndexMap::new();

    let keys: Vec<_> = CANDIDATE_KEY_RE.captures_iter(&cleaned).collect();

    for (idx, caps) in keys.iter().enumerate() {
        let key = caps["key"].trim();
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };

        if !is_allowed_mood_key(key) {
            trace!(key, "許可リスト外のキー");
            continue;
        }

        let value_start = whole.end();
        let next = keys.get(idx + 1).and_then(|c| c.get(0));
        let value_end = next.map(|m| m.start()).unwrap_or(cleaned.len());

        // 次のキーまで含めた範囲で打ち切り位置を探す（「- キー:」の「-」を落とすため）
        let search_end = next.map(|m| m.end()).unwrap_or(cleaned.len());
        let cut = VALUE_CUT_RE
            .find(&cleaned[value_start..search_end])
            .map(|m| value_start + m.start())
            .unwrap_or(value_end);

        let raw_value = &cleaned[value_start..cut.min(value_end)];
        let value = raw_value
            .replace('"', "")
            .trim_matches(|c: char| c.is_whitespace() || c == ',' || c == '-')
            .to_string();

        if mentions_furniture(&value) {
            debug!(key, value = %value, "家具の記述を含むため除外");
            continue;
        }

        if !is_long_enough(&value) {
            trace!(key, value = %value, "説明が短すぎるため除外");
            continue;
        }

        extracted.insert(key.to_string(), value);
    }

    extracted
}
