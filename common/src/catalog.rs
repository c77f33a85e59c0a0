//! インテリアスタイルカタログ
//!
//! 31件のスタイルを一か所で管理する。
//! id / slug / 韓国語名 / 英語名のどれからでも同じエントリを引ける。

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// カタログの1エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleEntry {
    pub id: u32,
    pub slug: &'static str,
    /// 韓国語の表示名（正規名）
    pub ko: &'static str,
    pub en: &'static str,
}

const fn entry(id: u32, slug: &'static str, ko: &'static str, en: &'static str) -> StyleEntry {
    StyleEntry { id, slug, ko, en }
}

/// 組み込みスタイル一覧
pub const INTERIOR_STYLES: [StyleEntry; 31] = [
    entry(1, "modern", "모던", "Modern Interior"),
    entry(2, "minimalist", "미니멀리즘", "Minimalist Interior"),
    entry(3, "scandinavian", "스칸디나비아/북유럽", "Scandinavian Home"),
    entry(4, "industrial_loft", "인더스트리얼", "Industrial Loft"),
    entry(5, "classic", "클래식", "Classic Interior Design"),
    entry(6, "modern_classic", "모던 클래식", "Modern Classic Home"),
    entry(7, "vintage", "빈티지", "Vintage Home Decor"),
    entry(8, "retro", "레트로", "Retro Style Interior"),
    entry(9, "natural_zen", "내추럴/젠", "Natural Zen Interior"),
    entry(10, "japandi", "재팬디", "Japandi Style"),
    entry(11, "rustic", "러스틱", "Rustic Farmhouse"),
    entry(12, "farmhouse", "팜하우스", "Modern Farmhouse"),
    entry(13, "shabby_chic", "셰비 시크", "Shabby Chic Style"),
    entry(14, "art_deco", "아르데코", "Art Deco Design"),
    entry(15, "mid_century_modern", "미드 센추리 모던", "Mid-Century Modern Home"),
    entry(16, "boho_chic", "보헤미안/보호", "Boho Chic Interior"),
    entry(17, "greek_revival", "그리스 리바이벌", "Greek Revival Interior"),
    entry(18, "art_nouveau", "아르누보", "Art Nouveau Interior"),
    entry(19, "coastal", "코스탈/해안", "Coastal Home Decor"),
    entry(20, "swiss_chalet", "스위스 샬레", "Swiss Chalet Interior"),
    entry(21, "egyptian", "이집트", "Egyptian Home Decor"),
    entry(22, "asian_zen", "젠 아시아", "Asian Zen Decor"),
    entry(23, "maximalist", "맥시멀리즘", "Maximalist Decor"),
    entry(24, "kitsch", "키치", "Kitsch Decor Style"),
    entry(25, "biophilic", "바이오필릭", "Biophilic Design Home"),
    entry(26, "color_block", "컬러 블록", "Color Block Interior"),
    entry(27, "monochromatic", "모노크로매틱", "Monochromatic Room"),
    entry(28, "pop_art", "팝 아트", "Pop Art Interior"),
    entry(29, "grandmillennial", "그랜디시", "Grandmillennial Style"),
    entry(30, "masculine", "매시큘린", "Masculine Interior Design"),
    entry(31, "feminine", "페미닌", "Feminine Room Decor"),
];

lazy_static! {
    static ref BUILTIN: StyleCatalog = StyleCatalog::new(&INTERIOR_STYLES);
}

/// 検索キー（id または 名前）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKey<'a> {
    Id(u32),
    Name(&'a str),
}

impl From<u32> for StyleKey<'_> {
    fn from(id: u32) -> Self {
        StyleKey::Id(id)
    }
}

impl<'a> From<&'a str> for StyleKey<'a> {
    fn from(name: &'a str) -> Self {
        StyleKey::Name(name)
    }
}

impl<'a> From<&'a String> for StyleKey<'a> {
    fn from(name: &'a String) -> Self {
        StyleKey::Name(name.as_str())
    }
}

impl std::fmt::Display for StyleKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleKey::Id(id) => write!(f, "{}", id),
            StyleKey::Name(name) => write!(f, "{}", name),
        }
    }
}

/// スタイルカタログ（読み取り専用）
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    entries: Vec<StyleEntry>,
    by_id: HashMap<u32, usize>,
    by_ko: HashMap<&'static str, usize>,
    by_en: HashMap<&'static str, usize>,
    by_slug: HashMap<&'static str, usize>,
}

impl StyleCatalog {
    /// 任意のエントリ列からカタログを構築
    ///
    /// 同じキーが重複した場合は先のエントリを優先する。
    pub fn new(entries: &[StyleEntry]) -> Self {
        let mut by_id = HashMap::new();
        let mut by_ko = HashMap::new();
        let mut by_en = HashMap::new();
        let mut by_slug = HashMap::new();

        for (idx, style) in entries.iter().enumerate() {
            by_id.entry(style.id).or_insert(idx);
            by_ko.entry(style.ko).or_insert(idx);
            by_en.entry(style.en).or_insert(idx);
            by_slug.entry(style.slug).or_insert(idx);
        }

        Self {
            entries: entries.to_vec(),
            by_id,
            by_ko,
            by_en,
            by_slug,
        }
    }

    /// 組み込みカタログ（プロセス内で1度だけ構築）
    pub fn builtin() -> &'static StyleCatalog {
        &BUILTIN
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// スタイルを検索
    ///
    /// 文字列の解決順:
    /// 1. 全体が数字 → id として検索
    /// 2. 韓国語名
    /// 3. 英語名
    /// 4. slug
    ///
    /// 前後の空白のみ除去し、それ以外は完全一致。
    pub fn find<'k>(&self, key: impl Into<StyleKey<'k>>) -> Option<&StyleEntry> {
        match key.into() {
            StyleKey::Id(id) => self.by_id.get(&id).map(|&idx| &self.entries[idx]),
            StyleKey::Name(name) => {
                let name = name.trim();

                if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
                    // 桁あふれは該当なし
                    return name.parse::<u32>().ok().and_then(|id| self.find(id));
                }

                self.by_ko
                    .get(name)
                    .or_else(|| self.by_en.get(name))
                    .or_else(|| self.by_slug.get(name))
                    .map(|&idx| &self.entries[idx])
            }
        }
    }

    /// 正規名（韓国語名）に変換
    ///
    /// 見つからない場合は `Error::UnknownStyle`
    pub fn normalize<'k>(&self, key: impl Into<StyleKey<'k>>) -> Result<&'static str> {
        let key = key.into();
        self.find(key)
            .map(|style| style.ko)
            .ok_or_else(|| Error::UnknownStyle(key.to_string()))
    }

    pub fn contains<'k>(&self, key: impl Into<StyleKey<'k>>) -> bool {
        self.find(key).is_some()
    }

    /// ターミナル表示用
    ///
    /// ```text
    /// [1] 모던 (Modern Interior)
    /// [2] 미니멀리즘 (Minimalist Interior)
    /// ```
    pub fn list_for_cli(&self) -> String {
        self.entries
            .iter()
            .map(|s| format!("[{}] {} ({})", s.id, s.ko, s.en))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// プロンプト埋め込み用
    ///
    /// ```text
    /// - 모던 (Modern Interior)
    /// - 미니멀리즘 (Minimalist Interior)
    /// ```
    pub fn format_for_prompt(&self) -> String {
        self.entries
            .iter()
            .map(|s| format!("- {} ({})", s.ko, s.en))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
