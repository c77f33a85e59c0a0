//! Interior Report Common Library
//!
//! インテリア分析レポートの解析エンジン
//!
//! - レポート本文をセクションに分割し、型付きの ReportRecord に変換
//! - 壊れた・重複したテキストから雰囲気の説明を復旧
//! - インテリアスタイルカタログによる名前の正規化

pub mod types;
pub mod error;
pub mod catalog;
pub mod cleaner;
pub mod segmenter;
pub mod extract;
pub mod recovery;
pub mod parser;
pub mod style_prompt;
pub mod legacy;

pub use types::{
    BasisKey, FurnitureChange, FurnitureItem, MoodDetail, RecommendedStyle, ReportRecord, Summary,
    SummaryLine,
};
pub use error::{Error, Result};
pub use catalog::{StyleCatalog, StyleEntry, StyleKey, INTERIOR_STYLES};
pub use cleaner::clean;
pub use segmenter::{segment, SectionKind, Sections};
pub use recovery::{recover_mood_descriptions, FURNITURE_NOUN_REJECT_LIST, MOOD_KEY_ALLOW_LIST};
pub use parser::{parse_report, ReportParser, ResolvedStyle};
pub use style_prompt::{parse_style_input, StyleRequest};
pub use legacy::{extract_furniture_by_mood, LegacyFurniture};
