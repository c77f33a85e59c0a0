//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 欠落セクションや不正な行はエラーにしない（空フィールドとして扱う）。
/// 失敗として返すのはカタログ正規化とJSON変換のみ。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown interior style: {0}")]
    UnknownStyle(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
