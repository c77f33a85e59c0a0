use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("폴더를 찾을 수 없습니다: {0}")]
    FolderNotFound(String),

    #[error("리포트 파일(.txt)이 없습니다: {0}")]
    NoReportsFound(String),

    #[error("입력 처리 오류: {0}")]
    Prompt(String),

    #[error("JSON 처리 오류: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] interior_report_common::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
