//! フォルダ内レポートの一括解析

use crate::error::{ReportError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use interior_report_common::{ReportParser, ReportRecord};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const REPORT_EXTENSIONS: &[&str] = &["txt", "md", "TXT", "MD"];

/// 1件分の結果
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    /// 値が入ったフィールド名
    pub populated: Vec<&'static str>,
}

fn is_report_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            REPORT_EXTENSIONS.iter().any(|&e| e == ext)
        })
        .unwrap_or(false)
}

/// レポートファイルを探す（ファイル名順）
pub fn find_reports(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ReportError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut reports: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_report_file(e.path()))
        .map(|e| e.into_path())
        .collect();

    reports.sort();
    Ok(reports)
}

/// 1ファイルを解析
pub fn parse_file(path: &Path) -> Result<ReportRecord> {
    if !path.is_file() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    Ok(ReportParser::default().parse(&text))
}

fn parse_and_write(path: &Path) -> Result<BatchOutcome> {
    let record = parse_file(path)?;
    let output = path.with_extension("json");
    std::fs::write(&output, record.to_json_pretty()?)?;

    Ok(BatchOutcome {
        input: path.to_path_buf(),
        output,
        populated: record.populated_fields(),
    })
}

/// フォルダ内のレポートを並列に解析し、隣に `<stem>.json` を書き出す
///
/// 読めなかったファイルは警告を出して飛ばす。
pub fn parse_folder(folder: &Path, recursive: bool, show_progress: bool) -> Result<Vec<BatchOutcome>> {
    let reports = find_reports(folder, recursive)?;
    if reports.is_empty() {
        return Err(ReportError::NoReportsFound(folder.display().to_string()));
    }
    debug!(count = reports.len(), "一括解析開始");

    let pb = if show_progress {
        ProgressBar::new(reports.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let outcomes: Vec<BatchOutcome> = reports
        .par_iter()
        .filter_map(|path| {
            let result = parse_and_write(path);
            pb.inc(1);
            match result {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "解析スキップ");
                    None
                }
            }
        })
        .collect();

    pb.finish_and_clear();
    Ok(outcomes)
}
