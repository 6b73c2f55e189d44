//! 静的インデックス生成
//!
//! ディレクトリを走査し、認証サービスを指す静的なindex.htmlを生成する。
//! サービスではなくオンデマンドで再実行する。

/// ディレクトリ走査とファイル分類
pub mod scan;

/// HTMLレンダリング
pub mod render;

use crate::common::error::PortalResult;
use std::path::{Path, PathBuf};

/// 生成結果
#[derive(Debug)]
pub struct GenerateReport {
    /// 一覧に含めたファイル数
    pub file_count: usize,
    /// 書き出したパス
    pub output_path: PathBuf,
    /// ページに埋め込んだ認証サービスのベースURL
    pub service_base_url: String,
}

/// ディレクトリのindex.htmlを生成する
///
/// `output` が未指定なら `<directory>/index.html` に書き出す。
pub fn generate_index(
    directory: &Path,
    output: Option<&Path>,
    service_base_url: &str,
) -> PortalResult<GenerateReport> {
    let files = scan::scan_directory(directory)?;
    let html = render::render_index(&files, service_base_url);

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => directory.join(scan::OUTPUT_FILENAME),
    };
    std::fs::write(&output_path, html)?;

    tracing::info!(
        "Generated {} with {} files",
        output_path.display(),
        files.len()
    );

    Ok(GenerateReport {
        file_count: files.len(),
        output_path,
        service_base_url: service_base_url.to_string(),
    })
}
