//! ディレクトリ走査とファイル分類

use crate::common::error::PortalResult;
use std::path::Path;

/// 一覧から除外するファイル（サービス自身のデータファイル）
pub const BLOCKLIST: &[&str] = &["users.json", "access_log.json"];

/// 生成する出力ファイル名（自分自身も一覧から除外する）
pub const OUTPUT_FILENAME: &str = "index.html";

/// ファイル分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 動画
    Video,
    /// ソースコード
    Code,
    /// 画像
    Image,
    /// ドキュメント
    Document,
    /// アーカイブ
    Archive,
    /// その他
    Other,
}

impl FileKind {
    /// ファイル名（拡張子）から分類を決める
    pub fn from_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "mp4" | "avi" | "mov" | "wmv" | "flv" | "webm" => Self::Video,
            "py" | "js" | "html" | "css" | "java" | "c" | "cpp" | "php" | "rb" | "go" | "rs" => {
                Self::Code
            }
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" => Self::Image,
            "pdf" | "doc" | "docx" | "txt" | "rtf" => Self::Document,
            "zip" | "rar" | "7z" | "tar" | "gz" => Self::Archive,
            _ => Self::Other,
        }
    }

    /// Font Awesomeのアイコンクラス
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Video => "fas fa-file-video",
            Self::Code => "fas fa-file-code",
            Self::Image => "fas fa-file-image",
            Self::Document => "fas fa-file-alt",
            Self::Archive => "fas fa-file-archive",
            Self::Other => "fas fa-file",
        }
    }

    /// 表示用カテゴリ名
    pub fn label(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Code => "Code",
            Self::Image => "Image",
            Self::Document => "Document",
            Self::Archive => "Archive",
            Self::Other => "File",
        }
    }
}

/// 一覧対象のファイル
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// ファイル名
    pub name: String,
    /// サイズ（バイト）
    pub size: u64,
    /// 分類
    pub kind: FileKind,
}

impl FileEntry {
    /// 表示用拡張子（大文字、ドットなし）
    pub fn ext_label(&self) -> String {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_uppercase())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| "FILE".to_string())
    }

    /// 人間可読のサイズ表記
    pub fn human_size(&self) -> String {
        human_size(self.size)
    }
}

/// バイト数を人間可読の表記に変換する
pub fn human_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut value = size as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} TB", value)
}

/// ディレクトリを走査して一覧対象ファイルを返す
///
/// ドットファイル、出力ファイル自身、ブロックリストを除外する。
/// ディレクトリは対象外。結果は名前順。
pub fn scan_directory(dir: &Path) -> PortalResult<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            // 非UTF-8名はリンクを張れないのでスキップ
            Err(_) => continue,
        };
        if name.starts_with('.')
            || name == OUTPUT_FILENAME
            || BLOCKLIST.contains(&name.as_str())
        {
            continue;
        }
        entries.push(FileEntry {
            kind: FileKind::from_name(&name),
            size: metadata.len(),
            name,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
