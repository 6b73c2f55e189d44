//! インデックスページのレンダリング
//!
//! テンプレートのプレースホルダーを置換して静的HTMLを生成する

use super::scan::{FileEntry, FileKind};

// 生成ページ本体。プレースホルダーは {{NAME}} 形式。
const PAGE_TEMPLATE: &str = include_str!("template.html");

const FILE_CARD_TEMPLATE: &str = r#"                <div class="file-card">
                    <div class="file-card-header">
                        <i class="{{ICON_CLASS}}"></i>
                        <div>{{KIND_LABEL}}</div>
                    </div>
                    <div class="file-card-body">
                        <div class="file-name">{{FILE_NAME}}</div>
                        <div class="file-meta">
                            <span>{{EXT_LABEL}}</span>
                            <span>{{FILE_SIZE}}</span>
                        </div>
                    </div>
                    <div class="file-card-footer">
                        <a href="{{FILE_HREF}}" class="download-btn" data-filename="{{FILE_NAME}}">Open</a>
                    </div>
                </div>
"#;

/// HTML特殊文字をエスケープする
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn count_kind(files: &[FileEntry], kind: FileKind) -> usize {
    files.iter().filter(|f| f.kind == kind).count()
}

fn render_card(file: &FileEntry) -> String {
    let name = escape_html(&file.name);
    FILE_CARD_TEMPLATE
        .replace("{{ICON_CLASS}}", file.kind.icon_class())
        .replace("{{KIND_LABEL}}", file.kind.label())
        .replace("{{FILE_NAME}}", &name)
        .replace("{{FILE_HREF}}", &name)
        .replace("{{EXT_LABEL}}", &escape_html(&file.ext_label()))
        .replace("{{FILE_SIZE}}", &file.human_size())
}

/// index.htmlの内容を生成する
///
/// `service_base_url` は認証サービスのベースURL（例: `http://192.168.1.10:8360`）。
pub fn render_index(files: &[FileEntry], service_base_url: &str) -> String {
    let mut cards = String::new();
    for file in files {
        cards.push_str(&render_card(file));
    }

    PAGE_TEMPLATE
        .replace("{{SERVICE_BASE_URL}}", service_base_url)
        .replace("{{TOTAL_COUNT}}", &files.len().to_string())
        .replace(
            "{{VIDEO_COUNT}}",
            &count_kind(files, FileKind::Video).to_string(),
        )
        .replace(
            "{{CODE_COUNT}}",
            &count_kind(files, FileKind::Code).to_string(),
        )
        .replace("{{FILE_CARDS}}", &cards)
}
