//! インデックス生成の統合テスト

use fileportal::indexer;

#[test]
fn generated_index_lists_exactly_visible_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("movie.mp4"), vec![0u8; 4096]).unwrap();
    std::fs::write(dir.path().join(".hidden"), "secret").unwrap();
    std::fs::write(dir.path().join("users.json"), "{}").unwrap();
    std::fs::write(dir.path().join("access_log.json"), "[]").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested/inner.txt"), "x").unwrap();

    let report =
        indexer::generate_index(dir.path(), None, "http://192.168.1.10:8360").unwrap();

    assert_eq!(report.file_count, 2);

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("notes.txt"));
    assert!(html.contains("movie.mp4"));
    assert!(!html.contains(".hidden"));
    assert!(!html.contains("users.json"));
    assert!(!html.contains("access_log.json"));
    // サブディレクトリ内は一覧しない
    assert!(!html.contains("inner.txt"));
}

#[test]
fn generated_index_embeds_service_address() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "x").unwrap();

    indexer::generate_index(dir.path(), None, "http://10.1.2.3:8360").unwrap();

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("const SERVICE_BASE_URL = 'http://10.1.2.3:8360';"));
    // 生成ページが叩くエンドポイントが全て埋め込まれている
    assert!(html.contains("/check_auth"));
    assert!(html.contains("/login"));
    assert!(html.contains("/logout"));
    assert!(html.contains("/access_logs"));
    assert!(html.contains("/log_file_access"));
}

#[test]
fn regenerating_does_not_list_previous_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "x").unwrap();

    let first = indexer::generate_index(dir.path(), None, "http://127.0.0.1:8360").unwrap();
    assert_eq!(first.file_count, 1);

    let second =
        indexer::generate_index(dir.path(), None, "http://127.0.0.1:8360").unwrap();
    assert_eq!(second.file_count, 1);

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(!html.contains("class=\"file-name\">index.html"));
}

#[test]
fn file_metadata_is_rendered_into_cards() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("archive.zip"), vec![0u8; 2048]).unwrap();

    indexer::generate_index(dir.path(), None, "http://127.0.0.1:8360").unwrap();

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("fas fa-file-archive"));
    assert!(html.contains("2.0 KB"));
    assert!(html.contains("ZIP"));
}
