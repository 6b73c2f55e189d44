//! generate サブコマンド
//!
//! ディレクトリの静的index.htmlを生成します。

use crate::common::error::PortalResult;
use crate::common::ip::detect_local_ip;
use crate::indexer;
use clap::Args;
use std::path::PathBuf;

/// generate サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory to index
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Output file (default: <DIRECTORY>/index.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Authentication service base URL (default: http://<detected-ip>:<port>)
    #[arg(long, env = "FILEPORTAL_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Service port used when building the default base URL
    #[arg(short, long, default_value = "8360", env = "FILEPORTAL_PORT")]
    pub port: u16,
}

/// generate サブコマンドを実行
pub fn execute(args: &GenerateArgs) -> PortalResult<()> {
    let service_base_url = match &args.service_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => {
            let ip = detect_local_ip();
            tracing::info!("Detected local address: {}", ip);
            format!("http://{}:{}", ip, args.port)
        }
    };

    let report = indexer::generate_index(
        &args.directory,
        args.output.as_deref(),
        &service_base_url,
    )?;

    println!(
        "Generated {} ({} files)",
        report.output_path.display(),
        report.file_count
    );
    println!("Authentication service: {}", report.service_base_url);
    Ok(())
}
