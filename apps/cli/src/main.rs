mod present;

use std::time::Instant;

use clap::Parser;
use disk_viewer_common::{DiskViewerError, ReportOptions};
use disk_viewer_engine::{AnalysisSession, Presenter};
use disk_viewer_scanner::{analyze_directory, is_valid_scan_path};
use log::info;

use present::{JsonPresenter, TextPresenter};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Analyze disk usage under a directory: per-directory rollups, a file-size histogram, and the largest files."
)]
struct Args {
    /// 要分析的目录（绝对路径）
    path: String,

    /// 文件榜单的最小文件大小（字节）
    #[arg(long, default_value_t = ReportOptions::default().min_size)]
    min_size: u64,

    /// 文件榜单页码（从 1 开始）
    #[arg(long, default_value_t = ReportOptions::default().page)]
    page: usize,

    /// 目录榜最多展示条数
    #[arg(long, default_value_t = ReportOptions::default().top_dirs)]
    top_dirs: usize,

    /// 输出完整 JSON 报告
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DiskViewerError> {
    let path = args.path.trim();
    if path.is_empty() {
        return Err(DiskViewerError::InvalidPath(
            "missing directory path".to_string(),
        ));
    }
    if !is_valid_scan_path(path) {
        return Err(DiskViewerError::InvalidPath(format!(
            "invalid or disallowed path: {}",
            path
        )));
    }
    let options = ReportOptions {
        min_size: args.min_size,
        top_dirs: args.top_dirs,
        page: args.page,
    };

    info!("scan start, path: {}", path);
    let start = Instant::now();
    let result = analyze_directory(path)?;
    info!(
        "scan done in {:?}, path: {}, file_count: {}, total_size: {}",
        start.elapsed(),
        path,
        result.file_count,
        result.total_size
    );

    let mut session = AnalysisSession::load(result);
    session.set_threshold(options.min_size);
    session.set_page(options.page);
    let view = session.report();

    let stdout = std::io::stdout();
    if args.json {
        JsonPresenter::new(stdout.lock()).present(&view);
    } else {
        TextPresenter::new(stdout.lock(), options.top_dirs).present(&view);
    }
    Ok(())
}
