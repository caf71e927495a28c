use disk_viewer_domain::{AnalysisResult, FileRecord, ReportView, SizeCounts};
use disk_viewer_engine::{AnalysisSession, Presenter, PAGE_SIZE};

struct CapturePresenter {
    last: Option<ReportView>,
}

impl Presenter for CapturePresenter {
    fn present(&mut self, view: &ReportView) {
        self.last = Some(view.clone());
    }
}

fn record(name: &str, size: u64) -> FileRecord {
    FileRecord {
        name: name.to_string(),
        size,
        ext: ".bin".to_string(),
    }
}

fn build_result() -> AnalysisResult {
    // 45 个文件分布在三层目录里
    let mut files = Vec::new();
    for i in 0..30 {
        files.push(record(&format!("/srv/data/flat/f{}.bin", i), 1000 + i));
    }
    for i in 0..15 {
        files.push(record(&format!("/srv/data/nested/deep/g{}.bin", i), 10_000 + i));
    }
    let total_size: u64 = files.iter().map(|f| f.size).sum();
    let file_count = files.len() as u64;
    AnalysisResult {
        files,
        size_counts: SizeCounts {
            count_less_1kb: 25,
            count_more_1kb: 20,
            ..Default::default()
        },
        total_size,
        file_count,
        scanned_path: "/srv/data".to_string(),
    }
}

#[test]
fn test_full_report_flow() {
    let result = build_result();
    let expected_total = result.total_size;
    let mut session = AnalysisSession::load(result);
    session.set_threshold(0);
    session.set_page(2);

    let mut presenter = CapturePresenter { last: None };
    presenter.present(&session.report());
    let view = presenter.last.expect("presenter captured a view");

    assert_eq!(view.summary.scanned_path, "/srv/data");
    assert_eq!(view.summary.file_count, 45);

    // 目录聚合：根守恒，子目录逐层累计
    let dir = |p: &str| {
        view.directories
            .iter()
            .find(|d| d.path == p)
            .unwrap_or_else(|| panic!("no entry for {}", p))
            .size
    };
    assert_eq!(dir("/srv/data"), expected_total);
    assert_eq!(dir("/srv/data/nested"), dir("/srv/data/nested/deep"));

    // 分页：45 个文件 3 页，第 2 页满页
    assert_eq!(view.page.page_count, 3);
    assert_eq!(view.page.current_page, 2);
    assert_eq!(view.page.files.len(), PAGE_SIZE);
    assert_eq!(view.page.filtered_count, 45);

    // 文件按大小降序，第 2 页首条不大于第 1 页末条
    assert!(view.page.files.windows(2).all(|w| w[0].size >= w[1].size));

    assert_eq!(view.bins.len(), 7);
    assert_eq!(view.bins[0].count, 25);
    assert_eq!(view.bins[1].count, 20);
}

#[test]
fn test_threshold_reset_seen_through_view() {
    let mut session = AnalysisSession::load(build_result());
    session.set_page(3);
    assert_eq!(session.report().page.current_page, 3);

    // 改阈值回到第 1 页
    session.set_threshold(10_000);
    let view = session.report();
    assert_eq!(view.page.current_page, 1);
    assert_eq!(view.page.filtered_count, 15);
    assert_eq!(view.page.page_count, 1);
}
