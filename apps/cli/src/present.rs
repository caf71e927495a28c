//! 文本与 JSON 两种展示：只消费引擎给出的视图模型，不回查引擎状态。

use std::io::Write;

use disk_viewer_domain::ReportView;
use disk_viewer_engine::{format_bytes, normalize_path, Presenter};

/// 纯文本报告
pub struct TextPresenter<W: Write> {
    out: W,
    top_dirs: usize,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, top_dirs: usize) -> Self {
        Self { out, top_dirs }
    }

    fn render(&mut self, view: &ReportView) -> std::io::Result<()> {
        let summary = &view.summary;
        writeln!(self.out, "Scanned path: {}", summary.scanned_path)?;
        writeln!(self.out, "Total files:  {}", summary.file_count)?;
        writeln!(self.out, "Total size:   {}", summary.total_size_human)?;

        let c = &summary.size_counts;
        writeln!(self.out)?;
        writeln!(self.out, "Size counts:")?;
        writeln!(self.out, "  < 1 KB:   {}", c.count_less_1kb)?;
        writeln!(self.out, "  > 1 KB:   {}", c.count_more_1kb)?;
        writeln!(self.out, "  > 1 MB:   {}", c.count_more_1mb)?;
        writeln!(self.out, "  > 5 MB:   {}", c.count_more_5mb)?;
        writeln!(self.out, "  > 100 MB: {}", c.count_more_100mb)?;
        writeln!(self.out, "  > 512 MB: {}", c.count_more_512mb)?;
        writeln!(self.out, "  > 1 GB:   {}", c.count_more_1gb)?;

        writeln!(self.out)?;
        writeln!(self.out, "File size distribution:")?;
        for bin in &view.bins {
            writeln!(self.out, "  {:<16} {}", bin.label, bin.count)?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "Top directories:")?;
        // 根目录条目与零值条目不进目录榜
        let root = normalize_path(&summary.scanned_path);
        let top: Vec<_> = view
            .directories
            .iter()
            .filter(|d| d.size > 0 && d.path != root)
            .take(self.top_dirs)
            .collect();
        if top.is_empty() {
            writeln!(self.out, "  No significant directories found.")?;
        } else {
            for dir in top {
                writeln!(self.out, "  {:>10}  {}", format_bytes(dir.size), dir.path)?;
            }
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "Largest files (>= {}):",
            format_bytes(view.page.min_size)
        )?;
        if view.page.files.is_empty() {
            writeln!(self.out, "  No files found meeting the current criteria.")?;
        } else {
            for file in &view.page.files {
                writeln!(self.out, "  {:>10}  {}", format_bytes(file.size), file.name)?;
            }
        }
        writeln!(
            self.out,
            "Page {} of {} ({} files)",
            view.page.current_page, view.page.page_count, view.page.filtered_count
        )?;
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, view: &ReportView) {
        // stdout 写失败（如管道关闭）没有可行的补救
        let _ = self.render(view);
    }
}

/// 完整视图模型的 JSON 输出
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, view: &ReportView) {
        match serde_json::to_string_pretty(view) {
            Ok(json) => {
                let _ = writeln!(self.out, "{}", json);
            }
            Err(e) => log::error!("cannot serialize report: {}", e),
        }
    }
}
