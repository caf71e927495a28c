//! 分析会话：一次分析请求的全部派生状态由调用方持有，
//! 不使用任何模块级可变状态。载入新结果即整体重算，后载入者覆盖先载入者，
//! 并发请求的先后序由调用方自行保证。

use disk_viewer_domain::{
    AnalysisResult, DirectorySizeEntry, FilePage, HistogramBin, ReportSummary, ReportView,
    SizeCounts,
};

use crate::aggregate::aggregate_directory_sizes;
use crate::format::format_bytes;
use crate::histogram::build_size_bins;
use crate::ranked::RankedFileList;

/// 一次分析请求的会话状态：摘要、目录榜、直方图分档与文件榜单
#[derive(Debug)]
pub struct AnalysisSession {
    scanned_path: String,
    file_count: u64,
    total_size: u64,
    size_counts: SizeCounts,
    directories: Vec<DirectorySizeEntry>,
    bins: Vec<HistogramBin>,
    list: RankedFileList,
}

impl AnalysisSession {
    /// 载入扫描结果并一次性完成全部派生计算。
    /// size 为 0 的文件条目在此丢弃，不参与聚合、过滤与分页；
    /// 扫描器给出的汇总计数照单全收。
    pub fn load(result: AnalysisResult) -> Self {
        let files: Vec<_> = result
            .files
            .into_iter()
            .filter(|f| f.size > 0)
            .collect();
        let directories = aggregate_directory_sizes(&files, &result.scanned_path);
        let bins = build_size_bins(&result.size_counts);
        let mut list = RankedFileList::new();
        list.load(files);
        Self {
            scanned_path: result.scanned_path,
            file_count: result.file_count,
            total_size: result.total_size,
            size_counts: result.size_counts,
            directories,
            bins,
            list,
        }
    }

    pub fn set_threshold(&mut self, min_size: u64) {
        self.list.set_threshold(min_size);
    }

    pub fn set_page(&mut self, n: usize) {
        self.list.set_page(n);
    }

    pub fn next_page(&mut self) {
        self.list.next_page();
    }

    pub fn prev_page(&mut self) {
        self.list.prev_page();
    }

    /// 从当前状态派生视图模型；不改动会话本身
    pub fn report(&self) -> ReportView {
        ReportView {
            summary: ReportSummary {
                scanned_path: self.scanned_path.clone(),
                file_count: self.file_count,
                total_size: self.total_size,
                total_size_human: format_bytes(self.total_size),
                size_counts: self.size_counts,
            },
            directories: self.directories.clone(),
            bins: self.bins.clone(),
            page: FilePage {
                files: self.list.current_slice().into_iter().cloned().collect(),
                current_page: self.list.current_page(),
                page_count: self.list.page_count(),
                filtered_count: self.list.filtered_count(),
                min_size: self.list.min_size(),
            },
        }
    }
}

/// 展示层能力：消费完整视图模型，一次调用完成渲染
pub trait Presenter {
    fn present(&mut self, view: &ReportView);
}
