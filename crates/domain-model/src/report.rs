use serde::{Deserialize, Serialize};

use crate::DirectorySizeEntry;
use crate::FileRecord;
use crate::HistogramBin;
use crate::SizeCounts;

/// 交给展示层的完整视图模型，一次性给出，展示层不回查引擎
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub summary: ReportSummary,
    /// 按聚合大小降序的目录列表（根目录恒在列，零值目录除根外已滤除）
    pub directories: Vec<DirectorySizeEntry>,
    pub bins: Vec<HistogramBin>,
    pub page: FilePage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub scanned_path: String,
    pub file_count: u64,
    pub total_size: u64,
    /// total_size 的人类可读形式（如 "1.50 KB"）
    pub total_size_human: String,
    /// 扫描器给出的累计阈值计数原值
    pub size_counts: SizeCounts,
}

/// 文件榜单当前分页与分页元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePage {
    pub files: Vec<FileRecord>,
    pub current_page: usize,
    pub page_count: usize,
    /// 过滤后的文件总数（非本页条数）
    pub filtered_count: usize,
    pub min_size: u64,
}
