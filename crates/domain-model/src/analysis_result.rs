use serde::{Deserialize, Serialize};

use crate::FileRecord;
use crate::SizeCounts;

/// 一次分析请求的扫描结果，扫描器产出后不再变更
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub files: Vec<FileRecord>,
    pub size_counts: SizeCounts,
    /// 本次扫描到的文件总大小（字节）
    pub total_size: u64,
    pub file_count: u64,
    pub scanned_path: String,
}
