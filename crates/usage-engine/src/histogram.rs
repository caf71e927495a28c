//! 从累计阈值计数推出七个互斥分档：相邻阈值相减，负差截断为 0。

use disk_viewer_domain::{HistogramBin, SizeCounts};

/// count 为 0 的档在对数坐标上不可画，display_value 用此最小正值代替
pub const BIN_EPSILON: f64 = 0.1;

/// 七个固定分档的标签，顺序即展示顺序
pub const BIN_LABELS: [&str; 7] = [
    "< 1 KB",
    "1 KB - 1 MB",
    "1 MB - 5 MB",
    "5 MB - 100 MB",
    "100 MB - 512 MB",
    "512 MB - 1 GB",
    "> 1 GB",
];

/// 由累计计数构建七个分档，标签与顺序固定。
/// 注意：`512 MB - 1 GB` 档沿用上游口径，不减去 count_more_1gb，
/// 因此 count_more_1gb > 0 时该档会重复计入 >1GB 的文件。
pub fn build_size_bins(counts: &SizeCounts) -> Vec<HistogramBin> {
    let raw = [
        counts.count_less_1kb,
        counts.count_more_1kb.saturating_sub(counts.count_more_1mb),
        counts.count_more_1mb.saturating_sub(counts.count_more_5mb),
        counts.count_more_5mb.saturating_sub(counts.count_more_100mb),
        counts
            .count_more_100mb
            .saturating_sub(counts.count_more_512mb),
        counts.count_more_512mb,
        counts.count_more_1gb,
    ];
    BIN_LABELS
        .iter()
        .zip(raw)
        .map(|(label, count)| HistogramBin {
            label: label.to_string(),
            count,
            display_value: if count == 0 { BIN_EPSILON } else { count as f64 },
        })
        .collect()
}
