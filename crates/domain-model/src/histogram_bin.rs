use serde::{Deserialize, Serialize};

/// 直方图分档。count 为真实文件数；display_value 仅供对数坐标绘图使用，
/// count 为 0 时取一个小的正 epsilon，标签与提示必须用 count。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub label: String,
    pub count: u64,
    pub display_value: f64,
}
