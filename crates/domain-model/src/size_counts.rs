use serde::{Deserialize, Serialize};

/// 全量文件的累计大小计数：count_less_1kb 为 < 1KB 的文件数，
/// 其余字段为 > 对应阈值的文件数（累计口径，非互斥分档）。
/// 各字段独立缺省为 0，缺字段不视为错误。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeCounts {
    #[serde(rename = "countLess1KB", default)]
    pub count_less_1kb: u64,
    #[serde(rename = "countMore1KB", default)]
    pub count_more_1kb: u64,
    #[serde(rename = "countMore1MB", default)]
    pub count_more_1mb: u64,
    #[serde(rename = "countMore5MB", default)]
    pub count_more_5mb: u64,
    #[serde(rename = "countMore100MB", default)]
    pub count_more_100mb: u64,
    #[serde(rename = "countMore512MB", default)]
    pub count_more_512mb: u64,
    #[serde(rename = "countMore1GB", default)]
    pub count_more_1gb: u64,
}
