use serde::{Deserialize, Serialize};

/// 扫描器上报的单个文件条目，路径统一为正斜杠分隔的绝对路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub size: u64,
    /// 小写扩展名标签（如 ".txt"、"<no ext>"），目前仅随数据透传
    #[serde(default)]
    pub ext: String,
}
