use serde::{Deserialize, Serialize};

/// 目录聚合条目：path 为无结尾分隔符的规范化路径，
/// size 为该目录直接文件字节数加上所有后代目录的聚合字节数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySizeEntry {
    pub path: String,
    pub size: u64,
}
