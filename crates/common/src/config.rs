/// 报告展示选项
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// 文件榜单的最小文件大小（字节）
    pub min_size: u64,
    /// 目录榜最多展示条数
    pub top_dirs: usize,
    /// 文件榜单页码（从 1 开始）
    pub page: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            min_size: 1024 * 1024,
            top_dirs: 20,
            page: 1,
        }
    }
}
