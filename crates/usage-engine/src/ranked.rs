//! 文件榜单控制器：持有过滤阈值与分页状态，对外只暴露当前可见分页。
//! 每次阈值变化或载入新文件集都从头重算过滤结果并回到第 1 页。

use disk_viewer_domain::FileRecord;

/// 每页固定条数
pub const PAGE_SIZE: usize = 20;

/// 按大小降序、可过滤、可翻页的文件榜单
#[derive(Debug)]
pub struct RankedFileList {
    files: Vec<FileRecord>,
    /// 指向 files 的下标，已按大小稳定降序
    filtered: Vec<usize>,
    min_size: u64,
    current_page: usize,
}

impl Default for RankedFileList {
    fn default() -> Self {
        Self::new()
    }
}

impl RankedFileList {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            filtered: Vec::new(),
            min_size: 0,
            current_page: 1,
        }
    }

    /// 载入新的文件集合，用当前阈值重新过滤并回到第 1 页
    pub fn load(&mut self, files: Vec<FileRecord>) {
        self.files = files;
        self.refilter();
    }

    /// 设置最小大小阈值，重新过滤并回到第 1 页
    pub fn set_threshold(&mut self, min_size: u64) {
        self.min_size = min_size;
        self.refilter();
    }

    fn refilter(&mut self) {
        let min_size = self.min_size;
        let mut filtered: Vec<usize> = (0..self.files.len())
            .filter(|&i| self.files[i].size >= min_size)
            .collect();
        // 稳定排序：同大小保持输入相对顺序
        filtered.sort_by(|&a, &b| self.files[b].size.cmp(&self.files[a].size));
        self.filtered = filtered;
        self.current_page = 1;
    }

    pub fn min_size(&self) -> u64 {
        self.min_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// 过滤后的文件总数
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// 总页数，空结果也至少 1 页
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// 跳到第 n 页；越界的请求直接忽略
    pub fn set_page(&mut self, n: usize) {
        if (1..=self.page_count()).contains(&n) {
            self.current_page = n;
        }
    }

    /// 下一页，已在末页时不动
    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    /// 上一页，已在首页时不动
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.set_page(self.current_page - 1);
        }
    }

    /// 当前页的文件，最多 PAGE_SIZE 条
    pub fn current_slice(&self) -> Vec<&FileRecord> {
        let start = (self.current_page - 1) * PAGE_SIZE;
        self.filtered
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|&i| &self.files[i])
            .collect()
    }
}
