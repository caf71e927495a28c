//! 目录扫描：递归遍历给定根目录，产出平面文件清单与汇总计数。
//! 不可读的目录与条目告警后跳过，不会让整次扫描失败；
//! 大小为 0 的文件在源头丢弃。子目录的递归用 rayon 并行。

use std::path::{Path, PathBuf};
use std::time::Instant;

use disk_viewer_common::DiskViewerError;
use disk_viewer_domain::{AnalysisResult, FileRecord, SizeCounts};
use log::{info, warn};
use rayon::prelude::*;

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const FIVE_MB: u64 = 5 * MB;
const HUNDRED_MB: u64 = 100 * MB;
const FIVE_TWELVE_MB: u64 = 512 * MB;
/// 1GB 阈值沿用采集端历史口径：1000 MB
const GB: u64 = 1000 * MB;

const EXTENSION_SIZE: usize = 24;

/// 规范化路径（去除首尾空白、Windows 下统一为反斜杠）
fn normalize_input(path: &str) -> PathBuf {
    let s = path.trim();
    #[cfg(windows)]
    let s = s.replace('/', "\\");
    PathBuf::from(s)
}

fn to_slash(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// 文件扩展名标签：无扩展名、超长、点结尾分别给出占位标签，其余取小写
pub fn file_extension(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let Some(dot) = base.rfind('.') else {
        return "<no ext>".to_string();
    };
    let ext = base[dot + 1..].to_lowercase();
    if ext.len() >= EXTENSION_SIZE {
        return "<long ext>".to_string();
    }
    if ext.is_empty() {
        return "<hidden>".to_string();
    }
    format!(".{}", ext)
}

/// 对文件清单做累计阈值计数：每个文件计入它超过的每一档阈值，
/// 不足 1KB 的计入 count_less_1kb。
pub fn tally_size_counts(files: &[FileRecord]) -> SizeCounts {
    let mut counts = SizeCounts::default();
    for file in files {
        if file.size > KB {
            counts.count_more_1kb += 1;
        } else {
            counts.count_less_1kb += 1;
        }
        if file.size > MB {
            counts.count_more_1mb += 1;
        }
        if file.size > FIVE_MB {
            counts.count_more_5mb += 1;
        }
        if file.size > HUNDRED_MB {
            counts.count_more_100mb += 1;
        }
        if file.size > FIVE_TWELVE_MB {
            counts.count_more_512mb += 1;
        }
        if file.size > GB {
            counts.count_more_1gb += 1;
        }
    }
    counts
}

fn walk_tree(path: &Path) -> Vec<FileRecord> {
    let entries: Vec<_> = match std::fs::read_dir(path) {
        Ok(read_dir) => read_dir.filter_map(|e| e.ok()).collect(),
        Err(e) => {
            warn!("skipping unreadable directory {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    let mut subdirs = Vec::new();
    for entry in entries {
        let entry_path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                warn!("skipping {}: {}", entry_path.display(), e);
                continue;
            }
        };
        if file_type.is_dir() {
            subdirs.push(entry_path);
        } else if file_type.is_file() {
            match entry.metadata() {
                Ok(metadata) => {
                    let size = metadata.len();
                    // 跳过空文件
                    if size == 0 {
                        continue;
                    }
                    let name = to_slash(&entry_path);
                    let ext = file_extension(&name);
                    records.push(FileRecord { name, size, ext });
                }
                Err(e) => warn!("cannot stat {}: {}", entry_path.display(), e),
            }
        }
        // 符号链接等其它类型一律跳过
    }

    // 并行处理子目录
    let nested: Vec<Vec<FileRecord>> = subdirs.par_iter().map(|dir| walk_tree(dir)).collect();
    for mut child in nested {
        records.append(&mut child);
    }
    records
}

/// 扫描目录，产出一次分析请求的完整输入
pub fn analyze_directory(path: &str) -> Result<AnalysisResult, DiskViewerError> {
    let start = Instant::now();
    let path_buf = normalize_input(path);

    if !path_buf.exists() {
        return Err(DiskViewerError::InvalidPath(format!(
            "path does not exist: {}",
            path
        )));
    }
    let metadata = std::fs::metadata(&path_buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            DiskViewerError::PermissionDenied(path_buf.display().to_string())
        } else {
            DiskViewerError::Io(e)
        }
    })?;
    if !metadata.is_dir() {
        return Err(DiskViewerError::InvalidPath(format!(
            "not a directory: {}",
            path
        )));
    }

    let files = walk_tree(&path_buf);
    info!(
        "walk finished in {:?}, {} file entries under {}",
        start.elapsed(),
        files.len(),
        path_buf.display()
    );

    let size_counts = tally_size_counts(&files);
    let total_size: u64 = files.iter().map(|f| f.size).sum();
    let file_count = files.len() as u64;

    Ok(AnalysisResult {
        files,
        size_counts,
        total_size,
        file_count,
        scanned_path: to_slash(&path_buf),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    fn create_test_dir() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().to_string_lossy().to_string();
        let sub = dir.path().join("subdir");
        fs::create_dir_all(&sub).unwrap();
        File::create(sub.join("a.txt"))
            .unwrap()
            .write_all(b"hello")
            .unwrap();
        File::create(dir.path().join("b.bin"))
            .unwrap()
            .write_all(&vec![0u8; 2000])
            .unwrap();
        File::create(dir.path().join("empty.log")).unwrap();
        (dir, path)
    }

    #[test]
    fn test_analyze_temp_dir() {
        let (_guard, path) = create_test_dir();
        let result = analyze_directory(&path).unwrap();
        // 空文件在源头被丢弃
        assert_eq!(result.file_count, 2);
        assert_eq!(result.total_size, 2005);
        assert!(result.files.iter().all(|f| f.size > 0));
        assert!(result.files.iter().all(|f| !f.name.contains('\\')));
        assert!(!result.scanned_path.contains('\\'));
    }

    #[test]
    fn test_analyze_counts_are_cumulative() {
        let (_guard, path) = create_test_dir();
        let result = analyze_directory(&path).unwrap();
        assert_eq!(result.size_counts.count_less_1kb, 1);
        assert_eq!(result.size_counts.count_more_1kb, 1);
        assert_eq!(result.size_counts.count_more_1mb, 0);
    }

    #[test]
    fn test_analyze_invalid_path() {
        let err = analyze_directory("/nonexistent_xyz_12345_folder").unwrap_err();
        assert!(matches!(err, DiskViewerError::InvalidPath(_)));
    }

    #[test]
    fn test_analyze_rejects_plain_file() {
        let (_guard, path) = create_test_dir();
        let file_path = format!("{}/b.bin", path);
        let err = analyze_directory(&file_path).unwrap_err();
        assert!(matches!(err, DiskViewerError::InvalidPath(_)));
    }

    #[test]
    fn test_tally_cumulative_thresholds() {
        let record = |size: u64| FileRecord {
            name: "/d/f".to_string(),
            size,
            ext: String::new(),
        };
        let files = vec![
            record(100),
            record(2 * KB),
            record(2 * MB),
            record(600 * MB),
            record(2000 * MB),
        ];
        let counts = tally_size_counts(&files);
        assert_eq!(counts.count_less_1kb, 1);
        assert_eq!(counts.count_more_1kb, 4);
        assert_eq!(counts.count_more_1mb, 3);
        assert_eq!(counts.count_more_5mb, 2);
        assert_eq!(counts.count_more_100mb, 2);
        assert_eq!(counts.count_more_512mb, 2);
        assert_eq!(counts.count_more_1gb, 1);
    }

    #[test]
    fn test_tally_boundary_values() {
        let record = |size: u64| FileRecord {
            name: "/d/f".to_string(),
            size,
            ext: String::new(),
        };
        // 恰好等于阈值不算超过
        let counts = tally_size_counts(&[record(KB), record(MB), record(GB)]);
        assert_eq!(counts.count_less_1kb, 1);
        assert_eq!(counts.count_more_1kb, 2);
        assert_eq!(counts.count_more_1mb, 1);
        assert_eq!(counts.count_more_1gb, 0);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("/home/user/a.TXT"), ".txt");
        assert_eq!(file_extension("/home/user/archive.tar.gz"), ".gz");
        assert_eq!(file_extension("/home/user/Makefile"), "<no ext>");
        assert_eq!(file_extension("/home/user/trailing."), "<hidden>");
        assert_eq!(
            file_extension(&format!("/d/f.{}", "x".repeat(EXTENSION_SIZE))),
            "<long ext>"
        );
        // 目录名里带点不影响无扩展名判定
        assert_eq!(file_extension("/home/user.d/README"), "<no ext>");
    }
}
