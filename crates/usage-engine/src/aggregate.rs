//! 目录聚合：不建整棵树，直接从平面文件清单推出每个目录的聚合大小。
//! 先把每个文件的字节记到其直接父目录，再沿祖先链登记目录集合，
//! 最后按深度（深者在前）一趟自底向上折叠即可得到全部聚合值。

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use disk_viewer_domain::{DirectorySizeEntry, FileRecord};

use crate::path::{is_true_root, normalize_path, normalize_separators, parent_of};

/// 聚合目录大小：对每个（直接或间接）含有上报文件的目录给出聚合字节数，
/// 按聚合大小降序返回；根目录条目恒在列，即使聚合值为零。
/// 不校验文件是否真在 root 子树内，子树之外的文件尽力归档、不会计入结果。
pub fn aggregate_directory_sizes(files: &[FileRecord], root: &str) -> Vec<DirectorySizeEntry> {
    let norm_root = normalize_path(root);
    let mut direct: HashMap<String, u64> = HashMap::new();
    let mut known: HashSet<String> = HashSet::new();
    direct.insert(norm_root.clone(), 0);
    known.insert(norm_root.clone());

    for file in files {
        let file_path = normalize_separators(&file.name);
        let parent = parent_of(&file_path);
        let parent_key = match parent.as_deref() {
            Some(p) => normalize_path(p),
            None => norm_root.clone(),
        };
        *direct.entry(parent_key).or_insert(0) += file.size;

        // 沿祖先链登记目录；越出 root 子树即停（root 为真根时不设边界）
        let mut current = parent;
        while let Some(dir) = current {
            let clean = normalize_path(&dir);
            if !clean.starts_with(norm_root.as_str()) && !is_true_root(&norm_root) {
                break;
            }
            known.insert(clean.clone());
            if clean == norm_root {
                break;
            }
            current = parent_of(&dir);
        }
    }

    // 深度排序（分隔符数多者在前），保证子目录先于父目录被折叠
    let mut order: Vec<String> = known.iter().cloned().collect();
    order.sort();
    order.sort_by_cached_key(|p| Reverse(p.matches('/').count()));

    let mut totals = direct;
    for dir in &order {
        if is_true_root(dir) {
            continue;
        }
        let Some(parent) = parent_of(dir) else {
            continue;
        };
        let parent_key = normalize_path(&parent);
        if known.contains(&parent_key) {
            let subtotal = totals.get(dir).copied().unwrap_or(0);
            *totals.entry(parent_key).or_insert(0) += subtotal;
        }
    }

    let mut entries: Vec<DirectorySizeEntry> = order
        .iter()
        .filter_map(|dir| {
            let size = totals.get(dir).copied().unwrap_or(0);
            if size > 0 || *dir == norm_root {
                Some(DirectorySizeEntry {
                    path: dir.clone(),
                    size,
                })
            } else {
                None
            }
        })
        .collect();
    entries.sort_by(|a, b| b.size.cmp(&a.size));
    entries
}
