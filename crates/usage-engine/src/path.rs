//! 跨平台路径字符串处理：统一分隔符、识别真根（POSIX `/` 与盘符根如 `C:`）、
//! 求父目录。只做字符串运算，不触碰文件系统，POSIX 与盘符两种风格互不混淆。

/// 把所有反斜杠替换为正斜杠（不去结尾分隔符）
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// 规范化路径：统一分隔符并去掉结尾分隔符；结果为空时保留单个 `/`。幂等。
pub fn normalize_path(path: &str) -> String {
    let norm = normalize_separators(path);
    let trimmed = norm.trim_end_matches('/');
    if trimmed.is_empty() {
        if norm.is_empty() {
            norm
        } else {
            "/".to_string()
        }
    } else {
        trimmed.to_string()
    }
}

/// 是否为真根：`/`，或单个 ASCII 字母加 `:`（可再带一个 `/`），如 `C:`、`C:/`
pub fn is_true_root(path: &str) -> bool {
    let s = normalize_separators(path);
    if s == "/" {
        return true;
    }
    let b = s.as_bytes();
    match b.len() {
        2 => b[0].is_ascii_alphabetic() && b[1] == b':',
        3 => b[0].is_ascii_alphabetic() && b[1] == b':' && b[2] == b'/',
        _ => false,
    }
}

/// 路径开头的根前缀长度（规范化分隔符后）：`/` 为 1，`C:` 为 2，`C:/` 为 3
fn detect_root_len(norm: &str) -> Option<usize> {
    let b = norm.as_bytes();
    if b.first() == Some(&b'/') {
        return Some(1);
    }
    if b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':' {
        if b.get(2) == Some(&b'/') {
            return Some(3);
        }
        return Some(2);
    }
    None
}

/// 求直接父目录；路径本身是根时返回 None。
/// 返回值不带结尾分隔符（POSIX 根保留单个 `/`）。
pub fn parent_of(path: &str) -> Option<String> {
    let norm = normalize_separators(path);
    let root_len = detect_root_len(&norm);
    if let Some(len) = root_len {
        if norm.len() <= len {
            return None;
        }
    }
    match norm.rfind('/') {
        Some(i) if i > 0 => Some(norm[..i].to_string()),
        _ => root_len.map(|len| {
            let stripped = norm[..len].trim_end_matches('/');
            if stripped.is_empty() {
                "/".to_string()
            } else {
                stripped.to_string()
            }
        }),
    }
}
