const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// 人类可读的字节格式：1024 进制，两位小数，单位 Bytes..TB。
/// 超出 TB 表示范围的值按 TB 输出。
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let k = 1024f64;
    let unit_index = ((bytes as f64).ln() / k.ln()).floor() as usize;
    let unit_index = unit_index.min(UNITS.len() - 1);
    let value = bytes as f64 / k.powi(unit_index as i32);
    format!("{:.2} {}", value, UNITS[unit_index])
}
