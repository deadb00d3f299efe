//! # Size Accounting Module
//!
//! Funzioni pure per la contabilità delle dimensioni prima/dopo.
//!
//! ## Funzioni:
//! - `humanize()`: converte byte in formato leggibile (Bytes, KB, MB, GB)
//! - `ratio()`: percentuale di riduzione arrotondata a 2 decimali
//! - `bytes_saved()`: differenza con segno tra originale e compresso
//!
//! ## Convenzioni:
//! - `humanize(0)` restituisce `"0 Bytes"`
//! - `ratio(0, _)` restituisce `0.0` (niente divisione per zero)
//! - Un output più grande dell'input produce un ratio negativo

const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Get human-readable file size
pub fn humanize(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Human-readable signed size, used for "saved" figures that can be negative
pub fn humanize_signed(delta: i64) -> String {
    if delta < 0 {
        format!("-{}", humanize(delta.unsigned_abs()))
    } else {
        humanize(delta as u64)
    }
}

/// Percentage reduction from `original` to `compressed`, rounded to 2 decimals.
///
/// Returns `0.0` when `original` is zero.
pub fn ratio(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let reduction = (original as f64 - compressed as f64) / original as f64 * 100.0;
    (reduction * 100.0).round() / 100.0
}

/// Signed byte difference; negative when the output grew
pub fn bytes_saved(original: u64, compressed: u64) -> i64 {
    original as i64 - compressed as i64
}
