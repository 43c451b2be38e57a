//! Common utilities for invoice rendering.
//!
//! Shared helpers for Indonesian date and currency formatting, Typst string
//! escaping and filename sanitization.

use chrono::{Datelike, NaiveDate};

/// Format a date in Indonesian long form (e.g., "07 Agustus 2026").
pub fn format_indonesian_date(date: NaiveDate) -> String {
    let months = [
        "Januari",
        "Februari",
        "Maret",
        "April",
        "Mei",
        "Juni",
        "Juli",
        "Agustus",
        "September",
        "Oktober",
        "November",
        "Desember",
    ];

    let day = date.day();
    let month = months[(date.month0() as usize).min(months.len() - 1)];
    let year = date.year();

    format!("{day:02} {month} {year}")
}

/// Format a rupiah amount with id-ID thousands separators ("1.500.000").
/// Sub-unit digits are truncated, matching the whole-rupiah semantics of the
/// terbilang converter.
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    let value = amount.abs().trunc() as u64;

    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, digit) in digits.bytes().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(digit as char);
    }

    if negative && value > 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// Sanitize a string for use in filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !result.is_empty() {
            result.push('-');
            last_dash = true;
        }
    }

    let result = result.trim_matches('-');
    if result.is_empty() {
        return fallback.to_string();
    }

    result.to_string()
}
