//! Output formatting for CLI

use std::path::Path;

const KEY_WIDTH: usize = 14;

/// Print a title underlined to its own width
pub fn print_section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "-".repeat(title.chars().count()));
}

/// Group digits in threes: `1234567` becomes `1,234,567`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && idx % 3 == head {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Print one aligned `key  value` line
pub fn print_kv(key: &str, value: impl std::fmt::Display) {
    println!("  {key:<KEY_WIDTH$} {value}");
}

/// Print what an export wrote
pub fn print_export_summary(
    output: &Path,
    instances: usize,
    units: usize,
    label_values: Option<usize>,
) {
    print_section(&format!("Wrote {}", output.display()));
    print_kv("instances", format_number(instances));
    print_kv("units", format_number(units));
    match label_values {
        Some(count) => print_kv("label values", format_number(count)),
        None => print_kv("labels", "none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(20_000), "20,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
