const UNIT: u64 = 1024;
const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Human-readable size in binary units, at most two decimals, trailing zeros dropped.
///
/// `0` is special-cased to "0 Bytes". Sizes of a TiB or more stay in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    let mut divisor: u64 = 1;
    while exponent + 1 < SIZE_UNITS.len() && bytes / divisor >= UNIT {
        divisor *= UNIT;
        exponent += 1;
    }

    // Round half up in hundredths, in integers to avoid float tie drift
    let divisor = u128::from(divisor);
    let hundredths = (u128::from(bytes) * 200 + divisor) / (divisor * 2);
    let whole = hundredths / 100;
    let frac = hundredths % 100;

    let number = if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{}.{}", whole, frac / 10)
    } else {
        format!("{}.{:02}", whole, frac)
    };

    format!("{} {}", number, SIZE_UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn test_format_size_rounding() {
        // 1152 / 1024 = 1.125, ties round up
        assert_eq!(format_size(1152), "1.13 KB");
        // 1025 / 1024 = 1.0009...
        assert_eq!(format_size(1025), "1 KB");
        // 2.25 MB
        assert_eq!(format_size(2359296), "2.25 MB");
        // 1048575 / 1024 = 1023.999...
        assert_eq!(format_size(1024 * 1024 - 1), "1024 KB");
    }

    #[test]
    fn test_format_size_caps_at_gb() {
        assert_eq!(format_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
        assert!(format_size(u64::MAX).ends_with(" GB"));
    }
}
