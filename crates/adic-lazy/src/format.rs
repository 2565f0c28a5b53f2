use crate::params::DEFAULT_MAX_DIGITS;
use crate::stream::PAdicInteger;
use std::fmt;

impl PAdicInteger {
    /// Render at most `max_digits` digits, most significant first.
    ///
    /// A leading `...` marks that the stream continues past the window.
    /// Bases up to 36 use one alphanumeric glyph per digit; larger bases
    /// print decimal digits separated by `.`.
    pub fn format_prefix(&self, max_digits: usize) -> String {
        let mut head: Vec<u32> = self
            .digits()
            .take(max_digits.saturating_add(1))
            .collect();
        let truncated = head.len() > max_digits;
        head.truncate(max_digits);

        let mut out = String::new();
        if truncated {
            out.push_str("...");
        } else if head.is_empty() {
            out.push('0');
        }

        let base = self.base();
        if base <= 36 {
            out.extend(
                head.iter()
                    .rev()
                    .map(|&d| std::char::from_digit(d, base).unwrap_or('?')),
            );
        } else {
            let rendered: Vec<String> = head.iter().rev().map(|d| d.to_string()).collect();
            out.push_str(&rendered.join("."));
        }

        out.push_str(&format!(" (base {})", base));
        out
    }
}

impl fmt::Display for PAdicInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_prefix(DEFAULT_MAX_DIGITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64, base: u32) -> PAdicInteger {
        PAdicInteger::from_integer(n, base).unwrap()
    }

    #[test]
    fn test_format_finite() {
        assert_eq!(int(5, 3).format_prefix(20), "12 (base 3)");
        assert_eq!(int(5, 3).to_string(), "12 (base 3)");
        assert_eq!(int(255, 16).to_string(), "ff (base 16)");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(int(0, 3).to_string(), "0 (base 3)");
        assert_eq!(PAdicInteger::zero(3).unwrap().to_string(), "0 (base 3)");
    }

    #[test]
    fn test_format_truncates_unbounded() {
        let x = PAdicInteger::stable(3, 5).unwrap();
        let shown = x.to_string();
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with(" (base 3)"));
        assert_eq!(shown.len(), 3 + 20 + " (base 3)".len());

        let expected: String = x
            .prefix(20)
            .iter()
            .rev()
            .map(|d| char::from_digit(*d, 3).unwrap())
            .collect();
        assert_eq!(&shown[3..23], expected);
    }

    #[test]
    fn test_format_exact_fit_has_no_ellipsis() {
        let x = PAdicInteger::from_digits(&[1, 2, 0, 1], 3).unwrap();
        assert_eq!(x.format_prefix(4), "1021 (base 3)");
        assert_eq!(x.format_prefix(3), "...021 (base 3)");
    }

    #[test]
    fn test_format_minus_one() {
        assert_eq!(int(-1, 3).format_prefix(5), "...22222 (base 3)");
    }

    #[test]
    fn test_format_large_base() {
        // 101 = 1 + 1*100
        assert_eq!(int(101, 100).to_string(), "1.1 (base 100)");
    }

    #[test]
    fn test_format_zero_width() {
        assert_eq!(int(5, 3).format_prefix(0), "... (base 3)");
        assert_eq!(int(0, 3).format_prefix(0), "0 (base 3)");
    }

    #[test]
    fn test_format_replays() {
        let x = PAdicInteger::stable(7, 12).unwrap();
        let y = PAdicInteger::stable(7, 13).unwrap();
        let product = x.checked_mul(&y).unwrap();
        assert_eq!(product.to_string(), product.to_string());
    }
}
