use anyhow::{anyhow, Result};

/// An inclusive, 1-indexed span of pages that becomes one output file.
///
/// Ranges carry no uniqueness or non-overlap invariant: the user may ask for
/// the same pages twice ("3,3") or for overlapping spans ("1-5,2-"), and both
/// are honored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

/// Chop `[1, total_pages]` into consecutive chunks of `granularity` pages.
///
/// The last chunk may be shorter. Values below 1 are clamped to 1, so the
/// result always covers every page exactly once, in ascending order.
pub fn granularity_ranges(granularity: i64, total_pages: u32) -> Vec<PageRange> {
    let gran = granularity.clamp(1, i64::from(u32::MAX)) as u32;
    let mut ranges = Vec::new();
    let mut start = 1;
    while start <= total_pages {
        let end = start.saturating_add(gran - 1).min(total_pages);
        ranges.push(PageRange { start, end });
        start = end + 1;
    }
    ranges
}

/// Parse an explicit specification like "1,7,67", "1-10,15", or "56-".
///
/// Tokens are comma-separated and trimmed; empty tokens are dropped. A token
/// with a dash is a range where a missing left side means page 1 and a
/// missing right side means the last page (so "-" alone is the whole
/// document). One bad token fails the entire parse.
pub fn parse_page_spec(spec: &str, total_pages: u32) -> Result<Vec<PageRange>> {
    let mut ranges = Vec::new();
    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        ranges.push(parse_token(token, total_pages)?);
    }
    Ok(ranges)
}

fn parse_token(token: &str, total_pages: u32) -> Result<PageRange> {
    let invalid = || anyhow!("invalid page specification '{}'", token);

    let (start, end) = if token.contains('-') {
        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() != 2 {
            return Err(invalid());
        }
        // A missing side defaults; a whitespace-only side is a parse error.
        let start = if parts[0].is_empty() {
            1
        } else {
            parts[0].trim().parse::<u32>().map_err(|_| invalid())?
        };
        let end = if parts[1].is_empty() {
            total_pages
        } else {
            parts[1].trim().parse::<u32>().map_err(|_| invalid())?
        };
        (start, end)
    } else {
        let page = token.parse::<u32>().map_err(|_| invalid())?;
        (page, page)
    };

    if start < 1 || end > total_pages || start > end {
        return Err(invalid());
    }

    Ok(PageRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> PageRange {
        PageRange { start, end }
    }

    #[test]
    fn test_granularity_covers_all_pages_once() {
        let ranges = granularity_ranges(3, 10);
        assert_eq!(
            ranges,
            vec![range(1, 3), range(4, 6), range(7, 9), range(10, 10)]
        );
    }

    #[test]
    fn test_granularity_one_page_per_file() {
        let ranges = granularity_ranges(1, 3);
        assert_eq!(ranges, vec![range(1, 1), range(2, 2), range(3, 3)]);
    }

    #[test]
    fn test_granularity_larger_than_document() {
        let ranges = granularity_ranges(100, 7);
        assert_eq!(ranges, vec![range(1, 7)]);
    }

    #[test]
    fn test_granularity_exact_multiple() {
        let ranges = granularity_ranges(5, 10);
        assert_eq!(ranges, vec![range(1, 5), range(6, 10)]);
    }

    #[test]
    fn test_granularity_below_one_clamped() {
        assert_eq!(granularity_ranges(0, 2), granularity_ranges(1, 2));
        assert_eq!(granularity_ranges(-4, 2), granularity_ranges(1, 2));
    }

    #[test]
    fn test_granularity_huge_value() {
        assert_eq!(granularity_ranges(i64::MAX, 3), vec![range(1, 3)]);
    }

    #[test]
    fn test_single_page_token() {
        let ranges = parse_page_spec("5", 10).unwrap();
        assert_eq!(ranges, vec![range(5, 5)]);
    }

    #[test]
    fn test_dash_range_token() {
        let ranges = parse_page_spec("2-6", 10).unwrap();
        assert_eq!(ranges, vec![range(2, 6)]);
    }

    #[test]
    fn test_open_ended_tokens() {
        assert_eq!(parse_page_spec("7-", 10).unwrap(), vec![range(7, 10)]);
        assert_eq!(parse_page_spec("-4", 10).unwrap(), vec![range(1, 4)]);
        assert_eq!(parse_page_spec("-", 10).unwrap(), vec![range(1, 10)]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let ranges = parse_page_spec("1,3-5,2-", 5).unwrap();
        assert_eq!(ranges, vec![range(1, 1), range(3, 5), range(2, 5)]);

        let ranges = parse_page_spec("3,3,1-2,1-2", 5).unwrap();
        assert_eq!(
            ranges,
            vec![range(3, 3), range(3, 3), range(1, 2), range(1, 2)]
        );
    }

    #[test]
    fn test_whitespace_and_empty_tokens() {
        let ranges = parse_page_spec(" 1 , , 3 - 5 ,", 10).unwrap();
        assert_eq!(ranges, vec![range(1, 1), range(3, 5)]);
    }

    #[test]
    fn test_start_after_end_rejected() {
        assert!(parse_page_spec("5-2", 10).is_err());
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(parse_page_spec("0", 10).is_err());
        assert!(parse_page_spec("0-3", 10).is_err());
    }

    #[test]
    fn test_end_beyond_total_rejected() {
        assert!(parse_page_spec("8-12", 10).is_err());
        assert!(parse_page_spec("11", 10).is_err());
    }

    #[test]
    fn test_non_integer_rejected() {
        assert!(parse_page_spec("abc", 10).is_err());
        assert!(parse_page_spec("1-x", 10).is_err());
    }

    #[test]
    fn test_multiple_dashes_rejected() {
        assert!(parse_page_spec("1-2-3", 10).is_err());
        assert!(parse_page_spec("--", 10).is_err());
    }

    #[test]
    fn test_bad_token_fails_whole_parse() {
        let err = parse_page_spec("1,2,99-100,3", 10).unwrap_err();
        assert!(err.to_string().contains("'99-100'"));
    }
}
