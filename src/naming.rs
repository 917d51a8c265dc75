use crate::page_range::PageRange;

/// Shared, read-only context for naming every output file of one run.
#[derive(Debug, Clone)]
pub struct NamingContext {
    pub prefix: String,
    pub pad_width: usize,
}

impl NamingContext {
    pub fn new(prefix: impl Into<String>, total_pages: u32) -> Self {
        NamingContext {
            prefix: prefix.into(),
            // Pad page numbers to the digit width of the page count, so a
            // 150-page document names page 7 as 007.
            pad_width: total_pages.to_string().len(),
        }
    }
}

/// Deterministic output filename for one range.
///
/// Collisions are possible when the user specifies the same range twice;
/// that is resolved at write time by the overwrite policy, not here.
pub fn output_filename(range: PageRange, ctx: &NamingContext) -> String {
    let width = ctx.pad_width;
    if range.start == range.end {
        format!("{}_page_{:0width$}.pdf", ctx.prefix, range.start)
    } else {
        format!(
            "{}_pages_{:0width$}-{:0width$}.pdf",
            ctx.prefix, range.start, range.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> PageRange {
        PageRange { start, end }
    }

    #[test]
    fn test_single_page_name() {
        let ctx = NamingContext::new("report", 150);
        assert_eq!(output_filename(range(7, 7), &ctx), "report_page_007.pdf");
    }

    #[test]
    fn test_multi_page_name() {
        let ctx = NamingContext::new("report", 150);
        assert_eq!(
            output_filename(range(5, 9), &ctx),
            "report_pages_005-009.pdf"
        );
    }

    #[test]
    fn test_pad_width_follows_total_pages() {
        let ctx = NamingContext::new("doc", 9);
        assert_eq!(output_filename(range(3, 3), &ctx), "doc_page_3.pdf");

        let ctx = NamingContext::new("doc", 10);
        assert_eq!(output_filename(range(3, 3), &ctx), "doc_page_03.pdf");

        let ctx = NamingContext::new("doc", 1000);
        assert_eq!(output_filename(range(3, 3), &ctx), "doc_page_0003.pdf");
    }

    #[test]
    fn test_wide_pages_not_truncated() {
        let ctx = NamingContext::new("doc", 5);
        assert_eq!(output_filename(range(2, 4), &ctx), "doc_pages_2-4.pdf");
    }

    #[test]
    fn test_duplicate_ranges_collide_on_purpose() {
        let ctx = NamingContext::new("doc", 20);
        assert_eq!(
            output_filename(range(3, 3), &ctx),
            output_filename(range(3, 3), &ctx)
        );
    }
}
