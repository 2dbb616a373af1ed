//! Page-window computation for paginated listings.

use serde::Serialize;

/// Listings with at most this many pages show every page number.
pub const MAX_UNCOLLAPSED_PAGES: usize = 7;

/// Number of page numbers shown on each side of the current page.
pub const WINDOW_RADIUS: usize = 2;

/// Number of pages for `items` rows at `page_size` rows per page.
///
/// Never less than one, so an empty listing still has a (blank) first page.
pub fn total_pages(items: usize, page_size: usize) -> usize {
    items.div_ceil(page_size.max(1)).max(1)
}

/// Page numbers to show, with `None` standing for a collapsed range.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One control in the page bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageToken {
    Prev { disabled: bool },
    Page { number: usize },
    Ellipsis,
    Next { disabled: bool },
}

/// What the pagination region of a listing shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "tokens", rename_all = "snake_case")]
pub enum PaginationView {
    /// The listing was built with no rows at all.
    Empty,
    /// The active filter matches no rows.
    NoMatches,
    /// Page controls, from "previous" to "next".
    Controls(Vec<PageToken>),
}

impl PaginationView {
    /// Builds the page bar for `current_page` (1-based) out of `total_pages`.
    ///
    /// A single page gets only the two (disabled) stepping controls; up to
    /// [`MAX_UNCOLLAPSED_PAGES`] pages are all listed; beyond that the first
    /// and last pages frame a window of [`WINDOW_RADIUS`] pages around the
    /// current one, with an ellipsis for each collapsed gap.
    pub fn controls(current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.clamp(1, total_pages);

        let numbers: Vec<PageToken> = if total_pages == 1 {
            Vec::new()
        } else if total_pages <= MAX_UNCOLLAPSED_PAGES {
            (1..=total_pages)
                .map(|number| PageToken::Page { number })
                .collect()
        } else {
            get_pages(total_pages, current_page, 1, WINDOW_RADIUS, WINDOW_RADIUS, 1)
                .into_iter()
                .map(|page| match page {
                    Some(number) => PageToken::Page { number },
                    None => PageToken::Ellipsis,
                })
                .collect()
        };

        let mut tokens = Vec::with_capacity(numbers.len() + 2);
        tokens.push(PageToken::Prev {
            disabled: current_page == 1,
        });
        tokens.extend(numbers);
        tokens.push(PageToken::Next {
            disabled: current_page == total_pages,
        });

        Self::Controls(tokens)
    }

    pub fn tokens(&self) -> &[PageToken] {
        match self {
            Self::Controls(tokens) => tokens,
            Self::Empty | Self::NoMatches => &[],
        }
    }

    /// Whether any numeric page button is shown.
    pub fn has_page_numbers(&self) -> bool {
        self.tokens()
            .iter()
            .any(|token| matches!(token, PageToken::Page { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(view: &PaginationView) -> Vec<String> {
        view.tokens()
            .iter()
            .map(|token| match token {
                PageToken::Prev { .. } => "prev".to_string(),
                PageToken::Page { number } => number.to_string(),
                PageToken::Ellipsis => "...".to_string(),
                PageToken::Next { .. } => "next".to_string(),
            })
            .collect()
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 25), 1);
        assert_eq!(total_pages(23, 25), 1);
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(total_pages(100, 12), 9);
    }

    #[test]
    fn total_pages_matches_ceiling_for_many_sizes() {
        for items in 0..60 {
            for size in 1..9 {
                let expected = std::cmp::max(1, (items + size - 1) / size);
                assert_eq!(total_pages(items, size), expected, "{items} / {size}");
            }
        }
    }

    #[test]
    fn window_collapses_both_sides() {
        let view = PaginationView::controls(5, 10);
        assert_eq!(
            labels(&view),
            ["prev", "1", "...", "3", "4", "5", "6", "7", "...", "10", "next"]
        );
    }

    #[test]
    fn seven_pages_are_all_listed() {
        let view = PaginationView::controls(4, 7);
        assert_eq!(
            labels(&view),
            ["prev", "1", "2", "3", "4", "5", "6", "7", "next"]
        );
    }

    #[test]
    fn single_page_has_no_numbers_and_disabled_steps() {
        let view = PaginationView::controls(1, 1);
        assert_eq!(
            view.tokens(),
            [
                PageToken::Prev { disabled: true },
                PageToken::Next { disabled: true }
            ]
        );
        assert!(!view.has_page_numbers());
    }

    #[test]
    fn window_near_edges_collapses_one_side() {
        assert_eq!(
            labels(&PaginationView::controls(1, 10)),
            ["prev", "1", "2", "3", "...", "10", "next"]
        );
        assert_eq!(
            labels(&PaginationView::controls(4, 10)),
            ["prev", "1", "2", "3", "4", "5", "6", "...", "10", "next"]
        );
        assert_eq!(
            labels(&PaginationView::controls(10, 10)),
            ["prev", "1", "...", "8", "9", "10", "next"]
        );
    }

    #[test]
    fn ellipsis_replaces_a_single_skipped_page() {
        assert_eq!(
            labels(&PaginationView::controls(5, 8)),
            ["prev", "1", "...", "3", "4", "5", "6", "7", "8", "next"]
        );
    }

    #[test]
    fn stepping_controls_disable_at_the_ends() {
        let first = PaginationView::controls(1, 3);
        assert_eq!(first.tokens()[0], PageToken::Prev { disabled: true });
        assert_eq!(first.tokens()[4], PageToken::Next { disabled: false });

        let last = PaginationView::controls(3, 3);
        assert_eq!(last.tokens()[0], PageToken::Prev { disabled: false });
        assert_eq!(last.tokens()[4], PageToken::Next { disabled: true });
    }

    #[test]
    fn markers_carry_no_tokens() {
        assert!(PaginationView::Empty.tokens().is_empty());
        assert!(!PaginationView::NoMatches.has_page_numbers());
    }
}
