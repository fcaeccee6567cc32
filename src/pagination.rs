use serde::Serialize;

/// Pagination controls derived from the current page and page count.
///
/// With a single page there is nothing to paginate, so every control is
/// absent rather than disabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageControls {
    /// Page the controls were built for, clamped into range.
    pub current: usize,
    /// Target of the "Previous" action; `None` on the first page.
    pub prev: Option<usize>,
    /// Target of the "Next" action; `None` on the last page.
    pub next: Option<usize>,
    /// One entry per selectable page, `1..=total_pages`.
    pub pages: Vec<usize>,
}

impl PageControls {
    #[must_use]
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let current = current_page.clamp(1, total_pages.max(1));

        if total_pages <= 1 {
            return Self {
                current,
                prev: None,
                next: None,
                pages: Vec::new(),
            };
        }

        Self {
            current,
            prev: (current > 1).then_some(current - 1),
            next: (current < total_pages).then_some(current + 1),
            pages: (1..=total_pages).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_renders_no_controls() {
        let controls = PageControls::new(1, 1);
        assert_eq!(controls.prev, None);
        assert_eq!(controls.next, None);
        assert!(controls.pages.is_empty());

        let controls = PageControls::new(1, 0);
        assert!(controls.pages.is_empty());
    }

    #[test]
    fn edges_disable_prev_and_next() {
        let first = PageControls::new(1, 3);
        assert_eq!(first.prev, None);
        assert_eq!(first.next, Some(2));

        let last = PageControls::new(3, 3);
        assert_eq!(last.prev, Some(2));
        assert_eq!(last.next, None);
    }

    #[test]
    fn middle_page_lists_every_page() {
        let controls = PageControls::new(2, 4);
        assert_eq!(controls.prev, Some(1));
        assert_eq!(controls.next, Some(3));
        assert_eq!(controls.pages, [1, 2, 3, 4]);
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        let controls = PageControls::new(9, 3);
        assert_eq!(controls.current, 3);
        assert_eq!(controls.next, None);

        let controls = PageControls::new(0, 3);
        assert_eq!(controls.current, 1);
        assert_eq!(controls.prev, None);
    }
}
