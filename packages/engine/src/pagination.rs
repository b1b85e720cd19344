//! Page transitions of a loaded listing.

use std::num::NonZeroU32;

use jobs_core::{PageResult, QueryState, codec};

use crate::Navigation;

/// Derived from the loaded page. Navigating keeps every filter and changes only
/// the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationController {
    query: QueryState,
    page: NonZeroU32,
    total_pages: NonZeroU32,
}

impl PaginationController {
    pub fn new(query: &QueryState, result: &PageResult) -> Self {
        Self {
            query: query.clone(),
            page: result.page,
            total_pages: result.total_pages,
        }
    }

    pub fn page(&self) -> u32 {
        self.page.get()
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages.get()
    }

    /// Controls are hidden for a single page.
    pub fn is_visible(&self) -> bool {
        self.total_pages.get() > 1
    }

    pub fn can_go_prev(&self) -> bool {
        self.page.get() > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// State for `target`, or `None` outside `1..=total_pages` or for the current page.
    pub fn target(&self, target: u32) -> Option<QueryState> {
        let target = NonZeroU32::new(target)?;
        if target > self.total_pages || target == self.page {
            return None;
        }
        Some(self.query.with_page(target))
    }

    pub fn go_to(&self, target: u32, nav: &impl Navigation) -> Option<QueryState> {
        let next = self.target(target)?;
        nav.push(&codec::encode(&next));
        Some(next)
    }

    pub fn prev(&self, nav: &impl Navigation) -> Option<QueryState> {
        self.go_to(self.page.get() - 1, nav)
    }

    pub fn next(&self, nav: &impl Navigation) -> Option<QueryState> {
        self.go_to(self.page.get().saturating_add(1), nav)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use std::cell::RefCell;

    use jobs_core::{JobStatus, StatusFilter};

    use super::*;

    #[derive(Default)]
    struct RecordingNav {
        pushed: RefCell<Vec<String>>,
    }

    impl Navigation for RecordingNav {
        fn push(&self, query: &str) {
            self.pushed.borrow_mut().push(query.to_string());
        }

        fn subscribe(&self) -> tokio::sync::watch::Receiver<String> {
            tokio::sync::watch::channel(String::new()).1
        }
    }

    fn controller(page: u32, total: u64) -> PaginationController {
        let query = QueryState {
            search: "rust".into(),
            status: StatusFilter::Only(JobStatus::Active),
            page: NonZeroU32::new(page).unwrap(),
            ..QueryState::default()
        };
        let result = PageResult::new(Vec::new(), total, query.page, query.page_size);
        PaginationController::new(&query, &result)
    }

    #[test]
    fn bounds_on_first_middle_last() {
        let first = controller(1, 30);
        assert!(!first.can_go_prev());
        assert!(first.can_go_next());

        let middle = controller(2, 30);
        assert!(middle.can_go_prev());
        assert!(middle.can_go_next());

        let last = controller(3, 30);
        assert!(last.can_go_prev());
        assert!(!last.can_go_next());
    }

    #[test]
    fn out_of_range_targets_are_no_ops() {
        let nav = RecordingNav::default();
        let pages = controller(3, 30);

        assert!(pages.go_to(0, &nav).is_none());
        assert!(pages.go_to(4, &nav).is_none());
        // Already on the last page: next is unreachable.
        assert!(pages.go_to(3, &nav).is_none());
        assert!(pages.next(&nav).is_none());
        assert!(nav.pushed.borrow().is_empty());
    }

    #[test]
    fn go_to_keeps_filters() {
        let nav = RecordingNav::default();
        let pages = controller(1, 30);

        let next = pages.go_to(3, &nav).unwrap();
        assert_eq!(next.page.get(), 3);
        assert_eq!(next.search, "rust");
        assert_eq!(next.status, StatusFilter::Only(JobStatus::Active));
        assert_eq!(nav.pushed.borrow().as_slice(), ["search=rust&status=active&page=3"]);
    }

    #[test]
    fn prev_and_next_step_by_one() {
        let nav = RecordingNav::default();
        let pages = controller(2, 30);

        assert_eq!(pages.prev(&nav).unwrap().page.get(), 1);
        assert_eq!(pages.next(&nav).unwrap().page.get(), 3);
        assert_eq!(
            nav.pushed.borrow().as_slice(),
            ["search=rust&status=active", "search=rust&status=active&page=3"]
        );
    }

    #[test]
    fn hidden_for_a_single_page() {
        assert!(!controller(1, 0).is_visible());
        assert!(!controller(1, 10).is_visible());
        assert!(controller(1, 11).is_visible());
    }
}
