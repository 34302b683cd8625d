use std::num::NonZeroUsize;

/// Page cursor over a processed record set.
///
/// The paginator only stores the current page and the last seen item count;
/// the window itself is derived on every call to [`Paginator::paginate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    items_per_page: NonZeroUsize,
    total_items: usize,
}

/// One rendered page of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub current_page: usize,
    pub items: &'a [T],
    pub max_page: usize,
    pub needs_pagination: bool,
}

impl<T> Page<'_, T> {
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub const fn has_next(&self) -> bool {
        self.current_page < self.max_page
    }
}

impl Paginator {
    pub const fn new(items_per_page: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
            total_items: 0,
        }
    }

    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    pub const fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    pub const fn max_page(&self) -> usize {
        max_page(self.total_items, self.items_per_page)
    }

    /// Produce the window for `records`.
    ///
    /// If `records` shrank below the current page (a filter change, a new
    /// fetch) the cursor goes back to page 1 first.
    pub fn paginate<'a, T>(&mut self, records: &'a [T]) -> Page<'a, T> {
        self.total_items = records.len();
        let max_page = self.max_page();
        if self.current_page > max_page {
            tracing::debug!(
                current_page = self.current_page,
                max_page,
                "page out of range after data change, resetting"
            );
            self.reset();
        }

        let per_page = self.items_per_page.get();
        let start = ((self.current_page - 1) * per_page).min(records.len());
        let end = (self.current_page * per_page).min(records.len());

        Page {
            current_page: self.current_page,
            items: &records[start..end],
            max_page,
            needs_pagination: records.len() > per_page,
        }
    }

    /// Jump to `page`. Out-of-range requests are ignored; returns whether the
    /// cursor moved.
    pub fn load_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.max_page() || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.load_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.load_page(self.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.load_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.load_page(self.max_page())
    }

    pub const fn reset(&mut self) {
        self.current_page = 1;
    }
}

const fn max_page(total_items: usize, items_per_page: NonZeroUsize) -> usize {
    let pages = total_items.div_ceil(items_per_page.get());
    if pages == 0 {
        1
    } else {
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paginator(per_page: usize) -> Paginator {
        Paginator::new(NonZeroUsize::new(per_page).unwrap())
    }

    #[test]
    fn empty_input_has_one_empty_page() {
        let mut pages = paginator(10);
        let page = pages.paginate::<u32>(&[]);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.max_page, 1);
        assert!(page.items.is_empty());
        assert!(!page.needs_pagination);
        assert!(!page.has_next());
    }

    #[test]
    fn slices_by_current_page() {
        let records: Vec<u32> = (1..=25).collect();
        let mut pages = paginator(10);
        assert_eq!(pages.paginate(&records).items, &records[0..10]);

        assert!(pages.load_page(3));
        let page = pages.paginate(&records);
        assert_eq!(page.items, &[21, 22, 23, 24, 25]);
        assert_eq!(page.max_page, 3);
        assert!(page.needs_pagination);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let records: Vec<u32> = (0..20).collect();
        let mut pages = paginator(10);
        let page = pages.paginate(&records);
        assert_eq!(page.max_page, 2);

        let records: Vec<u32> = (0..10).collect();
        let page = pages.paginate(&records);
        assert_eq!(page.max_page, 1);
        assert!(!page.needs_pagination);
    }

    #[test]
    fn out_of_range_load_is_ignored() {
        let records: Vec<u32> = (0..30).collect();
        let mut pages = paginator(10);
        pages.paginate(&records);
        assert!(pages.load_page(2));
        assert!(!pages.load_page(0));
        assert!(!pages.load_page(4));
        assert_eq!(pages.current_page(), 2);
        assert!(!pages.load_page(2));
        assert_eq!(pages.current_page(), 2);
    }

    #[test]
    fn shrinking_input_resets_to_first_page() {
        let records: Vec<u32> = (0..50).collect();
        let mut pages = paginator(10);
        pages.paginate(&records);
        assert!(pages.last_page());
        assert_eq!(pages.current_page(), 5);

        let filtered = &records[..12];
        let page = pages.paginate(filtered);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items, &filtered[..10]);
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn stepping_stops_at_both_ends() {
        let records: Vec<u32> = (0..15).collect();
        let mut pages = paginator(10);
        pages.paginate(&records);
        assert!(!pages.previous_page());
        assert!(pages.next_page());
        assert!(!pages.next_page());
        assert!(pages.first_page());
        assert_eq!(pages.current_page(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn pages_reconstruct_the_input(records in prop::collection::vec(any::<u16>(), 0..200), per_page in 1_usize..25) {
            let mut pages = paginator(per_page);
            let first = pages.paginate(&records);
            let max_page = first.max_page;

            let mut rebuilt = Vec::new();
            for number in 1..=max_page {
                pages.load_page(number);
                let page = pages.paginate(&records);
                prop_assert!(page.items.len() <= per_page);
                prop_assert_eq!(page.current_page, number);
                rebuilt.extend_from_slice(page.items);
            }
            prop_assert_eq!(rebuilt, records);
        }

        #[test]
        fn invalid_loads_keep_last_valid_page(total in 0_usize..100, per_page in 1_usize..20, target in 0_usize..20) {
            let records = vec![0_u8; total];
            let mut pages = paginator(per_page);
            pages.paginate(&records);
            let before = pages.current_page();
            let moved = pages.load_page(target);
            if target < 1 || target > pages.max_page() {
                prop_assert!(!moved);
                prop_assert_eq!(pages.current_page(), before);
            } else {
                prop_assert_eq!(pages.current_page(), target);
            }
        }
    }
}
