use super::repo::Window;

/// Splits `count` items into pages of `per_page`.
///
/// There is always at least one page, even for an empty collection, and any
/// requested page outside `1..=num_pages` resolves to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: usize,
    count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub per_page: usize,
    pub count: usize,
    pub num_pages: usize,
}

impl Paginator {
    pub fn new(per_page: usize, count: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            count,
        }
    }

    pub fn num_pages(&self) -> usize {
        self.count.div_ceil(self.per_page).max(1)
    }

    pub fn page(&self, requested: usize) -> Page {
        let num_pages = self.num_pages();
        let number = if (1..=num_pages).contains(&requested) {
            requested
        } else {
            1
        };

        Page {
            number,
            per_page: self.per_page,
            count: self.count,
            num_pages,
        }
    }
}

impl Page {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn window(&self) -> Window {
        Window {
            limit: self.per_page as i64,
            offset: ((self.number - 1) * self.per_page) as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_items_in_pages_of_five() {
        let paginator = Paginator::new(5, 12);
        assert_eq!(paginator.num_pages(), 3);

        let first = paginator.page(1);
        assert!(first.has_next());
        assert!(!first.has_previous());
        assert_eq!(first.window(), Window { limit: 5, offset: 0 });

        let last = paginator.page(3);
        assert!(!last.has_next());
        assert!(last.has_previous());
        assert_eq!(last.window(), Window { limit: 5, offset: 10 });
    }

    #[test]
    fn out_of_range_pages_resolve_to_first() {
        let paginator = Paginator::new(5, 12);
        assert_eq!(paginator.page(4).number, 1);
        assert_eq!(paginator.page(0).number, 1);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let page = Paginator::new(5, 0).page(1);
        assert_eq!(page.num_pages, 1);
        assert!(!page.has_next());
        assert_eq!(page.window().offset, 0);
    }
}
