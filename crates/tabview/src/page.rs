//! Pagination over a filtered, sorted list.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};

/// Page sizes offered when no configuration says otherwise.
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// Page size used when no configuration says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Position of a page within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based page index, always `< total_pages`.
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// At least 1, even for an empty list.
    pub total_pages: usize,
}

impl Pagination {
    /// Computes the pagination for `total_items`, clamping `page_index` to
    /// the last page.
    pub fn new(total_items: usize, page_index: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size).max(1);
        Pagination {
            page_index: page_index.min(total_pages - 1),
            page_size,
            total_items,
            total_pages,
        }
    }

    /// Index of the first item on this page.
    pub fn start(&self) -> usize {
        (self.page_index * self.page_size).min(self.total_items)
    }

    /// Index one past the last item on this page.
    pub fn end(&self) -> usize {
        (self.start() + self.page_size).min(self.total_items)
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }
}

/// One page of items plus its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Returns page `page_index` of `items`.
///
/// An out-of-range index is clamped to the last page, so a list that shrank
/// never yields an empty page past its end. A `page_size` of 0 is treated
/// as 1.
///
/// ```
/// use tabview::paginate;
///
/// let page = paginate((1..=12).collect(), 5, 10);
/// assert_eq!(page.pagination.page_index, 1);
/// assert_eq!(page.items, vec![11, 12]);
/// ```
pub fn paginate<T>(mut items: Vec<T>, page_index: usize, page_size: usize) -> Page<T> {
    let pagination = Pagination::new(items.len(), page_index, page_size);
    items.truncate(pagination.end());
    items.drain(..pagination.start());
    Page { items, pagination }
}

/// What to do with a page size outside the allowed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSizePolicy {
    /// Use the nearest allowed size.
    #[default]
    Clamp,
    /// Refuse the request and keep the current size.
    Reject,
}

/// Sorted, de-duplicated, non-empty set of allowed page sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizes(Vec<usize>);

impl PageSizes {
    /// Builds the set, rejecting an empty set or a size of zero.
    pub fn new(sizes: impl IntoIterator<Item = usize>) -> Result<Self> {
        let mut sizes: Vec<usize> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        if sizes.is_empty() {
            return Err(ViewError::InvalidConfig(
                "at least one page size is required".to_string(),
            ));
        }
        if sizes[0] == 0 {
            return Err(ViewError::InvalidConfig(
                "page sizes must be greater than zero".to_string(),
            ));
        }
        Ok(PageSizes(sizes))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn contains(&self, size: usize) -> bool {
        self.0.binary_search(&size).is_ok()
    }

    /// The allowed size closest to `size`. Ties go to the smaller size.
    pub fn nearest(&self, size: usize) -> usize {
        let mut best = self.0[0];
        for &candidate in &self.0[1..] {
            if candidate.abs_diff(size) < best.abs_diff(size) {
                best = candidate;
            }
        }
        best
    }

    /// Resolves a requested page size under `policy`.
    pub fn resolve(&self, requested: usize, policy: PageSizePolicy) -> Result<usize> {
        if self.contains(requested) {
            return Ok(requested);
        }
        match policy {
            PageSizePolicy::Clamp => Ok(self.nearest(requested)),
            PageSizePolicy::Reject => Err(ViewError::InvalidPageSize {
                requested,
                allowed: self.0.clone(),
            }),
        }
    }
}

impl Default for PageSizes {
    fn default() -> Self {
        PageSizes(DEFAULT_PAGE_SIZES.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_one_page() {
        let page = paginate(Vec::<u32>::new(), 0, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.page_index, 0);
        assert_eq!(page.pagination.total_items, 0);
    }

    #[test]
    fn slices_pages() {
        let items: Vec<u32> = (1..=25).collect();
        let first = paginate(items.clone(), 0, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.pagination.total_pages, 3);
        assert!(first.pagination.has_next());
        assert!(!first.pagination.has_prev());

        let last = paginate(items, 2, 10);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert!(!last.pagination.has_next());
        assert!(last.pagination.has_prev());
    }

    #[test]
    fn clamps_out_of_range_index() {
        let page = paginate((1..=12).collect::<Vec<u32>>(), 3, 10);
        assert_eq!(page.pagination.page_index, 1);
        assert_eq!(page.items, vec![11, 12]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let page = paginate((1..=20).collect::<Vec<u32>>(), 5, 10);
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!(page.pagination.page_index, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn zero_page_size_treated_as_one() {
        let page = paginate(vec!['a', 'b'], 1, 0);
        assert_eq!(page.pagination.page_size, 1);
        assert_eq!(page.items, vec!['b']);
    }

    #[test]
    fn page_sizes_validation() {
        assert!(PageSizes::new(Vec::new()).is_err());
        assert!(PageSizes::new([0, 10]).is_err());
        let sizes = PageSizes::new([25, 5, 10, 5]).unwrap();
        assert_eq!(sizes.as_slice(), &[5, 10, 25]);
    }

    #[test]
    fn nearest_size() {
        let sizes = PageSizes::default();
        assert_eq!(sizes.nearest(1), 5);
        assert_eq!(sizes.nearest(12), 10);
        assert_eq!(sizes.nearest(20), 25);
        assert_eq!(sizes.nearest(1000), 50);
        assert_eq!(sizes.nearest(7), 5);
        assert_eq!(sizes.nearest(8), 10);
    }

    #[test]
    fn nearest_tie_goes_to_smaller() {
        let sizes = PageSizes::new([10, 20]).unwrap();
        assert_eq!(sizes.nearest(15), 10);
    }

    #[test]
    fn resolve_policies() {
        let sizes = PageSizes::default();
        assert_eq!(sizes.resolve(25, PageSizePolicy::Reject).unwrap(), 25);
        assert_eq!(sizes.resolve(30, PageSizePolicy::Clamp).unwrap(), 25);
        assert!(matches!(
            sizes.resolve(30, PageSizePolicy::Reject),
            Err(ViewError::InvalidPageSize { requested: 30, .. })
        ));
    }
}
