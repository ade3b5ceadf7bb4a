//! Derived-view computation: filtering, sorting and pagination.
//!
//! Everything in this module is a pure function of its inputs. The application
//! state stores only the source collection and the knobs (search term, sort
//! specification, page, page size); the visible rows are recomputed from those
//! through [`derive_view`] and [`paginate`] and never edited in place.
//!
//! ```text
//! records ─▶ filter_records(term) ─▶ sort_records(spec) ─▶ paginate(page, size)
//! ```

use super::record::Record;
use std::cmp::Ordering;

/// Field a sort can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
}

impl SortKey {
    /// Column label used in the table header and pager line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
        }
    }

    fn field(self, record: &Record) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Email => &record.email,
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow glyph shown next to the sorted column.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Active sort: which key, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Computes the sort that results from selecting `key`.
    ///
    /// Selecting the key that is already active flips its direction; any other
    /// key (or no active sort) starts ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use commentary::domain::query::{SortDirection, SortKey, SortSpec};
    ///
    /// let first = SortSpec::toggled(None, SortKey::Name);
    /// assert_eq!(first.direction, SortDirection::Ascending);
    ///
    /// let second = SortSpec::toggled(Some(first), SortKey::Name);
    /// assert_eq!(second.direction, SortDirection::Descending);
    ///
    /// let other = SortSpec::toggled(Some(second), SortKey::Email);
    /// assert_eq!(other.direction, SortDirection::Ascending);
    /// ```
    #[must_use]
    pub fn toggled(current: Option<Self>, key: SortKey) -> Self {
        match current {
            Some(spec) if spec.key == key => Self {
                key,
                direction: spec.direction.flipped(),
            },
            _ => Self {
                key,
                direction: SortDirection::Ascending,
            },
        }
    }

    fn compare(self, a: &Record, b: &Record) -> Ordering {
        let ordering = self.key.field(a).cmp(self.key.field(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Rows-per-page choices offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    /// Every selectable size, smallest first.
    pub const ALL: [Self; 4] = [Self::Five, Self::Ten, Self::Twenty, Self::Fifty];

    /// Number of rows this size represents.
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    /// Looks up the size for a row count, `None` if it is not one of the choices.
    #[must_use]
    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.rows() == rows)
    }

    /// Next larger size, wrapping to the smallest.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Next smaller size, wrapping to the largest.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One page of the derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    /// Records on this page, in view order.
    pub items: Vec<Record>,
    /// One-based page number, already clamped.
    pub page: usize,
    /// Number of pages in the view; zero when the view is empty.
    pub total_pages: usize,
    /// Number of records in the whole view.
    pub total_items: usize,
}

/// Keeps the records matching `term` (case-insensitive, any of name/email/body).
#[must_use]
pub fn filter_records(records: &[Record], term: &str) -> Vec<Record> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect()
}

/// Sorts records in place by `spec`. Ties keep their relative order.
pub fn sort_records(records: &mut [Record], spec: SortSpec) {
    records.sort_by(|a, b| spec.compare(a, b));
}

/// Applies the filter and then the optional sort, returning a new collection.
#[must_use]
pub fn derive_view(records: &[Record], term: &str, sort: Option<SortSpec>) -> Vec<Record> {
    let mut view = filter_records(records, term);
    if let Some(spec) = sort {
        sort_records(&mut view, spec);
    }
    view
}

/// Number of pages needed to show `len` records at `size` per page.
#[must_use]
pub const fn total_pages(len: usize, size: PageSize) -> usize {
    len.div_ceil(size.rows())
}

/// Clamps a one-based page into `[1, total]`; with no pages the result is 1.
#[must_use]
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Slices the requested page out of a derived view.
#[must_use]
pub fn paginate(view: &[Record], page: usize, size: PageSize) -> PageSlice {
    let total_pages = total_pages(view.len(), size);
    let page = clamp_page(page, total_pages);
    let start = (page - 1) * size.rows();
    let end = (start + size.rows()).min(view.len());

    PageSlice {
        items: view.get(start..end).map(<[Record]>::to_vec).unwrap_or_default(),
        page,
        total_pages,
        total_items: view.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, email: &str, body: &str) -> Record {
        Record {
            id,
            post_id: 1,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(1, "charlie", "zed@example.com", "first body"),
            record(2, "alpha", "yan@example.com", "second BODY"),
            record(3, "bravo", "xia@example.com", "third"),
        ]
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn filter_is_case_insensitive_across_fields() {
        let records = sample();
        assert_eq!(ids(&filter_records(&records, "BODY")), vec![1, 2]);
        assert_eq!(ids(&filter_records(&records, "Xia@")), vec![3]);
        assert_eq!(ids(&filter_records(&records, "ALPHA")), vec![2]);
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        assert_eq!(ids(&filter_records(&sample(), "")), vec![1, 2, 3]);
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_term() {
        let records = vec![
            record(1, "etiam", "a@x.io", "nulla"),
            record(2, "et al", "b@x.io", "nulla"),
        ];
        assert_eq!(ids(&filter_records(&records, "et ")), vec![2]);
        assert_eq!(ids(&filter_records(&records, " al")), vec![2]);
        assert_eq!(ids(&filter_records(&records, " ")), vec![2]);
    }

    #[test]
    fn sorts_by_either_key_in_both_directions() {
        let records = sample();
        let by_name = derive_view(&records, "", Some(SortSpec::toggled(None, SortKey::Name)));
        assert_eq!(ids(&by_name), vec![2, 3, 1]);

        let desc = SortSpec {
            key: SortKey::Email,
            direction: SortDirection::Descending,
        };
        assert_eq!(ids(&derive_view(&records, "", Some(desc))), vec![1, 2, 3]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let records = vec![
            record(1, "same", "a", ""),
            record(2, "same", "b", ""),
            record(3, "same", "c", ""),
        ];
        let spec = SortSpec {
            key: SortKey::Name,
            direction: SortDirection::Descending,
        };
        assert_eq!(ids(&derive_view(&records, "", Some(spec))), vec![1, 2, 3]);
    }

    #[test]
    fn derive_view_leaves_source_untouched() {
        let records = sample();
        let _ = derive_view(&records, "a", Some(SortSpec::toggled(None, SortKey::Name)));
        assert_eq!(records, sample());
    }

    #[test]
    fn repeated_toggle_alternates_direction() {
        let mut spec = None;
        let mut seen = vec![];
        for _ in 0..4 {
            let next = SortSpec::toggled(spec, SortKey::Email);
            seen.push(next.direction);
            spec = Some(next);
        }
        assert_eq!(
            seen,
            vec![
                SortDirection::Ascending,
                SortDirection::Descending,
                SortDirection::Ascending,
                SortDirection::Descending,
            ]
        );
    }

    #[test]
    fn empty_view_has_zero_pages() {
        assert_eq!(total_pages(0, PageSize::Ten), 0);
        let slice = paginate(&[], 4, PageSize::Ten);
        assert_eq!(slice.total_pages, 0);
        assert_eq!(slice.page, 1);
        assert!(slice.items.is_empty());
    }

    #[test]
    fn page_is_clamped_to_available_pages() {
        let records: Vec<Record> = (1..=12).map(|i| record(i, "n", "e", "b")).collect();
        assert_eq!(total_pages(records.len(), PageSize::Five), 3);

        let last = paginate(&records, 99, PageSize::Five);
        assert_eq!(last.page, 3);
        assert_eq!(ids(&last.items), vec![11, 12]);

        let first = paginate(&records, 0, PageSize::Five);
        assert_eq!(first.page, 1);
        assert_eq!(ids(&first.items), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn page_size_cycles_through_choices() {
        assert_eq!(PageSize::Fifty.next(), PageSize::Five);
        assert_eq!(PageSize::Five.previous(), PageSize::Fifty);
        assert_eq!(PageSize::from_rows(20), Some(PageSize::Twenty));
        assert_eq!(PageSize::from_rows(7), None);
    }
}
