//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the plugin shows.
//! It keeps the record store and the view knobs (search term, sort, page, page
//! size, form draft, editing marker, theme mode), and recomputes the derived
//! view from them whenever one changes.
//!
//! # Derived View
//!
//! `view` is always `derive_view(store, search_query, sort)`; `refresh_view()`
//! is the only writer. The visible page is sliced from it on demand by
//! [`AppState::current_page`], so page and selection can never point past the
//! data.

use super::modes::{InputMode, LoadState, ThemeMode};
use super::notifications::{ToastKind, ToastQueue};
use crate::domain::error::Result;
use crate::domain::query::{self, derive_view, paginate, PageSize, PageSlice, SortKey, SortSpec};
use crate::domain::{FormDraft, FormField, Record};
use crate::source::{FetchRequest, DEFAULT_RECORD_LIMIT};
use crate::store::RecordStore;
use crate::ui::helpers::{flatten_line, truncate_chars};
use crate::ui::theme::{Theme, ThemePair};
use crate::ui::viewmodel::{
    ColumnHeaders, DisplayItem, EmptyState, FooterInfo, FormFieldInfo, FormInfo, HeaderInfo,
    PagerInfo, SearchBarInfo, ToastInfo, UIViewModel,
};
use chrono::{DateTime, Utc};

/// Width of the ID column, wide enough for millisecond-timestamp ids.
pub const ID_COLUMN_WIDTH: usize = 14;
/// Width of the NAME column.
pub const NAME_COLUMN_WIDTH: usize = 32;
/// Width of the EMAIL column.
pub const EMAIL_COLUMN_WIDTH: usize = 28;

/// Outcome of a successful form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Added(i64),
    Updated(i64),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every record currently known, in source order.
    pub store: RecordStore,

    /// Filtered and sorted records. Written only by `refresh_view()`.
    pub view: Vec<Record>,

    /// Progress of the startup fetch.
    pub load: LoadState,

    /// Current search term.
    pub search_query: String,

    /// Active sort, `None` for source order.
    pub sort: Option<SortSpec>,

    /// One-based page number, clamped to the view's page count.
    pub page: usize,

    pub page_size: PageSize,

    /// Selected row within the current page.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Add/edit form contents.
    pub form: FormDraft,

    /// Id of the record being edited; `None` while adding or browsing.
    pub editing: Option<i64>,

    pub theme_mode: ThemeMode,

    pub themes: ThemePair,

    pub toasts: ToastQueue,

    /// Request issued once web access is granted.
    pub request: FetchRequest,

    /// Number of fetched records kept.
    pub record_limit: usize,
}

impl AppState {
    /// Creates a state holding `records`, in the loading phase with default knobs.
    #[must_use]
    pub fn new(records: Vec<Record>, themes: ThemePair) -> Self {
        let mut state = Self {
            store: RecordStore::new(records),
            view: vec![],
            load: LoadState::Loading,
            search_query: String::new(),
            sort: None,
            page: 1,
            page_size: PageSize::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            form: FormDraft::default(),
            editing: None,
            theme_mode: ThemeMode::default(),
            themes,
            toasts: ToastQueue::default(),
            request: FetchRequest::from_config(&crate::Config::default()),
            record_limit: DEFAULT_RECORD_LIMIT,
        };
        state.refresh_view();
        state
    }

    /// Palette for the active theme mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.get(self.theme_mode)
    }

    /// Installs fetched records and marks the load complete.
    pub fn load_records(&mut self, records: Vec<Record>) {
        self.store.replace_all(records);
        self.load = LoadState::Ready;
        self.page = 1;
        self.selected_index = 0;
        self.refresh_view();
    }

    /// Recomputes the derived view and clamps page and selection into it.
    pub fn refresh_view(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_view",
            total_records = self.store.len(),
            query_len = self.search_query.len(),
            sort = ?self.sort
        )
        .entered();

        self.view = derive_view(self.store.all(), &self.search_query, self.sort);

        let total_pages = query::total_pages(self.view.len(), self.page_size);
        self.page = query::clamp_page(self.page, total_pages);

        let on_page = self.current_page().items.len();
        self.selected_index = if on_page == 0 {
            0
        } else {
            self.selected_index.min(on_page - 1)
        };

        tracing::debug!(
            view_count = self.view.len(),
            page = self.page,
            total_pages,
            "view refreshed"
        );
    }

    /// The current page of the derived view.
    #[must_use]
    pub fn current_page(&self) -> PageSlice {
        paginate(&self.view, self.page, self.page_size)
    }

    /// Number of pages in the derived view.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        query::total_pages(self.view.len(), self.page_size)
    }

    /// Record under the cursor, if the page has any rows.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        let offset = (self.page - 1) * self.page_size.rows() + self.selected_index;
        if self.selected_index >= self.current_page().items.len() {
            return None;
        }
        self.view.get(offset)
    }

    /// Moves the cursor down within the page, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.current_page().items.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up within the page, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.current_page().items.len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Jumps to `page` (clamped). Returns `true` if the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let target = query::clamp_page(page, self.total_pages());
        if target == self.page {
            return false;
        }
        self.page = target;
        self.selected_index = 0;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Switches to the next larger (or smaller) page size and returns to page 1.
    pub fn cycle_page_size(&mut self, forward: bool) {
        self.page_size = if forward {
            self.page_size.next()
        } else {
            self.page_size.previous()
        };
        self.page = 1;
        self.selected_index = 0;
        self.refresh_view();
    }

    /// Sorts by `key`, flipping direction if it is already the active key.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = Some(SortSpec::toggled(self.sort, key));
        self.page = 1;
        self.selected_index = 0;
        self.refresh_view();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.search_changed();
    }

    pub fn pop_search_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.search_changed();
        }
    }

    pub fn clear_search(&mut self) {
        if !self.search_query.is_empty() {
            self.search_query.clear();
            self.search_changed();
        }
    }

    fn search_changed(&mut self) {
        tracing::trace!(query = %self.search_query, "search query updated");
        self.page = 1;
        self.selected_index = 0;
        self.refresh_view();
    }

    /// Opens an empty form for a new record.
    pub fn begin_add(&mut self) {
        self.form = FormDraft::default();
        self.editing = None;
        self.input_mode = InputMode::Form(FormField::Name);
    }

    /// Opens the form prefilled with the selected record.
    ///
    /// Returns `false` if nothing is selected.
    pub fn begin_edit(&mut self) -> bool {
        let Some((form, id)) = self
            .selected_record()
            .map(|record| (FormDraft::from_record(record), record.id))
        else {
            return false;
        };
        self.form = form;
        self.editing = Some(id);
        self.input_mode = InputMode::Form(FormField::Name);
        true
    }

    /// Closes the form, discarding the draft.
    pub fn cancel_form(&mut self) {
        self.form = FormDraft::default();
        self.editing = None;
        self.input_mode = InputMode::Normal;
    }

    /// Validates the draft and applies it to the store.
    ///
    /// New records get `now` in milliseconds as id, bumped past any id already
    /// taken. On success the form is closed.
    ///
    /// # Errors
    ///
    /// Returns a validation error (form stays open) or `NotFound` if the edited
    /// record vanished in the meantime.
    pub fn submit_form(&mut self, now: DateTime<Utc>) -> Result<Mutation> {
        let draft = self.form.validate()?;

        let mutation = if let Some(id) = self.editing {
            self.store.update(draft.into_record(id))?;
            Mutation::Updated(id)
        } else {
            let mut id = now.timestamp_millis();
            while self.store.get(id).is_some() {
                id += 1;
            }
            self.store.insert(draft.into_record(id));
            Mutation::Added(id)
        };

        self.cancel_form();
        self.refresh_view();
        Ok(mutation)
    }

    /// Deletes the selected record and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the selected record is not in the store.
    pub fn delete_selected(&mut self) -> Result<Option<Record>> {
        let Some(id) = self.selected_record().map(|record| record.id) else {
            return Ok(None);
        };

        let removed = self.store.remove(id)?;
        if self.editing == Some(id) {
            self.cancel_form();
        }
        self.refresh_view();
        Ok(Some(removed))
    }

    /// Flips between light and dark mode and returns the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggled();
        self.theme_mode
    }

    /// Pushes a toast. Returns the delay until the next expiry when the queue
    /// was empty, meaning a tick has to be scheduled.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) -> Option<f64> {
        let was_empty = self.toasts.is_empty();
        self.toasts.push(kind, message, now);
        if was_empty {
            self.toasts.next_expiry_in(now)
        } else {
            None
        }
    }

    /// Computes a renderable UI view model from current state and terminal size.
    ///
    /// # Windowing
    ///
    /// When the page holds more rows than fit on screen, the visible window is
    /// centred on the selection and pulled back at the end of the page so it
    /// stays full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mut vm = UIViewModel {
            display_items: vec![],
            selected_index: 0,
            header: self.compute_header(),
            columns: self.compute_columns(),
            pager: self.compute_pager(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
            form: self.compute_form(),
            toasts: self.compute_toasts(),
        };

        if vm.empty_state.is_some() || vm.form.is_some() {
            return vm;
        }

        let page = self.current_page();
        if page.items.is_empty() {
            return vm;
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(page.items.len());
        if visible_end - visible_start < available_rows && page.items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        vm.display_items = page.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, record)| {
                self.compute_display_item(record, visible_start + relative_idx, cols)
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);

        vm
    }

    fn compute_display_item(&self, record: &Record, page_idx: usize, cols: usize) -> DisplayItem {
        let body_width = cols.saturating_sub(ID_COLUMN_WIDTH + NAME_COLUMN_WIDTH + EMAIL_COLUMN_WIDTH);

        let name = truncate_chars(&flatten_line(&record.name), NAME_COLUMN_WIDTH - 2);
        let email = truncate_chars(&record.email, EMAIL_COLUMN_WIDTH - 2);

        let highlighting = !self.search_query.is_empty();
        let name_highlights = if highlighting {
            Self::compute_highlight_ranges(&name, &self.search_query)
        } else {
            vec![]
        };
        let email_highlights = if highlighting {
            Self::compute_highlight_ranges(&email, &self.search_query)
        } else {
            vec![]
        };

        DisplayItem {
            id: record.id.to_string(),
            name,
            email,
            body: truncate_chars(&flatten_line(&record.body), body_width),
            is_selected: page_idx == self.selected_index,
            name_highlights,
            email_highlights,
        }
    }

    /// Character ranges of every case-insensitive occurrence of `query` in `text`.
    ///
    /// Occurrences do not overlap. Ranges are `(start, end)` with exclusive end,
    /// counted in characters so they line up with the rendered text.
    fn compute_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
        let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
        let haystack: Vec<char> = text.chars().map(fold).collect();
        let needle: Vec<char> = query.chars().map(fold).collect();

        if needle.is_empty() || needle.len() > haystack.len() {
            return vec![];
        }

        let mut ranges = Vec::new();
        let mut idx = 0;
        while idx + needle.len() <= haystack.len() {
            if haystack[idx..idx + needle.len()] == needle[..] {
                ranges.push((idx, idx + needle.len()));
                idx += needle.len();
            } else {
                idx += 1;
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.load {
            LoadState::Ready => format!(" Comments ({}) ", self.view.len()),
            _ => " Comments ".to_string(),
        };
        let theme_badge = match self.theme_mode {
            ThemeMode::Light => " ☀ light ".to_string(),
            ThemeMode::Dark => " ☾ dark ".to_string(),
        };
        HeaderInfo { title, theme_badge }
    }

    fn compute_columns(&self) -> ColumnHeaders {
        let label = |key: SortKey, title: &str| match self.sort {
            Some(spec) if spec.key == key => format!("{title} {}", spec.direction.arrow()),
            _ => title.to_string(),
        };
        ColumnHeaders {
            id: "ID".to_string(),
            name: label(SortKey::Name, "NAME"),
            email: label(SortKey::Email, "EMAIL"),
            body: "BODY".to_string(),
        }
    }

    fn compute_pager(&self) -> PagerInfo {
        let total_pages = self.total_pages();
        let text = if total_pages == 0 {
            if self.search_query.is_empty() {
                "No comments".to_string()
            } else {
                format!("No comments match \"{}\"", self.search_query)
            }
        } else {
            let mut text = format!(
                "Page {} of {total_pages} · {} per page · {} comments",
                self.page,
                self.page_size.rows(),
                self.view.len()
            );
            if let Some(spec) = self.sort {
                text.push_str(&format!(" · sorted by {} {}", spec.key.label(), spec.direction.arrow()));
            }
            text
        };
        PagerInfo { text }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: move  h/l: page  g/G: first/last  /: search  1/2: sort name/email  +/-: size  a: add  e: edit  d: delete  t: theme  q: quit"
            }
            InputMode::Search => "Type to filter  Enter: done  Esc: clear search",
            InputMode::Form(_) => "Tab/Shift+Tab: next/prev field  Enter: save  Esc: cancel",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match &self.load {
            LoadState::Loading => Some(EmptyState {
                message: "Loading comments…".to_string(),
                subtitle: "Waiting for the comment feed to respond".to_string(),
                is_error: false,
            }),
            LoadState::Failed(message) => Some(EmptyState {
                message: "Failed to load comments".to_string(),
                subtitle: message.clone(),
                is_error: true,
            }),
            LoadState::Ready => None,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        (self.input_mode == InputMode::Search || !self.search_query.is_empty()).then(|| SearchBarInfo {
            query: self.search_query.clone(),
        })
    }

    fn compute_form(&self) -> Option<FormInfo> {
        let InputMode::Form(focused) = self.input_mode else {
            return None;
        };

        let title = self
            .editing
            .map_or_else(|| "New comment".to_string(), |id| format!("Edit comment #{id}"));

        let fields = FormField::ORDER
            .into_iter()
            .map(|field| FormFieldInfo {
                field,
                label: field.label().to_string(),
                value: self.form.field(field).to_string(),
                is_focused: field == focused,
                is_required: field.is_required(),
            })
            .collect();

        Some(FormInfo { title, fields })
    }

    fn compute_toasts(&self) -> Vec<ToastInfo> {
        self.toasts
            .visible()
            .iter()
            .map(|toast| ToastInfo {
                kind: toast.kind,
                text: format!("{} {}", toast.kind.icon(), toast.message),
            })
            .collect()
    }

    /// Rows left for table rows after the surrounding chrome.
    ///
    /// Normal layout uses 7 rows (blank, header, border, column titles, pager,
    /// border, footer); the search bar adds 3.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        if self.search_query.is_empty() && !matches!(self.input_mode, InputMode::Search) {
            total_rows.saturating_sub(7)
        } else {
            total_rows.saturating_sub(10)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CommentaryError;

    fn record(id: i64, name: &str, email: &str) -> Record {
        Record {
            id,
            post_id: 1,
            name: name.to_string(),
            email: email.to_string(),
            body: format!("body of {name}"),
        }
    }

    fn ready_state(count: i64) -> AppState {
        let mut state = AppState::new(vec![], ThemePair::default());
        state.load_records(
            (1..=count)
                .map(|i| record(i, &format!("name {i:03}"), &format!("user{i}@example.com")))
                .collect(),
        );
        state
    }

    #[test]
    fn new_state_starts_loading() {
        let state = AppState::new(vec![], ThemePair::default());
        assert_eq!(state.load, LoadState::Loading);
        let vm = state.compute_viewmodel(24, 120);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("Loading comments…".to_string()));
    }

    #[test]
    fn failed_load_replaces_the_ui_with_the_error() {
        let mut state = AppState::new(vec![], ThemePair::default());
        state.load = LoadState::Failed("Request failed with status 500".to_string());
        let vm = state.compute_viewmodel(24, 120);
        let empty = vm.empty_state.expect("error screen");
        assert!(empty.is_error);
        assert_eq!(empty.subtitle, "Request failed with status 500");
        assert!(vm.display_items.is_empty());
    }

    #[test]
    fn paging_is_clamped() {
        let mut state = ready_state(23);
        assert_eq!(state.total_pages(), 3);
        assert!(!state.previous_page());
        assert!(state.last_page());
        assert_eq!(state.page, 3);
        assert!(!state.next_page());
        assert_eq!(state.current_page().items.len(), 3);
        assert!(state.first_page());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn search_resets_to_first_page_and_filters() {
        let mut state = ready_state(30);
        state.last_page();
        for c in "NAME 02".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.page, 1);
        let ids: Vec<i64> = state.view.iter().map(|r| r.id).collect();
        assert_eq!(ids, (20..=29).collect::<Vec<_>>());

        state.clear_search();
        assert_eq!(state.view.len(), 30);
    }

    #[test]
    fn deleting_last_row_of_last_page_moves_back_a_page() {
        let mut state = ready_state(11);
        state.last_page();
        assert_eq!(state.page, 2);
        let removed = state.delete_selected().expect("delete works").expect("row selected");
        assert_eq!(removed.id, 11);
        assert_eq!(state.page, 1);
        assert_eq!(state.store.len(), 10);
    }

    #[test]
    fn selection_is_clamped_after_shrinking() {
        let mut state = ready_state(10);
        state.move_selection_up();
        assert_eq!(state.selected_index, 9);
        state.push_search_char('1');
        assert!(state.selected_record().is_some());
        assert!(state.selected_index < state.current_page().items.len());
    }

    #[test]
    fn adding_uses_timestamp_ids_and_prepends() {
        let mut state = ready_state(3);
        let now = Utc::now();
        state.begin_add();
        state.form.name = "fresh".to_string();
        state.form.email = "fresh@example.com".to_string();
        state.form.body = "hello".to_string();

        let mutation = state.submit_form(now).expect("valid form");
        assert_eq!(mutation, Mutation::Added(now.timestamp_millis()));
        assert_eq!(state.view[0].name, "fresh");
        assert_eq!(state.input_mode, InputMode::Normal);

        state.begin_add();
        state.form = FormDraft {
            name: "second".to_string(),
            email: "s@example.com".to_string(),
            body: "again".to_string(),
            post_id: "4".to_string(),
        };
        let second = state.submit_form(now).expect("valid form");
        assert_eq!(second, Mutation::Added(now.timestamp_millis() + 1));
    }

    #[test]
    fn editing_updates_in_place() {
        let mut state = ready_state(3);
        state.move_selection_down();
        assert!(state.begin_edit());
        assert_eq!(state.editing, Some(2));
        assert_eq!(state.form.name, "name 002");
        state.form.name = "renamed".to_string();

        let mutation = state.submit_form(Utc::now()).expect("valid form");
        assert_eq!(mutation, Mutation::Updated(2));
        assert_eq!(state.store.all()[1].name, "renamed");
        assert_eq!(state.editing, None);
    }

    #[test]
    fn invalid_form_stays_open() {
        let mut state = ready_state(1);
        state.begin_add();
        state.form.name = "only a name".to_string();
        assert!(matches!(state.submit_form(Utc::now()), Err(CommentaryError::Validation(_))));
        assert!(matches!(state.input_mode, InputMode::Form(_)));
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn sort_arrow_follows_the_active_column() {
        let mut state = ready_state(3);
        state.sort_by(SortKey::Email);
        state.sort_by(SortKey::Email);
        let vm = state.compute_viewmodel(24, 120);
        assert_eq!(vm.columns.email, "EMAIL ↓");
        assert_eq!(vm.columns.name, "NAME");
        assert_eq!(state.view[0].id, 3);
    }

    #[test]
    fn highlight_ranges_are_case_insensitive_and_disjoint() {
        assert_eq!(
            AppState::compute_highlight_ranges("Abab AB", "ab"),
            vec![(0, 2), (2, 4), (5, 7)]
        );
        assert!(AppState::compute_highlight_ranges("short", "longer needle").is_empty());
        assert_eq!(AppState::compute_highlight_ranges("etiam et al", "et "), vec![(6, 9)]);
    }

    #[test]
    fn trailing_space_in_query_is_matched_literally() {
        let mut state = ready_state(12);
        for c in "name ".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.view.len(), 12);

        state.clear_search();
        for c in "001 ".chars() {
            state.push_search_char(c);
        }
        assert!(state.view.is_empty());
        assert_eq!(state.compute_viewmodel(24, 120).pager.text, "No comments match \"001 \"");
    }

    #[test]
    fn window_keeps_selection_visible_on_small_terminals() {
        let mut state = ready_state(50);
        state.cycle_page_size(true);
        assert_eq!(state.page_size, PageSize::Twenty);
        for _ in 0..15 {
            state.move_selection_down();
        }
        let vm = state.compute_viewmodel(12, 120);
        assert_eq!(vm.display_items.len(), 5);
        assert!(vm.display_items[vm.selected_index].is_selected);
    }

    #[test]
    fn theme_toggle_switches_palette_and_badge() {
        let mut state = ready_state(1);
        assert_eq!(state.toggle_theme(), ThemeMode::Dark);
        assert_eq!(state.theme().name, "catppuccin-mocha");
        assert_eq!(state.compute_viewmodel(24, 120).header.theme_badge, " ☾ dark ");
    }

    #[test]
    fn first_toast_requests_a_tick() {
        let mut state = ready_state(1);
        let now = Utc::now();
        assert!(state.notify(ToastKind::Info, "one", now).is_some());
        assert!(state.notify(ToastKind::Info, "two", now).is_none());
        assert_eq!(state.compute_viewmodel(24, 120).toasts.len(), 2);
    }
}
