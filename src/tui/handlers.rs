//! Keyboard event handling for the catalog browser.
//!
//! Events are dispatched by mode, highest priority first: input focus
//! (search box / page input), then open modals, then list navigation and
//! global keys.

use iocraft::prelude::{Handler, KeyCode, State};

use crate::catalog::{CatalogState, Intent};
use crate::favorites::FavoritesStore;
use crate::modal::{DetailOverlay, OverlayPhase};
use crate::presenter;
use crate::sort::{SortDirection, SortField, SortSpec};
use crate::tui::components::Selectable;
use crate::types::PokemonEntry;

/// Which part of the screen receives plain keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
    PageInput,
}

/// Draft sort configuration being edited in the sort modal. The catalog's
/// sort only changes when the draft is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortDraft {
    pub field: SortField,
    pub direction: SortDirection,
    /// 0 = field selector, 1 = direction selector
    pub focused_row: usize,
}

impl SortDraft {
    pub fn from_spec(spec: Option<SortSpec>) -> Self {
        let spec = spec.unwrap_or_default();
        Self {
            field: spec.field,
            direction: spec.direction,
            focused_row: 0,
        }
    }

    pub fn spec(&self) -> SortSpec {
        SortSpec::new(self.field, self.direction)
    }

    pub fn switch_row(&mut self) {
        self.focused_row = 1 - self.focused_row;
    }

    pub fn cycle_forward(&mut self) {
        if self.focused_row == 0 {
            self.field = self.field.next();
        } else {
            self.direction = self.direction.next();
        }
    }

    pub fn cycle_backward(&mut self) {
        if self.focused_row == 0 {
            self.field = self.field.prev();
        } else {
            self.direction = self.direction.prev();
        }
    }
}

/// State references an event handler can act on.
pub struct BrowserContext<'a> {
    pub catalog: &'a mut State<CatalogState>,
    pub favorites: &'a mut State<FavoritesStore>,
    pub overlay: &'a mut State<DetailOverlay>,
    pub focus: &'a mut State<Focus>,
    pub selected_index: &'a mut State<usize>,
    pub search_input: &'a mut State<String>,
    pub page_input: &'a mut State<String>,
    pub sort_draft: &'a mut State<Option<SortDraft>>,
    pub should_exit: &'a mut State<bool>,
    /// Snapshot of the visible slice, computed during the render pass.
    pub visible: &'a [PokemonEntry],
    /// Fires the detail fetch for an entry.
    pub detail_handler: &'a Handler<PokemonEntry>,
}

impl BrowserContext<'_> {
    fn apply_intent(&mut self, intent: Intent) {
        let mut catalog = self.catalog.read().clone();
        let mut favorites = self.favorites.read().clone();
        match presenter::dispatch(intent, &mut catalog, &mut favorites) {
            Ok(()) => {
                self.catalog.set(catalog);
                self.favorites.set(favorites);
            }
            // Nothing was persisted, so the UI keeps its previous state.
            Err(e) => tracing::warn!("intent failed: {e}"),
        }
    }

    fn selected_entry(&self) -> Option<&PokemonEntry> {
        self.visible.get(self.selected_index.get())
    }
}

/// Main event dispatcher that routes key events to the appropriate handler
pub fn handle_key_event(ctx: &mut BrowserContext<'_>, code: KeyCode) {
    // 1. Input focus captures keystrokes (TextInput consumes the typing;
    //    only Enter/Esc are handled here)
    match ctx.focus.get() {
        Focus::Search => {
            handle_search_mode(ctx, code);
            return;
        }
        Focus::PageInput => {
            handle_page_input_mode(ctx, code);
            return;
        }
        Focus::List => {}
    }

    // 2. Sort modal
    if ctx.sort_draft.read().is_some() {
        handle_sort_modal(ctx, code);
        return;
    }

    // 3. Detail modal
    if ctx.overlay.read().is_open() {
        handle_detail_modal(ctx, code);
        return;
    }

    // 4. List navigation and global keys
    handle_list(ctx, code);
}

fn handle_search_mode(ctx: &mut BrowserContext<'_>, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Tab => {
            ctx.focus.set(Focus::List);
        }
        KeyCode::Esc => {
            // Clearing the raw input propagates through the debouncer and
            // removes the filter.
            ctx.search_input.set(String::new());
            ctx.focus.set(Focus::List);
        }
        _ => {}
    }
}

fn handle_page_input_mode(ctx: &mut BrowserContext<'_>, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Tab => {
            ctx.focus.set(Focus::List);
        }
        KeyCode::Esc => {
            ctx.page_input.set(String::new());
            ctx.focus.set(Focus::List);
        }
        _ => {}
    }
}

fn handle_sort_modal(ctx: &mut BrowserContext<'_>, code: KeyCode) {
    let Some(mut draft) = *ctx.sort_draft.read() else {
        return;
    };

    match code {
        KeyCode::Tab | KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
            draft.switch_row();
            ctx.sort_draft.set(Some(draft));
        }
        KeyCode::Left | KeyCode::Char('h') => {
            draft.cycle_backward();
            ctx.sort_draft.set(Some(draft));
        }
        KeyCode::Right | KeyCode::Char('l') => {
            draft.cycle_forward();
            ctx.sort_draft.set(Some(draft));
        }
        KeyCode::Enter => {
            // Atomic apply: exactly one sort change per confirm.
            ctx.apply_intent(Intent::SetSort(Some(draft.spec())));
            ctx.sort_draft.set(None);
        }
        KeyCode::Char('x') => {
            ctx.apply_intent(Intent::SetSort(None));
            ctx.sort_draft.set(None);
        }
        KeyCode::Esc => {
            ctx.sort_draft.set(None);
        }
        _ => {}
    }
}

fn handle_detail_modal(ctx: &mut BrowserContext<'_>, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter => {
            let mut overlay = ctx.overlay.read().clone();
            overlay.close();
            ctx.overlay.set(overlay);
        }
        KeyCode::Char('f') => {
            let open_id = match ctx.overlay.read().phase() {
                OverlayPhase::Ready(detail) => Some(detail.id),
                OverlayPhase::Loading(id) => Some(*id),
                OverlayPhase::Closed => None,
            };
            if let Some(id) = open_id {
                ctx.apply_intent(Intent::ToggleFavorite(id));
            }
        }
        _ => {}
    }
}

fn handle_list(ctx: &mut BrowserContext<'_>, code: KeyCode) {
    match code {
        KeyCode::Char('q') => {
            ctx.should_exit.set(true);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let last = ctx.visible.len().saturating_sub(1);
            let next = (ctx.selected_index.get() + 1).min(last);
            ctx.selected_index.set(next);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            ctx.selected_index.set(ctx.selected_index.get().saturating_sub(1));
        }
        KeyCode::Char('g') => {
            ctx.selected_index.set(0);
        }
        KeyCode::Char('G') => {
            ctx.selected_index.set(ctx.visible.len().saturating_sub(1));
        }
        KeyCode::Char('h') | KeyCode::Left => {
            let page = ctx.catalog.read().page();
            ctx.apply_intent(Intent::RequestPage(page.saturating_sub(1)));
            ctx.selected_index.set(0);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            let page = ctx.catalog.read().page();
            ctx.apply_intent(Intent::RequestPage(page + 1));
            ctx.selected_index.set(0);
        }
        KeyCode::Enter => {
            if let Some(entry) = ctx.selected_entry().cloned() {
                let mut overlay = ctx.overlay.read().clone();
                overlay.open(entry.id);
                ctx.overlay.set(overlay);
                ctx.detail_handler.clone()(entry);
            }
        }
        KeyCode::Char('f') => {
            if let Some(entry) = ctx.selected_entry() {
                let id = entry.id;
                ctx.apply_intent(Intent::ToggleFavorite(id));
            }
        }
        KeyCode::Char('/') => {
            ctx.focus.set(Focus::Search);
        }
        KeyCode::Char('p') => {
            ctx.focus.set(Focus::PageInput);
        }
        KeyCode::Char('s') => {
            let current = ctx.catalog.read().sort();
            ctx.sort_draft.set(Some(SortDraft::from_spec(current)));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_draft_defaults_to_id_ascending() {
        let draft = SortDraft::from_spec(None);
        assert_eq!(draft.field, SortField::Id);
        assert_eq!(draft.direction, SortDirection::Ascending);
        assert_eq!(draft.focused_row, 0);
    }

    #[test]
    fn test_sort_draft_starts_from_active_spec() {
        let spec = SortSpec::new(SortField::Name, SortDirection::Descending);
        let draft = SortDraft::from_spec(Some(spec));
        assert_eq!(draft.spec(), spec);
    }

    #[test]
    fn test_sort_draft_row_switching_wraps() {
        let mut draft = SortDraft::default();
        draft.switch_row();
        assert_eq!(draft.focused_row, 1);
        draft.switch_row();
        assert_eq!(draft.focused_row, 0);
    }

    #[test]
    fn test_sort_draft_cycling_targets_focused_row() {
        let mut draft = SortDraft::default();
        draft.cycle_forward();
        assert_eq!(draft.field, SortField::Name);
        assert_eq!(draft.direction, SortDirection::Ascending);

        draft.switch_row();
        draft.cycle_forward();
        assert_eq!(draft.field, SortField::Name);
        assert_eq!(draft.direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_draft_cycle_backward_wraps() {
        let mut draft = SortDraft::default();
        draft.cycle_backward();
        assert_eq!(draft.field, SortField::Name);
        draft.cycle_backward();
        assert_eq!(draft.field, SortField::Id);
    }
}
