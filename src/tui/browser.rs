//! Main catalog browser component.
//!
//! Owns all UI state, drives the index and detail fetches through async
//! handlers, and routes keyboard events to `handlers::handle_key_event`.
//! Search and page-input keystrokes are debounced: the raw input states
//! update on every key, and a trailing-edge debouncer applies the catalog
//! mutation once the input settles.

use iocraft::prelude::*;

use crate::api::ApiClient;
use crate::catalog::{CatalogState, LoadPhase};
use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::favorites::FavoritesStore;
use crate::modal::{DetailOverlay, OverlayPhase};
use crate::presenter::{self, ListStatus};
use crate::tui::components::{
    DetailModal, EmptyState, EmptyStateKind, EntryList, Footer, Header, PageInput, PaginationBar,
    SearchBox, SortModal, browser_shortcuts, modal_shortcuts, search_shortcuts, sort_shortcuts,
};
use crate::tui::handlers::{self, BrowserContext, Focus};
use crate::tui::theme::theme;
use crate::types::PokemonEntry;

/// Props for the CatalogBrowser component
#[derive(Default, Props)]
pub struct CatalogBrowserProps {
    /// Remote client; built by the command from configuration.
    pub client: Option<ApiClient>,
}

/// Fullscreen catalog browser
#[component]
pub fn CatalogBrowser(props: &CatalogBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let client = props.client.clone();

    // Core state
    let catalog = hooks.use_state(CatalogState::new);
    let favorites = hooks.use_state(FavoritesStore::load);
    let overlay = hooks.use_state(DetailOverlay::new);

    // UI state
    let mut selected_index = hooks.use_state(|| 0usize);
    let mut focus = hooks.use_state(Focus::default);
    let search_input = hooks.use_state(String::new);
    let mut last_search_input = hooks.use_state(String::new);
    let page_input = hooks.use_state(String::new);
    let mut last_page_input = hooks.use_state(String::new);
    let mut sort_draft = hooks.use_state(|| None);
    let mut should_exit = hooks.use_state(|| false);

    // Debouncers live across renders; their actions write back into the
    // catalog state once the input settles.
    let search_debouncer = hooks.use_state(|| {
        Debouncer::new(DEFAULT_DEBOUNCE, move |raw: String| {
            let mut catalog = catalog;
            let mut next = catalog.read().clone();
            next.set_query(&raw);
            catalog.set(next);
        })
    });
    let page_debouncer = hooks.use_state(|| {
        Debouncer::new(DEFAULT_DEBOUNCE, move |raw: String| {
            // Non-numeric input is ignored; the catalog clamps the rest.
            if let Ok(n) = raw.trim().parse::<usize>() {
                let mut catalog = catalog;
                let mut next = catalog.read().clone();
                next.set_page(n);
                catalog.set(next);
            }
        })
    });

    // Async index fetch
    let index_handler: Handler<()> = hooks.use_async_handler({
        let client = client.clone();
        move |_: ()| {
            let mut catalog = catalog;
            let client = client.clone();
            async move {
                let Some(client) = client else { return };
                let mut next = catalog.read().clone();
                next.begin_load();
                catalog.set(next);

                match client.fetch_index().await {
                    Ok(entries) => {
                        let mut next = catalog.read().clone();
                        next.complete_load(entries);
                        catalog.set(next);
                    }
                    Err(e) => {
                        tracing::warn!("index load failed: {e}");
                        let mut next = catalog.read().clone();
                        next.fail_load();
                        catalog.set(next);
                    }
                }
            }
        }
    });

    // Async detail fetch; the overlay's pending-id check drops responses
    // that were superseded before they arrived.
    let detail_handler: Handler<PokemonEntry> = hooks.use_async_handler({
        let client = client.clone();
        move |entry: PokemonEntry| {
            let mut overlay = overlay;
            let client = client.clone();
            async move {
                let Some(client) = client else { return };
                match client.fetch_detail(&entry.detail_url).await {
                    Ok(detail) => {
                        let mut next = overlay.read().clone();
                        next.resolve(detail);
                        overlay.set(next);
                    }
                    Err(e) => {
                        if e.status() == Some(404) {
                            tracing::warn!("no detail record for {}", entry.id);
                        } else {
                            tracing::warn!("detail load failed for {}: {e}", entry.id);
                        }
                        let mut next = overlay.read().clone();
                        next.resolve_failed(entry.id);
                        overlay.set(next);
                    }
                }
            }
        }
    });

    // Kick off the initial index fetch once
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        index_handler.clone()(());
    }

    // Debounce raw input changes detected across renders
    let raw_search = search_input.to_string();
    if raw_search != last_search_input.to_string() {
        last_search_input.set(raw_search.clone());
        search_debouncer.read().call(raw_search);
        selected_index.set(0);
    }
    let raw_page = page_input.to_string();
    if raw_page != last_page_input.to_string() {
        last_page_input.set(raw_page.clone());
        page_debouncer.read().call(raw_page);
        selected_index.set(0);
    }

    // Snapshot for rendering and event handling
    let catalog_snapshot = catalog.read().clone();
    let visible = catalog_snapshot.visible_slice();
    let cards = presenter::cards(&catalog_snapshot, &favorites.read());
    let status = presenter::list_status(&catalog_snapshot);
    let pagination = presenter::pagination(&catalog_snapshot);
    let query = catalog_snapshot.query().map(str::to_string);

    // Keep the selection inside the visible slice
    if !visible.is_empty() && selected_index.get() >= visible.len() {
        selected_index.set(visible.len() - 1);
    }

    let detail_handler_for_events = detail_handler.clone();
    let visible_for_events = visible.clone();

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                let mut catalog = catalog;
                let mut favorites = favorites;
                let mut overlay = overlay;
                let mut search_input = search_input;
                let mut page_input = page_input;

                let mut ctx = BrowserContext {
                    catalog: &mut catalog,
                    favorites: &mut favorites,
                    overlay: &mut overlay,
                    focus: &mut focus,
                    selected_index: &mut selected_index,
                    search_input: &mut search_input,
                    page_input: &mut page_input,
                    sort_draft: &mut sort_draft,
                    should_exit: &mut should_exit,
                    visible: &visible_for_events,
                    detail_handler: &detail_handler_for_events,
                };

                handlers::handle_key_event(&mut ctx, code);
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    // Footer shortcuts follow the active mode
    let shortcuts = if sort_draft.read().is_some() {
        sort_shortcuts()
    } else if overlay.read().is_open() {
        modal_shortcuts()
    } else if focus.get() != Focus::List {
        search_shortcuts()
    } else {
        browser_shortcuts()
    };

    let entry_count = (catalog_snapshot.phase() == LoadPhase::Ready)
        .then(|| catalog_snapshot.entry_count());
    let filtered_count = query.is_some().then(|| catalog_snapshot.filtered_count());

    let empty_kind = match status {
        ListStatus::Loading => Some(EmptyStateKind::Loading),
        ListStatus::LoadFailed => Some(EmptyStateKind::LoadFailed),
        ListStatus::NoMatches => Some(EmptyStateKind::NoMatches),
        ListStatus::Ready => None,
    };

    // Overlay content (at most one modal at a time; sort modal wins)
    let sort_modal_state = *sort_draft.read();
    let detail_modal = if sort_modal_state.is_none() {
        match overlay.read().phase() {
            OverlayPhase::Loading(_) => Some(None),
            OverlayPhase::Ready(detail) => {
                Some(Some(presenter::detail_view(detail, &favorites.read())))
            }
            OverlayPhase::Closed => None,
        }
    } else {
        None
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(entry_count: entry_count, filtered_count: filtered_count)

            // Input row: search box and page jump
            View(
                width: 100pct,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                gap: 1,
                padding_left: 1,
                padding_right: 1,
            ) {
                View(flex_grow: 1.0) {
                    SearchBox(
                        value: Some(search_input),
                        has_focus: focus.get() == Focus::Search,
                    )
                }
                PageInput(
                    value: Some(page_input),
                    has_focus: focus.get() == Focus::PageInput,
                    total_pages: pagination.total_pages,
                )
            }

            // List area
            View(
                flex_grow: 1.0,
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                flex_direction: FlexDirection::Column,
            ) {
                #(match empty_kind {
                    Some(kind) => element! {
                        EmptyState(kind: kind, search_query: query.clone())
                    }.into_any(),
                    None => element! {
                        EntryList(
                            cards: cards.clone(),
                            selected_index: selected_index.get(),
                            has_focus: focus.get() == Focus::List,
                        )
                    }.into_any(),
                })
            }

            PaginationBar(view: Some(pagination.clone()))

            Footer(shortcuts: shortcuts)

            // Detail modal
            #(detail_modal.map(|detail| element! {
                DetailModal(detail: detail)
            }))

            // Sort modal
            #(sort_modal_state.map(|draft| element! {
                SortModal(
                    field: draft.field,
                    direction: draft.direction,
                    focused_row: draft.focused_row,
                )
            }))
        }
    }
}
