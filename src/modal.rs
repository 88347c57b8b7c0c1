//! Detail overlay state with stale-response protection.
//!
//! Opening an entry records a pending id; when a detail fetch resolves, the
//! response is accepted only if its id still matches the pending one. A
//! response for a previously-opened entry, or one arriving after the overlay
//! closed, is dropped on the floor.

use crate::types::PokemonDetail;

/// What the overlay is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    /// Fetch in flight for this id.
    Loading(u32),
    /// Detail loaded and on screen.
    Ready(PokemonDetail),
}

/// Modal overlay controller for the entry detail view.
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    phase: OverlayPhase,
    /// Id whose response we are willing to accept.
    pending: Option<u32>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &OverlayPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    /// Id of the fetch in flight, if any.
    pub fn pending_id(&self) -> Option<u32> {
        self.pending
    }

    /// Open the overlay for `id`. Supersedes any earlier pending fetch:
    /// its response will no longer match and gets discarded on arrival.
    pub fn open(&mut self, id: u32) {
        self.pending = Some(id);
        self.phase = OverlayPhase::Loading(id);
    }

    /// Close the overlay. Any in-flight response becomes stale.
    pub fn close(&mut self) {
        self.pending = None;
        self.phase = OverlayPhase::Closed;
    }

    /// Accept a successful detail response. Returns `true` if the response
    /// was current and is now showing, `false` if it was stale.
    pub fn resolve(&mut self, detail: PokemonDetail) -> bool {
        if self.pending != Some(detail.id) {
            return false;
        }
        self.pending = None;
        self.phase = OverlayPhase::Ready(detail);
        true
    }

    /// Record a failed fetch for `id`: the overlay closes rather than
    /// showing a partial record. Stale failures are ignored the same way
    /// stale successes are.
    pub fn resolve_failed(&mut self, id: u32) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        self.phase = OverlayPhase::Closed;
        true
    }
}
