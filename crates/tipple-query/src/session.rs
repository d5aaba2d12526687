//! The query session state machine.
//!
//! One `QuerySession` tracks the active mode binding, the search
//! generation, and the last accepted results. It replaces ad-hoc global
//! state with a single object owned by the frontend's main task and
//! mutated only there; in-flight searches report back solely through
//! [`QuerySession::apply_results`].
//!
//! Searches are never cancelled. Instead every search carries the
//! generation that issued it, and a completion is accepted only while its
//! generation is still current. A mode switch also bumps the generation,
//! so results from the previous mode can never land in the new one.

use tipple_core::{QueryMode, ResultSet};

use crate::modes::ModeBinding;

// =============================================================================
// Phase
// =============================================================================

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No mode bound yet.
    Idle,
    /// Mode bound, criteria being assembled.
    Collecting(QueryMode),
    /// A search is in flight.
    Searching(QueryMode),
    /// Results accepted and on display.
    Displaying(QueryMode),
}

// =============================================================================
// Pending Search
// =============================================================================

/// Snapshot handed to whoever runs the search.
///
/// Carries the generation that must still be current for the completion
/// to be accepted.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub generation: u64,
    pub mode: QueryMode,
    pub criteria: Vec<String>,
}

// =============================================================================
// Session
// =============================================================================

/// State for one query session.
#[derive(Debug, Default)]
pub struct QuerySession {
    binding: Option<ModeBinding>,
    generation: u64,
    searching: bool,
    results: Option<ResultSet>,
}

impl QuerySession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    pub fn phase(&self) -> SessionPhase {
        match &self.binding {
            None => SessionPhase::Idle,
            Some(b) if self.searching => SessionPhase::Searching(b.mode()),
            Some(b) if self.results.is_some() => SessionPhase::Displaying(b.mode()),
            Some(b) => SessionPhase::Collecting(b.mode()),
        }
    }

    /// The active binding, if a mode has been selected.
    pub fn binding(&self) -> Option<&ModeBinding> {
        self.binding.as_ref()
    }

    /// Mutable access to the active binding's collector state.
    pub fn binding_mut(&mut self) -> Option<&mut ModeBinding> {
        self.binding.as_mut()
    }

    /// The generation of the most recent search.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The last accepted results, if any.
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// Install a new mode binding.
    ///
    /// Always discards the previous collector and display, whatever phase
    /// the session was in. Bumping the generation here invalidates any
    /// search still in flight for the old mode.
    pub fn select_mode(&mut self, binding: ModeBinding) {
        tracing::debug!("Selecting {:?} mode", binding.mode());
        self.binding = Some(binding);
        self.generation += 1;
        self.searching = false;
        self.results = None;
    }

    /// Start a search over the current criteria.
    ///
    /// Returns the snapshot to execute, tagged with a fresh generation.
    /// With no mode bound there is nothing to search; that is a
    /// programming error, logged, and nothing is rendered.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        let Some(binding) = &self.binding else {
            tracing::error!("Search requested with no query mode bound");
            return None;
        };

        self.generation += 1;
        self.searching = true;

        Some(PendingSearch {
            generation: self.generation,
            mode: binding.mode(),
            criteria: binding.collector().criteria(),
        })
    }

    /// Accept a search completion if its generation is still current.
    ///
    /// Stale completions are dropped and must not overwrite newer state.
    /// Returns whether the results were accepted.
    pub fn apply_results(&mut self, generation: u64, results: ResultSet) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Dropping stale search results (generation {} != current {})",
                generation,
                self.generation
            );
            return false;
        }

        self.searching = false;
        self.results = Some(results);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::Collector;
    use crate::mock::{recipe, MockCatalog};
    use crate::modes::bind;
    use tipple_core::Facet;

    async fn session_in(mode: QueryMode, catalog: &MockCatalog) -> QuerySession {
        let mut session = QuerySession::new();
        session.select_mode(bind(catalog, mode).await);
        session
    }

    fn add_row(session: &mut QuerySession, value: &str) {
        let Some(Collector::PickList(list)) =
            session.binding_mut().map(|b| b.collector_mut())
        else {
            panic!("expected a pick-list collector");
        };
        list.select(value);
        list.add_selected();
    }

    #[tokio::test]
    async fn test_phases_follow_the_search_lifecycle() {
        let catalog = MockCatalog::new();
        let mut session = QuerySession::new();
        assert_eq!(session.phase(), SessionPhase::Idle);

        session.select_mode(bind(&catalog, QueryMode::Garnish).await);
        assert_eq!(session.phase(), SessionPhase::Collecting(QueryMode::Garnish));

        let pending = session.begin_search().unwrap();
        assert_eq!(session.phase(), SessionPhase::Searching(QueryMode::Garnish));

        assert!(session.apply_results(pending.generation, Vec::new()));
        assert_eq!(session.phase(), SessionPhase::Displaying(QueryMode::Garnish));

        // Re-search without a mode change.
        let pending = session.begin_search().unwrap();
        assert_eq!(session.phase(), SessionPhase::Searching(QueryMode::Garnish));
        assert!(session.apply_results(pending.generation, Vec::new()));
    }

    #[tokio::test]
    async fn test_search_without_a_mode_is_rejected() {
        let mut session = QuerySession::new();
        assert!(session.begin_search().is_none());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[tokio::test]
    async fn test_mode_switch_discards_collected_criteria() {
        let catalog = MockCatalog::new()
            .with_vocabulary(Facet::Garnish, vec!["Olive".to_string()])
            .with_vocabulary(Facet::Drinkware, vec!["Tumbler".to_string()]);

        let mut session = session_in(QueryMode::Garnish, &catalog).await;
        add_row(&mut session, "Olive");
        assert!(!session.binding().unwrap().collector().is_empty());

        session.select_mode(bind(&catalog, QueryMode::Drinkware).await);
        let binding = session.binding().unwrap();
        assert_eq!(binding.mode(), QueryMode::Drinkware);
        assert!(binding.collector().is_empty());
    }

    #[tokio::test]
    async fn test_stale_results_are_dropped() {
        let catalog = MockCatalog::new();
        let mut session = session_in(QueryMode::Served, &catalog).await;

        let first = session.begin_search().unwrap();
        let second = session.begin_search().unwrap();

        assert!(session.apply_results(second.generation, vec![recipe("fresh")]));
        // The older search resolves late; it must not clobber the display.
        assert!(!session.apply_results(first.generation, vec![recipe("stale")]));

        let names: Vec<&str> = session
            .results()
            .unwrap()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["fresh"]);
    }

    #[tokio::test]
    async fn test_mode_switch_invalidates_an_in_flight_search() {
        let catalog = MockCatalog::new();
        let mut session = session_in(QueryMode::Garnish, &catalog).await;

        let pending = session.begin_search().unwrap();
        session.select_mode(bind(&catalog, QueryMode::Served).await);

        assert!(!session.apply_results(pending.generation, vec![recipe("old mode")]));
        assert!(session.results().is_none());
        assert_eq!(session.phase(), SessionPhase::Collecting(QueryMode::Served));
    }

    #[tokio::test]
    async fn test_results_belong_to_one_render_cycle() {
        let catalog = MockCatalog::new();
        let mut session = session_in(QueryMode::Name, &catalog).await;

        let pending = session.begin_search().unwrap();
        assert!(session.apply_results(pending.generation, vec![recipe("Negroni")]));
        assert_eq!(session.results().unwrap().len(), 1);

        // The next mode selection clears the display.
        session.select_mode(bind(&catalog, QueryMode::Name).await);
        assert!(session.results().is_none());
    }
}
