//! Draft filter values and their commit into navigation.

use jobs_core::{FilterDraft, FilterField, QueryError, QueryState, codec};

use crate::Navigation;

/// Owns the filter values the user is editing. Edits stay local until `commit` or
/// `reset`, so typing never navigates or fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterController {
    draft: FilterDraft,
}

impl FilterController {
    /// Start editing from the filters of the committed state.
    pub fn new(committed: &QueryState) -> Self {
        Self {
            draft: committed.filters(),
        }
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    /// Update one draft field by its form name (`search`, `status`, `location`,
    /// `company`, `orderBy`).
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), QueryError> {
        let field: FilterField = name.parse()?;
        self.draft.set(field, value)
    }

    /// Apply the draft on top of `committed`, back on page 1, and navigate there.
    pub fn commit(&self, committed: &QueryState, nav: &impl Navigation) -> QueryState {
        let next = committed.with_filters(&self.draft);
        nav.push(&codec::encode(&next));
        next
    }

    /// Clear every filter and navigate to `page=1` alone.
    ///
    /// Differs from committing an empty draft: fields the user never touched are
    /// cleared too, and the page size goes back to its default.
    pub fn reset(&mut self, nav: &impl Navigation) -> QueryState {
        self.draft = FilterDraft::default();
        nav.push(&codec::encode_reset());
        QueryState::default()
    }

    /// Enter in any text field submits the form.
    pub fn key_pressed(
        &self,
        key: &str,
        committed: &QueryState,
        nav: &impl Navigation,
    ) -> Option<QueryState> {
        (key == "Enter").then(|| self.commit(committed, nav))
    }
}
