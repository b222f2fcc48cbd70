// ── Snippet filter ──
//
// Two-state visibility filter. Selecting a value always re-fetches, even
// when it is already the active one.

use strum::{Display, EnumIter, EnumString};

use crate::error::CoreError;
use crate::remote::{Remote, SnippetTarget};
use crate::store::ResourceStore;

/// Which snippets the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SnippetFilter {
    #[default]
    All,
    Public,
}

impl SnippetFilter {
    /// Fetch target for this filter.
    pub fn target(self) -> SnippetTarget {
        match self {
            Self::All => SnippetTarget::All,
            Self::Public => SnippetTarget::Public,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected: SnippetFilter,
}

impl FilterState {
    #[must_use]
    pub fn select(self, filter: SnippetFilter) -> Self {
        Self { selected: filter }
    }
}

/// Holds the selected filter and drives the snippet store.
#[derive(Debug, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> SnippetFilter {
        self.state.selected
    }

    /// Record `filter` and load its target into `store`.
    pub async fn select<R>(
        &mut self,
        filter: SnippetFilter,
        store: &ResourceStore<R>,
    ) -> Result<(), CoreError>
    where
        R: Remote<Target = SnippetTarget>,
    {
        self.state = self.state.select(filter);
        store.load(filter.target()).await
    }

    /// Load the currently selected target (initial mount).
    pub async fn refresh<R>(&self, store: &ResourceStore<R>) -> Result<(), CoreError>
    where
        R: Remote<Target = SnippetTarget>,
    {
        store.load(self.state.selected.target()).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn initial_filter_is_all() {
        assert_eq!(FilterController::new().selected(), SnippetFilter::All);
    }

    #[test]
    fn filters_map_to_targets() {
        assert_eq!(SnippetFilter::All.target(), SnippetTarget::All);
        assert_eq!(SnippetFilter::Public.target(), SnippetTarget::Public);
    }

    #[test]
    fn select_replaces_state() {
        let state = FilterState::default().select(SnippetFilter::Public);
        assert_eq!(state.selected, SnippetFilter::Public);
        assert_eq!(state.select(SnippetFilter::All).selected, SnippetFilter::All);
    }

    #[test]
    fn names_parse_and_display() {
        assert_eq!(SnippetFilter::from_str("public").unwrap(), SnippetFilter::Public);
        assert_eq!(SnippetFilter::All.to_string(), "all");
        assert_eq!(SnippetFilter::iter().count(), 2);
    }
}
