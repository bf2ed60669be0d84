//! Exclusive tab selection.
//!
//! The active pane is a single `TabId`, so "no tab active" and "two tabs
//! active" are unrepresentable. Every tab is always a valid target.

use gmd_model::TabId;
use serde::Serialize;

/// Result of a tab transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: TabId,
    pub to: TabId,
}

/// Visibility of one content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaneVisibility {
    pub tab: TabId,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabState {
    active: TabId,
}

impl Default for TabState {
    fn default() -> Self {
        Self {
            active: TabId::Dataset,
        }
    }
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active == tab
    }

    /// Switch to `tab` unconditionally.
    pub fn select(&mut self, tab: TabId) -> Transition {
        let transition = Transition {
            from: self.active,
            to: tab,
        };
        self.active = tab;
        transition
    }

    /// All panes in sidebar order; exactly one is visible.
    pub fn visibility(&self) -> [PaneVisibility; 5] {
        TabId::ALL.map(|tab| PaneVisibility {
            tab,
            visible: self.is_active(tab),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_on_dataset() {
        let tabs = TabState::new();
        assert_eq!(tabs.active(), TabId::Dataset);
        assert!(tabs.is_active(TabId::Dataset));
    }

    #[test]
    fn select_gdp_shows_only_gdp() {
        let mut tabs = TabState::new();
        let transition = tabs.select(TabId::Gdp);
        assert_eq!(
            transition,
            Transition {
                from: TabId::Dataset,
                to: TabId::Gdp,
            }
        );
        let visible: Vec<TabId> = tabs
            .visibility()
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.tab)
            .collect();
        assert_eq!(visible, vec![TabId::Gdp]);
    }

    #[test]
    fn reselecting_active_tab_keeps_it() {
        let mut tabs = TabState::new();
        tabs.select(TabId::ChoroplethMap);
        let transition = tabs.select(TabId::ChoroplethMap);
        assert_eq!(transition.from, transition.to);
        assert_eq!(tabs.active(), TabId::ChoroplethMap);
    }

    proptest! {
        #[test]
        fn any_sequence_leaves_exactly_last_tab_active(
            picks in prop::collection::vec(prop::sample::select(TabId::ALL.to_vec()), 1..50)
        ) {
            let mut tabs = TabState::new();
            for tab in &picks {
                tabs.select(*tab);
                let visible = tabs.visibility().iter().filter(|p| p.visible).count();
                prop_assert_eq!(visible, 1);
                prop_assert_eq!(tabs.active(), *tab);
            }
        }
    }
}
