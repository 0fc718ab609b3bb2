// Copyright 2022 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::collections::BTreeSet;

use tracing::{debug, instrument, warn};

use crate::{search, Dataset, Lang};

/// Window scroll offset in pixels past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Menus,
    Recipes,
}

impl Tab {
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Menus => "menus",
            Tab::Recipes => "recipes",
        }
    }
}

/// The recipe detail overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Detail {
    #[default]
    Closed,
    Open {
        recipe: usize,
        /// Raw contents of the base weight input.
        base_weight: String,
    },
}

/// A part of the page that may need re-rendering after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Title, language toggle, tab labels, selector labels, search placeholder.
    Chrome,
    /// Which tab and tab section is active.
    Tabs,
    MenuSelector,
    MenuView,
    RecipeGrid,
    SearchBox,
    Detail,
    ScrollTop,
}

pub type Rerender = BTreeSet<Region>;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ToggleLanguage,
    SwitchMenu(usize),
    Search(String),
    ClearSearch,
    SwitchTab(Tab),
    OpenDetail(usize),
    CloseDetail,
    SetBaseWeight(String),
    Scrolled(f64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub language: Lang,
    pub menu_index: usize,
    /// Always normalized.
    pub search_term: String,
    /// What the search input displays.
    pub search_input: String,
    pub tab: Tab,
    pub detail: Detail,
    pub show_scroll_top: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_clear_search(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// The region holding the active tab's primary view.
    pub fn active_view(&self) -> Region {
        match self.tab {
            Tab::Menus => Region::MenuView,
            Tab::Recipes => Region::RecipeGrid,
        }
    }

    pub fn open_recipe(&self) -> Option<usize> {
        match &self.detail {
            Detail::Open { recipe, .. } => Some(*recipe),
            Detail::Closed => None,
        }
    }

    /// Apply a message, producing the next state and the regions that must
    /// be re-rendered for it. Rejected messages leave the state unchanged and
    /// require nothing to be re-rendered.
    #[instrument(skip(self, dataset))]
    pub fn apply(&self, dataset: &Dataset, msg: Message) -> (AppState, Rerender) {
        let mut next = self.clone();
        let mut regions = Rerender::new();
        match msg {
            Message::ToggleLanguage => {
                next.language = self.language.toggle();
                regions.extend([
                    Region::Chrome,
                    Region::Tabs,
                    Region::MenuSelector,
                    Region::MenuView,
                    Region::RecipeGrid,
                ]);
                // The calculator input is rebuilt empty in the new language.
                if let Detail::Open { base_weight, .. } = &mut next.detail {
                    base_weight.clear();
                    regions.insert(Region::Detail);
                }
            }
            Message::SwitchMenu(idx) => {
                if dataset.menu(idx).is_none() {
                    warn!(idx, menus = dataset.menus.len(), "No such menu");
                    return (next, regions);
                }
                next.menu_index = idx;
                regions.extend([Region::MenuSelector, Region::MenuView]);
            }
            Message::Search(raw) => {
                next.search_term = search::normalize(&raw);
                next.search_input = raw;
                regions.extend([Region::SearchBox, next.active_view()]);
            }
            Message::ClearSearch => {
                next.clear_search();
                regions.extend([Region::SearchBox, next.active_view()]);
            }
            Message::SwitchTab(tab) => {
                next.tab = tab;
                next.clear_search();
                regions.extend([Region::Tabs, Region::SearchBox, next.active_view()]);
            }
            Message::OpenDetail(idx) => {
                if dataset.recipe(idx).is_none() {
                    warn!(idx, recipes = dataset.recipes.len(), "No such recipe");
                    return (next, regions);
                }
                next.detail = Detail::Open {
                    recipe: idx,
                    base_weight: String::new(),
                };
                regions.insert(Region::Detail);
            }
            Message::CloseDetail => {
                if let Detail::Open { .. } = self.detail {
                    next.detail = Detail::Closed;
                    regions.insert(Region::Detail);
                }
            }
            Message::SetBaseWeight(raw) => match &mut next.detail {
                Detail::Open { base_weight, .. } => {
                    *base_weight = raw;
                    regions.insert(Region::Detail);
                }
                Detail::Closed => {
                    debug!("Ignoring base weight while detail is closed");
                }
            },
            Message::Scrolled(offset) => {
                next.show_scroll_top = offset > SCROLL_TOP_THRESHOLD;
                if next.show_scroll_top != self.show_scroll_top {
                    regions.insert(Region::ScrollTop);
                }
            }
        }
        debug!(?regions, "applied transition");
        (next, regions)
    }

    fn clear_search(&mut self) {
        self.search_term.clear();
        self.search_input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Menu, Recipe};
    use pretty_assertions::assert_eq;

    fn dataset() -> Dataset {
        Dataset::new(
            vec![Menu::new("一", None), Menu::new("二", None)],
            vec![Recipe::new("だし", None, "dashi")],
        )
    }

    fn regions<const N: usize>(rs: [Region; N]) -> Rerender {
        Rerender::from(rs)
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.language, Lang::Ja);
        assert_eq!(state.menu_index, 0);
        assert_eq!(state.search_term, "");
        assert_eq!(state.tab, Tab::Menus);
        assert_eq!(state.detail, Detail::Closed);
        assert!(!state.show_scroll_top);
    }

    #[test]
    fn test_search_normalizes_and_rerenders_active_view() {
        let ds = dataset();
        let (state, rs) = AppState::new().apply(&ds, Message::Search("  NoRi ".to_owned()));
        assert_eq!(state.search_term, "nori");
        assert_eq!(state.search_input, "  NoRi ");
        assert!(state.show_clear_search());
        assert_eq!(rs, regions([Region::MenuView, Region::SearchBox]));

        let (state, _) = state.apply(&ds, Message::SwitchTab(Tab::Recipes));
        let (state, rs) = state.apply(&ds, Message::Search("dashi".to_owned()));
        assert_eq!(rs, regions([Region::RecipeGrid, Region::SearchBox]));
        let (state, rs) = state.apply(&ds, Message::Search("   ".to_owned()));
        assert_eq!(state.search_term, "");
        assert!(!state.show_clear_search());
        assert_eq!(rs, regions([Region::RecipeGrid, Region::SearchBox]));
    }

    #[test]
    fn test_clear_search() {
        let ds = dataset();
        let (state, _) = AppState::new().apply(&ds, Message::Search("Tofu".to_owned()));
        let (state, rs) = state.apply(&ds, Message::ClearSearch);
        assert_eq!(state.search_term, "");
        assert_eq!(state.search_input, "");
        assert!(!state.show_clear_search());
        assert_eq!(rs, regions([Region::MenuView, Region::SearchBox]));
    }

    #[test]
    fn test_switch_tab_clears_search() {
        let ds = dataset();
        let (state, _) = AppState::new().apply(&ds, Message::Search("tofu".to_owned()));
        let (state, rs) = state.apply(&ds, Message::SwitchTab(Tab::Recipes));
        assert_eq!(state.tab, Tab::Recipes);
        assert_eq!(state.search_term, "");
        assert_eq!(state.search_input, "");
        assert_eq!(
            rs,
            regions([Region::Tabs, Region::RecipeGrid, Region::SearchBox])
        );
    }

    #[test]
    fn test_switch_menu() {
        let ds = dataset();
        let (state, _) = AppState::new().apply(&ds, Message::Search("x".to_owned()));
        let (state, rs) = state.apply(&ds, Message::SwitchMenu(1));
        assert_eq!(state.menu_index, 1);
        assert_eq!(state.search_term, "x");
        assert_eq!(rs, regions([Region::MenuSelector, Region::MenuView]));
    }

    #[test]
    fn test_switch_menu_out_of_range_is_rejected() {
        let ds = dataset();
        let state = AppState::new();
        let (next, rs) = state.apply(&ds, Message::SwitchMenu(2));
        assert_eq!(next, state);
        assert!(rs.is_empty());
    }

    #[test]
    fn test_toggle_language() {
        let ds = dataset();
        let (state, rs) = AppState::new().apply(&ds, Message::ToggleLanguage);
        assert_eq!(state.language, Lang::Ne);
        assert_eq!(
            rs,
            regions([
                Region::Chrome,
                Region::Tabs,
                Region::MenuSelector,
                Region::MenuView,
                Region::RecipeGrid
            ])
        );
        let (state, _) = state.apply(&ds, Message::ToggleLanguage);
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn test_toggle_language_resets_open_calculator() {
        let ds = dataset();
        let (state, _) = AppState::new().apply(&ds, Message::OpenDetail(0));
        let (state, _) = state.apply(&ds, Message::SetBaseWeight("1000".to_owned()));
        let (state, rs) = state.apply(&ds, Message::ToggleLanguage);
        assert_eq!(
            state.detail,
            Detail::Open {
                recipe: 0,
                base_weight: String::new(),
            }
        );
        assert_eq!(
            rs,
            regions([
                Region::Chrome,
                Region::Tabs,
                Region::MenuSelector,
                Region::MenuView,
                Region::RecipeGrid,
                Region::Detail
            ])
        );
    }

    #[test]
    fn test_detail_lifecycle() {
        let ds = dataset();
        let (state, rs) = AppState::new().apply(&ds, Message::OpenDetail(0));
        assert_eq!(state.open_recipe(), Some(0));
        assert_eq!(rs, regions([Region::Detail]));

        let (state, rs) = state.apply(&ds, Message::SetBaseWeight("500".to_owned()));
        assert_eq!(
            state.detail,
            Detail::Open {
                recipe: 0,
                base_weight: "500".to_owned()
            }
        );
        assert_eq!(rs, regions([Region::Detail]));

        let (state, rs) = state.apply(&ds, Message::CloseDetail);
        assert_eq!(state.detail, Detail::Closed);
        assert_eq!(rs, regions([Region::Detail]));

        // Closing again is a no-op.
        let (state, rs) = state.apply(&ds, Message::CloseDetail);
        assert_eq!(state.detail, Detail::Closed);
        assert!(rs.is_empty());

        // Reopening starts with an empty base weight.
        let (state, _) = state.apply(&ds, Message::OpenDetail(0));
        assert_eq!(
            state.detail,
            Detail::Open {
                recipe: 0,
                base_weight: String::new()
            }
        );
    }

    #[test]
    fn test_detail_rejects_unknown_recipe_and_closed_input() {
        let ds = dataset();
        let state = AppState::new();
        let (next, rs) = state.apply(&ds, Message::OpenDetail(7));
        assert_eq!(next, state);
        assert!(rs.is_empty());
        let (next, rs) = state.apply(&ds, Message::SetBaseWeight("100".to_owned()));
        assert_eq!(next, state);
        assert!(rs.is_empty());
    }

    #[test]
    fn test_search_does_not_touch_open_detail() {
        let ds = dataset();
        let (state, _) = AppState::new().apply(&ds, Message::OpenDetail(0));
        let (state, rs) = state.apply(&ds, Message::Search("dashi".to_owned()));
        assert_eq!(state.open_recipe(), Some(0));
        assert!(!rs.contains(&Region::Detail));
    }

    #[test]
    fn test_scroll_threshold() {
        let ds = dataset();
        let (state, rs) = AppState::new().apply(&ds, Message::Scrolled(300.0));
        assert!(!state.show_scroll_top);
        assert!(rs.is_empty());
        let (state, rs) = state.apply(&ds, Message::Scrolled(301.0));
        assert!(state.show_scroll_top);
        assert_eq!(rs, regions([Region::ScrollTop]));
        let (state, rs) = state.apply(&ds, Message::Scrolled(900.0));
        assert!(state.show_scroll_top);
        assert!(rs.is_empty());
        let (state, rs) = state.apply(&ds, Message::Scrolled(0.0));
        assert!(!state.show_scroll_top);
        assert_eq!(rs, regions([Region::ScrollTop]));
    }
}
