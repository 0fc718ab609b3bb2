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
/*!
View models for each part of the page. Each renderer reads the dataset and
the current state and returns plain data for the UI layer to apply.
*/
use tracing::instrument;

use crate::{
    calc,
    i18n::phrases,
    search::{self, Highlighted, Highlighter},
    AppState, Dataset, Detail, Lang, Step, Tab,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSelector {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

/// Body class applied while the page displays Nepali.
pub const LANG_NE_CLASS: &str = "lang-ne";

/// The static text around the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub lang: Lang,
    pub title: String,
    pub current_language: String,
    pub other_language: String,
    pub tab_menus: String,
    pub tab_recipes: String,
    pub active_tab: Tab,
    pub menu_selectors: Vec<MenuSelector>,
    pub search_placeholder: String,
    /// Styling flag for the page body.
    pub lang_class: Option<&'static str>,
}

#[instrument(skip_all)]
pub fn chrome(dataset: &Dataset, state: &AppState) -> Chrome {
    let lang = state.language;
    let p = phrases(lang);
    let menu_selectors = dataset
        .menus
        .iter()
        .enumerate()
        .map(|(index, menu)| MenuSelector {
            index,
            label: p
                .menu_selectors
                .get(index)
                .map(|s| s.to_string())
                .unwrap_or_else(|| menu.title(lang).to_owned()),
            active: index == state.menu_index,
        })
        .collect();
    Chrome {
        lang,
        title: p.title.to_owned(),
        current_language: p.language_name.to_owned(),
        other_language: phrases(lang.toggle()).language_name.to_owned(),
        tab_menus: p.tab_menus.to_owned(),
        tab_recipes: p.tab_recipes.to_owned(),
        active_tab: state.tab,
        menu_selectors,
        search_placeholder: p.search_placeholder.to_owned(),
        lang_class: match lang {
            Lang::Ja => None,
            Lang::Ne => Some(LANG_NE_CLASS),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemView {
    pub name_ja: Highlighted,
    pub name_ne: Option<Highlighted>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub name: String,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub title: String,
    pub categories: Vec<CategoryView>,
}

/// Render the selected menu. Every category keeps its header even when the
/// search hides all of its items.
#[instrument(skip_all, fields(menu = state.menu_index, term = %state.search_term))]
pub fn menu_view(dataset: &Dataset, state: &AppState) -> Option<MenuView> {
    let menu = dataset.menu(state.menu_index)?;
    let lang = state.language;
    let term = state.search_term.as_str();
    let highlighter = Highlighter::new(term);
    let categories = menu
        .categories()
        .into_iter()
        .map(|category| CategoryView {
            name: category.name(lang).to_owned(),
            items: category
                .items
                .iter()
                .filter(|item| {
                    search::matches_any(
                        term,
                        [
                            item.name_ja.as_str(),
                            item.name_ne.as_deref().unwrap_or_default(),
                            item.category_ja.as_str(),
                        ],
                    )
                })
                .map(|item| MenuItemView {
                    name_ja: highlighter.highlight(&item.name_ja),
                    name_ne: item.name_ne().map(|n| highlighter.highlight(n)),
                })
                .collect(),
        })
        .collect();
    Some(MenuView {
        title: menu.title(lang).to_owned(),
        categories,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    /// Index into the full recipe list.
    pub index: usize,
    pub title: Highlighted,
    pub ingredient_count: String,
    pub step_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeGrid {
    Cards(Vec<RecipeCard>),
    NoResults(String),
}

impl RecipeGrid {
    pub fn cards(&self) -> &[RecipeCard] {
        match self {
            RecipeGrid::Cards(cards) => cards,
            RecipeGrid::NoResults(_) => &[],
        }
    }
}

#[instrument(skip_all, fields(term = %state.search_term))]
pub fn recipe_grid(dataset: &Dataset, state: &AppState) -> RecipeGrid {
    let lang = state.language;
    let p = phrases(lang);
    let term = state.search_term.as_str();
    let highlighter = Highlighter::new(term);
    let cards: Vec<RecipeCard> = dataset
        .recipes
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            search::matches_any(
                term,
                [
                    r.title_ja.as_str(),
                    r.title_ne.as_deref().unwrap_or_default(),
                    r.name.as_str(),
                ],
            )
        })
        .map(|(index, r)| RecipeCard {
            index,
            title: highlighter.highlight(r.title(lang)),
            ingredient_count: p.ingredient_count(r.ingredients.len()),
            step_count: p.step_count(r.instructions.len()),
        })
        .collect();
    if cards.is_empty() {
        RecipeGrid::NoResults(p.no_results.to_owned())
    } else {
        RecipeGrid::Cards(cards)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    pub label: String,
    pub placeholder: String,
    /// Raw contents of the base weight input.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub text_ja: String,
    pub text_ne: Option<String>,
    /// Present only for recipes that support calculation.
    pub result: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text_ja: String,
    pub text_ne: String,
}

impl From<&Step> for Line {
    fn from(step: &Step) -> Self {
        Self {
            text_ja: step.text_ja.clone(),
            text_ne: step.text_ne.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    pub heading: String,
    pub entries: Vec<T>,
}

fn section<T>(heading: &str, entries: Vec<T>) -> Option<Section<T>> {
    if entries.is_empty() {
        None
    } else {
        Some(Section {
            heading: heading.to_owned(),
            entries,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub index: usize,
    pub title: String,
    pub calculator: Option<Calculator>,
    pub ingredients: Option<Section<IngredientLine>>,
    pub instructions: Option<Section<Line>>,
    pub notes: Option<Section<Line>>,
    pub close: String,
}

impl RecipeDetail {
    /// The detail as it looks before anything is entered in the calculator.
    /// It stays the same while the base weight is edited.
    pub fn layout(&self) -> RecipeDetail {
        let mut layout = self.clone();
        if let Some(calculator) = layout.calculator.as_mut() {
            calculator.value.clear();
        }
        if let Some(section) = layout.ingredients.as_mut() {
            for line in section.entries.iter_mut().filter(|l| l.result.is_some()) {
                line.result = Some(calc::PLACEHOLDER.to_owned());
            }
        }
        layout
    }

    /// Calculator results for each ingredient line in order.
    pub fn results(&self) -> Vec<Option<String>> {
        self.ingredients
            .iter()
            .flat_map(|s| s.entries.iter())
            .map(|l| l.result.clone())
            .collect()
    }
}

/// Render the open recipe, or nothing when the overlay is closed.
#[instrument(skip_all)]
pub fn recipe_detail(dataset: &Dataset, state: &AppState) -> Option<RecipeDetail> {
    let (index, base_weight) = match &state.detail {
        Detail::Open {
            recipe,
            base_weight,
        } => (*recipe, base_weight.as_str()),
        Detail::Closed => return None,
    };
    let recipe = dataset.recipe(index)?;
    let lang = state.language;
    let p = phrases(lang);
    let calculator = recipe.calc_base_label(lang).map(|label| Calculator {
        label: label.to_owned(),
        placeholder: p.weight_placeholder.to_owned(),
        value: base_weight.to_owned(),
    });
    let mut results = calc::recipe_results(base_weight, recipe).map(|r| r.into_iter());
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| IngredientLine {
            text_ja: i.text_ja.clone(),
            text_ne: i.text_ne().map(|s| s.to_owned()),
            result: results.as_mut().and_then(|r| r.next()),
        })
        .collect();
    Some(RecipeDetail {
        index,
        title: recipe.title(lang).to_owned(),
        calculator,
        ingredients: section(p.ingredients, ingredients),
        instructions: section(p.instructions, recipe.instructions.iter().map(Line::from).collect()),
        notes: section(p.notes, recipe.notes.iter().map(Line::from).collect()),
        close: p.close.to_owned(),
    })
}
