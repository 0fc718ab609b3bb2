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
pub mod calc;
pub mod i18n;
pub mod parse;
pub mod search;
pub mod state;
pub mod view;

use serde::{Deserialize, Serialize};

pub use state::{AppState, Detail, Message, Region, Rerender, Tab};

/// The two languages the manual is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    Ja,
    Ne,
}

impl Lang {
    pub fn toggle(self) -> Self {
        match self {
            Lang::Ja => Lang::Ne,
            Lang::Ne => Lang::Ja,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::Ne => "ne",
        }
    }

    /// Pick the text for this language. Nepali falls back to the Japanese
    /// text when it is missing or empty.
    pub fn pick<'a>(&self, ja: &'a str, ne: Option<&'a str>) -> &'a str {
        match self {
            Lang::Ja => ja,
            Lang::Ne => present(ne).unwrap_or(ja),
        }
    }
}

fn present(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// The static menus and recipes the manual displays. Loaded once and never
/// modified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    #[serde(default)]
    pub menus: Vec<Menu>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Dataset {
    pub fn new<MI, RI>(menus: MI, recipes: RI) -> Self
    where
        MI: IntoIterator<Item = Menu>,
        RI: IntoIterator<Item = Recipe>,
    {
        Self {
            menus: menus.into_iter().collect(),
            recipes: recipes.into_iter().collect(),
        }
    }

    pub fn menu(&self, idx: usize) -> Option<&Menu> {
        self.menus.get(idx)
    }

    pub fn recipe(&self, idx: usize) -> Option<&Recipe> {
        self.recipes.get(idx)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Menu {
    #[serde(default)]
    pub title_ja: String,
    #[serde(default)]
    pub title_ne: Option<String>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new<S: Into<String>>(title_ja: S, title_ne: Option<S>) -> Self {
        Self {
            title_ja: title_ja.into(),
            title_ne: title_ne.map(|s| s.into()),
            items: Vec::new(),
        }
    }

    pub fn with_items<Iter>(mut self, items: Iter) -> Self
    where
        Iter: IntoIterator<Item = MenuItem>,
    {
        self.items.extend(items);
        self
    }

    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_ja, self.title_ne.as_deref())
    }

    /// Group the items of this menu by their Japanese category name. Both the
    /// categories and the items within them keep the order they were first
    /// seen in.
    pub fn categories(&self) -> Vec<Category<'_>> {
        let mut categories: Vec<Category<'_>> = Vec::new();
        for item in self.items.iter() {
            match categories
                .iter_mut()
                .find(|c| c.name_ja == item.category_ja.as_str())
            {
                Some(category) => category.items.push(item),
                None => categories.push(Category {
                    name_ja: &item.category_ja,
                    name_ne: item.category_ne.as_deref(),
                    items: vec![item],
                }),
            }
        }
        categories
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    #[serde(default)]
    pub name_ja: String,
    #[serde(default)]
    pub name_ne: Option<String>,
    #[serde(default)]
    pub category_ja: String,
    #[serde(default)]
    pub category_ne: Option<String>,
}

impl MenuItem {
    pub fn new<S: Into<String>>(
        name_ja: S,
        name_ne: Option<S>,
        category_ja: S,
        category_ne: Option<S>,
    ) -> Self {
        Self {
            name_ja: name_ja.into(),
            name_ne: name_ne.map(|s| s.into()),
            category_ja: category_ja.into(),
            category_ne: category_ne.map(|s| s.into()),
        }
    }

    pub fn name_ne(&self) -> Option<&str> {
        present(self.name_ne.as_deref())
    }
}

/// A group of menu items derived at render time. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Category<'a> {
    pub name_ja: &'a str,
    pub name_ne: Option<&'a str>,
    pub items: Vec<&'a MenuItem>,
}

impl<'a> Category<'a> {
    pub fn name(&self, lang: Lang) -> &'a str {
        lang.pick(self.name_ja, self.name_ne)
    }
}

/// A recipe with its ingredients, instructions and notes. A recipe that
/// carries a calculation base label supports scaling its ingredients by a
/// base weight.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    #[serde(default)]
    pub title_ja: String,
    #[serde(default)]
    pub title_ne: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<Step>,
    #[serde(default)]
    pub notes: Vec<Step>,
    #[serde(default)]
    pub calc_base_label_ja: Option<String>,
    #[serde(default)]
    pub calc_base_label_ne: Option<String>,
}

impl Recipe {
    pub fn new<S: Into<String>>(title_ja: S, title_ne: Option<S>, name: S) -> Self {
        Self {
            title_ja: title_ja.into(),
            title_ne: title_ne.map(|s| s.into()),
            name: name.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            notes: Vec::new(),
            calc_base_label_ja: None,
            calc_base_label_ne: None,
        }
    }

    pub fn with_ingredients<Iter>(mut self, ingredients: Iter) -> Self
    where
        Iter: IntoIterator<Item = Ingredient>,
    {
        self.ingredients.extend(ingredients);
        self
    }

    pub fn with_instructions<Iter>(mut self, steps: Iter) -> Self
    where
        Iter: IntoIterator<Item = Step>,
    {
        self.instructions.extend(steps);
        self
    }

    pub fn with_notes<Iter>(mut self, notes: Iter) -> Self
    where
        Iter: IntoIterator<Item = Step>,
    {
        self.notes.extend(notes);
        self
    }

    pub fn with_calc_base_label<S: Into<String>>(mut self, ja: S, ne: Option<S>) -> Self {
        self.calc_base_label_ja = Some(ja.into());
        self.calc_base_label_ne = ne.map(|s| s.into());
        self
    }

    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_ja, self.title_ne.as_deref())
    }

    pub fn title_ne(&self) -> Option<&str> {
        present(self.title_ne.as_deref())
    }

    pub fn supports_calculation(&self) -> bool {
        present(self.calc_base_label_ja.as_deref()).is_some()
    }

    pub fn calc_base_label(&self, lang: Lang) -> Option<&str> {
        let ja = present(self.calc_base_label_ja.as_deref())?;
        Some(lang.pick(ja, self.calc_base_label_ne.as_deref()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ingredient {
    #[serde(default)]
    pub text_ja: String,
    #[serde(default)]
    pub text_ne: Option<String>,
    /// Fraction of the base weight this ingredient accounts for.
    #[serde(default)]
    pub ratio: Option<f64>,
}

impl Ingredient {
    pub fn new<S: Into<String>>(text_ja: S, text_ne: Option<S>, ratio: Option<f64>) -> Self {
        Self {
            text_ja: text_ja.into(),
            text_ne: text_ne.map(|s| s.into()),
            ratio,
        }
    }

    pub fn text_ne(&self) -> Option<&str> {
        present(self.text_ne.as_deref())
    }
}

/// An instruction step or a note. Both languages are expected to be present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Step {
    #[serde(default)]
    pub text_ja: String,
    #[serde(default)]
    pub text_ne: String,
}

impl Step {
    pub fn new<S: Into<String>>(text_ja: S, text_ne: S) -> Self {
        Self {
            text_ja: text_ja.into(),
            text_ne: text_ne.into(),
        }
    }
}
