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
//! Fixed phrases for the static parts of the UI.
use crate::Lang;

#[derive(Debug, PartialEq, Eq)]
pub struct Phrases {
    /// Name of the language in that language. Used on the toggle button.
    pub language_name: &'static str,
    pub title: &'static str,
    pub tab_menus: &'static str,
    pub tab_recipes: &'static str,
    /// Selector labels for the first menus of the dataset.
    pub menu_selectors: &'static [&'static str],
    pub search_placeholder: &'static str,
    pub no_results: &'static str,
    pub ingredients: &'static str,
    pub instructions: &'static str,
    pub notes: &'static str,
    pub weight_placeholder: &'static str,
    pub close: &'static str,
    ingredient_count: (&'static str, &'static str),
    step_count: (&'static str, &'static str),
}

impl Phrases {
    pub fn ingredient_count(&self, n: usize) -> String {
        format!("{}{}{}", self.ingredient_count.0, n, self.ingredient_count.1)
    }

    pub fn step_count(&self, n: usize) -> String {
        format!("{}{}{}", self.step_count.0, n, self.step_count.1)
    }
}

pub static JA: Phrases = Phrases {
    language_name: "日本語",
    title: "🌸 2026年 春の献立マニュアル",
    tab_menus: "📋 献立",
    tab_recipes: "👨‍🍳 レシピ",
    menu_selectors: &["春の極上懐石", "連泊献立", "リピーター献立"],
    search_placeholder: "料理名やカテゴリーで検索...",
    no_results: "検索結果がありません",
    ingredients: "材料",
    instructions: "作り方",
    notes: "補足",
    weight_placeholder: "例: 1000",
    close: "閉じる",
    ingredient_count: ("材料: ", "項目"),
    step_count: ("手順: ", "ステップ"),
};

pub static NE: Phrases = Phrases {
    language_name: "नेपाली",
    title: "🌸 सन् २०२६ वसन्तकालीन मेनु म्यानुअल",
    tab_menus: "📋 मेनु",
    tab_recipes: "👨‍🍳 रेसिपी",
    menu_selectors: &["विशेष काइसेकी", "लगातार बसाई", "पुनरावर्ती"],
    search_placeholder: "परिकारको नाम वा श्रेणी खोज्नुहोस्...",
    no_results: "कुनै नतिजा भेटिएन",
    ingredients: "सामग्री",
    instructions: "विधि",
    notes: "नोट",
    weight_placeholder: "उदाहरण: 1000",
    close: "बन्द गर्नुहोस्",
    ingredient_count: ("सामग्री: ", " वटा"),
    step_count: ("चरण: ", " वटा"),
};

pub fn phrases(lang: Lang) -> &'static Phrases {
    match lang {
        Lang::Ja => &JA,
        Lang::Ne => &NE,
    }
}
