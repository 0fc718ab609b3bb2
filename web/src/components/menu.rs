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
use manual::{
    view::{self, CategoryView, MenuItemView},
    Message,
};
use sycamore::prelude::*;
use tracing::instrument;

use crate::{
    app_state::{get_dataset_from_context, StateHandler},
    components::highlight::HighlightedText,
};

#[derive(Prop)]
pub struct MenuProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[component]
pub fn MenuSelectors<'ctx, G: Html>(cx: Scope<'ctx>, props: MenuProps<'ctx>) -> View<G> {
    let sh = props.sh;
    let dataset = get_dataset_from_context(cx);
    let selectors = sh.get_selector(cx, move |state| {
        view::chrome(dataset, state.get().as_ref()).menu_selectors
    });
    view! {cx,
        div(class="menu-selector") {
            Indexed(
                iterable=selectors,
                view=move |inner, selector| {
                    let index = selector.index;
                    let class = if selector.active {
                        "menu-select-btn active"
                    } else {
                        "menu-select-btn"
                    };
                    view! {inner,
                        button(class=class, on:click=move |_| sh.dispatch(cx, Message::SwitchMenu(index))) {
                            (selector.label)
                        }
                    }
                }
            )
        }
    }
}

#[derive(Prop)]
pub struct MenuItemProps {
    pub item: MenuItemView,
}

#[component]
fn MenuItem<G: Html>(cx: Scope, props: MenuItemProps) -> View<G> {
    let MenuItemView { name_ja, name_ne } = props.item;
    let name_ne = match name_ne {
        Some(text) => view! {cx,
            div(class="item-name-ne") { HighlightedText(text=text.clone()) }
        },
        None => View::empty(),
    };
    view! {cx,
        div(class="menu-item") {
            div(class="item-name-ja") { HighlightedText(text=name_ja.clone()) }
            (name_ne)
        }
    }
}

#[derive(Prop)]
pub struct CategoryProps {
    pub category: CategoryView,
}

#[component]
fn MenuCategory<G: Html>(cx: Scope, props: CategoryProps) -> View<G> {
    let CategoryView { name, items } = props.category;
    let items = View::new_fragment(
        items
            .into_iter()
            .map(|item| view! {cx, MenuItem(item=item.clone()) })
            .collect(),
    );
    view! {cx,
        div(class="menu-category") {
            div(class="category-header") {
                span(class="category-icon") { "🍽️" }
                span(class="category-name") { (name) }
            }
            div(class="category-items") { (items) }
        }
    }
}

/// The selected menu grouped by category.
#[instrument(skip_all)]
#[component]
pub fn MenuContent<'ctx, G: Html>(cx: Scope<'ctx>, props: MenuProps<'ctx>) -> View<G> {
    let sh = props.sh;
    let dataset = get_dataset_from_context(cx);
    let menu = sh.get_selector(cx, move |state| view::menu_view(dataset, state.get().as_ref()));
    view! {cx,
        div(id="menu-content", class="menu-content") {
            (match menu.get().as_ref() {
                Some(menu) => {
                    let title = menu.title.clone();
                    let categories = View::new_fragment(
                        menu.categories
                            .iter()
                            .cloned()
                            .map(|c| view! {cx, MenuCategory(category=c.clone()) })
                            .collect(),
                    );
                    view! {cx,
                        h2(class="menu-title") { (title) }
                        (categories)
                    }
                }
                None => View::empty(),
            })
        }
    }
}
