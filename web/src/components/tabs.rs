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
use manual::{view, Message, Tab};
use sycamore::prelude::*;
use tracing::debug;

use crate::app_state::{get_dataset_from_context, StateHandler};

#[derive(Prop)]
pub struct TabState<'ctx, G: Html> {
    pub sh: StateHandler<'ctx>,
    pub children: Children<'ctx, G>,
}

#[component]
pub fn TabbedView<'ctx, G: Html>(cx: Scope<'ctx>, state: TabState<'ctx, G>) -> View<G> {
    let TabState { sh, children } = state;
    let dataset = get_dataset_from_context(cx);
    let chrome = sh.get_selector(cx, move |state| view::chrome(dataset, state.get().as_ref()));
    let tablist = create_memo(cx, move || {
        let chrome = chrome.get();
        vec![
            (Tab::Menus, chrome.tab_menus.clone(), chrome.active_tab),
            (Tab::Recipes, chrome.tab_recipes.clone(), chrome.active_tab),
        ]
    });
    let children = children.call(cx);
    view! {cx,
        nav(class="tab-navigation") {
            Indexed(
                iterable=tablist,
                view=move |inner, (tab, label, selected)| {
                    debug!(?selected, ?tab, "identifying tab");
                    let class = if tab == selected {
                        "tab-button active"
                    } else {
                        "tab-button"
                    };
                    view! {inner,
                        button(class=class, on:click=move |_| sh.dispatch(cx, Message::SwitchTab(tab))) {
                            (label)
                        }
                    }
                }
            )
        }
        main(class="container") {
            (children)
        }
    }
}

/// Class for a tab's content section.
pub fn section_class(active: bool) -> &'static str {
    if active {
        "tab-content active"
    } else {
        "tab-content"
    }
}
