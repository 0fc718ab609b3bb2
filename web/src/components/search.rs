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
use manual::{view, Message};
use sycamore::prelude::*;
use tracing::instrument;
use web_sys::Event;

use crate::{
    app_state::{get_dataset_from_context, StateHandler},
    js_lib,
};

pub const SEARCH_INPUT_ID: &str = "search-input";

#[derive(Prop)]
pub struct SearchProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn SearchBox<'ctx, G: Html>(cx: Scope<'ctx>, props: SearchProps<'ctx>) -> View<G> {
    let sh = props.sh;
    let dataset = get_dataset_from_context(cx);
    let placeholder = sh.get_selector(cx, move |state| {
        view::chrome(dataset, state.get().as_ref()).search_placeholder
    });
    let input = sh.get_selector(cx, |state| state.get().search_input.clone());
    let clear_style = sh.get_selector(cx, |state| {
        if state.get().show_clear_search() {
            "display: block;"
        } else {
            "display: none;"
        }
    });
    view! {cx,
        div(class="search-container") {
            input(
                id=SEARCH_INPUT_ID,
                type="text",
                class="search-input",
                placeholder=placeholder.get(),
                prop:value=input.get().as_ref().clone(),
                on:input=move |evt: Event| {
                    sh.dispatch(cx, Message::Search(js_lib::event_target_value(&evt)));
                },
            )
            button(id="clear-search", class="clear-search", style=clear_style.get(), on:click=move |_| {
                sh.dispatch(cx, Message::ClearSearch);
            }) { "✕" }
        }
    }
}
