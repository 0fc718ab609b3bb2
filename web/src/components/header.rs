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

use crate::app_state::{get_dataset_from_context, StateHandler};

#[derive(Prop)]
pub struct HeaderProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn Header<'ctx, G: Html>(cx: Scope<'ctx>, props: HeaderProps<'ctx>) -> View<G> {
    let sh = props.sh;
    let dataset = get_dataset_from_context(cx);
    let chrome = sh.get_selector(cx, move |state| view::chrome(dataset, state.get().as_ref()));
    let title = create_memo(cx, move || chrome.get().title.clone());
    let current = create_memo(cx, move || chrome.get().current_language.clone());
    let other = create_memo(cx, move || chrome.get().other_language.clone());
    view! {cx,
        header(class="header") {
            h1(id="main-title", class="title") { (title.get()) }
            button(id="language-toggle", class="language-toggle", on:click=move |_| {
                sh.dispatch(cx, Message::ToggleLanguage);
            }) {
                span(id="current-language", class="current-language") { (current.get()) }
                " ⇄ "
                span(id="other-language", class="other-language") { (other.get()) }
            }
        }
    }
}
