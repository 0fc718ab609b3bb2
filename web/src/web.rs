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
use std::rc::Rc;

use manual::{view, AppState, Message, Tab};
use sycamore::{prelude::*, reactive::untrack};
use tracing::{error, info, instrument};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

use crate::{
    app_state::*,
    components::*,
    js_lib,
    shortcuts::{self, Shortcut},
};

/// Feed window scroll and keyboard events into the state handler. The
/// listeners outlive every scope so they hand off through rc signals.
fn bind_window_events<'ctx>(cx: Scope<'ctx>, sh: StateHandler<'ctx>) {
    let scrolled = create_rc_signal(0.0_f64);
    let escapes = create_rc_signal(0_u32);
    if let Err(err) = js_lib::on_window_event("scroll", {
        let scrolled = scrolled.clone();
        move |_| scrolled.set(js_lib::window_scroll_offset())
    }) {
        error!(?err, "Unable to listen for scrolling");
    }
    if let Err(err) = js_lib::on_window_event("keydown", {
        let escapes = escapes.clone();
        move |evt: Event| {
            let evt = match evt.dyn_into::<KeyboardEvent>() {
                Ok(evt) => evt,
                Err(_) => return,
            };
            match shortcuts::classify(&evt.key(), evt.ctrl_key()) {
                Some(Shortcut::CloseDetail) => {
                    escapes.set(escapes.get_untracked().wrapping_add(1));
                }
                Some(Shortcut::FocusSearch) => {
                    evt.prevent_default();
                    js_lib::focus_element(SEARCH_INPUT_ID);
                }
                None => (),
            }
        }
    }) {
        error!(?err, "Unable to listen for shortcuts");
    }
    create_effect(cx, move || {
        let offset = *scrolled.get();
        untrack(|| sh.dispatch(cx, Message::Scrolled(offset)));
    });
    create_effect(cx, move || {
        escapes.track();
        untrack(|| sh.dispatch(cx, Message::CloseDetail));
    });
}

#[instrument(skip_all)]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    let dataset = Rc::new(load_dataset());
    provide_context(cx, dataset.clone());
    info!("Starting UI");
    let sh = get_state_handler(cx, AppState::new(), dataset);
    bind_window_events(cx, sh);

    let dataset = get_dataset_from_context(cx);
    let lang = sh.get_selector(cx, move |state| {
        let chrome = view::chrome(dataset, state.get().as_ref());
        (chrome.lang, chrome.lang_class)
    });
    create_effect(cx, move || {
        let (lang, class) = *lang.get();
        if let Err(err) = js_lib::set_body_class(view::LANG_NE_CLASS, class.is_some()) {
            error!(?err, "Unable to update the language class");
        }
        if let Err(err) = js_lib::set_document_lang(lang.code()) {
            error!(?err, "Unable to update the document language");
        }
    });
    let tab = sh.get_selector(cx, |state| state.get().tab);
    let menus_class = create_memo(cx, move || section_class(*tab.get() == Tab::Menus));
    let recipes_class = create_memo(cx, move || section_class(*tab.get() == Tab::Recipes));

    view! {cx,
        div(class="app") {
            Header(sh=sh)
            SearchBox(sh=sh)
            TabbedView(sh=sh) {
                section(id=Tab::Menus.id(), class=menus_class.get()) {
                    MenuSelectors(sh=sh)
                    MenuContent(sh=sh)
                }
                section(id=Tab::Recipes.id(), class=recipes_class.get()) {
                    RecipeGrid(sh=sh)
                }
            }
            RecipeDetailView(sh=sh)
            ScrollToTop(sh=sh)
        }
    }
}
