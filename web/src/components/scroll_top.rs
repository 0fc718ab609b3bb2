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
use sycamore::prelude::*;

use crate::{app_state::StateHandler, js_lib};

#[derive(Prop)]
pub struct ScrollTopProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[component]
pub fn ScrollToTop<'ctx, G: Html>(cx: Scope<'ctx>, props: ScrollTopProps<'ctx>) -> View<G> {
    let class = props.sh.get_selector(cx, |state| {
        if state.get().show_scroll_top {
            "scroll-to-top show"
        } else {
            "scroll-to-top"
        }
    });
    view! {cx,
        button(id="scroll-to-top", class=class.get(), on:click=|_| js_lib::scroll_window_to_top()) {
            "↑"
        }
    }
}
