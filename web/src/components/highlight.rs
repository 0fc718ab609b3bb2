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
use manual::search::Highlighted;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct HighlightProps {
    pub text: Highlighted,
}

/// Text with every search match wrapped in a highlight span.
#[component]
pub fn HighlightedText<G: Html>(cx: Scope, props: HighlightProps) -> View<G> {
    View::new_fragment(
        props
            .text
            .fragments()
            .iter()
            .map(|f| {
                let text = f.text.clone();
                if f.emphasized {
                    view! {cx, span(class="highlight") { (text) } }
                } else {
                    view! {cx, (text) }
                }
            })
            .collect(),
    )
}
