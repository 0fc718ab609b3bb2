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
    view::{self, RecipeCard},
    Message,
};
use sycamore::prelude::*;
use tracing::instrument;

use crate::{
    app_state::{get_dataset_from_context, StateHandler},
    components::highlight::HighlightedText,
};

#[derive(Prop)]
pub struct CardProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub card: RecipeCard,
}

#[component]
fn RecipeCardView<'ctx, G: Html>(cx: Scope<'ctx>, props: CardProps<'ctx>) -> View<G> {
    let CardProps { sh, card } = props;
    let RecipeCard {
        index,
        title,
        ingredient_count,
        step_count,
    } = card;
    view! {cx,
        div(class="recipe-card", on:click=move |_| sh.dispatch(cx, Message::OpenDetail(index))) {
            h3(class="recipe-card-title") { HighlightedText(text=title.clone()) }
            div(class="recipe-card-meta") {
                span { (ingredient_count) }
                span { (step_count) }
            }
        }
    }
}

#[derive(Prop)]
pub struct RecipeGridProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn RecipeGrid<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeGridProps<'ctx>) -> View<G> {
    let sh = props.sh;
    let dataset = get_dataset_from_context(cx);
    let grid = sh.get_selector(cx, move |state| view::recipe_grid(dataset, state.get().as_ref()));
    view! {cx,
        div(id="recipe-grid", class="recipe-grid") {
            (match grid.get().as_ref() {
                view::RecipeGrid::Cards(cards) => View::new_fragment(
                    cards
                        .iter()
                        .cloned()
                        .map(|card| view! {cx, RecipeCardView(sh=sh, card=card.clone()) })
                        .collect(),
                ),
                view::RecipeGrid::NoResults(msg) => {
                    let msg = msg.clone();
                    view! {cx, p(class="no-results") { (msg) } }
                }
            })
        }
    }
}
