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
    view::{self, Calculator, IngredientLine, Line, RecipeDetail, Section},
    Message,
};
use sycamore::prelude::*;
use tracing::{debug, instrument};
use web_sys::Event;

use crate::{
    app_state::{get_dataset_from_context, StateHandler},
    js_lib,
};

pub const MODAL_ID: &str = "recipe-modal";

#[derive(Prop)]
pub struct CalculatorProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub calculator: Calculator,
}

#[component]
fn CalculatorInput<'ctx, G: Html>(cx: Scope<'ctx>, props: CalculatorProps<'ctx>) -> View<G> {
    let CalculatorProps { sh, calculator } = props;
    let Calculator {
        label,
        placeholder,
        value,
    } = calculator;
    view! {cx,
        div(class="calculator") {
            label(for="base-weight") { (label) }
            input(
                id="base-weight",
                type="number",
                class="base-weight",
                placeholder=placeholder,
                prop:value=value.clone(),
                on:input=move |evt: Event| {
                    sh.dispatch(cx, Message::SetBaseWeight(js_lib::event_target_value(&evt)));
                },
            )
        }
    }
}

#[derive(Prop)]
pub struct IngredientsProps<'ctx> {
    pub section: Section<IngredientLine>,
    pub results: &'ctx ReadSignal<Vec<Option<String>>>,
}

#[component]
fn Ingredients<'ctx, G: Html>(cx: Scope<'ctx>, props: IngredientsProps<'ctx>) -> View<G> {
    let IngredientsProps { section, results } = props;
    let Section { heading, entries } = section;
    let lines = View::new_fragment(
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                let text_ne = match line.text_ne {
                    Some(text) => view! {cx, div(class="ingredient-ne") { (text) } },
                    None => View::empty(),
                };
                let result = if line.result.is_some() {
                    // Only the result text follows the base weight.
                    let value = create_memo(cx, move || {
                        results.get().get(idx).cloned().flatten().unwrap_or_default()
                    });
                    view! {cx, span(class="calc-result") { (value.get()) } }
                } else {
                    View::empty()
                };
                let text_ja = line.text_ja;
                view! {cx,
                    li(class="ingredient") {
                        div(class="ingredient-text") {
                            div(class="ingredient-ja") { (text_ja) }
                            (text_ne)
                        }
                        (result)
                    }
                }
            })
            .collect(),
    );
    view! {cx,
        div(class="recipe-section") {
            h3 { "📝 " (heading) }
            ul(class="ingredient-list") { (lines) }
        }
    }
}

#[derive(Prop)]
pub struct StepsProps {
    pub icon: &'static str,
    pub class: &'static str,
    pub section: Section<Line>,
}

#[component]
fn Steps<G: Html>(cx: Scope, props: StepsProps) -> View<G> {
    let StepsProps {
        icon,
        class,
        section,
    } = props;
    let Section { heading, entries } = section;
    let heading = format!("{} {}", icon, heading);
    let steps = View::new_fragment(
        entries
            .into_iter()
            .map(|Line { text_ja, text_ne }| {
                view! {cx,
                    li {
                        div(class="step-ja") { (text_ja) }
                        div(class="step-ne") { (text_ne) }
                    }
                }
            })
            .collect(),
    );
    view! {cx,
        div(class="recipe-section") {
            h3 { (heading) }
            ol(class=class) { (steps) }
        }
    }
}

fn detail_body<'ctx, G: Html>(
    cx: Scope<'ctx>,
    sh: StateHandler<'ctx>,
    detail: RecipeDetail,
    results: &'ctx ReadSignal<Vec<Option<String>>>,
) -> View<G> {
    let RecipeDetail {
        title,
        calculator,
        ingredients,
        instructions,
        notes,
        ..
    } = detail;
    let calculator = match calculator {
        Some(calculator) => view! {cx, CalculatorInput(sh=sh, calculator=calculator.clone()) },
        None => View::empty(),
    };
    let ingredients = match ingredients {
        Some(section) => view! {cx, Ingredients(section=section.clone(), results=results) },
        None => View::empty(),
    };
    let instructions = match instructions {
        Some(section) => view! {cx, Steps(icon="👨‍🍳", class="instruction-list", section=section.clone()) },
        None => View::empty(),
    };
    let notes = match notes {
        Some(section) => view! {cx, Steps(icon="⚠️", class="note-list", section=section.clone()) },
        None => View::empty(),
    };
    view! {cx,
        h2(class="recipe-title") { (title) }
        (calculator)
        (ingredients)
        (instructions)
        (notes)
    }
}

#[derive(Prop)]
pub struct DetailProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

/// The recipe overlay.
#[instrument(skip_all)]
#[component]
pub fn RecipeDetailView<'ctx, G: Html>(cx: Scope<'ctx>, props: DetailProps<'ctx>) -> View<G> {
    let sh = props.sh;
    let dataset = get_dataset_from_context(cx);
    // Editing the base weight only changes the results so the calculator
    // input keeps its focus.
    let layout = sh.get_selector(cx, move |state| {
        view::recipe_detail(dataset, state.get().as_ref()).map(|d| d.layout())
    });
    let results = sh.get_selector(cx, move |state| {
        view::recipe_detail(dataset, state.get().as_ref())
            .map(|d| d.results())
            .unwrap_or_default()
    });
    let opened = sh.get_selector(cx, |state| state.get().open_recipe());
    create_effect(cx, move || {
        if let Some(idx) = *opened.get() {
            debug!(idx, "Opened recipe");
            js_lib::reset_scroll(MODAL_ID);
        }
    });
    let modal_class = create_memo(cx, move || {
        if layout.get().is_some() {
            "modal active"
        } else {
            "modal"
        }
    });
    let close_label = create_memo(cx, move || {
        layout
            .get()
            .as_ref()
            .as_ref()
            .map(|d| d.close.clone())
            .unwrap_or_default()
    });
    view! {cx,
        div(id=MODAL_ID, class=modal_class.get(), on:click=move |evt: Event| {
            // Only clicks on the backdrop itself close the overlay.
            if js_lib::event_target_id(&evt).as_deref() == Some(MODAL_ID) {
                sh.dispatch(cx, Message::CloseDetail);
            }
        }) {
            div(class="modal-content") {
                button(id="close-modal", class="close-modal", title=close_label.get(), on:click=move |_| {
                    sh.dispatch(cx, Message::CloseDetail);
                }) { "×" }
                div(id="recipe-detail") {
                    (match layout.get().as_ref() {
                        Some(detail) => detail_body(cx, sh, detail.clone(), results),
                        None => View::empty(),
                    })
                }
            }
        }
    }
}
