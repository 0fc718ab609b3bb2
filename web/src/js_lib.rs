// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use anyhow::{anyhow, Result};
use tracing::{debug, error};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollToOptions, Window,
};

fn get_window() -> Window {
    window().expect("No window present")
}

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow!("{:?}", err)
}

pub fn get_element_by_id<E>(id: &str) -> Result<Option<E>, Element>
where
    E: JsCast,
{
    match get_window()
        .document()
        .expect("No document in window")
        .get_element_by_id(id)
    {
        Some(e) => e.dyn_into::<E>().map(|e| Some(e)),
        None => Ok(None),
    }
}

/// Id of the element an event was dispatched to, if it has one.
pub fn event_target_id(evt: &Event) -> Option<String> {
    evt.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map(|el| el.id())
}

/// Current value of the input element an event was dispatched to.
pub fn event_target_value(evt: &Event) -> String {
    evt.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

pub fn set_body_class(class: &str, on: bool) -> Result<()> {
    let body = get_window()
        .document()
        .and_then(|d| d.body())
        .ok_or_else(|| anyhow!("No body in document"))?;
    body.class_list()
        .toggle_with_force(class, on)
        .map_err(js_err)?;
    Ok(())
}

pub fn set_document_lang(code: &str) -> Result<()> {
    let root = get_window()
        .document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| anyhow!("No root element in document"))?;
    root.set_attribute("lang", code).map_err(js_err)?;
    Ok(())
}

pub fn focus_element(id: &str) {
    match get_element_by_id::<HtmlElement>(id) {
        Ok(Some(el)) => {
            if let Err(err) = el.focus() {
                error!(?err, id, "Unable to focus element");
            }
        }
        Ok(None) => debug!(id, "No element to focus"),
        Err(el) => error!(?el, id, "Element can't take focus"),
    }
}

/// Jump an element's own scroll position back to the top.
pub fn reset_scroll(id: &str) {
    if let Ok(Some(el)) = get_element_by_id::<Element>(id) {
        el.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_window_to_top() {
    let mut opts = ScrollToOptions::new();
    opts.top(0.0).behavior(ScrollBehavior::Smooth);
    get_window().scroll_to_with_scroll_to_options(&opts);
}

pub fn window_scroll_offset() -> f64 {
    get_window().scroll_y().unwrap_or(0.0)
}

/// Register a listener on the window for the lifetime of the page.
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    get_window()
        .add_event_listener_with_callback(
            event_type,
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
        )
        .map_err(js_err)?;
    // The page never unregisters these so the closure has to outlive us.
    closure.forget();
    Ok(())
}
