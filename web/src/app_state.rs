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

use manual::{parse, AppState, Dataset, Message};
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, error, info, instrument};

const DATASET_JSON: &str = include_str!("../static/menu_data.json");

/// Parse the embedded dataset. A dataset that doesn't parse leaves the
/// manual empty rather than taking the page down.
#[instrument]
pub fn load_dataset() -> Dataset {
    match parse::as_dataset(DATASET_JSON) {
        Ok(dataset) => {
            info!(
                menus = dataset.menus.len(),
                recipes = dataset.recipes.len(),
                "Loaded dataset"
            );
            dataset
        }
        Err(err) => {
            error!(?err, "Unable to load dataset");
            Dataset::default()
        }
    }
}

pub struct StateMachine(Rc<Dataset>);

impl StateMachine {
    pub fn dataset(&self) -> &Dataset {
        self.0.as_ref()
    }
}

impl MessageMapper<Message, AppState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, _cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<AppState>) {
        let (next, regions) = original.get_untracked().apply(self.dataset(), msg);
        if regions.is_empty() {
            debug!("Nothing to re-render");
            return;
        }
        debug!(?regions, "Re-rendering");
        original.set(next);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, AppState, Message>;

pub fn get_dataset_from_context<'ctx>(cx: Scope<'ctx>) -> &'ctx Dataset {
    use_context::<Rc<Dataset>>(cx).as_ref()
}

pub fn get_state_handler<'ctx>(
    cx: Scope<'ctx>,
    initial: AppState,
    dataset: Rc<Dataset>,
) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine(dataset))
}
