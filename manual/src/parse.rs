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
use thiserror::Error;
use tracing::{debug, instrument};

use crate::Dataset;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the JSON dataset document. Entries are taken as they are; nothing
/// beyond the document's shape is checked.
#[instrument(skip_all, fields(len = input.len()))]
pub fn as_dataset(input: &str) -> Result<Dataset, ParseError> {
    let dataset: Dataset = serde_json::from_str(input)?;
    debug!(
        menus = dataset.menus.len(),
        recipes = dataset.recipes.len(),
        "parsed dataset"
    );
    Ok(dataset)
}
