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
pub mod header;
pub mod highlight;
pub mod menu;
pub mod recipe;
pub mod recipe_grid;
pub mod scroll_top;
pub mod search;
pub mod tabs;

pub use header::*;
pub use menu::*;
pub use recipe::*;
pub use recipe_grid::*;
pub use scroll_top::*;
pub use search::*;
pub use tabs::*;
