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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    CloseDetail,
    FocusSearch,
}

/// Map a key press to the shortcut it triggers, if any.
pub fn classify(key: &str, ctrl: bool) -> Option<Shortcut> {
    match (key, ctrl) {
        ("Escape", _) => Some(Shortcut::CloseDetail),
        ("f", true) => Some(Shortcut::FocusSearch),
        _ => None,
    }
}
