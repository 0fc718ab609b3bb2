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
/*!
Search filtering and match highlighting.

Search terms are always normalized before they are stored or compared. A term
is treated as literal text when highlighting, never as a pattern.
*/
use regex::{Regex, RegexBuilder};
use tracing::error;

/// Lower-case and trim a raw search input.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_owned()
}

/// Whether `field` is visible under the normalized `term`.
pub fn matches(term: &str, field: &str) -> bool {
    term.is_empty() || field.to_lowercase().contains(term)
}

/// Whether any of `fields` is visible under the normalized `term`.
pub fn matches_any<'a, Iter>(term: &str, fields: Iter) -> bool
where
    Iter: IntoIterator<Item = &'a str>,
{
    term.is_empty() || fields.into_iter().any(|f| matches(term, f))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub emphasized: bool,
}

/// Text split into plain and emphasized fragments. The fragments always
/// concatenate back into the original text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted(Vec<Fragment>);

impl Highlighted {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        let mut out = Self::default();
        out.push(text.into(), false);
        out
    }

    fn push(&mut self, text: String, emphasized: bool) {
        if !text.is_empty() {
            self.0.push(Fragment { text, emphasized });
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.0
    }

    pub fn text(&self) -> String {
        self.0.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn emphasized(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|f| f.emphasized)
            .map(|f| f.text.as_str())
    }

    pub fn has_match(&self) -> bool {
        self.0.iter().any(|f| f.emphasized)
    }
}

/// Emphasizes every case-insensitive occurrence of a search term.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(term: &str) -> Self {
        if term.is_empty() {
            return Self { pattern: None };
        }
        let pattern = match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Some(re),
            Err(err) => {
                error!(?err, term, "Unable to build highlight pattern");
                None
            }
        };
        Self { pattern }
    }

    pub fn highlight(&self, text: &str) -> Highlighted {
        let re = match &self.pattern {
            Some(re) => re,
            None => return Highlighted::plain(text),
        };
        let mut out = Highlighted::default();
        let mut last = 0;
        for m in re.find_iter(text) {
            out.push(text[last..m.start()].to_owned(), false);
            out.push(m.as_str().to_owned(), true);
            last = m.end();
        }
        out.push(text[last..].to_owned(), false);
        out
    }
}

pub fn highlight(text: &str, term: &str) -> Highlighted {
    Highlighter::new(term).highlight(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frag(text: &str, emphasized: bool) -> Fragment {
        Fragment {
            text: text.to_owned(),
            emphasized,
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Nori  "), "nori");
        assert_eq!(normalize("\tSUSHI\n"), "sushi");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("天ぷら"), "天ぷら");
    }

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        assert!(matches("nori", "Nori seaweed"));
        assert!(matches("seaweed", "Nori seaweed"));
        assert!(!matches("wakame", "Nori seaweed"));
        assert!(matches("", "anything"));
        assert!(matches("", ""));
        assert!(!matches("x", ""));
    }

    #[test]
    fn test_matches_any() {
        assert!(matches_any("tofu", ["味噌汁", "Tofu miso soup"]));
        assert!(!matches_any("tofu", ["味噌汁", "miso soup"]));
        assert!(matches_any("", std::iter::empty::<&str>()));
    }

    #[test]
    fn test_empty_term_passes_text_through() {
        for s in ["", "Nori seaweed", "鯛の塩焼き", "a.b(c)"] {
            assert_eq!(highlight(s, "").text(), s);
            assert!(!highlight(s, "").has_match());
        }
        assert_eq!(highlight("", "nori"), Highlighted::default());
    }

    #[test]
    fn test_highlight_wraps_every_occurrence() {
        let h = highlight("Nori and more nori", "nori");
        assert_eq!(
            h.fragments(),
            &[
                frag("Nori", true),
                frag(" and more ", false),
                frag("nori", true)
            ]
        );
        assert_eq!(h.text(), "Nori and more nori");
    }

    #[test]
    fn test_highlight_japanese_text() {
        let h = highlight("鯛の塩焼き", "塩");
        assert_eq!(
            h.fragments(),
            &[frag("鯛の", false), frag("塩", true), frag("焼き", false)]
        );
    }

    #[test]
    fn test_highlight_treats_metacharacters_literally() {
        let h = highlight("a.b aXb", "a.b");
        assert_eq!(h.emphasized().collect::<Vec<_>>(), vec!["a.b"]);
        assert!(!highlight("aXb", "a.b").has_match());
        for term in ["(", "[x]", "a+", "$^", "\\", "{2}", "?", "|", "*"] {
            let text = format!("pre {} post", term);
            let h = highlight(&text, term);
            assert_eq!(h.text(), text);
            assert_eq!(h.emphasized().collect::<Vec<_>>(), vec![term]);
        }
    }

    #[test]
    fn test_highlight_whole_text_match() {
        let h = highlight("Dashi", "dashi");
        assert_eq!(h.fragments(), &[frag("Dashi", true)]);
    }
}
