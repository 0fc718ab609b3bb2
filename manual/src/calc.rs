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
Proportional ingredient scaling. Every result is a pure function of the
entered base weight and the ingredient's static ratio.
*/
use crate::{Ingredient, Recipe};

pub const UNIT: &str = "g";

/// Displayed when there is nothing to compute.
pub const PLACEHOLDER: &str = "- g";

/// Parse the raw base weight input. Only positive finite numbers count.
pub fn parse_base_weight(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
}

pub fn scale(weight: f64, ratio: f64) -> f64 {
    weight * ratio
}

/// Round to tenths. Exact midpoints round away from zero.
fn round_tenths(qty: f64) -> f64 {
    let tenths = qty * 10.0;
    // The product is exact only when the fused multiply-add leaves no residue.
    let exact = qty.mul_add(10.0, -tenths) == 0.0;
    if exact && tenths.fract().abs() == 0.5 {
        tenths.round() / 10.0
    } else {
        qty
    }
}

pub fn format_quantity(qty: f64) -> String {
    format!("{:.1} {}", round_tenths(qty), UNIT)
}

/// The displayed result for one ingredient under the raw base weight input.
pub fn ingredient_result(raw_weight: &str, ingredient: &Ingredient) -> String {
    let ratio = ingredient.ratio.filter(|r| *r != 0.0 && r.is_finite());
    match (parse_base_weight(raw_weight), ratio) {
        (Some(weight), Some(ratio)) => format_quantity(scale(weight, ratio)),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Results for each ingredient of the recipe in order, or `None` when the
/// recipe doesn't support calculation.
pub fn recipe_results(raw_weight: &str, recipe: &Recipe) -> Option<Vec<String>> {
    if !recipe.supports_calculation() {
        return None;
    }
    Some(
        recipe
            .ingredients
            .iter()
            .map(|i| ingredient_result(raw_weight, i))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_ratio(ratio: Option<f64>) -> Ingredient {
        Ingredient::new("塩", Some("नुन"), ratio)
    }

    #[test]
    fn test_parse_base_weight() {
        assert_eq!(parse_base_weight("500"), Some(500.0));
        assert_eq!(parse_base_weight(" 1000 "), Some(1000.0));
        assert_eq!(parse_base_weight("2.5"), Some(2.5));
        assert_eq!(parse_base_weight("0"), None);
        assert_eq!(parse_base_weight("-10"), None);
        assert_eq!(parse_base_weight(""), None);
        assert_eq!(parse_base_weight("abc"), None);
        assert_eq!(parse_base_weight("inf"), None);
        assert_eq!(parse_base_weight("NaN"), None);
    }

    #[test]
    fn test_ingredient_result() {
        assert_eq!(ingredient_result("500", &with_ratio(Some(0.1))), "50.0 g");
        assert_eq!(ingredient_result("1000", &with_ratio(Some(0.015))), "15.0 g");
        assert_eq!(ingredient_result("333", &with_ratio(Some(0.5))), "166.5 g");
        assert_eq!(ingredient_result("0", &with_ratio(Some(0.1))), PLACEHOLDER);
        assert_eq!(ingredient_result("abc", &with_ratio(Some(0.1))), PLACEHOLDER);
        assert_eq!(ingredient_result("", &with_ratio(Some(0.1))), PLACEHOLDER);
        assert_eq!(ingredient_result("500", &with_ratio(None)), PLACEHOLDER);
        assert_eq!(ingredient_result("500", &with_ratio(Some(0.0))), PLACEHOLDER);
    }

    #[test]
    fn test_format_quantity_rounding() {
        assert_eq!(format_quantity(50.0), "50.0 g");
        assert_eq!(format_quantity(0.25), "0.3 g");
        assert_eq!(format_quantity(1.45), "1.4 g");
        assert_eq!(format_quantity(12.34), "12.3 g");
        assert_eq!(format_quantity(12.36), "12.4 g");
    }

    #[test]
    fn test_recompute_has_no_memory() {
        let i = with_ratio(Some(0.2));
        assert_eq!(ingredient_result("100", &i), "20.0 g");
        assert_eq!(ingredient_result("", &i), PLACEHOLDER);
        assert_eq!(ingredient_result("100", &i), "20.0 g");
    }

    #[test]
    fn test_recipe_results() {
        let plain = Recipe::new("だし", None, "dashi").with_ingredients(vec![with_ratio(Some(0.1))]);
        assert_eq!(recipe_results("500", &plain), None);
        let calc = plain
            .clone()
            .with_ingredients(vec![with_ratio(None)])
            .with_calc_base_label("水の量 (g)", None);
        assert_eq!(
            recipe_results("500", &calc),
            Some(vec!["50.0 g".to_owned(), PLACEHOLDER.to_owned()])
        );
    }
}
