//! HTML rendering for the recipe form.

use crate::RecipeForm;
use html_escape::{encode_double_quoted_attribute, encode_text};
use leftovers_core::{Cuisine, MealType};
use std::fmt::Write;
use strum::IntoEnumIterator;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// What the page shows below the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecipePage {
    /// Empty form
    #[default]
    Blank,
    /// Submission rejected before generation
    Warning(String),
    /// A recipe was generated
    Recipe {
        /// Ingredients as submitted
        ingredients: String,
        /// Generated recipe text
        recipe: String,
    },
    /// Generation failed; `message` is the user-facing error
    Failed {
        /// Ingredients as submitted
        ingredients: String,
        /// Error message
        message: String,
    },
}

/// Renders the full page, keeping the submitted values in the form.
pub fn render_page(form: &RecipeForm, page: &RecipePage) -> String {
    let notice = match page {
        RecipePage::Warning(message) => {
            format!("  <div class=\"warning\">{}</div>", encode_text(message))
        }
        _ => String::new(),
    };

    let result = match page {
        RecipePage::Recipe {
            ingredients,
            recipe,
        } => result_section(ingredients, recipe, false),
        RecipePage::Failed {
            ingredients,
            message,
        } => result_section(ingredients, message, true),
        _ => String::new(),
    };

    let ingredients = encode_text(&form.ingredients).into_owned();
    let meal_options = options(MealType::iter(), form.meal_type);
    let cuisine_options = options(Cuisine::iter(), form.cuisine);

    fill(
        INDEX_TEMPLATE,
        &[
            ("INGREDIENTS", ingredients.as_str()),
            ("MEAL_OPTIONS", meal_options.as_str()),
            ("CUISINE_OPTIONS", cuisine_options.as_str()),
            ("NOTICE", notice.as_str()),
            ("RESULT", result.as_str()),
        ],
    )
}

fn result_section(ingredients: &str, body: &str, failed: bool) -> String {
    let class = if failed { "output error" } else { "output" };
    format!(
        "  <section id=\"result\">\n    <h2>Generated Recipe:</h2>\n    <h3>Ingredients:</h3>\n    <div class=\"output\">{}</div>\n    <h3>Recipe:</h3>\n    <div class=\"{}\">{}</div>\n  </section>",
        encode_text(ingredients),
        class,
        encode_text(body)
    )
}

fn options<T>(variants: impl Iterator<Item = T>, selected: T) -> String
where
    T: PartialEq + AsRef<str>,
{
    let mut html = String::new();
    for variant in variants {
        let name = variant.as_ref();
        let marker = if variant == selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            "      <option value=\"{}\"{}>{}</option>",
            encode_double_quoted_attribute(name),
            marker,
            encode_text(name)
        );
    }
    html.trim_end().to_string()
}

/// Substitutes `{{KEY}}` placeholders in one pass.
///
/// Substituted values are never rescanned, so user text containing `{{...}}`
/// is left alone. Unknown placeholders are kept verbatim.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
