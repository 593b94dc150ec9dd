//! Post-processing of raw model output.

use leftovers_core::Prompt;

/// Removes the echoed prompt from generated text and trims whitespace.
///
/// Text-generation models return the prompt followed by the continuation.
/// The leading occurrence of the prompt is removed (the first occurrence
/// anywhere, if the text does not start with it), then any further echoes at
/// the start are stripped so the result never begins with the prompt.
///
/// # Examples
///
/// ```
/// use leftovers_core::{Cuisine, GenerationRequest, MealType, Prompt};
/// use leftovers_recipe::clean_output;
///
/// let request = GenerationRequest::new("eggs", MealType::Breakfast, Cuisine::American).unwrap();
/// let prompt = Prompt::from(&request);
/// let raw = format!("{}\n\nScramble the eggs.  ", prompt);
/// assert_eq!(clean_output(&raw, &prompt), "Scramble the eggs.");
/// ```
pub fn clean_output(raw: &str, prompt: &Prompt) -> String {
    let prompt = prompt.as_str();
    if prompt.is_empty() {
        return raw.trim().to_string();
    }

    let without_echo = raw.replacen(prompt, "", 1);
    let mut text = without_echo.trim();
    while let Some(rest) = text.strip_prefix(prompt) {
        text = rest.trim();
    }
    text.to_string()
}
