// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};

use crate::models::{CharacterClass, GenerationConfig, StrengthLabel, StrengthResult};

/// Generate a random password according to `config`.
///
/// Every position is drawn independently and uniformly from the union of
/// the selected class alphabets. With `clean_edges` set, the first and last
/// positions draw from the non-symbol subset instead, falling back to the
/// full alphabet when only symbols are selected. An empty selection yields
/// an empty string regardless of the requested length.
pub fn generate(config: &GenerationConfig) -> String {
    let mut rng = rand::thread_rng();

    // Alphabets are ASCII, so byte-level sampling is safe.
    let mut full = Vec::new();
    for class in config.selected_classes() {
        full.extend_from_slice(class.alphabet().as_bytes());
    }
    if full.is_empty() {
        return String::new();
    }

    let mut edge = Vec::new();
    for class in config.selected_classes() {
        if class != CharacterClass::Symbols {
            edge.extend_from_slice(class.alphabet().as_bytes());
        }
    }
    // Only symbols selected: nothing non-symbol to pin the edges to.
    if edge.is_empty() {
        edge = full.clone();
    }

    let full_dist = Uniform::from(0..full.len());
    let edge_dist = Uniform::from(0..edge.len());

    let mut password = String::with_capacity(config.length);
    for i in 0..config.length {
        let at_edge = config.clean_edges && (i == 0 || i + 1 == config.length);
        let byte = if at_edge {
            edge[edge_dist.sample(&mut rng)]
        } else {
            full[full_dist.sample(&mut rng)]
        };
        password.push(byte as char);
    }

    password
}

/// Score a password's strength on a 0-4 scale.
///
/// The raw score counts the character classes present; short passwords are
/// capped regardless of diversity (below 6 characters is always Very Weak,
/// below 8 never rates above Weak). Total over all inputs, never fails.
pub fn score_strength(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            score: 0,
            label: StrengthLabel::None,
        };
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_number = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let raw = [has_lowercase, has_uppercase, has_number, has_symbol]
        .iter()
        .filter(|present| **present)
        .count() as u8;

    let length = password.chars().count();
    let score = if length < 6 {
        1
    } else if length < 8 && raw > 2 {
        2
    } else {
        raw
    };

    StrengthResult {
        score,
        label: StrengthLabel::from_score(score),
    }
}
