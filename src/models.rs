// src/models.rs
use serde::{Serialize, Deserialize};

/// A category of characters eligible for password generation. Each class
/// maps to a fixed alphabet; the alphabets are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    // Fixed order; alphabets concatenate in this order when building charsets.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Numbers => "0123456789",
            CharacterClass::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Keep symbols away from the first and last characters. Leading or
    /// trailing punctuation is the part external systems most often reject.
    pub clean_edges: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            clean_edges: true,
        }
    }
}

impl GenerationConfig {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Selected classes in the fixed concatenation order.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .iter()
            .copied()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

/// Strength rating label. Serializes as the style tag a UI layer renders
/// with ("very-weak", "strong", ...); `text()` is the human-readable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLabel {
    None,
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::None,
            1 => StrengthLabel::VeryWeak,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            StrengthLabel::None => "",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Result of scoring a password: a 0-4 score plus its label. UI feedback
/// only, not an entropy measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
}

/// A service name paired with a randomly assigned TCP port.
#[derive(Debug, Clone, Serialize)]
pub struct PortMapping {
    pub name: &'static str,
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                for c in a.alphabet().chars() {
                    assert!(
                        !b.alphabet().contains(c),
                        "{:?} and {:?} share '{}'",
                        a,
                        b,
                        c
                    );
                }
            }
        }
    }

    #[test]
    fn selected_classes_keeps_fixed_order() {
        let config = GenerationConfig {
            include_uppercase: false,
            ..GenerationConfig::default()
        };
        assert_eq!(
            config.selected_classes(),
            vec![
                CharacterClass::Lowercase,
                CharacterClass::Numbers,
                CharacterClass::Symbols
            ]
        );
    }

    #[test]
    fn label_table_matches_scores() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::None);
        assert_eq!(StrengthLabel::from_score(1), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Strong);
    }

    #[test]
    fn label_serializes_as_style_tag() {
        let json = serde_json::to_string(&StrengthLabel::VeryWeak).unwrap();
        assert_eq!(json, "\"very-weak\"");
    }
}
