// ABOUTME: System-instruction builder for the devotional assistant.
// ABOUTME: Compiled-in default from src/prompts/assistant.md, file-based override.

use std::fs;
use std::path::PathBuf;

use crate::config::Config;

/// Compiled-in default behavioral policy sent with every Gemini request.
const DEFAULT_INSTRUCTION: &str = include_str!("prompts/assistant.md");

/// Reads a file if it exists, returning None otherwise.
pub fn read_if_exists(path: PathBuf) -> Option<String> {
    if path.exists() {
        fs::read_to_string(&path).ok()
    } else {
        None
    }
}

/// Assembles the assistant system instruction. The compiled-in default can be
/// replaced wholesale by `~/.shanti/assistant.md`. The text is treated as an
/// opaque policy payload, never parsed or validated locally.
#[derive(Debug, Clone)]
pub struct InstructionBuilder {
    pub instruction: String,
}

impl InstructionBuilder {
    /// Creates a builder loaded with the compiled-in default.
    pub fn new() -> Self {
        Self {
            instruction: DEFAULT_INSTRUCTION.to_string(),
        }
    }

    /// Checks ~/.shanti/assistant.md and replaces the instruction if found.
    pub fn load_override(&mut self) -> &mut Self {
        if let Some(content) = read_if_exists(Config::instruction_path()) {
            self.instruction = content;
        }
        self
    }

    /// Returns the final instruction text.
    pub fn build(&self) -> String {
        self.instruction.trim().to_string()
    }
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_contains_language_rules() {
        let prompt = InstructionBuilder::new().build();
        assert!(
            prompt.contains("Always reply in both Hindi and English"),
            "expected bilingual rule in default instruction"
        );
    }

    #[test]
    fn default_contains_jaap_guidance() {
        let prompt = InstructionBuilder::new().build();
        assert!(
            prompt.contains("If stressed: Suggest Hanuman, Ram, or Shiva"),
            "expected mood-to-deity guidance in default instruction"
        );
    }

    #[test]
    fn default_forbids_personal_data_requests() {
        let prompt = InstructionBuilder::new().build();
        assert!(prompt.contains("Do not ask for login or personal data"));
    }

    #[test]
    fn override_replaces_instruction() {
        let mut builder = InstructionBuilder::new();
        builder.instruction = "custom policy for testing".to_string();
        let prompt = builder.build();
        assert_eq!(prompt, "custom policy for testing");
        assert!(!prompt.contains("Naam Jaap"));
    }

    #[test]
    fn build_trims_whitespace() {
        let mut builder = InstructionBuilder::new();
        builder.instruction = "\n\n  policy text  \n".to_string();
        assert_eq!(builder.build(), "policy text");
    }
}
