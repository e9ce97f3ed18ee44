//! The external narrative collaborator interface.

use crate::error::{NarrativeError, Result};

/// One-operation interface to a generative text service.
///
/// Implementations own their transport and must bound the call with a
/// timeout; a hung service must surface as [`NarrativeError::Timeout`], not
/// block the analyzer indefinitely.
pub trait NarrativeGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Generator that always fails, forcing the deterministic fallback.
///
/// The default for offline operation and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

impl NarrativeGenerator for DisabledGenerator {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Err(NarrativeError::Unavailable {
            reason: "narrative generation is disabled".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_generator_always_fails() {
        let result = DisabledGenerator.generate("prompt");
        assert!(matches!(result, Err(NarrativeError::Unavailable { .. })));
    }
}
