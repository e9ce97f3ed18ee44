//! Narrative summary generation with a deterministic fallback.
//!
//! The narrative collaborator is a single-operation external service:
//! `generate(prompt) -> text`, which may fail (timeout, quota, malformed
//! response). This crate keeps the success/failure paths visible in the
//! return value: [`narrative_for`] always produces a [`NarrativeOutcome`],
//! either the generated text or a deterministic template interpolated from
//! the same computed statistics. No failure propagates to the caller.

mod context;
mod error;
mod fallback;
mod generator;
mod prompt;

pub use context::{CriticalUnit, NarrativeContext};
pub use error::{NarrativeError, Result};
pub use fallback::fallback_narrative;
pub use generator::{DisabledGenerator, NarrativeGenerator};
pub use prompt::build_prompt;

use eqstat_model::NarrativeSource;

/// Narrative text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeOutcome {
    pub text: String,
    pub source: NarrativeSource,
}

/// Produces a narrative for the report, never failing.
///
/// Builds the statistics prompt, calls the generator, and falls back to the
/// deterministic template on any failure or empty response. Failures are
/// logged at `warn` and otherwise swallowed.
pub fn narrative_for(
    generator: &dyn NarrativeGenerator,
    ctx: &NarrativeContext,
) -> NarrativeOutcome {
    let prompt = build_prompt(ctx);
    match generator.generate(&prompt) {
        Ok(text) if !text.trim().is_empty() => NarrativeOutcome {
            text,
            source: NarrativeSource::Generated,
        },
        Ok(_) => {
            tracing::warn!("narrative service returned empty text, using fallback");
            NarrativeOutcome {
                text: fallback_narrative(ctx),
                source: NarrativeSource::Fallback,
            }
        }
        Err(error) => {
            tracing::warn!(%error, "narrative service failed, using fallback");
            NarrativeOutcome {
                text: fallback_narrative(ctx),
                source: NarrativeSource::Fallback,
            }
        }
    }
}
