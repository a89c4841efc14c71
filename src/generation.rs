/*!
 * Script generation service.
 *
 * Combines a completion provider with the structuring pipeline: build the
 * prompt, request a completion, structure whatever comes back. A provider
 * failure is absorbed by structuring empty text instead, which degrades to
 * the synthesized basic structure; a missing script title still fails, as
 * that is a caller contract violation rather than a generation problem.
 */

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::context::{ProjectContext, ScriptContext};
use crate::errors::AppError;
use crate::prompts::ScriptPromptBuilder;
use crate::providers::CompletionProvider;
use crate::structuring::{Document, structure_script};

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The structured document
    pub document: Document,

    /// When the generation finished
    pub generated_at: DateTime<Utc>,

    /// Whether the provider completion was used, or the run degraded to
    /// the synthesized basic structure
    pub from_completion: bool,
}

/// Script generation service backed by a completion provider
#[derive(Debug)]
pub struct ScriptGenerator<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> ScriptGenerator<P> {
    /// Create a new generator with the given provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Generate and structure a script for the given contexts
    pub async fn generate(
        &self,
        project: &ProjectContext,
        script: &ScriptContext,
    ) -> Result<GenerationOutcome, AppError> {
        let prompt = ScriptPromptBuilder::new(project, script).build();
        debug!("Requesting script completion ({} prompt chars)", prompt.len());

        let (raw_text, from_completion) = match self.provider.complete(&prompt).await {
            Ok(text) => (text, true),
            Err(error) => {
                warn!("Completion failed, degrading to basic structure: {}", error);
                (String::new(), false)
            }
        };

        let document = structure_script(&raw_text, project, script)?;

        Ok(GenerationOutcome {
            document,
            generated_at: Utc::now(),
            from_completion,
        })
    }
}
