/*!
 * Structuring pipeline coordinator.
 *
 * The sole public entry point of the structuring core. Emits Header and
 * CastList elements deterministically from the caller contexts, then runs
 * the grammar detectors in fixed priority order — JSON, Markdown-scene,
 * plain-text — accepting the first that yields at least one scene. When
 * none does, the fallback synthesizer supplies a minimal opening scene.
 *
 * Grammar mismatch is never an error here; the only failure is a missing
 * script title, which is a caller contract violation.
 */

use log::debug;

use crate::context::{ProjectContext, ScriptContext};
use crate::errors::StructureError;

use super::document::{CastList, Document, Element, Header, Scene};
use super::ids::IdAllocator;
use super::{fallback, json_detector, markdown_detector, text_detector};

/// An input grammar one detector recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Fenced or bare JSON with a `scenes` array
    Json,
    /// `##`-delimited scene markup
    Markdown,
    /// Blank-line paragraph heuristics
    PlainText,
}

impl Grammar {
    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::PlainText => "plain-text",
        }
    }
}

/// Detector priority order: most structured grammar first
const DETECTORS: [(Grammar, fn(&str, &mut IdAllocator) -> Vec<Scene>); 3] = [
    (Grammar::Json, json_detector::detect),
    (Grammar::Markdown, markdown_detector::detect),
    (Grammar::PlainText, text_detector::detect),
];

/// Structure raw model output into a typed Document.
///
/// The returned document always starts with a Header, carries a CastList
/// when the project roster is non-empty, and contains at least one scene.
/// Fails only when the script context has an empty title.
pub fn structure_script(
    raw_text: &str,
    project: &ProjectContext,
    script: &ScriptContext,
) -> Result<Document, StructureError> {
    let title = script.title.trim();
    if title.is_empty() {
        return Err(StructureError::MissingTitle);
    }

    let mut ids = IdAllocator::new();
    let mut elements = Vec::new();

    elements.push(Element::Header(Header::new(
        ids.next_id(),
        title,
        &project.name,
        &script.description,
    )));

    if !project.roster.is_empty() {
        elements.push(Element::Cast(CastList::from_roster(
            ids.next_id(),
            &project.roster,
        )));
    }

    let scenes = detect_scenes(raw_text, &mut ids);
    let scenes = if scenes.is_empty() {
        debug!("No grammar matched, synthesizing fallback scene");
        vec![fallback::synthesize(project, &script.settings, &mut ids)]
    } else {
        scenes
    };

    elements.extend(scenes.into_iter().map(Element::Scene));

    Ok(Document::new(elements))
}

/// Run the detectors in priority order, returning the first non-empty result
fn detect_scenes(raw_text: &str, ids: &mut IdAllocator) -> Vec<Scene> {
    for (grammar, detect) in DETECTORS {
        let scenes = detect(raw_text, ids);
        if !scenes.is_empty() {
            debug!(
                "Grammar '{}' matched with {} scene(s)",
                grammar.label(),
                scenes.len()
            );
            return scenes;
        }
        debug!("Grammar '{}' yielded no scenes", grammar.label());
    }
    Vec::new()
}
