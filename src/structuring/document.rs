/*!
 * Typed document model for structured scripts.
 *
 * A Document is an ordered sequence of Elements: exactly one Header first,
 * an optional CastList immediately after it, then zero or more Scenes in
 * narrative order. Scenes exclusively own their Lines. The sequence is the
 * authoritative reading order and is never re-sorted after construction.
 *
 * Every Element and Line carries an identifier drawn from a single
 * [`crate::structuring::ids::IdAllocator`] per pipeline invocation, so IDs
 * compare in emission order. Construction here is pure and infallible;
 * required fields are guaranteed by the callers supplying defaults.
 */

use serde::{Deserialize, Serialize};

use crate::context::CharacterProfile;

/// Sentinel emotion used when the source text does not specify one
pub const DEFAULT_EMOTION: &str = "neutral";

/// Sentinel duration used when a scene does not specify one
pub const DEFAULT_SCENE_DURATION: &str = "3 minutes";

/// Sentinel speaker label for dialogue with no attributed character
pub const NARRATOR_NAME: &str = "Narrator";

/// Complete structured output of one structuring invocation.
///
/// Immutable by convention: the pipeline hands it to the caller and never
/// touches it again. Downstream editing operates on a copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Elements in authoritative reading/production order
    pub elements: Vec<Element>,
}

impl Document {
    /// Create a document from an ordered element sequence
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// The Header element (always the first element)
    pub fn header(&self) -> Option<&Header> {
        match self.elements.first() {
            Some(Element::Header(header)) => Some(header),
            _ => None,
        }
    }

    /// The CastList element, if the project supplied a roster
    pub fn cast(&self) -> Option<&CastList> {
        self.elements.iter().find_map(|element| match element {
            Element::Cast(cast) => Some(cast),
            _ => None,
        })
    }

    /// All scenes in narrative order
    pub fn scenes(&self) -> Vec<&Scene> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Scene(scene) => Some(scene),
                _ => None,
            })
            .collect()
    }

    /// Total number of lines across all scenes
    pub fn line_count(&self) -> usize {
        self.scenes().iter().map(|scene| scene.lines.len()).sum()
    }

    /// All identifiers in element-then-line traversal order.
    ///
    /// The result is strictly increasing for any document produced by the
    /// structuring pipeline.
    pub fn traversal_ids(&self) -> Vec<u64> {
        let mut ids = Vec::new();
        for element in &self.elements {
            match element {
                Element::Header(header) => ids.push(header.id),
                Element::Cast(cast) => ids.push(cast.id),
                Element::Scene(scene) => {
                    ids.push(scene.id);
                    for line in &scene.lines {
                        ids.push(line.id());
                    }
                }
            }
        }
        ids
    }
}

/// A top-level unit of a Document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Script header; exactly one per document, always first
    Header(Header),
    /// Cast introduction; zero or one per document
    Cast(CastList),
    /// A scene in narrative order
    Scene(Scene),
}

/// Script header metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Header {
    /// Unique identifier within one document construction
    pub id: u64,

    /// Script title (never empty)
    pub title: String,

    /// Name of the owning project
    pub project_name: String,

    /// Script description
    pub description: String,
}

impl Header {
    /// Create a new header
    pub fn new(id: u64, title: &str, project_name: &str, description: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            project_name: project_name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Cast introduction listing the project roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastList {
    /// Unique identifier within one document construction
    pub id: u64,

    /// Cast entries, preserving roster order
    pub entries: Vec<CastEntry>,
}

impl CastList {
    /// Build a cast list from the project roster, preserving roster order
    pub fn from_roster(id: u64, roster: &[CharacterProfile]) -> Self {
        Self {
            id,
            entries: roster
                .iter()
                .map(|character| CastEntry {
                    name: character.name.clone(),
                    description: character.role.clone(),
                })
                .collect(),
        }
    }
}

/// One entry in a cast list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastEntry {
    /// Character name
    pub name: String,

    /// Character description (the roster role)
    pub description: String,
}

/// A scene with its owned lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    /// Unique identifier within one document construction
    pub id: u64,

    /// Scene title (never empty; synthesized as "Scene N" when absent)
    pub title: String,

    /// Scene description / situation setup
    pub description: String,

    /// Target running time for the scene
    pub duration: String,

    /// Lines in speaking order, exclusively owned by this scene
    pub lines: Vec<Line>,
}

impl Scene {
    /// Create a new scene with no lines yet.
    ///
    /// An empty duration falls back to the sentinel duration.
    pub fn new(id: u64, title: &str, description: &str, duration: &str) -> Self {
        let duration = if duration.trim().is_empty() {
            DEFAULT_SCENE_DURATION
        } else {
            duration
        };
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            lines: Vec::new(),
        }
    }

    /// Append a line to this scene
    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }
}

/// A unit of spoken or narrated content owned by a scene
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Line {
    /// A line spoken by a character
    Dialogue(Dialogue),
    /// Unattributed narration
    Narration(Narration),
}

impl Line {
    /// Build a dialogue line.
    ///
    /// An empty emotion falls back to the sentinel emotion.
    pub fn dialogue(id: u64, character: &str, content: &str, emotion: &str) -> Self {
        let emotion = if emotion.trim().is_empty() {
            DEFAULT_EMOTION
        } else {
            emotion
        };
        Self::Dialogue(Dialogue {
            id,
            character: character.to_string(),
            content: content.to_string(),
            emotion: emotion.to_string(),
        })
    }

    /// Build a narration line
    pub fn narration(id: u64, content: &str) -> Self {
        Self::Narration(Narration {
            id,
            content: content.to_string(),
        })
    }

    /// The identifier of this line
    pub fn id(&self) -> u64 {
        match self {
            Self::Dialogue(dialogue) => dialogue.id,
            Self::Narration(narration) => narration.id,
        }
    }

    /// The textual content of this line
    pub fn content(&self) -> &str {
        match self {
            Self::Dialogue(dialogue) => &dialogue.content,
            Self::Narration(narration) => &narration.content,
        }
    }
}

/// A spoken line with character attribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dialogue {
    /// Unique identifier within one document construction
    pub id: u64,

    /// Speaking character (never empty)
    pub character: String,

    /// Spoken content (never empty)
    pub content: String,

    /// Emotion annotation (sentinel "neutral" when unspecified)
    pub emotion: String,
}

/// A narration line with no character attribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Narration {
    /// Unique identifier within one document construction
    pub id: u64,

    /// Narrated content
    pub content: String,
}
