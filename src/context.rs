/*!
 * Read-only context passed into script generation and structuring.
 *
 * Context objects describe the surrounding project (name, description, cast
 * roster) and the script being produced (title, description, target
 * settings). They are inputs to Document construction and are never retained
 * by the resulting Document.
 */

use serde::{Deserialize, Serialize};

/// A named character in the project roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterProfile {
    /// Character name
    pub name: String,

    /// Short role description (e.g. "protagonist", "rival detective")
    #[serde(default)]
    pub role: String,
}

impl CharacterProfile {
    /// Create a new character profile
    pub fn new(name: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
        }
    }
}

/// Project-level context: the world the script belongs to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Project name
    #[serde(default)]
    pub name: String,

    /// Project description
    #[serde(default)]
    pub description: String,

    /// Cast roster, in presentation order
    #[serde(default)]
    pub roster: Vec<CharacterProfile>,
}

impl ProjectContext {
    /// Create a new project context without a roster
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            roster: Vec::new(),
        }
    }

    /// Set the cast roster
    pub fn with_roster(mut self, roster: Vec<CharacterProfile>) -> Self {
        self.roster = roster;
        self
    }
}

/// Script-level context: metadata for one script being generated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptContext {
    /// Script title (required; an empty title is a caller contract violation)
    pub title: String,

    /// Script description
    #[serde(default)]
    pub description: String,

    /// Target settings for generation
    #[serde(default)]
    pub settings: ScriptSettings,
}

impl ScriptContext {
    /// Create a new script context with default settings
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            settings: ScriptSettings::default(),
        }
    }

    /// Set the target settings
    pub fn with_settings(mut self, settings: ScriptSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Target settings for script generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptSettings {
    /// Target total running time
    #[serde(default = "default_total_duration")]
    pub total_duration: String,

    /// Target number of scenes
    #[serde(default = "default_scene_count")]
    pub scene_count: usize,

    /// Target running time per scene
    #[serde(default = "default_scene_duration")]
    pub average_scene_duration: String,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            total_duration: default_total_duration(),
            scene_count: default_scene_count(),
            average_scene_duration: default_scene_duration(),
        }
    }
}

fn default_total_duration() -> String {
    "10 minutes".to_string()
}

fn default_scene_count() -> usize {
    3
}

fn default_scene_duration() -> String {
    "3 minutes".to_string()
}
