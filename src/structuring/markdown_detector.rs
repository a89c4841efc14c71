/*!
 * Markdown-scene grammar detector.
 *
 * Processes the text line by line, maintaining a current-scene state:
 *
 * - `## Title (duration)` starts a new scene and closes the previous one
 * - `*description` sets the current scene description (last write wins)
 * - `Name: content [emotion]` appends a dialogue line
 * - `【content】` appends a narration line
 * - anything else is ignored
 *
 * If no `##` header is ever seen the detector yields the empty sequence
 * and defers to the plain-text heuristic rather than guessing.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::{DEFAULT_EMOTION, DEFAULT_SCENE_DURATION, Line, Scene};
use super::ids::IdAllocator;

/// Scene header: `## Title` with an optional `(duration)` suffix
static SCENE_HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s*(.+?)(?:\s*\((.+?)\))?$").unwrap());

/// Dialogue: `Name: content` with an optional `[emotion]` suffix
static DIALOGUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?):\s*(.+?)(?:\s*\[(.+?)\])?$").unwrap());

/// Narration delimited by full-width brackets: `【content】`
static NARRATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^【(.+?)】$").unwrap());

/// Detect `##`-delimited scene markup and convert it into scenes.
///
/// Yields the empty sequence when the text contains no scene headers.
pub fn detect(raw_text: &str, ids: &mut IdAllocator) -> Vec<Scene> {
    let mut scenes = Vec::new();
    let mut current_scene: Option<Scene> = None;

    for raw_line in raw_text.lines() {
        let line = raw_line.trim();

        if let Some(captures) = SCENE_HEADER_REGEX.captures(line) {
            if let Some(finished) = current_scene.take() {
                scenes.push(finished);
            }

            let title = captures.get(1).map_or("", |m| m.as_str()).trim();
            let duration = captures
                .get(2)
                .map_or(DEFAULT_SCENE_DURATION, |m| m.as_str());
            current_scene = Some(Scene::new(ids.next_id(), title, "", duration));
            continue;
        }

        let Some(scene) = current_scene.as_mut() else {
            // Content before the first scene header has no home; skip it
            continue;
        };

        // Description marker; lines carrying a colon are dialogue instead.
        // Later description lines overwrite earlier ones (last write wins).
        if line.starts_with('*') && !line.contains(':') {
            // Strip exactly one marker asterisk; further ones are content
            scene.description = line.strip_prefix('*').unwrap_or(line).trim_start().to_string();
            continue;
        }

        // Narration before dialogue, so a colon inside 【】 stays narration
        if let Some(captures) = NARRATION_REGEX.captures(line) {
            let content = captures.get(1).map_or("", |m| m.as_str()).trim();
            scene.push_line(Line::narration(ids.next_id(), content));
            continue;
        }

        if let Some(captures) = DIALOGUE_REGEX.captures(line) {
            let character = captures.get(1).map_or("", |m| m.as_str()).trim();
            let content = captures.get(2).map_or("", |m| m.as_str()).trim();
            let emotion = captures.get(3).map_or(DEFAULT_EMOTION, |m| m.as_str());
            if !character.is_empty() && !content.is_empty() {
                scene.push_line(Line::dialogue(ids.next_id(), character, content, emotion));
            }
            continue;
        }
    }

    if let Some(finished) = current_scene.take() {
        scenes.push(finished);
    }

    scenes
}
