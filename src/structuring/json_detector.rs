/*!
 * JSON grammar detector.
 *
 * Accepts either a fenced ```json block or a bare JSON document with a
 * top-level `scenes` array. Models are inconsistent about field names, so
 * the loosely-typed line fields are normalized through explicit alias
 * tables at this boundary (`character`/`speaker`, `content`/`text`,
 * `emotion`/`mood`).
 *
 * All-or-nothing: malformed JSON, a missing `scenes` key, or a `scenes`
 * value that is not an array all yield the empty sequence. Partial JSON
 * scenes are never emitted, so a half-trusted parse can never mix with
 * another detector's output.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::document::{DEFAULT_EMOTION, DEFAULT_SCENE_DURATION, Line, NARRATOR_NAME, Scene};
use super::ids::IdAllocator;

/// Fenced ```json block, tolerating surrounding prose
static JSON_FENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());

/// Aliases for the speaking character of a line
const CHARACTER_KEYS: [&str; 2] = ["character", "speaker"];

/// Aliases for the content of a line
const CONTENT_KEYS: [&str; 2] = ["content", "text"];

/// Aliases for the emotion annotation of a line
const EMOTION_KEYS: [&str; 2] = ["emotion", "mood"];

/// Detect a JSON-shaped script and convert it into scenes.
///
/// Yields the empty sequence when the input is not a usable JSON script.
pub fn detect(raw_text: &str, ids: &mut IdAllocator) -> Vec<Scene> {
    let Some(value) = extract_json(raw_text) else {
        return Vec::new();
    };

    let Some(scene_values) = value.get("scenes").and_then(Value::as_array) else {
        debug!("JSON parsed but no usable scenes array, yielding to next grammar");
        return Vec::new();
    };

    let mut scenes = Vec::with_capacity(scene_values.len());
    for (index, scene_value) in scene_values.iter().enumerate() {
        match scene_value.as_object() {
            Some(scene_object) => scenes.push(build_scene(scene_object, index, ids)),
            // Non-object entries still occupy their slot as a bare
            // default-titled scene, keeping scene numbering stable
            None => scenes.push(Scene::new(
                ids.next_id(),
                &format!("Scene {}", index + 1),
                "",
                DEFAULT_SCENE_DURATION,
            )),
        }
    }

    scenes
}

/// Extract a JSON value from a fenced block, or from the bare text
fn extract_json(raw_text: &str) -> Option<Value> {
    if let Some(captures) = JSON_FENCE_REGEX.captures(raw_text) {
        let fenced = captures.get(1).map_or("", |m| m.as_str());
        return serde_json::from_str(fenced).ok();
    }
    serde_json::from_str(raw_text.trim()).ok()
}

/// Build one scene from a JSON scene object
fn build_scene(scene_object: &Map<String, Value>, index: usize, ids: &mut IdAllocator) -> Scene {
    let fallback_title = format!("Scene {}", index + 1);
    let title = string_field(scene_object, &["title"]).unwrap_or(fallback_title);
    let description = string_field(scene_object, &["description", "content"]).unwrap_or_default();
    let duration =
        string_field(scene_object, &["duration"]).unwrap_or_else(|| DEFAULT_SCENE_DURATION.to_string());

    let mut scene = Scene::new(ids.next_id(), &title, &description, &duration);

    if let Some(line_values) = scene_object.get("lines").and_then(Value::as_array) {
        for line_value in line_values {
            let Some(line_object) = line_value.as_object() else {
                continue;
            };

            let content = string_field(line_object, &CONTENT_KEYS).unwrap_or_default();
            if content.trim().is_empty() {
                continue;
            }

            let character =
                string_field(line_object, &CHARACTER_KEYS).unwrap_or_else(|| NARRATOR_NAME.to_string());
            let emotion =
                string_field(line_object, &EMOTION_KEYS).unwrap_or_else(|| DEFAULT_EMOTION.to_string());

            scene.push_line(Line::dialogue(ids.next_id(), &character, &content, &emotion));
        }
    }

    scene
}

/// Resolve the first present, non-empty string among aliased keys
fn string_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
