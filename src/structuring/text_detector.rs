/*!
 * Plain-text grammar detector, the last resort.
 *
 * Splits the text into blank-line-delimited paragraphs. Each non-empty
 * paragraph becomes one scene titled "Scene N": the first line is the
 * scene description, and every following line is either dialogue (when a
 * colon appears early in the line) or narration.
 *
 * This is the only detector guaranteed to produce at least one scene from
 * non-empty input.
 */

use super::document::{DEFAULT_EMOTION, DEFAULT_SCENE_DURATION, Line, Scene};
use super::ids::IdAllocator;

/// A colon this many characters into a line or later no longer marks a
/// speaker name; the line is narration instead.
pub const MAX_SPEAKER_PREFIX_CHARS: usize = 20;

/// Convert free-form paragraphs into scenes.
///
/// Yields the empty sequence only when the input is blank.
pub fn detect(raw_text: &str, ids: &mut IdAllocator) -> Vec<Scene> {
    let mut scenes = Vec::new();

    for paragraph in raw_text.split("\n\n") {
        let lines: Vec<&str> = paragraph
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            continue;
        }

        let title = format!("Scene {}", scenes.len() + 1);
        let mut scene = Scene::new(ids.next_id(), &title, lines[0], DEFAULT_SCENE_DURATION);

        for line in &lines[1..] {
            match split_dialogue(line) {
                Some((character, content)) => {
                    scene.push_line(Line::dialogue(ids.next_id(), character, content, DEFAULT_EMOTION));
                }
                None if !looks_like_dropped_dialogue(line) => {
                    scene.push_line(Line::narration(ids.next_id(), line));
                }
                // Speaker prefix with empty content: drop the line entirely
                None => {}
            }
        }

        scenes.push(scene);
    }

    scenes
}

/// Split `Name: content` when the colon sits within the speaker window
fn split_dialogue(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    if colon == 0 || line[..colon].chars().count() >= MAX_SPEAKER_PREFIX_CHARS {
        return None;
    }

    let character = line[..colon].trim();
    let content = line[colon + 1..].trim();
    if character.is_empty() || content.is_empty() {
        return None;
    }
    Some((character, content))
}

/// True for lines shaped like dialogue whose content is empty ("Bob:").
/// They carry nothing worth keeping as narration either.
fn looks_like_dropped_dialogue(line: &str) -> bool {
    match line.find(':') {
        Some(colon) => {
            colon > 0
                && line[..colon].chars().count() < MAX_SPEAKER_PREFIX_CHARS
                && line[colon + 1..].trim().is_empty()
        }
        None => false,
    }
}
