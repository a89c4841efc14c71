/*!
 * Fallback scene synthesis.
 *
 * Invoked when every grammar detector yields nothing (including empty raw
 * text). Builds exactly one "Opening" scene from the caller-supplied hints
 * so the pipeline can keep its postcondition of always returning at least
 * one scene, without inspecting any external state.
 */

use crate::context::{ProjectContext, ScriptSettings};

use super::document::{Line, Scene};
use super::ids::IdAllocator;

/// Synthesize the minimal opening scene.
///
/// With at least two roster characters, the scene holds a short greeting
/// exchange between the first two; otherwise a single narrator-style line.
pub fn synthesize(project: &ProjectContext, settings: &ScriptSettings, ids: &mut IdAllocator) -> Scene {
    let mut scene = Scene::new(
        ids.next_id(),
        "Opening",
        "The story begins. The main characters appear.",
        &settings.average_scene_duration,
    );

    if project.roster.len() >= 2 {
        let first = &project.roster[0];
        let second = &project.roster[1];

        scene.push_line(Line::dialogue(
            ids.next_id(),
            &first.name,
            &format!("Hello, {}.", second.name),
            "friendly",
        ));
        scene.push_line(Line::dialogue(
            ids.next_id(),
            &second.name,
            "Hello. It's a fine day, isn't it?",
            "calm",
        ));
    } else {
        let narrator = project
            .roster
            .first()
            .map_or("Protagonist", |character| character.name.as_str());
        scene.push_line(Line::dialogue(
            ids.next_id(),
            narrator,
            "This is the start of a new adventure.",
            "determined",
        ));
    }

    scene
}
