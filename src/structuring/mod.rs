/*!
 * Script structuring: from free-form model output to a typed Document.
 *
 * This is the core of the library. It is split into several submodules:
 *
 * - `document`: the typed document model (Elements, Lines)
 * - `ids`: monotonic identifier allocation per invocation
 * - `json_detector`: fenced or bare JSON with a `scenes` array
 * - `markdown_detector`: `##`-delimited scene markup
 * - `text_detector`: blank-line paragraph heuristics, the last resort
 * - `fallback`: minimal scene synthesis when no grammar matches
 * - `pipeline`: the coordinator and sole public entry point
 *
 * The whole pipeline is a pure, synchronous computation over in-memory
 * text: no I/O, no locks, no retained state across invocations.
 */

// Re-export main types for easier usage
pub use self::document::{
    CastEntry, CastList, DEFAULT_EMOTION, DEFAULT_SCENE_DURATION, Dialogue, Document, Element,
    Header, Line, NARRATOR_NAME, Narration, Scene,
};
pub use self::ids::IdAllocator;
pub use self::pipeline::{Grammar, structure_script};

// Submodules
pub mod document;
pub mod fallback;
pub mod ids;
pub mod json_detector;
pub mod markdown_detector;
pub mod pipeline;
pub mod text_detector;
