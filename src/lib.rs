/*!
 * # scriptweave
 *
 * A Rust library for structuring free-form LLM script output into a typed,
 * ordered document of production elements.
 *
 * ## Features
 *
 * - Layered grammar detection over raw model output:
 *   - JSON (fenced ```json blocks or bare documents)
 *   - Markdown-style scene markup (`## Scene`, `Name: line [emotion]`, `【narration】`)
 *   - Plain-text paragraph heuristics as a last resort
 * - Best-effort degradation: parsing never fails outright; a fallback
 *   synthesizer guarantees a well-formed document
 * - Stable, monotonically increasing identifiers for diffing revisions
 * - A narrow async provider seam for plugging in an LLM client
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `context`: Project/script context and target settings
 * - `structuring`: The parsing core:
 *   - `structuring::document`: Typed document model
 *   - `structuring::pipeline`: Detector priority search and coordination
 *   - `structuring::fallback`: Minimal scene synthesis
 * - `prompts`: Prompt construction for script generation
 * - `providers`: Completion provider trait and test mock
 * - `generation`: Generation service tying providers to structuring
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod context;
pub mod errors;
pub mod generation;
pub mod prompts;
pub mod providers;
pub mod structuring;

// Re-export main types for easier usage
pub use context::{CharacterProfile, ProjectContext, ScriptContext, ScriptSettings};
pub use errors::{AppError, ProviderError, StructureError};
pub use generation::{GenerationOutcome, ScriptGenerator};
pub use providers::CompletionProvider;
pub use structuring::{Document, Element, Line, structure_script};
