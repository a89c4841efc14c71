/*!
 * Tests for the Markdown-scene grammar detector
 */

use scriptweave::structuring::markdown_detector;
use scriptweave::structuring::{DEFAULT_EMOTION, DEFAULT_SCENE_DURATION, IdAllocator, Line};

#[test]
fn test_detect_withFullSceneMarkup_shouldParseAllParts() {
    let raw = "## Intro (2m)\n*A quiet room\nAlice: Hello. [happy]\n【A clock ticks】";

    let mut ids = IdAllocator::new();
    let scenes = markdown_detector::detect(raw, &mut ids);

    assert_eq!(scenes.len(), 1);
    let scene = &scenes[0];
    assert_eq!(scene.title, "Intro");
    assert_eq!(scene.duration, "2m");
    assert_eq!(scene.description, "A quiet room");
    assert_eq!(scene.lines.len(), 2);

    match &scene.lines[0] {
        Line::Dialogue(dialogue) => {
            assert_eq!(dialogue.character, "Alice");
            assert_eq!(dialogue.content, "Hello.");
            assert_eq!(dialogue.emotion, "happy");
        }
        _ => panic!("expected dialogue"),
    }

    match &scene.lines[1] {
        Line::Narration(narration) => assert_eq!(narration.content, "A clock ticks"),
        _ => panic!("expected narration"),
    }
}

#[test]
fn test_detect_withMultipleScenes_shouldCloseEachOnNextHeader() {
    let raw = "## One\nAlice: First.\n## Two (5m)\nBob: Second.";

    let mut ids = IdAllocator::new();
    let scenes = markdown_detector::detect(raw, &mut ids);

    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0].title, "One");
    assert_eq!(scenes[0].duration, DEFAULT_SCENE_DURATION);
    assert_eq!(scenes[0].lines.len(), 1);
    assert_eq!(scenes[1].title, "Two");
    assert_eq!(scenes[1].duration, "5m");
}

#[test]
fn test_detect_withoutEmotion_shouldUseSentinel() {
    let raw = "## S\nAlice: No brackets here.";

    let mut ids = IdAllocator::new();
    let scenes = markdown_detector::detect(raw, &mut ids);

    match &scenes[0].lines[0] {
        Line::Dialogue(dialogue) => assert_eq!(dialogue.emotion, DEFAULT_EMOTION),
        _ => panic!("expected dialogue"),
    }
}

#[test]
fn test_detect_withRepeatedDescriptions_shouldKeepLastWrite() {
    let raw = "## S\n*First description\n*Second description";

    let mut ids = IdAllocator::new();
    let scenes = markdown_detector::detect(raw, &mut ids);

    assert_eq!(scenes[0].description, "Second description");
}

#[test]
fn test_detect_withDoubledAsterisk_shouldStripOnlyTheMarker() {
    let raw = "## S\n**Emphasis carries over";

    let mut ids = IdAllocator::new();
    let scenes = markdown_detector::detect(raw, &mut ids);

    assert_eq!(scenes[0].description, "*Emphasis carries over");
}

#[test]
fn test_detect_withColonInsideNarration_shouldStayNarration() {
    let raw = "## S\n【Narrator: the night deepens】";

    let mut ids = IdAllocator::new();
    let scenes = markdown_detector::detect(raw, &mut ids);

    match &scenes[0].lines[0] {
        Line::Narration(narration) => assert_eq!(narration.content, "Narrator: the night deepens"),
        _ => panic!("expected narration"),
    }
}

#[test]
fn test_detect_withContentBeforeFirstHeader_shouldIgnoreIt() {
    let raw = "Alice: I am homeless.\n## S\nBob: I belong here.";

    let mut ids = IdAllocator::new();
    let scenes = markdown_detector::detect(raw, &mut ids);

    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].lines.len(), 1);
    assert_eq!(scenes[0].lines[0].content(), "I belong here.");
}

#[test]
fn test_detect_withUnrecognizedLines_shouldIgnoreThem() {
    let raw = "## S\n---\njust some stray prose without any colon markers here at all";

    let mut ids = IdAllocator::new();
    let scenes = markdown_detector::detect(raw, &mut ids);

    assert_eq!(scenes.len(), 1);
    assert!(scenes[0].lines.is_empty());
}

#[test]
fn test_detect_withoutSceneHeaders_shouldYieldEmpty() {
    let raw = "Alice: Hello.\nBob: Hi.";

    let mut ids = IdAllocator::new();
    assert!(markdown_detector::detect(raw, &mut ids).is_empty());
}
