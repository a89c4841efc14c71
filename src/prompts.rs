/*!
 * Prompt construction for script generation.
 *
 * The prompt asks the model for the `##`-delimited scene markup that the
 * Markdown detector recognizes. Models routinely ignore format
 * instructions, which is exactly why the structuring pipeline tolerates
 * JSON and free prose as well.
 */

use crate::context::{ProjectContext, ScriptContext};

/// Builder for constructing script generation prompts from context
#[derive(Debug, Clone)]
pub struct ScriptPromptBuilder {
    project_name: String,
    project_description: String,
    script_title: String,
    script_description: String,
    cast_summary: Option<String>,
    total_duration: String,
    scene_count: usize,
    average_scene_duration: String,
}

impl ScriptPromptBuilder {
    /// Create a builder seeded from the project and script contexts
    pub fn new(project: &ProjectContext, script: &ScriptContext) -> Self {
        let cast_summary = if project.roster.is_empty() {
            None
        } else {
            let cast: Vec<String> = project
                .roster
                .iter()
                .map(|character| format!("{} ({})", character.name, character.role))
                .collect();
            Some(cast.join(", "))
        };

        Self {
            project_name: project.name.clone(),
            project_description: project.description.clone(),
            script_title: script.title.clone(),
            script_description: script.description.clone(),
            cast_summary,
            total_duration: script.settings.total_duration.clone(),
            scene_count: script.settings.scene_count,
            average_scene_duration: script.settings.average_scene_duration.clone(),
        }
    }

    /// Render the generation prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str("Write a film script based on the following information:\n\n");
        prompt.push_str(&format!("Project name: {}\n", self.project_name));
        prompt.push_str(&format!("Project description: {}\n", self.project_description));
        prompt.push_str(&format!("Script title: {}\n", self.script_title));
        prompt.push_str(&format!("Script description: {}\n", self.script_description));
        if let Some(cast) = &self.cast_summary {
            prompt.push_str(&format!("Cast: {}\n", cast));
        }

        prompt.push_str("\nScript settings:\n");
        prompt.push_str(&format!("- Total running time: {}\n", self.total_duration));
        prompt.push_str(&format!("- Number of scenes: {}\n", self.scene_count));
        prompt.push_str(&format!(
            "- Average time per scene: {}\n",
            self.average_scene_duration
        ));

        prompt.push_str(
            r#"
Output the script in the following markdown format:

## Scene 1: [scene title] ([duration])
*[scene description / situation setup]

Character name: dialogue content [emotion]
Character name: dialogue content [emotion]
【narration content】

## Scene 2: [scene title] ([duration])
*[scene description / situation setup]

...

Requirements:
1. Give every scene a clear title and duration
2. Begin scene descriptions with "*"
3. Write dialogue as "Character name: content [emotion]"
4. Write narration as "【content】"
5. Keep the dialogue natural and true to each character
6. Structure the story with a clear beginning, development, and resolution
7. Follow the configured time allocation per scene

Write the script now."#,
        );

        prompt
    }
}
