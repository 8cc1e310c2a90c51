const LEAD: &str = "Create a visual representation of the following concept:";

/// Prompt for the image model, built from the answer text.
pub fn build_image_prompt(answer: &str) -> String {
    format!("{LEAD} {answer}")
}
