use super::{Command, CommandResult, SessionInfo};

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &str {
        "/whoami"
    }

    fn description(&self) -> &str {
        "show models, API key source, and page state"
    }

    fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("  text      {}", info.text_model);
        println!("  image     {}", info.image_model);
        println!("  key       {} ✓", info.api_key_source);
        println!("  page      {}", info.view);
        CommandResult::Handled
    }
}
