use super::{Command, CommandResult, SessionInfo};

pub struct NewCommand;

impl Command for NewCommand {
    fn name(&self) -> &str {
        "/new"
    }

    fn aliases(&self) -> &[&str] {
        &["new"]
    }

    fn description(&self) -> &str {
        "start a new session (discards the current reading)"
    }

    fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::NewSession
    }
}
