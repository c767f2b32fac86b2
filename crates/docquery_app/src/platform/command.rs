//! Parsing of the single input line into user actions.
//!
//! Plain text is a question; slash commands drive everything else.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Empty,
    /// Plain text: ask the server about the loaded document.
    Ask(String),
    /// `/upload <path>` — the argument may be empty; validation happens
    /// in the state machine so the user gets the same inline error.
    Upload(String),
    /// `/clear`
    Clear,
    /// `/quit` or `/q`
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> InputCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return InputCommand::Empty;
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return InputCommand::Ask(trimmed.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match name {
        "upload" => InputCommand::Upload(arg.to_string()),
        "clear" => InputCommand::Clear,
        "quit" | "q" => InputCommand::Quit,
        _ => InputCommand::Unknown(format!("/{name}")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parse, InputCommand};

    #[test]
    fn plain_text_is_a_question() {
        assert_eq!(
            parse("  What is the summary?  "),
            InputCommand::Ask("What is the summary?".to_string())
        );
    }

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(parse("   "), InputCommand::Empty);
        assert_eq!(parse(""), InputCommand::Empty);
    }

    #[test]
    fn upload_takes_the_rest_of_the_line() {
        assert_eq!(
            parse("/upload /tmp/my report.pdf"),
            InputCommand::Upload("/tmp/my report.pdf".to_string())
        );
        // Missing path still parses; the state machine rejects it inline.
        assert_eq!(parse("/upload"), InputCommand::Upload(String::new()));
    }

    #[test]
    fn control_commands_parse() {
        assert_eq!(parse("/clear"), InputCommand::Clear);
        assert_eq!(parse("/quit"), InputCommand::Quit);
        assert_eq!(parse("/q"), InputCommand::Quit);
    }

    #[test]
    fn unknown_slash_command_is_reported() {
        assert_eq!(
            parse("/frobnicate now"),
            InputCommand::Unknown("/frobnicate".to_string())
        );
    }
}
