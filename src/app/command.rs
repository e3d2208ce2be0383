//! Command parsing and execution for the command line

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Jump to a topic by id: :goto <topic-id>
    Goto(String),
    /// Mark the current topic complete: :complete
    Complete,
    /// Mark the current topic incomplete: :incomplete
    Incomplete,
    /// Open the current topic's quick check: :quiz
    Quiz,
    /// Go to the next topic in global order: :next
    Next,
    /// Go to the previous topic: :prev
    Prev,
    /// Show overall completion in the status line: :progress
    Progress,
    /// Clear all saved progress: :reset
    Reset,
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "goto" | "g" => {
            if args.is_empty() {
                ParseResult::MissingArgument("goto".to_string())
            } else {
                ParseResult::Ok(Command::Goto(args.to_string()))
            }
        }
        "complete" | "done" => ParseResult::Ok(Command::Complete),
        "incomplete" | "undone" => ParseResult::Ok(Command::Incomplete),
        "quiz" | "check" => ParseResult::Ok(Command::Quiz),
        "next" | "n" => ParseResult::Ok(Command::Next),
        "prev" | "previous" => ParseResult::Ok(Command::Prev),
        "progress" => ParseResult::Ok(Command::Progress),
        "reset" => ParseResult::Ok(Command::Reset),
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert!(matches!(parse_command("q"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("quit"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("Q"), ParseResult::Ok(Command::Quit)));
    }

    #[test]
    fn parse_help_command() {
        assert!(matches!(parse_command("help"), ParseResult::Ok(Command::Help)));
        assert!(matches!(parse_command("h"), ParseResult::Ok(Command::Help)));
        assert!(matches!(parse_command("?"), ParseResult::Ok(Command::Help)));
    }

    #[test]
    fn parse_goto_command() {
        match parse_command("goto intro-to-python") {
            ParseResult::Ok(Command::Goto(id)) => {
                assert_eq!(id, "intro-to-python");
            }
            _ => panic!("Expected Goto command"),
        }
    }

    #[test]
    fn parse_goto_missing_arg() {
        assert!(matches!(parse_command("goto"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_completion_commands() {
        assert!(matches!(parse_command("complete"), ParseResult::Ok(Command::Complete)));
        assert!(matches!(parse_command("done"), ParseResult::Ok(Command::Complete)));
        assert!(matches!(parse_command("incomplete"), ParseResult::Ok(Command::Incomplete)));
        assert!(matches!(parse_command("undone"), ParseResult::Ok(Command::Incomplete)));
    }

    #[test]
    fn parse_navigation_commands() {
        assert!(matches!(parse_command("next"), ParseResult::Ok(Command::Next)));
        assert!(matches!(parse_command("prev"), ParseResult::Ok(Command::Prev)));
        assert!(matches!(parse_command("previous"), ParseResult::Ok(Command::Prev)));
    }

    #[test]
    fn parse_quiz_command() {
        assert!(matches!(parse_command("quiz"), ParseResult::Ok(Command::Quiz)));
        assert!(matches!(parse_command("check"), ParseResult::Ok(Command::Quiz)));
    }

    #[test]
    fn parse_progress_and_reset() {
        assert!(matches!(parse_command("progress"), ParseResult::Ok(Command::Progress)));
        assert!(matches!(parse_command("reset"), ParseResult::Ok(Command::Reset)));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("unknown"), ParseResult::UnknownCommand(_)));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert!(matches!(parse_command(""), ParseResult::Ok(Command::Nop)));
        assert!(matches!(parse_command("   "), ParseResult::Ok(Command::Nop)));
    }
}
