use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;

/// The fixed console vocabulary, in help-list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    About,
    Summary,
    Skills,
    Devops,
    Experience,
    Education,
    Contact,
    Clear,
    Help,
}

impl Command {
    pub fn description(&self) -> &'static str {
        return match self {
            Command::About => "About me",
            Command::Summary => "Professional summary",
            Command::Skills => "List technical skills",
            Command::Devops => "Show DevOps & cloud skills",
            Command::Experience => "Professional experience",
            Command::Education => "Education background",
            Command::Contact => "Contact information",
            Command::Clear => "Clear the terminal",
            Command::Help => "Show this help message",
        };
    }

    pub fn all() -> Vec<Command> {
        return Command::iter().collect();
    }
}

/// Outcome of matching one submitted line against the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Empty,
    Known(Command),
    Unknown(String),
}

impl Dispatch {
    /// Matches case-insensitively. `Unknown` keeps the trimmed input as typed.
    pub fn parse(input: &str) -> Dispatch {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Dispatch::Empty;
        }

        let normalized = trimmed.to_lowercase();
        return match normalized.parse::<Command>() {
            Ok(command) => Dispatch::Known(command),
            Err(_) => Dispatch::Unknown(trimmed.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_case_insensitively() {
        for input in ["help", "HELP", "Help", "  hElP  "] {
            assert_eq!(Dispatch::parse(input), Dispatch::Known(Command::Help));
        }
    }

    #[test]
    fn it_recognizes_every_command_by_name() {
        for command in Command::iter() {
            assert_eq!(
                Dispatch::parse(&command.to_string()),
                Dispatch::Known(command)
            );
        }
    }

    #[test]
    fn it_treats_blank_input_as_empty() {
        assert_eq!(Dispatch::parse(""), Dispatch::Empty);
        assert_eq!(Dispatch::parse("   \t"), Dispatch::Empty);
    }

    #[test]
    fn it_keeps_original_case_for_unknown_input() {
        assert_eq!(
            Dispatch::parse("  Sudo Rm  "),
            Dispatch::Unknown("Sudo Rm".to_string())
        );
    }

    #[test]
    fn it_lists_commands_in_help_order() {
        let names = Command::all()
            .iter()
            .map(|command| command.to_string())
            .collect::<Vec<String>>();

        assert_eq!(
            names,
            vec![
                "about",
                "summary",
                "skills",
                "devops",
                "experience",
                "education",
                "contact",
                "clear",
                "help"
            ]
        );
    }
}
