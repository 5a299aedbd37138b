//! Menu verbs.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Menu line shown before every command.
pub const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Verb {
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Remove,
        Self::Import,
        Self::Export,
        Self::Ask,
        Self::Exit,
        Self::Log,
        Self::HardestCard,
        Self::ResetStats,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Import => "import",
            Self::Export => "export",
            Self::Ask => "ask",
            Self::Exit => "exit",
            Self::Log => "log",
            Self::HardestCard => "hardest card",
            Self::ResetStats => "reset stats",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action: {0:?}")]
pub struct UnknownVerb(pub String);

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|verb| verb.as_str() == wanted)
            .ok_or_else(|| UnknownVerb(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn every_verb_round_trips_through_display() {
        for verb in Verb::ALL {
            assert_eq!(verb.to_string().parse::<Verb>(), Ok(verb));
        }
    }

    #[test]
    fn menu_lists_every_verb() {
        for verb in Verb::ALL {
            assert!(MENU.contains(verb.as_str()), "menu is missing {verb}");
        }
    }

    #[rstest]
    #[case("  ask ", Verb::Ask)]
    #[case("hardest card", Verb::HardestCard)]
    #[case("reset stats\r", Verb::ResetStats)]
    fn surrounding_whitespace_is_ignored(#[case] input: &str, #[case] expected: Verb) {
        assert_eq!(input.parse::<Verb>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("ADD")]
    #[case("hardest")]
    #[case("hardest  card")]
    #[case("quit")]
    fn unknown_input_is_rejected(#[case] input: &str) {
        assert_eq!(input.parse::<Verb>(), Err(UnknownVerb(input.to_owned())));
    }
}
