use std::fmt::{self, Display};

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Disadvantage,
    #[default]
    Normal,
    Advantage,
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Disadvantage => "disadvantage",
            Mode::Normal => "normal",
            Mode::Advantage => "advantage",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn displays_the_selector_name() {
        assert_eq!(Mode::Disadvantage.to_string(), "disadvantage");
        assert_eq!(Mode::Normal.to_string(), "normal");
        assert_eq!(Mode::Advantage.to_string(), "advantage");
    }
}
