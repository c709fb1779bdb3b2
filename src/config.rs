use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Solver options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Give up after creating this many states. `None` searches until the frontier is empty,
    /// which always terminates since there are only 9!/2 reachable configurations.
    pub state_limit: Option<usize>,
}

impl Config {
    pub fn with_state_limit(state_limit: usize) -> Self {
        Config {
            state_limit: Some(state_limit),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Auto,
    Always,
    Never,
}

impl Color {
    pub const VARIANTS: [&'static str; 3] = ["auto", "always", "never"];
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Auto => write!(f, "auto"),
            Color::Always => write!(f, "always"),
            Color::Never => write!(f, "never"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(String);

impl Display for UnknownColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown color mode: {}", self.0)
    }
}

impl Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Color::Auto),
            "always" => Ok(Color::Always),
            "never" => Ok(Color::Never),
            _ => Err(UnknownColor(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names() {
        for name in &Color::VARIANTS {
            let color: Color = name.parse().unwrap();
            assert_eq!(&color.to_string(), name);
        }
        assert_eq!(
            "sometimes".parse::<Color>(),
            Err(UnknownColor("sometimes".to_owned()))
        );
    }

    #[test]
    fn default_has_no_limit() {
        assert_eq!(Config::default().state_limit, None);
        assert_eq!(Config::with_state_limit(10).state_limit, Some(10));
    }
}
