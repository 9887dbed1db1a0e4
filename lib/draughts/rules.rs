use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// Configuration for the rules of a [`Match`][`crate::draughts::Match`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize)]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, default)]
pub struct Rules {
    /// How many consecutive single-segment king moves end the match in a draw.
    #[strategy(1u16..)]
    pub boring_limit: u16,
}

impl Default for Rules {
    fn default() -> Self {
        Rules { boring_limit: 25 }
    }
}

/// The reason why parsing [`Rules`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse the rules configuration")]
pub struct ParseRulesError(ron::de::SpannedError);

impl FromStr for Rules {
    type Err = ParseRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
