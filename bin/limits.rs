use derive_more::{Display, Error, From};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::{future::Future, str::FromStr, time::Duration};
use test_strategy::Arbitrary;
use tokio::time::timeout;

/// How long each player may think about a move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Arbitrary, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum Limits {
    /// Unlimited time.
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    None,

    /// The maximum amount of time to spend on each move.
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    #[serde(with = "humantime_serde")]
    Time(#[strategy((1u64..3_600_000).prop_map(Duration::from_millis))] Duration),
}

impl Default for Limits {
    fn default() -> Self {
        Limits::None
    }
}

/// The reason why parsing [`Limits`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse time limits")]
pub struct ParseLimitsError(ron::de::SpannedError);

impl FromStr for Limits {
    type Err = ParseLimitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl Limits {
    /// Awaits a future within these limits, or returns `None` if it took too long.
    pub async fn bound<F: Future>(&self, f: F) -> Option<F::Output> {
        match self {
            Limits::None => Some(f.await),
            Limits::Time(t) => timeout(*t, f).await.ok(),
        }
    }
}
