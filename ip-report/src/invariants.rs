use std::{borrow::Borrow, str::FromStr};

use derive_more::{Debug, Display};
use serde::Serialize;

/// Client identifier taken from the last field of a log line.
///
/// Free-form: nothing checks that it is a real network address, only that
/// something other than whitespace is there.
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for Address {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("address is blank")]
pub struct BlankAddress;

impl FromStr for Address {
    type Err = BlankAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(BlankAddress);
        }
        Ok(Self(trimmed.into()))
    }
}
