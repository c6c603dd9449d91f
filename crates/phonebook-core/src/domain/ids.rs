use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const RECORD_NAMESPACE: Uuid = Uuid::from_u128(0x5c1f_7a2e_93d4_4b0e_a6c8_0e71_d42b_f39a);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub Uuid);

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Stable id for a stored record that carries no usable one. The same
    /// seed always yields the same id.
    pub fn derived(seed: &str) -> Self {
        Self(Uuid::new_v5(&RECORD_NAMESPACE, seed.as_bytes()))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
