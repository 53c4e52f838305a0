use serde::{Deserialize, Serialize};

/// A reference roster entry: a name plus the exact key it is blocked under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record<K> {
    /// Player name, compared verbatim by the index
    pub name: String,

    /// Blocking key (year of birth)
    pub key: K,
}

impl<K> Record<K> {
    pub fn new(name: impl Into<String>, key: K) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }
}

impl<K> From<(String, K)> for Record<K> {
    fn from((name, key): (String, K)) -> Self {
        Self { name, key }
    }
}

impl<K> From<(&str, K)> for Record<K> {
    fn from((name, key): (&str, K)) -> Self {
        Self::new(name, key)
    }
}
