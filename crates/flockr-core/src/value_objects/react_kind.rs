//! React kinds

use serde::{Deserialize, Serialize};

/// Kind of react a user can leave on a message
///
/// The vocabulary is fixed; `1` (thumbs up) is currently the only kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ReactKind {
    ThumbsUp = 1,
}

impl ReactKind {
    /// Parse a `react_id`, returning `None` outside the vocabulary
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::ThumbsUp),
            _ => None,
        }
    }

    #[inline]
    pub fn id(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for ReactKind {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_id(value).ok_or_else(|| format!("unknown react_id {value}"))
    }
}

impl From<ReactKind> for i64 {
    fn from(kind: ReactKind) -> Self {
        kind.id()
    }
}
