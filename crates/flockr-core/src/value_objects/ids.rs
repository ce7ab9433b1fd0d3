//! Entity identifiers
//!
//! Users, channels and messages each get their own id newtype so that a
//! channel id can never be passed where a message id is expected. All three
//! serialize as plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an id from a raw value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifies a registered user (`u_id`)
    UserId
);
define_id!(
    /// Identifies a channel
    ChannelId
);
define_id!(
    /// Identifies a message, unique across every channel
    MessageId
);

/// Monotonic id allocator
///
/// Hands out 1, 2, 3, ... and can be rewound by a global reset.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicI64,
}

impl IdGenerator {
    const FIRST: i64 = 1;

    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(Self::FIRST),
        }
    }

    /// Allocate the next raw id
    pub fn generate(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Rewind to the first id
    pub fn reset(&self) {
        self.next.store(Self::FIRST, Ordering::Relaxed);
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
