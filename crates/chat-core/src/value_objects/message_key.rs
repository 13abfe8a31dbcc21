//! Synthetic message identity for redelivery suppression
//!
//! Inbound messages carry no server-issued id, so the client derives one
//! from the message contents. Two deliveries of the same logical message
//! hash to the same key; the message log keeps a bounded window of recent
//! keys and drops redeliveries.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Synthetic identity of a logical message.
///
/// Derived from sender, timestamp, body, privacy flag, and recipient.
/// Collisions between *distinct* messages are possible in principle but
/// require identical sender, millisecond timestamp, and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageKey(u64);

impl MessageKey {
    /// Compute the key over the hashable fields of a message
    pub fn compute(parts: &impl Hash) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        parts.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Raw key value
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
