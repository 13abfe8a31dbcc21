//! Outbound command routing

mod router;

pub use router::{CommandRouter, TYPING_IDLE};
