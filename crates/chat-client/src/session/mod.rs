//! Session identity state machine

mod state;

pub use state::{Session, SessionState};
