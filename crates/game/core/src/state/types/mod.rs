pub mod common;
pub mod modal;
pub mod player;

pub use common::{ParsePlayerIdError, PlayerId};
pub use modal::ModalTarget;
pub use player::{CounterKind, Counters, PlayerState};
