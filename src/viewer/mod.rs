pub mod bounds;
pub mod engine;
pub mod input;
pub mod layout;
pub mod lifecycle;

pub use engine::{ViewerEngine, ViewerState};
pub use lifecycle::LoadTicket;
