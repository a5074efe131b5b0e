pub mod lifecycle;
pub mod snapshot;

pub use lifecycle::{LifecycleSignals, ShutdownReason};
pub use snapshot::{Buttons, InputSnapshot};
