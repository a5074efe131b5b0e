pub mod render_state;
pub mod view_transform;
pub mod view_updates;

pub use render_state::RenderState;
pub use view_transform::{ViewLimits, ViewTransform};
