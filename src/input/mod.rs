//! Platform-agnostic input for the viewer's control surfaces.

mod drag;
mod event;

pub use drag::{DragEdit, DragPhase};
pub use event::{InputEvent, MouseButton};
