//! Continuous drag-to-edit capture for numeric pose fields.
//!
//! Replaces implicit mouse-down → global-listener → mouse-up wiring with an
//! explicit state machine. Capture begins on pointer-down, each move emits a
//! new value relative to the captured start, and release is an explicit step
//! - no reliance on cleanup timing.

use super::event::{InputEvent, MouseButton};

/// Capture state of one draggable numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    /// Not capturing input.
    Idle,
    /// Pointer held; values derive from the captured start.
    Dragging {
        /// Horizontal pixel position where capture began.
        start_x: f32,
        /// Field value at capture time.
        start_value: f32,
    },
}

/// Drag-to-edit state machine for a single numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEdit {
    phase: DragPhase,
    /// Value change per pixel of horizontal travel.
    step: f32,
    /// Last known cursor x, the anchor for a press.
    last_x: f32,
}

impl DragEdit {
    /// New idle editor with the given per-pixel step.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            step,
            last_x: 0.0,
        }
    }

    /// Current capture phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a capture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Begin capture at pixel `x` with the field's current value.
    pub fn begin(&mut self, x: f32, current_value: f32) {
        self.phase = DragPhase::Dragging {
            start_x: x,
            start_value: current_value,
        };
    }

    /// Pointer moved to pixel `x`; returns the new field value while
    /// capturing, `None` when idle.
    #[must_use]
    pub fn update(&self, x: f32) -> Option<f32> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging {
                start_x,
                start_value,
            } => Some(start_value + (x - start_x) * self.step),
        }
    }

    /// Explicit release; returns whether a capture was actually ended.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }

    /// Route a raw input event through the machine.
    ///
    /// `current_value` is the field's present value (captured on press).
    /// Returns the new field value when a move produces one.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        current_value: f32,
    ) -> Option<f32> {
        match event {
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            } => {
                self.begin(self.last_x, current_value);
                None
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            } => {
                let _ = self.release();
                None
            }
            InputEvent::CursorMoved { x, .. } => {
                self.last_x = x;
                self.update(x)
            }
            _ => None,
        }
    }
}
