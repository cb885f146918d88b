use serde::Serialize;

/// Pointer position inside the plot plus the sample under it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovered: Option<usize>,
}

/// Pointer input in container-relative CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Wheel { delta_y: f64 },
}

/// Drag bookkeeping between pointer-down and pointer-up/leave.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    last_x: Option<f64>,
}

impl DragState {
    pub fn begin(&mut self, x: f64) {
        self.last_x = Some(x);
    }

    /// Pixel delta since the previous drag position; `None` when not dragging.
    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        let last = self.last_x?;
        self.last_x = Some(x);
        Some(x - last)
    }

    pub fn end(&mut self) {
        self.last_x = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last_x.is_some()
    }
}
