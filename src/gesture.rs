//! Pointer gesture tracking for hint cells.
//!
//! Each interactive table row owns one `DragGesture`. The UI shell feeds it
//! pointer coordinates plus its own column hit-test results; the machine
//! decides whether the interaction was a tap (open the hint editor) or a
//! drag between columns (feed to [`crate::app::AppContext::place_hint`]).
//!
//! States: Idle → Pressed → Dragging, released or cancelled back to Idle.
//! Movement past [`DRAG_THRESHOLD`] on either axis promotes a press to a
//! drag. Gestures are element-local; there is no cross-gesture state.

/// Axis movement (in UI units) that turns a press into a drag.
pub const DRAG_THRESHOLD: f32 = 10.0;

/// What a completed gesture asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A tap on a hint cell: open the editor for this hint index.
    Tap { hint: usize },

    /// A drag released over another column: move the hint between columns.
    Drop { from: u8, to: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    Pressed {
        start: (f32, f32),
        column: u8,
        hint: Option<usize>,
    },
    Dragging {
        column: u8,
        hint: Option<usize>,
        over: Option<u8>,
    },
}

/// Per-element pointer gesture tracker.
#[derive(Clone, Copy, Debug)]
pub struct DragGesture {
    state: State,
}

impl DragGesture {
    #[must_use]
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Has the press been promoted to a drag?
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// Column currently hovered while dragging (for drop highlighting).
    #[must_use]
    pub fn hover_column(&self) -> Option<u8> {
        match self.state {
            State::Dragging { over, .. } => over,
            _ => None,
        }
    }

    /// Pointer down on the cell at `column`. `hint` is the hint index bound
    /// to the cell, `None` for the spare column's empty cell.
    pub fn press(&mut self, x: f32, y: f32, column: u8, hint: Option<usize>) {
        self.state = State::Pressed {
            start: (x, y),
            column,
            hint,
        };
    }

    /// Pointer movement. `over` is the column under the pointer, if any.
    pub fn motion(&mut self, x: f32, y: f32, over: Option<u8>) {
        match self.state {
            State::Pressed { start, column, hint } => {
                let moved = (x - start.0).abs() > DRAG_THRESHOLD
                    || (y - start.1).abs() > DRAG_THRESHOLD;
                if moved {
                    self.state = State::Dragging { column, hint, over };
                }
            }
            State::Dragging { column, hint, .. } => {
                self.state = State::Dragging { column, hint, over };
            }
            State::Idle => {}
        }
    }

    /// Pointer up. `over` is the column under the release point.
    ///
    /// A press that never moved past the threshold is a tap (when the cell
    /// had a hint). A drag released over a different column is a drop.
    /// Everything else completes without an outcome.
    pub fn release(&mut self, over: Option<u8>) -> Option<GestureOutcome> {
        let outcome = match self.state {
            State::Idle => None,
            State::Pressed { hint, .. } => hint.map(|hint| GestureOutcome::Tap { hint }),
            State::Dragging { column, hint, .. } => match (hint, over) {
                (Some(_), Some(target)) if target != column => Some(GestureOutcome::Drop {
                    from: column,
                    to: target,
                }),
                _ => None,
            },
        };
        self.state = State::Idle;
        outcome
    }

    /// Pointer capture lost. No outcome, back to Idle.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}
