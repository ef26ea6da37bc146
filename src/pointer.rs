// Last known pointer position, shared between the pointer listener and the
// network that reads it once per frame.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    pos: Rc<Cell<Option<[f64; 2]>>>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer move. Non-finite coordinates are dropped.
    pub fn moved(&self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.pos.set(Some([x, y]));
        }
    }

    pub fn clear(&self) {
        self.pos.set(None);
    }

    pub fn position(&self) -> Option<[f64; 2]> {
        self.pos.get()
    }
}
