// Snapshot of the mouse as last reported by the input handler. Each event
// overwrites the previous one, nothing is queued

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    // Surface pixel coordinates, None while the cursor is outside the window
    pub position: Option<[f64; 2]>,
    pub movement: [f64; 2],
}

impl PointerState {
    pub fn on_move(&mut self, x: f64, y: f64, movement_x: f64, movement_y: f64) {
        self.position = Some([x, y]);
        self.movement = [movement_x, movement_y];
    }

    // Movement is left as is, it only matters while a position is present
    pub fn on_leave(&mut self) {
        self.position = None;
    }
}
