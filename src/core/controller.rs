/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];
}

/// Controller - per-tick input sampled by the render loop
pub trait Controller {
    /// Check if a movement direction is currently held
    fn is_active(&self, direction: Direction) -> bool;

    /// Cursor position in window pixel space
    fn cursor_position(&self) -> (f64, f64);
}

/// Plain-data input sample, for headless driving and tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub active: Vec<Direction>,
    pub cursor: (f64, f64),
}

impl InputSnapshot {
    pub fn new(active: &[Direction], cursor: (f64, f64)) -> Self {
        Self {
            active: active.to_vec(),
            cursor,
        }
    }

    /// No keys held, cursor at `cursor`
    pub fn idle(cursor: (f64, f64)) -> Self {
        Self::new(&[], cursor)
    }
}

impl Controller for InputSnapshot {
    fn is_active(&self, direction: Direction) -> bool {
        self.active.contains(&direction)
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }
}
