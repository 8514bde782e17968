#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    Down,
    Left,
    Right,
    Up,
}

impl Facing {
    pub(crate) const fn delta(self) -> (i32, i32) {
        match self {
            Facing::Down => (0, 1),
            Facing::Left => (-1, 0),
            Facing::Right => (1, 0),
            Facing::Up => (0, -1),
        }
    }
}

/// What a directional move attempt resolved to. A clear step at the
/// screen border scrolls the map instead of moving the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    Moved,
    Blocked,
    ScrollEdge,
}
