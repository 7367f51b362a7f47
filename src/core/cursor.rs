//! Cursor position tracking
//!
//! A `Coordinate` is an immutable cell position; a `Cursor` owns one and only
//! changes it through relative motion. Neither knows about any screen buffer,
//! so clamping is left to whoever drives the cursor.

/// Character-cell position, origin at the top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset to the left.
    ///
    /// # Panics
    ///
    /// Panics if `n` would take the column below zero.
    pub fn left(self, n: usize) -> Self {
        assert!(n <= self.x, "cursor moved left of column 0 ({} - {})", self.x, n);
        Self::new(self.x - n, self.y)
    }

    pub fn right(self, n: usize) -> Self {
        Self::new(self.x + n, self.y)
    }

    /// Offset upwards.
    ///
    /// # Panics
    ///
    /// Panics if `n` would take the row above zero.
    pub fn up(self, n: usize) -> Self {
        assert!(n <= self.y, "cursor moved above row 0 ({} - {})", self.y, n);
        Self::new(self.x, self.y - n)
    }

    pub fn down(self, n: usize) -> Self {
        Self::new(self.x, self.y + n)
    }
}

/// Cursor owning a single coordinate for the lifetime of a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Coordinate,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn x(&self) -> usize {
        self.position.x
    }

    pub fn y(&self) -> usize {
        self.position.y
    }

    pub fn move_left(&mut self, n: usize) {
        self.position = self.position.left(n);
    }

    pub fn move_right(&mut self, n: usize) {
        self.position = self.position.right(n);
    }

    pub fn move_up(&mut self, n: usize) {
        self.position = self.position.up(n);
    }

    pub fn move_down(&mut self, n: usize) {
        self.position = self.position.down(n);
    }

    /// Move left by the current column
    pub fn move_to_beginning_of_line(&mut self) {
        self.move_left(self.position.x);
    }

    /// Move up by the current row, then to the beginning of that line
    pub fn go_to_origin(&mut self) {
        self.move_up(self.position.y);
        self.move_to_beginning_of_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_motion() {
        let mut cursor = Cursor::new();
        cursor.move_right(5);
        cursor.move_down(3);
        cursor.move_left(2);
        cursor.move_up(1);

        assert_eq!(cursor.position(), Coordinate::new(3, 2));
    }

    #[test]
    fn test_beginning_of_line_keeps_row() {
        let mut cursor = Cursor::new();
        cursor.move_down(4);
        cursor.move_right(7);
        cursor.move_to_beginning_of_line();

        assert_eq!(cursor.position(), Coordinate::new(0, 4));
    }

    #[test]
    fn test_go_to_origin() {
        let mut cursor = Cursor::new();
        cursor.move_down(9);
        cursor.move_right(12);
        cursor.go_to_origin();

        assert_eq!(cursor.position(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_offsets_produce_new_values() {
        let start = Coordinate::new(1, 1);
        let moved = start.right(2).down(3);

        assert_eq!(start, Coordinate::new(1, 1));
        assert_eq!(moved, Coordinate::new(3, 4));
    }

    #[test]
    #[should_panic(expected = "left of column 0")]
    fn test_negative_column_is_a_precondition_violation() {
        let mut cursor = Cursor::new();
        cursor.move_left(1);
    }
}
