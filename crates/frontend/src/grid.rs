//! Selection model for the display's game grid: items laid out in fixed-width
//! rows, one selected linear index, moved around by relayed d-pad input.

use common::ws::Direction;

/// What a single navigation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    /// `action` on the currently highlighted item.
    Select(usize),
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridNav {
    cols: usize,
    len: usize,
    selected: usize,
}

impl GridNav {
    pub fn new(cols: usize, len: usize) -> Self {
        assert!(cols > 0, "grid needs at least one column");
        Self {
            cols,
            len,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The item list changed size; keep the selection in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Apply one direction. `up`/`down` move by a row, clamped. `left`/`right`
    /// wrap to the neighboring row at the grid edge, clamping only at the very
    /// first and very last position. A move that would land past the end of a
    /// ragged last row is rejected and the selection stays put.
    pub fn step(&mut self, direction: Direction) -> Step {
        if self.len == 0 {
            return Step::Unchanged;
        }
        let row_count = (self.len + self.cols - 1) / self.cols;
        let mut row = self.selected / self.cols;
        let mut col = self.selected % self.cols;

        match direction {
            Direction::Up => row = row.saturating_sub(1),
            Direction::Down => row = (row + 1).min(row_count - 1),
            Direction::Left => {
                if col > 0 {
                    col -= 1;
                } else if row > 0 {
                    row -= 1;
                    col = self.cols - 1;
                }
            }
            Direction::Right => {
                if col + 1 < self.cols {
                    col += 1;
                } else if row + 1 < row_count {
                    row += 1;
                    col = 0;
                }
            }
            Direction::Action => return Step::Select(self.selected),
            Direction::Unrecognized => return Step::Unchanged,
        }

        let next = row * self.cols + col;
        if next == self.selected || next >= self.len {
            Step::Unchanged
        } else {
            self.selected = next;
            Step::Moved(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_at(cols: usize, len: usize, selected: usize) -> GridNav {
        let mut nav = GridNav::new(cols, len);
        nav.selected = selected;
        nav
    }

    #[test]
    fn down_into_a_missing_cell_is_rejected() {
        // 9 items in rows of 4: index 5 has no cell directly below it.
        let mut nav = nav_at(4, 9, 5);
        assert_eq!(nav.step(Direction::Down), Step::Unchanged);
        assert_eq!(nav.selected(), 5);
    }

    #[test]
    fn down_moves_one_row_when_the_cell_exists() {
        let mut nav = nav_at(4, 9, 4);
        assert_eq!(nav.step(Direction::Down), Step::Moved(8));
    }

    #[test]
    fn up_clamps_at_the_top_row() {
        let mut nav = nav_at(4, 9, 2);
        assert_eq!(nav.step(Direction::Up), Step::Unchanged);
        let mut nav = nav_at(4, 9, 6);
        assert_eq!(nav.step(Direction::Up), Step::Moved(2));
    }

    #[test]
    fn left_clamps_at_the_very_first_position() {
        let mut nav = nav_at(4, 9, 0);
        assert_eq!(nav.step(Direction::Left), Step::Unchanged);
        assert_eq!(nav.selected(), 0);
    }

    #[test]
    fn left_wraps_to_the_last_column_of_the_previous_row() {
        let mut nav = nav_at(4, 9, 4);
        assert_eq!(nav.step(Direction::Left), Step::Moved(3));
    }

    #[test]
    fn right_wraps_to_the_first_column_of_the_next_row() {
        let mut nav = nav_at(4, 9, 3);
        assert_eq!(nav.step(Direction::Right), Step::Moved(4));
    }

    #[test]
    fn right_clamps_at_the_very_last_position() {
        let mut nav = nav_at(4, 9, 8);
        assert_eq!(nav.step(Direction::Right), Step::Unchanged);
        // Full last row: bottom-right corner also clamps.
        let mut nav = nav_at(4, 8, 7);
        assert_eq!(nav.step(Direction::Right), Step::Unchanged);
    }

    #[test]
    fn action_selects_the_highlighted_item() {
        let mut nav = nav_at(4, 9, 5);
        assert_eq!(nav.step(Direction::Action), Step::Select(5));
        assert_eq!(nav.selected(), 5);
    }

    #[test]
    fn unrecognized_directions_are_noops() {
        let mut nav = nav_at(4, 9, 5);
        assert_eq!(nav.step(Direction::Unrecognized), Step::Unchanged);
    }

    #[test]
    fn empty_grid_ignores_everything() {
        let mut nav = GridNav::new(4, 0);
        assert_eq!(nav.step(Direction::Action), Step::Unchanged);
        assert_eq!(nav.step(Direction::Down), Step::Unchanged);
    }

    #[test]
    fn shrinking_the_list_pulls_the_selection_back_in_range() {
        let mut nav = nav_at(4, 9, 8);
        nav.set_len(4);
        assert_eq!(nav.selected(), 3);
    }
}
