//! Win condition checking for five-in-a-row
//!
//! A color wins once it has `win_length` stones in an unbroken line along
//! one of four axes. Longer lines also win.
//!
//! Each axis is swept outward from a stone, first in the positive direction
//! and then in the negative one. Both sweeps add to one count that starts
//! at 1 for the stone itself, each sweep takes at most `win_length - 1`
//! steps and stops at the first missing stone, and the check fires as soon
//! as the count reaches `win_length`.

use crate::board::{Pos, StoneSet};

/// Axis vectors as `(dx, dy)` (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal up-right
];

/// Check whether the stone at `pos` completes a run on any axis.
///
/// `stones` is the mover's own set and must already contain `pos`.
/// Only a newly placed stone can create a new run, so checking the last
/// move is enough to detect a win as it happens.
#[inline]
pub fn has_run_at(stones: &StoneSet, pos: Pos, win_length: u8) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| axis_reaches(stones, pos, dir, win_length))
}

/// Check every stone of a color for a winning run.
///
/// O(stones x axes x win_length) membership tests. Used to audit a whole
/// position rather than a single move.
pub fn has_run_in_set(stones: &StoneSet, win_length: u8) -> bool {
    stones.iter().any(|&pos| has_run_at(stones, pos, win_length))
}

/// Find the full run through `pos`, ordered from the negative end to the
/// positive end of the first axis that wins.
pub fn find_run_at(stones: &StoneSet, pos: Pos, win_length: u8) -> Option<Vec<Pos>> {
    if !stones.contains(pos) {
        return None;
    }

    for &(dx, dy) in &DIRECTIONS {
        if !axis_reaches(stones, pos, (dx, dy), win_length) {
            continue;
        }

        let size = stones.size();
        let mut line = vec![pos];

        let mut cur = pos;
        while let Some(prev) = cur.offset(-dx, -dy, size).filter(|&p| stones.contains(p)) {
            line.insert(0, prev);
            cur = prev;
        }

        cur = pos;
        while let Some(next) = cur.offset(dx, dy, size).filter(|&p| stones.contains(p)) {
            line.push(next);
            cur = next;
        }

        return Some(line);
    }

    None
}

/// Find any winning run in a color's stones
pub fn find_run(stones: &StoneSet, win_length: u8) -> Option<Vec<Pos>> {
    stones
        .iter()
        .find_map(|&pos| find_run_at(stones, pos, win_length))
}

fn axis_reaches(stones: &StoneSet, pos: Pos, (dx, dy): (i32, i32), win_length: u8) -> bool {
    let size = stones.size();
    let target = win_length as u32;
    let mut count = 1u32;

    for sign in [1, -1] {
        for step in 1..win_length as i32 {
            match pos.offset(dx * step * sign, dy * step * sign, size) {
                Some(next) if stones.contains(next) => {
                    count += 1;
                    if count == target {
                        return true;
                    }
                }
                _ => break,
            }
        }
    }

    count == target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(cells: &[(u8, u8)]) -> StoneSet {
        let mut set = StoneSet::new(10);
        for &(x, y) in cells {
            set.insert(Pos::new(x, y));
        }
        set
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let set = set_of(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        assert!(has_run_in_set(&set, 5));
        assert!(has_run_at(&set, Pos::new(4, 0), 5));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let set = set_of(&[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]);
        assert!(has_run_in_set(&set, 5));
        assert!(has_run_at(&set, Pos::new(7, 5), 5));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let set = set_of(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert!(has_run_in_set(&set, 5));
        assert!(has_run_at(&set, Pos::new(0, 0), 5));
    }

    #[test]
    fn test_anti_diagonal_five() {
        // From (1, 8) up to (5, 4)
        let set = set_of(&[(1, 8), (2, 7), (3, 6), (4, 5), (5, 4)]);
        assert!(has_run_in_set(&set, 5));
        assert!(has_run_at(&set, Pos::new(3, 6), 5));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let set = set_of(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert!(!has_run_in_set(&set, 5));
    }

    #[test]
    fn test_gap_not_win() {
        let set = set_of(&[(0, 0), (1, 0), (3, 0), (4, 0)]);
        assert!(!has_run_in_set(&set, 5));

        let set = set_of(&[(0, 0), (1, 0), (2, 0), (3, 0), (5, 0)]);
        assert!(!has_run_in_set(&set, 5));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let set = set_of(&[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2)]);
        assert!(has_run_in_set(&set, 5));
        // Stone in the middle of the line: 1 + 3 + 2
        assert!(has_run_at(&set, Pos::new(3, 2), 5));
    }

    #[test]
    fn test_filling_gap_completes_run() {
        let set = set_of(&[(2, 5), (3, 5), (5, 5), (6, 5), (4, 5)]);
        assert!(has_run_at(&set, Pos::new(4, 5), 5));
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        // (8,0) (9,0) then (0,1) (1,1) (2,1) are contiguous by packed key only
        let set = set_of(&[(8, 0), (9, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(!has_run_in_set(&set, 5));
    }

    #[test]
    fn test_five_at_corner() {
        let set = set_of(&[(5, 5), (6, 6), (7, 7), (8, 8), (9, 9)]);
        assert!(has_run_in_set(&set, 5));
    }

    #[test]
    fn test_empty_not_run() {
        let set = StoneSet::new(10);
        assert!(!has_run_in_set(&set, 5));
        assert!(find_run(&set, 5).is_none());
    }

    #[test]
    fn test_custom_win_length() {
        let set = set_of(&[(0, 0), (1, 1), (2, 2)]);
        assert!(has_run_in_set(&set, 3));
        assert!(!has_run_in_set(&set, 4));
    }

    #[test]
    fn test_find_run_returns_whole_line() {
        let set = set_of(&[(4, 0), (2, 0), (3, 0), (6, 0), (5, 0), (1, 0), (9, 9)]);
        let line = find_run_at(&set, Pos::new(4, 0), 5).unwrap();
        let expected: Vec<Pos> = (1..=6).map(|x| Pos::new(x, 0)).collect();
        assert_eq!(line, expected);
        assert_eq!(find_run(&set, 5).unwrap(), expected);
        assert!(find_run_at(&set, Pos::new(9, 9), 5).is_none());
    }

    #[test]
    fn test_last_move_check_agrees_with_full_scan() {
        // Grow a set stone by stone; the per-move check fires exactly when
        // the full scan first finds a run.
        let order = [(3, 3), (4, 4), (6, 6), (2, 2), (7, 1), (5, 5)];
        let mut set = StoneSet::new(10);
        let mut won_at = None;
        for (i, &(x, y)) in order.iter().enumerate() {
            let pos = Pos::new(x, y);
            set.insert(pos);
            let by_move = has_run_at(&set, pos, 5);
            assert_eq!(by_move, has_run_in_set(&set, 5) && won_at.is_none());
            if by_move {
                won_at = Some(i);
                break;
            }
        }
        assert_eq!(won_at, Some(5));
    }
}
