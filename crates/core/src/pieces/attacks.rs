//! Attack geometry per role.
//!
//! Each rule looks only at the attacker's square and the target square.
//! Other pieces never block.

use shakmaty::Role;

use crate::coords::Coordinate;

const KING_STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const PAWN_STEPS: [(i32, i32); 2] = [(1, 1), (-1, -1)];

/// Whether a `role` standing on `from` covers `target`.
pub fn can_attack(role: Role, from: Coordinate, target: Coordinate) -> bool {
    let delta = from.delta_to(target);
    match role {
        // Orthogonal single steps only
        Role::King => KING_STEPS.contains(&delta),
        Role::Rook => rook_line(delta),
        Role::Bishop => bishop_line(delta),
        Role::Queen => rook_line(delta) || bishop_line(delta),
        Role::Knight => KNIGHT_JUMPS.contains(&delta),
        // Forward-right or backward-left only
        Role::Pawn => PAWN_STEPS.contains(&delta),
    }
}

fn rook_line((d_row, d_col): (i32, i32)) -> bool {
    d_row == 0 || d_col == 0
}

fn bishop_line((d_row, d_col): (i32, i32)) -> bool {
    d_row.abs() == d_col.abs()
}
