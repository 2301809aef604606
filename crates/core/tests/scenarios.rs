//! End-to-end sessions driven through in-memory input

use std::io::Cursor;

use chess_attack_sim_core::session::{ATTACKERS_HEADER, INVALID_MESSAGE};
use chess_attack_sim_core::{Error, Session};

fn play(script: &str) -> (Vec<String>, String) {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new());
    let report = session.run().expect("session should finish");
    let output = String::from_utf8(session.into_output()).unwrap();
    (report.identifiers(), output)
}

fn listed_attackers(output: &str) -> Vec<&str> {
    output
        .split(ATTACKERS_HEADER)
        .nth(1)
        .unwrap_or("")
        .lines()
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn rook_attacks_along_column() {
    let (ids, output) = play("Ra1\nXa8\n");
    assert_eq!(ids, vec!["Ra1"]);
    assert_eq!(listed_attackers(&output), vec!["Ra1"]);
}

#[test]
fn knight_attacks_target() {
    let (ids, _) = play("Nb1\nXa3\n");
    assert_eq!(ids, vec!["Nb1"]);
}

#[test]
fn pawn_rule_is_one_sided() {
    let (hit, _) = play("Pb2\nXc3\n");
    assert_eq!(hit, vec!["Pb2"]);

    let (miss, output) = play("Pb2\nXa3\n");
    assert!(miss.is_empty());
    assert!(listed_attackers(&output).is_empty());
}

#[test]
fn second_king_rejected() {
    let (ids, output) = play("Ke1\nKe5\nXe2\n");
    assert!(output.contains("There can only be 1 king or queen"));
    assert_eq!(ids, vec!["Ke1"]);

    let board: Vec<&str> = output.lines().filter(|l| l.len() == 8 && !l.contains(' ')).collect();
    assert_eq!(board.len(), 8);
    assert_eq!(board[3], "........");
    assert_eq!(board[7], "....K...");
}

#[test]
fn occupied_square_rejected() {
    let (ids, output) = play("Qd4\nRd4\nXd8\n");
    assert_eq!(output.matches(INVALID_MESSAGE).count(), 1);
    assert_eq!(ids, vec!["Qd4"]);
}

#[test]
fn mixed_case_and_bad_lines() {
    let (ids, output) = play("qB2\n\nQb\nzz9\nKz1\nbh8\nxG7\n");
    assert_eq!(output.matches(INVALID_MESSAGE).count(), 4);
    assert_eq!(ids, vec!["Bh8", "Qb2"]);
}

#[test]
fn output_lists_attackers_in_board_order() {
    let (ids, output) = play("Pa1\nRe1\nNf6\nBa8\nQh5\nXe4\n");
    assert_eq!(ids, vec!["Ba8", "Nf6", "Re1"]);
    assert_eq!(listed_attackers(&output), ids);
}

#[test]
fn missing_target_is_an_error() {
    let mut session = Session::new(Cursor::new("Ra1\nRa2\n".to_string()), Vec::new());
    assert!(matches!(session.run(), Err(Error::InputClosed)));
    assert_eq!(session.setup().board().occupied_count(), 2);
}

#[test]
fn undecodable_line_is_rejected_not_fatal() {
    let mut script = b"Ra1\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"Xa8\n");

    let mut session = Session::new(Cursor::new(script), Vec::new());
    let report = session.run().expect("session should finish");
    let output = String::from_utf8(session.into_output()).unwrap();

    assert_eq!(report.identifiers(), vec!["Ra1"]);
    assert_eq!(output.matches(INVALID_MESSAGE).count(), 1);
    assert_eq!(listed_attackers(&output), vec!["Ra1"]);
}
