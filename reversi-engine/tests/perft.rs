//! Leaf counts from the standard 8x8 opening.
//! See: http://www.aartbik.com/MISC/reversi.html

use reversi_engine::test_utils::run_perft;

fn perft_8x8(depth: u64) -> u64 {
    run_perft(8, depth).unwrap()
}

#[test]
fn perft_01() {
    assert_eq!(perft_8x8(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(perft_8x8(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(perft_8x8(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(perft_8x8(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(perft_8x8(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(perft_8x8(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(perft_8x8(7), 55092);
}

#[test]
fn perft_08() {
    assert_eq!(perft_8x8(8), 390216);
}

// Passing moves begin here.
#[test]
fn perft_09() {
    assert_eq!(perft_8x8(9), 3005288);
}

#[test]
fn perft_10() {
    assert_eq!(perft_8x8(10), 24571284);
}
