use boardclean::board::{normalize_text, BoardLines};
use boardclean::BOARD_LINE_LIMIT;
use pretty_assertions::assert_eq;

#[test]
fn twelve_line_board() {
    let text = "A\nB \n C\nD\nE\nF\nG\nH\nI\nJ\nK\nL";
    let b = BoardLines::from_text(text);
    assert_eq!(b.len(), BOARD_LINE_LIMIT);
    assert_eq!(b.as_slice()[..3].to_vec(), vec!["A", "B", "C"]);
    assert_eq!(b.render(), "A\nB\nC\nD\nE\nF\nG\nH\nI");
}

#[test]
fn order_is_preserved() {
    let text = "9\n8\n7\n6\n5\n4\n3\n2\n1\n0\n";
    let b = BoardLines::from_text(text);
    let kept: Vec<&str> = b.iter().collect();
    assert_eq!(kept, vec!["9", "8", "7", "6", "5", "4", "3", "2", "1"]);
}

#[test]
fn crlf_boards_become_lf() {
    assert_eq!(normalize_text("a \r\nb\r\nc\r\n"), "a\nb\nc");
}

#[test]
fn tabs_are_not_stripped() {
    assert_eq!(normalize_text("\tx \n"), "\tx");
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "",
        "\n",
        "  a\n b \nc  \n",
        "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n11\n",
        "x\r\n\r\n y\r",
    ];
    for s in samples {
        let once = normalize_text(s);
        assert_eq!(normalize_text(&once), once, "input {:?}", s);
    }
}

#[test]
fn empty_text_has_no_lines() {
    let b = BoardLines::from_text("");
    assert!(b.is_empty());
    assert_eq!(b.render(), "");
}
