use std::io::Write;

use word_hunt::{load_words, Error, Grid};

fn rows(grid: &Grid) -> Vec<Vec<String>> {
    grid.iter_rows().map(|r| r.to_vec()).collect()
}

fn expected(letters: &[&str]) -> Vec<Vec<String>> {
    letters
        .iter()
        .map(|r| r.chars().map(String::from).collect())
        .collect()
}

#[test]
fn test_parse_multiline() {
    let grid = Grid::parse("RNSM\nTDUO\nRASA\nETHH", 4).unwrap();
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 4);
    assert_eq!(rows(&grid), expected(&["rnsm", "tduo", "rasa", "ethh"]));
}

#[test]
fn test_parse_spaced_multiline() {
    let grid = Grid::parse("  r n s m\n t d u o\n\n r a s a\n e t h h\n", 4).unwrap();
    assert_eq!(rows(&grid), expected(&["rnsm", "tduo", "rasa", "ethh"]));
}

#[test]
fn test_parse_multiline_with_digraph_tokens() {
    let grid = Grid::parse("qu i\nt e", 2).unwrap();
    assert_eq!(grid.token((0, 0)), "qu");
    assert_eq!(grid.token((0, 1)), "i");
    assert_eq!(grid.token((1, 1)), "e");
}

#[test]
fn test_parse_slashed() {
    let grid = Grid::parse("r n s m / t d u o / r a s a / e t h h", 4).unwrap();
    assert_eq!(rows(&grid), expected(&["rnsm", "tduo", "rasa", "ethh"]));

    let grid = Grid::parse("rnsm/tduo/rasa/ethh", 4).unwrap();
    assert_eq!(rows(&grid), expected(&["rnsm", "tduo", "rasa", "ethh"]));
}

#[test]
fn test_parse_compact() {
    let grid = Grid::parse("RNSMTDUORASAETHH", 4).unwrap();
    assert_eq!(rows(&grid), expected(&["rnsm", "tduo", "rasa", "ethh"]));
    assert_eq!(grid.token((2, 1)), "a");
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        Grid::parse("abc\ndef", 3),
        Err(Error::GridParse(msg)) if msg == "expected 3 rows, got 2"
    ));
    assert!(matches!(Grid::parse("abc\nde\nfgh", 3), Err(Error::GridParse(_))));
    assert!(matches!(Grid::parse("abc/def", 3), Err(Error::GridParse(_))));
    assert!(matches!(Grid::parse("ab/cdx", 2), Err(Error::GridParse(_))));
    assert!(matches!(
        Grid::parse("abcdefgh", 3),
        Err(Error::GridParse(msg)) if msg == "expected 9 letters, got 8"
    ));
    assert!(matches!(
        Grid::parse("abcd", usize::MAX / 2),
        Err(Error::GridParse(msg)) if msg == format!("grid size {} is too large", usize::MAX / 2)
    ));
}

#[test]
fn test_new_rejects_jagged_rows() {
    let result = Grid::new(vec![vec!["a", "b"], vec!["c"]]);
    match result {
        Err(Error::InvalidInput {
            row,
            expected,
            found,
        }) => {
            assert_eq!(row, 1);
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_new_rejects_blank_tokens() {
    let result = Grid::new(vec![vec!["c", " "], vec!["a", "t"]]);
    assert!(matches!(result, Err(Error::EmptyToken { row: 0, col: 1 })));

    let result = Grid::new(vec![vec!["c", "a"], vec!["t", ""]]);
    assert!(matches!(result, Err(Error::EmptyToken { row: 1, col: 1 })));
}

#[test]
fn test_new_normalizes_tokens() {
    let grid = Grid::new(vec![vec![" C ", "A"], vec!["t", "QU"]]).unwrap();
    assert_eq!(grid.token((0, 0)), "c");
    assert_eq!(grid.token((0, 1)), "a");
    assert_eq!(grid.token((1, 1)), "qu");
}

#[test]
fn test_empty_grids() {
    let none: Vec<Vec<String>> = vec![];
    let grid = Grid::new(none).unwrap();
    assert!(grid.is_empty());
    assert_eq!(grid.coords().count(), 0);

    let blank_rows: Vec<Vec<String>> = vec![vec![], vec![]];
    let grid = Grid::new(blank_rows).unwrap();
    assert!(grid.is_empty());
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 0);
}

#[test]
fn test_coords_row_major() {
    let grid = Grid::new(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]).unwrap();
    let coords: Vec<_> = grid.coords().collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_display() {
    let grid = Grid::parse("ab\ncd", 2).unwrap();
    assert_eq!(grid.to_string(), "1: A B\n2: C D\n    1 2");
}

#[test]
fn test_load_words() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Cat\nat\ndog's\n  Zebra  \n\nx-ray\ncats").unwrap();

    let words = load_words(file.path(), 3).unwrap();
    assert_eq!(words, vec!["cat", "zebra", "cats"]);
}

#[test]
fn test_load_words_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match load_words(&path, 3) {
        Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}
