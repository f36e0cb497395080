//! Tests for `pretty` module - diagnostic grid rendering.

use super::hashed::PackedHashMatrix;
use super::literal::LiteralMatrix;
use crate::digest::HashFn;
use crate::error::Error;

const PATH_HEADER: &str = "    - . / 0 1 2 3 4 5 6 7 8 9 a b c d e f g h i j k l m n o p q r s t u v w x y z \n";

fn row(label: &str, set_columns: &[usize], columns: usize) -> String {
    let cells: String = (0..columns)
        .map(|x| if set_columns.contains(&x) { "X " } else { ". " })
        .collect();
    format!("{label}: {cells}\n")
}

#[test]
fn test_layer_rendering() {
    // Arrange
    let mut m = LiteralMatrix::new(5);
    m.set(&['a', '/']).expect("set");

    // Act
    let rendered = m.pretty_print(2).expect("render");

    // Assert - 'a' is column 13, '/' is column 2
    let expected = format!("{PATH_HEADER}{}{}", row(" 0", &[13], 39), row(" 1", &[2], 39));
    assert_eq!(rendered, expected);
}

#[test]
fn test_empty_layer_renders_dots() {
    let m = LiteralMatrix::new(3);

    let rendered = m.pretty_print(1).expect("render");

    assert_eq!(rendered, format!("{PATH_HEADER}{}", row(" 0", &[], 39)));
}

#[test]
fn test_row_labels_widen_with_depth() {
    let m = LiteralMatrix::new(120);

    let rendered = m.pretty_print(120).expect("render");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 121);
    assert!(lines[0].starts_with("     -"));
    assert!(lines[1].starts_with("  0: "));
    assert!(lines[120].starts_with("119: "));
}

#[test]
fn test_layer_out_of_range() {
    let m = LiteralMatrix::new(4);

    assert_eq!(
        m.pretty_print(0),
        Err(Error::InvalidLength { length: 0, max: 4 })
    );
    assert_eq!(
        m.pretty_print(5),
        Err(Error::InvalidLength { length: 5, max: 4 })
    );
    assert_eq!(m.layer(4).expect("layer").key_len(), 4);
}

#[test]
fn test_digest_grid_view() {
    // Arrange - digest "1f"
    let mut m = PackedHashMatrix::with_hasher(HashFn(|_: &str| 0x1f_u64));
    m.set("anything").expect("set");

    // Act
    let rendered = m.view().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    // Assert
    assert_eq!(lines.len(), 17);
    assert_eq!(
        lines[0],
        "    0 1 2 3 4 5 6 7 8 9 a b c d e f g h i j k l m n o p q r s t u v w x y z "
    );
    assert_eq!(format!("{}\n", lines[1]), row(" 0", &[1], 36));
    assert_eq!(format!("{}\n", lines[2]), row(" 1", &[15], 36));
    assert_eq!(format!("{}\n", lines[16]), row("15", &[], 36));
}
