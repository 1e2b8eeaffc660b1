use super::*;

#[test]
fn rejects_non_square_even_and_tiny_grids() {
    let err = ModuleMatrix::from_rows(vec![vec![false; 21]; 20]).unwrap_err();
    assert!(err.to_string().contains("square"), "{err}");

    let err = ModuleMatrix::from_fn(22, |_, _| false).unwrap_err();
    assert!(err.to_string().contains("odd"), "{err}");

    let err = ModuleMatrix::from_fn(19, |_, _| false).unwrap_err();
    assert!(err.to_string().contains(">= 21"), "{err}");
}

#[test]
fn indexing_is_row_major() {
    let m = ModuleMatrix::from_fn(21, |row, col| row == 2 && col == 5).unwrap();
    assert!(m.is_dark(2, 5));
    assert!(!m.is_dark(5, 2));
    assert!(!m.is_dark(21, 0));
    assert_eq!(m.dark_count(), 1);

    let mut rows = vec![vec![false; 21]; 21];
    rows[2][5] = true;
    assert_eq!(ModuleMatrix::from_rows(rows).unwrap(), m);
}

#[test]
fn eye_zones_sit_in_three_corners() {
    assert_eq!(
        EyeZone::for_side(21),
        [
            EyeZone { row: 0, col: 0 },
            EyeZone { row: 0, col: 14 },
            EyeZone { row: 14, col: 0 },
        ]
    );
}

#[test]
fn zone_bound_is_inclusive_eight_cells() {
    let z = EyeZone { row: 0, col: 14 };
    assert!(z.contains(0, 14));
    assert!(z.contains(7, 21));
    assert!(!z.contains(8, 14));
    assert!(!z.contains(0, 13));

    let zones = EyeZone::for_side(21);
    let excluded = (0..21)
        .flat_map(|r| (0..21).map(move |c| (r, c)))
        .filter(|&(r, c)| in_any_eye_zone(r, c, &zones))
        .count();
    // Top-left is a full 8x8 block; the other two are clipped to 8x7 by the matrix edge.
    assert_eq!(excluded, 64 + 56 + 56);
}
