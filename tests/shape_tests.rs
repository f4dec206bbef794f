use salvo::{BoardError, Shape};

#[test]
fn line_has_two_orientations() {
    let line = Shape::line(4).unwrap();
    let orients = line.orientations();
    assert_eq!(orients.len(), 2);
    assert!(orients.iter().any(|s| s.width() == 1 && s.height() == 4));
}

#[test]
fn single_cell_has_one_orientation() {
    assert_eq!(Shape::line(1).unwrap().orientations().len(), 1);
}

#[test]
fn l_tetromino_has_eight_orientations() {
    let l = Shape::new(&[(0, 0), (1, 0), (2, 0), (2, 1)]).unwrap();
    assert_eq!(l.orientations().len(), 8);
    for o in l.orientations() {
        assert_eq!(o.len(), 4);
        assert!(o.is_orientation_of(&l));
    }
}

#[test]
fn negative_offsets_are_normalised() {
    let s = Shape::new(&[(0, 0), (0, -1), (1, -1)]).unwrap();
    assert_eq!(s.cells(), &[(0, 0), (0, 1), (1, 0)]);
}

#[test]
fn disconnected_and_empty_shapes_are_rejected() {
    assert_eq!(Shape::new(&[]), Err(BoardError::InvalidShape));
    assert_eq!(Shape::new(&[(0, 0), (2, 0)]), Err(BoardError::InvalidShape));
    // diagonal contact does not connect
    assert_eq!(Shape::new(&[(0, 0), (1, 1)]), Err(BoardError::InvalidShape));
    assert_eq!(Shape::line(0), Err(BoardError::InvalidShape));
}

#[test]
fn board_cells_normalise_to_their_footprint() {
    let s = Shape::from_cells(&[(4, 7), (5, 7), (6, 7), (6, 8)]).unwrap();
    assert_eq!(s.cells(), &[(0, 0), (1, 0), (2, 0), (2, 1)]);
    assert!(s.is_orientation_of(&Shape::new(&[(0, 0), (0, 1), (0, 2), (1, 0)]).unwrap()));
    assert_eq!(Shape::from_cells(&[(2, 2), (4, 4)]), Err(BoardError::InvalidShape));
}

#[test]
fn project_offsets_from_anchor() {
    let s = Shape::line(3).unwrap();
    let cells: Vec<_> = s.project((2, 5)).collect();
    assert_eq!(cells, vec![(2, 5), (3, 5), (4, 5)]);
}
