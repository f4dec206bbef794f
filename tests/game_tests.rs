use salvo::{BoardError, Defender, Grid, ShipId, ShotOutcome};

fn id(n: u8) -> ShipId {
    ShipId::new(n).unwrap()
}

#[test]
fn fire_reports_hit_then_sink() {
    let mut grid = Grid::new(4, 4);
    grid.insert_ship(id(1), vec![(1, 1), (2, 1)]).unwrap();
    let mut defender = Defender::new(grid);
    assert_eq!(defender.fire(0, 0), Ok(ShotOutcome::Miss));
    assert_eq!(defender.fire(1, 1), Ok(ShotOutcome::Hit));
    assert!(!defender.all_sunk());
    assert_eq!(defender.fire(2, 1), Ok(ShotOutcome::Sunk(id(1))));
    assert!(defender.all_sunk());
    assert_eq!(defender.fire(2, 1), Err(BoardError::AlreadyFired { x: 2, y: 1 }));
    assert!(matches!(defender.fire(4, 0), Err(BoardError::OutOfRange { .. })));
}

#[test]
fn same_id_instances_sink_separately() {
    let mut grid = Grid::new(3, 3);
    grid.insert_ship(id(1), vec![(0, 0), (1, 0)]).unwrap();
    grid.insert_ship(id(1), vec![(0, 2), (1, 2)]).unwrap();
    let mut defender = Defender::new(grid);
    assert_eq!(defender.fire(0, 0), Ok(ShotOutcome::Hit));
    assert_eq!(defender.fire(0, 2), Ok(ShotOutcome::Hit));
    assert_eq!(defender.fire(1, 2), Ok(ShotOutcome::Sunk(id(1))));
    assert_eq!(defender.ships_afloat(), 1);
    assert_eq!(defender.grid().placed_ships().len(), 2);
}
