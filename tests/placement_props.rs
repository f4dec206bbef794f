use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{Grid, GridPlacer, Shape, ShipCatalog};

fn fleet() -> impl Strategy<Value = Vec<(u8, usize)>> {
    proptest::collection::btree_map(1u8..=7, 0usize..=1, 0..=4)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placements_are_valid(seed in any::<u64>(), ships in fleet(), rows in 8usize..=12, cols in 8usize..=12) {
        let catalog = ShipCatalog::standard(&ships).unwrap();
        let mut placer = GridPlacer::new(SmallRng::seed_from_u64(seed));
        let grid = placer.place(rows, cols, &catalog).unwrap();

        let stats = grid.stats();
        prop_assert_eq!(stats.empty + stats.occupied, rows * cols);
        prop_assert_eq!(stats.occupied, catalog.total_cells());
        prop_assert_eq!(grid.placed_ships().len(), catalog.total_ships());

        for (i, ship) in grid.placed_ships().iter().enumerate() {
            let footprint = Shape::from_cells(&ship.cells).unwrap();
            prop_assert!(footprint.is_orientation_of(catalog.shape(ship.id).unwrap()));
            for &(x, y) in &ship.cells {
                prop_assert!(x < cols && y < rows);
                prop_assert_eq!(grid.tile(x, y).unwrap(), Some(ship.id));
                for (nx, ny) in grid.neighbours(x, y) {
                    let owner = grid.instance_at(nx, ny).unwrap();
                    prop_assert!(owner.is_none() || owner == Some(i));
                }
            }
        }
    }

    #[test]
    fn reset_always_yields_empty_board(seed in any::<u64>(), ships in fleet()) {
        let catalog = ShipCatalog::standard(&ships).unwrap();
        let mut grid = Grid::new(10, 10);
        GridPlacer::new(SmallRng::seed_from_u64(seed)).place_into(&mut grid, &catalog).unwrap();
        grid.reset();
        let once = grid.clone();
        grid.reset();
        prop_assert_eq!(&grid, &once);
        prop_assert!(grid.snapshot().iter().flatten().all(|c| c.is_none()));
        prop_assert_eq!(grid.stats().empty, 100);
    }
}
