use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{AttackPlanner, Defender, GridPlacer, Knowledge, ShipCatalog, ShotOutcome};

const FLEET: [(u8, usize); 5] = [(1, 2), (2, 1), (3, 1), (5, 1), (7, 1)];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Plays a whole game, checking the planner's bookkeeping after every shot.
    #[test]
    fn full_game_keeps_planner_invariants(seed in any::<u64>()) {
        let catalog = ShipCatalog::standard(&FLEET).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = GridPlacer::new(&mut rng).place(10, 10, &catalog).unwrap();
        let mut defender = Defender::new(grid);
        let mut planner = AttackPlanner::new(10, 10, catalog.clone(), &mut rng);

        let mut fired = Vec::new();
        let mut afloat = catalog.total_ships();
        while !planner.all_ships_sunk() {
            prop_assert!(fired.len() < 100, "planner ran out of board");
            let before = planner.knowledge_grid();
            let (x, y) = planner.next_attack().unwrap();
            prop_assert_eq!(planner.knowledge(x, y).unwrap(), Knowledge::Unknown);
            prop_assert!(!fired.contains(&(x, y)));

            let outcome = defender.fire(x, y).unwrap();
            planner.register_outcome(x, y, outcome).unwrap();
            fired.push((x, y));

            // knowledge only ever leaves Unknown
            let after = planner.knowledge_grid();
            for (row_b, row_a) in before.iter().zip(after.iter()) {
                for (b, a) in row_b.iter().zip(row_a.iter()) {
                    prop_assert!(*b == Knowledge::Unknown || a == b);
                }
            }

            // candidates are exactly the cells still Unknown
            let unknown = after.iter().flatten().filter(|&&k| k == Knowledge::Unknown).count();
            prop_assert_eq!(planner.candidates_remaining(), unknown);
            for &(fx, fy) in &fired {
                prop_assert!(!planner.is_candidate(fx, fy).unwrap());
            }

            let left: usize = planner.remaining_ships().values().sum();
            if let ShotOutcome::Sunk(_) = outcome {
                prop_assert_eq!(left + 1, afloat);
            } else {
                prop_assert_eq!(left, afloat);
            }
            afloat = left;
            prop_assert_eq!(planner.all_ships_sunk(), afloat == 0);
        }
        prop_assert!(defender.all_sunk());
    }

    /// Misses alone never change the fleet and shrink candidates by one each.
    #[test]
    fn misses_exclude_exactly_the_fired_cells(cells in proptest::collection::hash_set((0usize..8, 0usize..8), 0..20)) {
        let catalog = ShipCatalog::standard(&[(1, 1), (2, 1)]).unwrap();
        let mut planner = AttackPlanner::new(8, 8, catalog.clone(), SmallRng::seed_from_u64(1));
        for &(x, y) in &cells {
            planner.register_result(x, y, false, false).unwrap();
        }
        prop_assert_eq!(planner.candidates_remaining(), 64 - cells.len());
        prop_assert_eq!(planner.catalog(), &catalog);
        let (x, y) = planner.next_attack().unwrap();
        prop_assert!(!cells.contains(&(x, y)));
    }
}
