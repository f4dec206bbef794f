use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    engage, init_logging, AttackPlanner, Defender, GridPlacer, ShipCatalog, DEFAULT_COLS,
    DEFAULT_FLEET, DEFAULT_ROWS,
};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a fleet on a fresh board and print it as JSON.
    Place {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Run the attack planner against freshly placed boards.
    Simulate {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, default_value_t = 1)]
        games: usize,
    },
}

#[derive(Args)]
struct BoardArgs {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Ship type and count as ID=COUNT; repeatable. Defaults to one each of 1-5.
    #[arg(long = "ship", value_parser = parse_ship)]
    ships: Vec<(u8, usize)>,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
}

impl BoardArgs {
    fn catalog(&self) -> anyhow::Result<ShipCatalog> {
        let ships: &[(u8, usize)] = if self.ships.is_empty() {
            &DEFAULT_FLEET
        } else {
            &self.ships
        };
        Ok(ShipCatalog::standard(ships)?)
    }
}

fn parse_ship(s: &str) -> Result<(u8, usize), String> {
    let (id, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=COUNT, got `{}`", s))?;
    let id = id.trim().parse::<u8>().map_err(|e| format!("bad ship id `{}`: {}", id, e))?;
    let count = count
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad ship count `{}`: {}", count, e))?;
    Ok((id, count))
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Place { board } => {
            let catalog = board.catalog()?;
            let mut placer = GridPlacer::new(make_rng(board.seed));
            let grid = placer
                .place(board.rows, board.cols, &catalog)
                .context("placing ships")?;
            let ships: Vec<_> = grid
                .placed_ships()
                .iter()
                .map(|s| json!({ "id": s.id, "cells": s.cells }))
                .collect();
            let out = json!({
                "rows": grid.rows(),
                "cols": grid.cols(),
                "board": grid.codes(),
                "ships": ships,
                "stats": grid.stats(),
            });
            println!("{}", serde_json::to_string(&out)?);
        }
        Commands::Simulate { board, games } => {
            let catalog = board.catalog()?;
            let mut place_rng = make_rng(board.seed);
            let mut fire_rng = make_rng(board.seed.map(|s| s.wrapping_add(1)));
            let max_shots = board.rows * board.cols;

            let mut shots = Vec::with_capacity(games);
            for game in 0..games {
                let grid = GridPlacer::new(&mut place_rng)
                    .place(board.rows, board.cols, &catalog)
                    .with_context(|| format!("placing ships for game {}", game + 1))?;
                let mut defender = Defender::new(grid);
                let mut planner =
                    AttackPlanner::new(board.rows, board.cols, catalog.clone(), &mut fire_rng);
                let report = engage(&mut planner, &mut defender, max_shots)
                    .with_context(|| format!("playing game {}", game + 1))?;
                info!("game {}: {:?}", game + 1, report);
                shots.push(report.shots);
            }

            let total: usize = shots.iter().sum();
            let mean = if games == 0 {
                0.0
            } else {
                total as f64 / games as f64
            };
            let out = json!({
                "games": games,
                "total_shots": total,
                "min_shots": shots.iter().min(),
                "max_shots": shots.iter().max(),
                "mean_shots": mean,
            });
            println!("{}", serde_json::to_string(&out)?);
        }
    }
    Ok(())
}
