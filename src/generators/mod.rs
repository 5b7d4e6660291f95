use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::maze::{Coord, Direction, Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// How the backtracker picks among the directions still open to it.
///
/// A roll is drawn uniformly from `0..=max_roll` and mapped to a direction by the
/// exclusive upper bounds in `thresholds` (west, north, east; south takes the rest).
/// Rolls landing on an unavailable direction are rejected and redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionWeights {
    thresholds: [u32; 3],
    max_roll: u32,
}

impl DirectionWeights {
    /// West 10, north 40, east 10, south 41 out of 101 rolls.
    /// Favours long vertical corridors.
    pub const WEIGHTED: DirectionWeights = DirectionWeights {
        thresholds: [10, 50, 60],
        max_roll: 100,
    };

    /// Each direction equally likely.
    pub const UNIFORM: DirectionWeights = DirectionWeights {
        thresholds: [1, 2, 3],
        max_roll: 3,
    };

    /// Maps one roll to a direction without looking at availability.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Direction {
        let roll = rng.random_range(0..=self.max_roll);
        match self.thresholds.iter().position(|&upper| roll < upper) {
            Some(0) => Direction::West,
            Some(1) => Direction::North,
            Some(2) => Direction::East,
            _ => Direction::South,
        }
    }

    /// Rejection-samples until the drawn direction is marked available.
    ///
    /// At least one entry of `available` must be `true`.
    pub fn pick<R: Rng>(&self, available: [bool; 4], rng: &mut R) -> Direction {
        debug_assert!(available.contains(&true), "no direction to pick from");
        loop {
            let direction = self.sample(rng);
            if available[direction as usize] {
                return direction;
            }
        }
    }
}

impl Default for DirectionWeights {
    fn default() -> Self {
        DirectionWeights::WEIGHTED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Generator {
    /// Backtracker with the vertical-corridor weighting.
    Weighted,
    /// Backtracker choosing directions uniformly.
    Uniform,
}

impl Generator {
    pub fn weights(&self) -> DirectionWeights {
        match self {
            Generator::Weighted => DirectionWeights::WEIGHTED,
            Generator::Uniform => DirectionWeights::UNIFORM,
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Weighted => write!(f, "Weighted Recursive Backtracker"),
            Generator::Uniform => write!(f, "Uniform Recursive Backtracker"),
        }
    }
}

/// Carves a perfect maze into `maze` starting from the cell position `start`.
/// Returns the number of passages carved.
pub fn generate_maze(
    maze: &mut Maze,
    generator: Generator,
    start: Coord,
    seed: Option<u64>,
) -> usize {
    let mut rng = get_rng(seed);
    let carved = recursive_backtrack(maze, start, generator.weights(), &mut rng);
    tracing::debug!(
        "[generate] {} carved {} passages in a {}x{} grid",
        generator,
        carved,
        maze.height(),
        maze.width()
    );
    carved
}
