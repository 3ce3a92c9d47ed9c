use log::debug;
use rand::distributions::Standard;
use rand::Rng;
use crate::config::BoardConfig;
use crate::core::{Grid, MAX_GENERATION_ATTEMPTS};

/// Draws one uniform sample in [0, 1) per cell, row-major; a cell starts lit
/// iff its sample is strictly below the configured probability.
pub fn generate<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Grid {
    let lit_probability = config.lit_probability();
    Grid::from_fn(config.rows(), config.cols(), |_| {
        let sample: f64 = rng.sample(Standard);
        sample < lit_probability
    })
}

/// Like `generate`, but redraws boards that are already won.
/// Gives up after `MAX_GENERATION_ATTEMPTS` and returns the last draw, which
/// is the only possible outcome when the probability is zero.
pub fn generate_unsolved<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Grid {
    let mut grid = generate(config, rng);
    if config.lit_probability() <= 0.0 {
        return grid;
    }
    for attempt in 1..MAX_GENERATION_ATTEMPTS {
        if !grid.has_won() {
            break;
        }
        debug!("generated board was already won, redrawing (attempt {})", attempt + 1);
        grid = generate(config, rng);
    }
    grid
}
