//! Timed trials of the four sorts over doubling array sizes.

use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::patterns;
use crate::{stable, unstable};

/// The four selectable algorithms, numbered the way the menu presents
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble = 1,
    Selection = 2,
    Insertion = 3,
    Quick = 4,
}

/// Returned when a menu selection does not name an algorithm.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid menu option: {0}")]
pub struct InvalidChoice(pub u32);

impl Algorithm {
    /// Menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
    ];

    pub fn from_choice(choice: u32) -> Result<Algorithm, InvalidChoice> {
        match choice {
            1 => Ok(Algorithm::Bubble),
            2 => Ok(Algorithm::Selection),
            3 => Ok(Algorithm::Insertion),
            4 => Ok(Algorithm::Quick),
            other => Err(InvalidChoice(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Runs the selected sort over the whole slice.
    pub fn run<T>(self, v: &mut [T])
    where
        T: Ord,
    {
        match self {
            Algorithm::Bubble => stable::bubble::sort(v),
            Algorithm::Selection => unstable::selection::sort(v),
            Algorithm::Insertion => stable::insertion::sort(v),
            Algorithm::Quick => unstable::quicksort::sort(v),
        }
    }
}

/// Trial sizing: array length is `base_size * m` for a multiplier `m`
/// starting at `start_multiplier` and doubling while below
/// `multiplier_limit`.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub base_size: usize,
    pub start_multiplier: usize,
    pub multiplier_limit: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            base_size: 1000,
            start_multiplier: 2,
            multiplier_limit: 64,
        }
    }
}

/// One timed trial. Emitted once per iteration, never mutated after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// Time since the run started, accumulated across iterations.
    pub elapsed: Duration,
    /// Array length for this trial.
    pub len: usize,
    /// Duration of the sort call alone.
    pub sort_time: Duration,
}

impl TimingSample {
    /// Array length in thousands, as the report table renders it.
    pub fn len_thousands(&self) -> usize {
        self.len / 1000
    }
}

/// Runs the full series of timed trials for `algorithm`, emitting one
/// [`TimingSample`] per iteration through `on_sample`.
///
/// Each iteration allocates a fresh array from `rng` and drops it at
/// the end of the iteration; nothing is shared across trials. The
/// sample sink is called between iterations so callers can report
/// progressively while later, larger trials are still running.
pub fn run<R, F>(algorithm: Algorithm, config: &BenchConfig, rng: &mut R, mut on_sample: F)
where
    R: Rng,
    F: FnMut(TimingSample),
{
    let run_start = Instant::now();

    let mut multiplier = config.start_multiplier;
    while multiplier < config.multiplier_limit {
        let len = config.base_size * multiplier;
        let mut data = patterns::random_uniform(rng, len);

        let sort_start = Instant::now();
        algorithm.run(&mut data);
        let sort_time = sort_start.elapsed();

        debug!(
            "{}: sorted {} elements in {:?}",
            algorithm.label(),
            len,
            sort_time
        );
        on_sample(TimingSample {
            elapsed: run_start.elapsed(),
            len,
            sort_time,
        });

        multiplier *= 2;
    }
}
