//! Time-gated pipe factory

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pipe::PipePair;
use crate::tuning::Tuning;

/// Spawns a pipe pair every `pipe_interval_ms` of game time, at a random
/// vertical offset. The generator is seeded, so a run is reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeSpawner {
    rng: Pcg32,
    /// Game time of the previous spawn (None until the first one)
    last_spawn_ms: Option<u64>,
}

impl PipeSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_spawn_ms: None,
        }
    }

    pub fn last_spawn_ms(&self) -> Option<u64> {
        self.last_spawn_ms
    }

    /// True once at least `interval_ms` has passed since the last spawn
    pub fn is_due(&self, now_ms: u64, interval_ms: u64) -> bool {
        match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= interval_ms,
        }
    }

    /// Uniform offset in `-range..=range`
    pub fn sample_offset(&mut self, range: i32) -> i32 {
        let range = range.max(0);
        self.rng.random_range(-range..=range)
    }

    /// Create a pair if one is due. Callers only invoke this while flying.
    pub fn try_spawn(&mut self, now_ms: u64, id: u32, tuning: &Tuning) -> Option<PipePair> {
        if !self.is_due(now_ms, tuning.pipe_interval_ms) {
            return None;
        }

        let offset = self.sample_offset(tuning.pipe_offset_range);
        self.last_spawn_ms = Some(now_ms);

        Some(PipePair::new(
            id,
            tuning.pipe_spawn_x(),
            tuning.center_y() + offset,
            tuning.pipe_size,
            tuning.pipe_gap,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_spawn_is_immediate_then_gated() {
        let tuning = Tuning::default();
        let mut spawner = PipeSpawner::new(42);

        assert!(spawner.try_spawn(10_000, 1, &tuning).is_some());
        assert!(spawner.try_spawn(10_020, 2, &tuning).is_none());
        assert!(spawner.try_spawn(11_480, 2, &tuning).is_none());
        assert!(spawner.try_spawn(11_500, 2, &tuning).is_some());
        assert_eq!(spawner.last_spawn_ms(), Some(11_500));
    }

    #[test]
    fn test_spawned_pair_is_within_range() {
        let tuning = Tuning::default();
        let mut spawner = PipeSpawner::new(7);
        for i in 0..200u64 {
            let pair = spawner
                .try_spawn(i * tuning.pipe_interval_ms, i as u32, &tuning)
                .unwrap();
            let base_y = pair.gap_top() + tuning.pipe_gap / 2;
            assert!((268..=468).contains(&base_y));
            assert_eq!(pair.gap_bottom() - pair.gap_top(), 150);
            assert_eq!(pair.x(), 864);
        }
    }

    #[test]
    fn test_same_seed_same_offsets() {
        let mut a = PipeSpawner::new(99);
        let mut b = PipeSpawner::new(99);
        let xs: Vec<i32> = (0..20).map(|_| a.sample_offset(100)).collect();
        let ys: Vec<i32> = (0..20).map(|_| b.sample_offset(100)).collect();
        assert_eq!(xs, ys);
    }
}
