//! RNG oracle for deterministic random number generation.
//!
//! NPC wandering is the only random behaviour in the game. Rolls are derived
//! from the session seed, the frame counter and the NPC index, so the same
//! seed and the same input stream replay the same world.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit state, 32-bit output, a single
/// multiply followed by an xorshift and a data-dependent rotate.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// One LCG step: `state * MULTIPLIER + INCREMENT (mod 2^64)`.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Roll purposes mixed into [`compute_seed`] so rolls of one frame differ.
pub mod context {
    /// Idle threshold before a wander attempt.
    pub const WANDER_THRESHOLD: u32 = 0;
    /// Order in which wander directions are tried.
    pub const WANDER_SHUFFLE: u32 = 1;
}

/// Derives the seed for one roll.
///
/// * `game_seed` - session seed
/// * `frame` - frame counter
/// * `npc` - index of the rolling NPC
/// * `context` - purpose of the roll, see [`context`]
pub fn compute_seed(game_seed: u64, frame: u64, npc: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing.
    let mut hash = game_seed;
    hash ^= frame.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (npc as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<R, T>(rng: &R, seed: u64, items: &mut [T])
where
    R: RngOracle + ?Sized,
{
    for i in (1..items.len()).rev() {
        let roll_seed = seed ^ (i as u64).wrapping_mul(0x9e3779b97f4a7c15);
        let j = rng.range(roll_seed, 0, i as u32) as usize;
        items.swap(i, j);
    }
}
