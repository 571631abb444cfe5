//! The Microsoft C runtime `rand()` generator used by the classic deal numbers.
//!
//! ## Key Features
//!
//! - **Bit-exact**: Same game number produces the same draws as the reference
//!   deal generator, so externally generated deals and replayed deals agree
//! - **Tiny state**: one 31-bit word, `Copy`
//! - **`rand` compatible**: implements [`RngCore`] and [`SeedableRng`]
//!
//! ## Usage
//!
//! ```
//! use rust_freecell::core::MsRng;
//!
//! let mut rng = MsRng::new(1);
//! assert_eq!(rng.draw(), 41);
//! assert_eq!(rng.draw(), 18467);
//! ```

use rand::{Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const MULTIPLIER: u32 = 214_013;
const INCREMENT: u32 = 2_531_011;
const STATE_MASK: u32 = 0x7FFF_FFFF;

/// Linear-congruential generator: `state = state * 214013 + 2531011`,
/// masked to 31 bits, each draw returning `state >> 16`.
///
/// Draws are always in `0..=32767`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsRng {
    state: u32,
}

impl MsRng {
    /// Seed with a game number.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the next draw.
    ///
    /// Only the low 31 bits survive the mask, so wrapping 32-bit arithmetic
    /// gives the same result as the 64-bit reference.
    #[inline]
    pub fn draw(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;
        self.state >> 16
    }

    /// Current internal state, for checkpointing.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for MsRng {
    fn next_u32(&mut self) -> u32 {
        self.draw()
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.draw())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(2) {
            let bytes = (self.draw() as u16).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MsRng {
    type Seed = [u8; 4];

    /// Little-endian game number.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
