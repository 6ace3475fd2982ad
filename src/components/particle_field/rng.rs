//! Deterministic pseudo-random values for particle spawning.
//!
//! A small splitmix64 generator keeps the wasm build free of the `rand`
//! crate. The component seeds it from wall-clock time at mount; tests seed
//! it explicitly for reproducible trajectories.

/// Stateful pseudo-random generator producing `f64` values in `[0, 1)`.
pub struct FieldRng {
	state: u64,
}

impl FieldRng {
	pub fn new(seed: u64) -> Self {
		// Mixing constant decorrelates small consecutive seeds.
		Self {
			state: seed ^ 0x9e37_79b9_7f4a_7c15,
		}
	}

	fn next_u64(&mut self) -> u64 {
		self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
		let mut z = self.state;
		z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
		z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
		z ^ (z >> 31)
	}

	/// Next value in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Uniform value in `[lo, hi)`.
	pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}

	/// Uniform index in `[0, len)`. `len` must be non-zero.
	pub fn index(&mut self, len: usize) -> usize {
		(self.next_f64() * len as f64) as usize % len
	}
}
