const A: u64 = 1_664_525;
const C: u64 = 1_013_904_223;
const M: u64 = 1 << 32;

/// Linear congruential generator with a fixed seed, so tie-breaking jitter
/// is the same on every run.
#[derive(Clone, Debug)]
pub struct Lcg {
	state: u64,
}

impl Default for Lcg {
	fn default() -> Self {
		Self { state: 1 }
	}
}

impl Lcg {
	/// Next value in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		self.state = (A * self.state + C) % M;
		self.state as f64 / M as f64
	}

	/// Tiny nudge used to separate coincident nodes.
	pub fn jiggle(&mut self) -> f64 {
		(self.next_f64() - 0.5) * 1e-6
	}
}
