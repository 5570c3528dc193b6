/// Linear mapping from a numeric domain onto a visual range.
///
/// Outputs are clamped to the range. A degenerate domain (both bounds equal)
/// maps everything to the middle of the range instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl LinearScale {
	/// Create a scale mapping `domain` onto `range`.
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	/// Input bounds.
	pub fn domain(&self) -> (f64, f64) {
		self.domain
	}

	/// Output bounds.
	pub fn range(&self) -> (f64, f64) {
		self.range
	}

	/// Map `value` into the range.
	pub fn apply(&self, value: f64) -> f64 {
		let ((d0, d1), (r0, r1)) = (self.domain, self.range);
		let t = if d1 == d0 {
			0.5
		} else {
			((value - d0) / (d1 - d0)).clamp(0.0, 1.0)
		};
		r0 + (r1 - r0) * t
	}
}
