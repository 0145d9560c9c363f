use std::fmt;

/// CSS `hsla()` color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	pub hue: f64,
	pub saturation: f64,
	pub lightness: f64,
	pub alpha: f64,
}

impl Hsla {
	/// Same color without the alpha channel, used for glow halos.
	pub fn opaque(self) -> Hsl {
		Hsl {
			hue: self.hue,
			saturation: self.saturation,
			lightness: self.lightness,
		}
	}
}

impl fmt::Display for Hsla {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"hsla({}, {}%, {}%, {})",
			self.hue, self.saturation, self.lightness, self.alpha
		)
	}
}

/// CSS `hsl()` color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	pub hue: f64,
	pub saturation: f64,
	pub lightness: f64,
}

impl fmt::Display for Hsl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
	}
}
