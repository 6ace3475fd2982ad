//! Colors and palettes for the particle field.

/// RGB color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// A fixed list of particle colors, picked by index at spawn time.
#[derive(Clone, Debug)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	/// Single-entry palette: every particle is the same blue.
	pub fn solid_blue() -> Self {
		Self {
			colors: vec![Color::rgb(0x42, 0x85, 0xf4)],
		}
	}

	/// Four-color rotation - blue, red, amber, green.
	pub fn brand() -> Self {
		Self {
			colors: vec![
				Color::rgb(0x42, 0x85, 0xf4), // Blue
				Color::rgb(0xea, 0x43, 0x35), // Red
				Color::rgb(0xfb, 0xbc, 0x05), // Amber
				Color::rgb(0x34, 0xa8, 0x53), // Green
			],
		}
	}

	/// Six-entry palette weighted towards blues, with two accents.
	pub fn blue_biased() -> Self {
		Self {
			colors: vec![
				Color::rgb(0x42, 0x85, 0xf4), // Blue
				Color::rgb(0x5c, 0x9c, 0xff), // Sky
				Color::rgb(0x33, 0x67, 0xd6), // Indigo
				Color::rgb(0x8a, 0xb4, 0xf8), // Powder
				Color::rgb(0xea, 0x43, 0x35), // Red accent
				Color::rgb(0x34, 0xa8, 0x53), // Green accent
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}
