//! Random rectangle generation for seeding a fresh canvas.

use layoutkit_core::{Color, Rectangular};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of shapes a new session starts with.
pub const SEED_SHAPE_COUNT: usize = 10;

/// Generated widths and heights fall in `[MIN_SIZE, MAX_SIZE)`.
pub const MIN_SIZE: f64 = 100.0;
pub const MAX_SIZE: f64 = 200.0;

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;

/// Produces well-spread hues by stepping around the color wheel by the
/// golden ratio, so consecutive shapes never land on similar colors.
#[derive(Debug, Clone)]
pub struct HuePalette {
    hue: f64,
}

impl HuePalette {
    pub fn new(start: f64) -> Self {
        Self {
            hue: start.rem_euclid(1.0),
        }
    }

    pub fn next_color<R: Rng>(&mut self, rng: &mut R) -> Color {
        self.hue = (self.hue + GOLDEN_RATIO_CONJUGATE) % 1.0;
        let saturation = rng.random_range(0.55..0.9);
        let lightness = rng.random_range(0.4..0.6);
        Color::from_hsl(self.hue, saturation, lightness)
    }
}

/// Seedable source of random rectangles inside the top-left quadrant of the
/// drawing surface.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    rng: ChaCha8Rng,
    palette: HuePalette,
    surface_width: f64,
    surface_height: f64,
}

impl ShapeGenerator {
    /// Generator seeded from the thread RNG.
    pub fn new(surface_width: f64, surface_height: f64) -> Self {
        Self::with_seed(surface_width, surface_height, rand::random())
    }

    /// Deterministic generator: the same seed yields the same shapes.
    pub fn with_seed(surface_width: f64, surface_height: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let palette = HuePalette::new(rng.random());
        Self {
            rng,
            palette,
            surface_width,
            surface_height,
        }
    }

    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.surface_width = width;
        self.surface_height = height;
    }

    /// One rectangle with a fresh id.
    pub fn generate(&mut self) -> Rectangular {
        let x = self.coordinate(self.surface_width / 2.0);
        let y = self.coordinate(self.surface_height / 2.0);
        let width = self.rng.random_range(MIN_SIZE..MAX_SIZE);
        let height = self.rng.random_range(MIN_SIZE..MAX_SIZE);
        let color = self.palette.next_color(&mut self.rng);
        Rectangular::new(x, y, width, height, color)
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<Rectangular> {
        (0..count).map(|_| self.generate()).collect()
    }

    fn coordinate(&mut self, max: f64) -> f64 {
        // `random_range` panics on an empty range
        if max > 0.0 {
            self.rng.random_range(0.0..max)
        } else {
            0.0
        }
    }
}
