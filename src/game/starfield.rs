//! Scrolling background stars.

use rand::Rng;

use super::Viewport;
use crate::render::{Paint, STAR_COLOR, Shape, Surface};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Pixels per frame, leftwards.
    pub speed: f64,
}

pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.random::<f64>() * viewport.width,
                y: rng.random::<f64>() * viewport.height,
                size: rng.random::<f64>() * 2.0,
                speed: rng.random::<f64>() * 0.5 + 0.1,
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Draw each star with a flickering alpha, then scroll it left. Stars
    /// leaving the left edge re-enter at the right edge at a fresh height.
    pub fn advance_and_draw<S: Surface, R: Rng>(
        &mut self,
        surface: &mut S,
        viewport: Viewport,
        rng: &mut R,
    ) {
        for star in &mut self.stars {
            let alpha = rng.random::<f64>() * 0.5 + 0.5;
            surface.draw(
                Shape::Rect { w: star.size, h: star.size },
                (star.x, star.y),
                Paint::faded(STAR_COLOR, alpha),
            );

            star.x -= star.speed;
            if star.x < 0.0 {
                star.x = viewport.width;
                star.y = rng.random::<f64>() * viewport.height;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingSurface;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn viewport() -> Viewport {
        Viewport { width: 800.0, height: 350.0 }
    }

    #[test]
    fn stars_start_inside_viewport() {
        let mut rng = Pcg32::seed_from_u64(7);
        let field = Starfield::new(150, viewport(), &mut rng);
        assert_eq!(field.len(), 150);
        for s in field.stars() {
            assert!((0.0..800.0).contains(&s.x));
            assert!((0.0..350.0).contains(&s.y));
            assert!((0.1..0.6).contains(&s.speed));
        }
    }

    #[test]
    fn star_wraps_to_right_edge() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = Starfield { stars: vec![Star { x: 0.05, y: 10.0, size: 1.0, speed: 0.2 }] };
        let mut surface = RecordingSurface::default();
        field.advance_and_draw(&mut surface, viewport(), &mut rng);
        let s = field.stars()[0];
        assert_eq!(s.x, 800.0);
        assert!((0.0..350.0).contains(&s.y));
        assert_eq!(surface.calls.len(), 1);
        let (_, at, paint) = surface.calls[0];
        assert_eq!(at, (0.05, 10.0));
        assert!((0.5..1.0).contains(&paint.alpha));
    }

    #[test]
    fn star_count_is_stable_across_frames() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = Starfield::new(150, viewport(), &mut rng);
        let mut surface = RecordingSurface::default();
        for _ in 0..500 {
            field.advance_and_draw(&mut surface, viewport(), &mut rng);
        }
        assert_eq!(field.len(), 150);
    }
}
