//! Randomized floating shapes drawn behind the hero section.

use std::ops::RangeInclusive;
use std::rc::Rc;

use rand::Rng;
use serde::Serialize;

pub const DECOR_COUNT: usize = 6;
pub const SIZE_RANGE_PX: RangeInclusive<f64> = 50.0..=150.0;
pub const POSITION_RANGE_PERCENT: RangeInclusive<f64> = 0.0..=100.0;
pub const DURATION_RANGE_SECS: RangeInclusive<f64> = 10.0..=30.0;
pub const DELAY_RANGE_SECS: RangeInclusive<f64> = 0.0..=5.0;

/// Whether the field is drawn once per mounted view or again on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecorMode {
    #[default]
    Memoized,
    PerRender,
}

impl DecorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memoized => "memoized",
            Self::PerRender => "per-render",
        }
    }

    pub fn is_memoized(self) -> bool {
        matches!(self, Self::Memoized)
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memoized" => Some(Self::Memoized),
            "per-render" => Some(Self::PerRender),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FloatingElement {
    pub id: usize,
    /// Diameter in px.
    pub size: f64,
    /// Left offset, percent of the container.
    pub x: f64,
    /// Top offset, percent of the container.
    pub y: f64,
    /// Seconds per float cycle.
    pub duration: f64,
    /// Seconds before the first cycle starts.
    pub delay: f64,
}

pub fn generate_field<R: Rng + ?Sized>(rng: &mut R) -> Vec<FloatingElement> {
    (0..DECOR_COUNT)
        .map(|id| FloatingElement {
            id,
            size: rng.gen_range(SIZE_RANGE_PX),
            x: rng.gen_range(POSITION_RANGE_PERCENT),
            y: rng.gen_range(POSITION_RANGE_PERCENT),
            duration: rng.gen_range(DURATION_RANGE_SECS),
            delay: rng.gen_range(DELAY_RANGE_SECS),
        })
        .collect()
}

pub fn generate_field_from_entropy() -> Vec<FloatingElement> {
    generate_field(&mut rand::thread_rng())
}

/// Picks the field for this render: the cached one in memoized mode, a fresh
/// draw otherwise. `draw` runs at most once.
pub fn resolve_field(
    mode: DecorMode,
    cached: Option<Rc<Vec<FloatingElement>>>,
    draw: impl FnOnce() -> Vec<FloatingElement>,
) -> Rc<Vec<FloatingElement>> {
    match cached {
        Some(field) if mode.is_memoized() => field,
        _ => Rc::new(draw()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_in_range(element: &FloatingElement) {
        assert!(SIZE_RANGE_PX.contains(&element.size), "size {}", element.size);
        assert!(POSITION_RANGE_PERCENT.contains(&element.x), "x {}", element.x);
        assert!(POSITION_RANGE_PERCENT.contains(&element.y), "y {}", element.y);
        assert!(
            DURATION_RANGE_SECS.contains(&element.duration),
            "duration {}",
            element.duration
        );
        assert!(DELAY_RANGE_SECS.contains(&element.delay), "delay {}", element.delay);
    }

    #[test]
    fn every_field_has_six_in_range_elements() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let field = generate_field(&mut rng);

            assert_eq!(field.len(), DECOR_COUNT);
            field.iter().for_each(assert_in_range);
        }
    }

    #[test]
    fn ids_are_sequential() {
        let field = generate_field(&mut StdRng::seed_from_u64(7));
        let ids: Vec<usize> = field.iter().map(|element| element.id).collect();

        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn consecutive_draws_differ() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = generate_field(&mut rng);
        let second = generate_field(&mut rng);

        assert_ne!(first, second);
    }

    #[test]
    fn entropy_field_is_in_range() {
        let field = generate_field_from_entropy();

        assert_eq!(field.len(), DECOR_COUNT);
        field.iter().for_each(assert_in_range);
    }

    #[test]
    fn memoized_mode_reuses_the_cached_field() {
        let cached = Rc::new(generate_field(&mut StdRng::seed_from_u64(1)));
        let mut draws = 0;

        let field = resolve_field(DecorMode::Memoized, Some(cached.clone()), || {
            draws += 1;
            generate_field(&mut StdRng::seed_from_u64(2))
        });

        assert!(Rc::ptr_eq(&field, &cached));
        assert_eq!(draws, 0);
    }

    #[test]
    fn per_render_mode_draws_exactly_once() {
        let mut draws = 0;

        let field = resolve_field(DecorMode::PerRender, None, || {
            draws += 1;
            generate_field(&mut StdRng::seed_from_u64(3))
        });

        assert_eq!(draws, 1);
        assert_eq!(field.len(), DECOR_COUNT);
    }

    #[test]
    fn decor_mode_parses_known_names() {
        assert_eq!(DecorMode::from_str("Per-Render"), Some(DecorMode::PerRender));
        assert_eq!(DecorMode::from_str("memoized"), Some(DecorMode::Memoized));
        assert_eq!(DecorMode::from_str("always"), None);
        assert_eq!(DecorMode::PerRender.as_str(), "per-render");
    }
}
