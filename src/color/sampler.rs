//! Painterliness-weighted color sampling
//!
//! Family proportions are interpolated between the edge and center tables
//! by the caller's painterliness, then one family is chosen by a
//! cumulative-weight walk over the fixed family order. Picking a literal
//! color from the chosen family is a plain uniform draw over its palette.

use crate::color::families::{ColorFamily, Rgb};
use crate::math::mapping::lerp;
use crate::math::random::RandomStream;

/// Sample a color family for the given painterliness
///
/// Draws `uniform() * total` and walks the families in enumeration order,
/// subtracting each interpolated weight until the draw is exhausted. The
/// trailing `White` return is a rounding fallback only; with exact
/// arithmetic the walk always terminates inside the loop.
pub fn sample_family(painterliness: f64, stream: &mut RandomStream) -> ColorFamily {
    let weights =
        ColorFamily::ALL.map(|f| lerp(f.weight_at_edge(), f.weight_at_center(), painterliness));
    let total: f64 = weights.iter().sum();

    let mut remaining = stream.uniform() * total;
    for (family, weight) in ColorFamily::ALL.iter().zip(weights.iter()) {
        remaining -= weight;
        if remaining <= 0.0 {
            return *family;
        }
    }
    ColorFamily::White
}

/// Pick a literal color uniformly from the family's palette
pub fn pick_color(family: ColorFamily, stream: &mut RandomStream) -> Rgb {
    let palette = family.palette();
    let index = stream.pick_index(palette.len());
    palette.get(index).copied().unwrap_or(Rgb::new(255, 255, 255))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SAMPLES: usize = 100_000;

    fn frequencies(painterliness: f64, seed: u64) -> HashMap<ColorFamily, f64> {
        let mut stream = RandomStream::new(seed);
        let mut counts: HashMap<ColorFamily, usize> = HashMap::new();
        for _ in 0..SAMPLES {
            *counts.entry(sample_family(painterliness, &mut stream)).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(family, count)| (family, count as f64 / SAMPLES as f64))
            .collect()
    }

    #[test]
    fn edge_frequencies_match_edge_table() {
        let freq = frequencies(0.0, 1);
        let total: f64 = ColorFamily::ALL.iter().map(|f| f.weight_at_edge()).sum();
        for family in ColorFamily::ALL {
            let expected = family.weight_at_edge() / total;
            let observed = freq.get(&family).copied().unwrap_or(0.0);
            assert!(
                (observed - expected).abs() < 0.01,
                "{family:?}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    #[test]
    fn center_frequencies_match_center_table() {
        let freq = frequencies(1.0, 2);
        let total: f64 = ColorFamily::ALL.iter().map(|f| f.weight_at_center()).sum();
        for family in ColorFamily::ALL {
            let expected = family.weight_at_center() / total;
            let observed = freq.get(&family).copied().unwrap_or(0.0);
            assert!(
                (observed - expected).abs() < 0.01,
                "{family:?}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    #[test]
    fn zero_weight_families_never_appear() {
        let edge = frequencies(0.0, 3);
        assert!(!edge.contains_key(&ColorFamily::Green));
        assert!(!edge.contains_key(&ColorFamily::Orange));

        let center = frequencies(1.0, 4);
        assert!(!center.contains_key(&ColorFamily::White));
        assert!(!center.contains_key(&ColorFamily::Black));
    }

    #[test]
    fn midpoint_interpolates_between_tables() {
        let freq = frequencies(0.5, 5);
        // White is 10 at the edge and 0 at the center: expect 5/20
        let observed = freq.get(&ColorFamily::White).copied().unwrap_or(0.0);
        assert!(
            (observed - 0.25).abs() < 0.01,
            "white at painterliness 0.5: observed {observed:.4}, expected 0.25"
        );
    }

    #[test]
    fn picked_colors_come_from_the_family_palette() {
        let mut stream = RandomStream::new(6);
        for _ in 0..1000 {
            let color = pick_color(ColorFamily::Red, &mut stream);
            assert!(ColorFamily::Red.palette().contains(&color));
        }
    }

    #[test]
    fn all_palette_entries_are_eventually_picked() {
        let mut stream = RandomStream::new(7);
        let mut seen = Vec::new();
        for _ in 0..1000 {
            let color = pick_color(ColorFamily::Blue, &mut stream);
            if !seen.contains(&color) {
                seen.push(color);
            }
        }
        assert_eq!(seen.len(), ColorFamily::Blue.palette().len());
    }
}
