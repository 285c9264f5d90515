//! Fans out points that share identical coordinates.
//!
//! The first point at a location keeps its position. The others are placed
//! on a circle around it at evenly spaced angles, with the radius growing by
//! one step for every ring of [`POINTS_PER_RING`] points.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use resolve_map_survey_models::SurveyFeature;

/// Radius step between rings, in degrees (about 22 m in Lebanon).
pub const STAGGER_RADIUS_DEG: f64 = 0.0002;

/// Points placed on each ring before the radius grows.
pub const POINTS_PER_RING: usize = 8;

/// Staggers point features sharing exact coordinates, in place.
///
/// Deterministic for a given input order. Non-point features are left
/// untouched. Returns the number of features moved.
#[allow(clippy::cast_precision_loss)]
pub fn stagger_duplicate_coordinates(features: &mut [SurveyFeature]) -> usize {
    let mut groups: BTreeMap<(u64, u64), Vec<usize>> = BTreeMap::new();

    for (idx, feature) in features.iter().enumerate() {
        if let Some((lng, lat)) = feature.point() {
            groups
                .entry((lng.to_bits(), lat.to_bits()))
                .or_default()
                .push(idx);
        }
    }

    let mut moved = 0;

    for ((lng_bits, lat_bits), indices) in groups {
        if indices.len() < 2 {
            continue;
        }

        let (lng, lat) = (f64::from_bits(lng_bits), f64::from_bits(lat_bits));
        let count = indices.len() as f64;

        for (position, idx) in indices.into_iter().enumerate().skip(1) {
            let angle = position as f64 / count * TAU;
            let radius = STAGGER_RADIUS_DEG * position.div_ceil(POINTS_PER_RING) as f64;
            features[idx].set_point(lng + radius * angle.cos(), lat + radius * angle.sin());
            moved += 1;
        }
    }

    if moved > 0 {
        log::debug!("Staggered {moved} overlapping points");
    }

    moved
}
