use crate::forecast::ForecastSample;
use crate::forecast::severity::PaletteColor;

/// Stops closer than this are treated as sitting at the same position.
pub const COLOCATION_EPSILON: f32 = 1e-4;

/// A color anchor along the arc; `position` is a fraction of the full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub color: PaletteColor,
}

/// Maps time-ordered samples onto color stops spanning `[arc_start, arc_end]`.
///
/// Each sample lands at `arc_start + (hour / 24) * (arc_end - arc_start)`, colored by
/// its severity bucket. Stops that end up within [`COLOCATION_EPSILON`] of each other
/// collapse into the one computed last. The result always begins exactly at
/// `arc_start` and ends exactly at `arc_end`, borrowing the first and last sample
/// colors when no sample falls on a boundary. An empty input yields no stops.
pub fn build_gradient_stops(samples: &[ForecastSample], arc_start: f32, arc_end: f32) -> Vec<GradientStop> {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Vec::new();
    };
    let span = arc_end - arc_start;

    // (computation order, stop)
    let mut computed: Vec<(usize, GradientStop)> = samples
        .iter()
        .enumerate()
        .map(|(order, sample)| {
            let position = (arc_start + sample.fractional_hour() / 24.0 * span).clamp(arc_start, arc_end);
            (order, GradientStop { position, color: sample.bucket().color() })
        })
        .collect();
    computed.sort_by(|a, b| a.1.position.total_cmp(&b.1.position).then(a.0.cmp(&b.0)));

    let mut stops: Vec<(usize, GradientStop)> = Vec::with_capacity(computed.len() + 2);
    for (order, stop) in computed {
        match stops.last_mut() {
            Some(kept) if stop.position - kept.1.position < COLOCATION_EPSILON => {
                if order > kept.0 {
                    *kept = (order, stop);
                }
            }
            _ => stops.push((order, stop)),
        }
    }
    let mut stops: Vec<GradientStop> = stops.into_iter().map(|(_, stop)| stop).collect();

    match stops.first_mut() {
        Some(head) if head.position - arc_start < COLOCATION_EPSILON => head.position = arc_start,
        _ => stops.insert(0, GradientStop { position: arc_start, color: first.bucket().color() }),
    }

    let count = stops.len();
    match stops.last_mut() {
        Some(tail) if count > 1 && arc_end - tail.position < COLOCATION_EPSILON => tail.position = arc_end,
        _ => stops.push(GradientStop { position: arc_end, color: last.bucket().color() }),
    }

    stops
}

/// Color at `position`, linearly blended between the surrounding stops. Positions
/// outside the stop range take the nearest end color.
pub fn color_at(stops: &[GradientStop], position: f32) -> Option<[u8; 3]> {
    let first = stops.first()?;
    let last = stops.last()?;
    if position <= first.position {
        return Some(first.color.rgb());
    }
    if position >= last.position {
        return Some(last.color.rgb());
    }

    let upper = stops.iter().position(|s| s.position >= position)?;
    let (a, b) = (stops[upper - 1], stops[upper]);
    let t = (position - a.position) / (b.position - a.position);
    let (ca, cb) = (a.color.rgb(), b.color.rgb());
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Some([lerp(ca[0], cb[0]), lerp(ca[1], cb[1]), lerp(ca[2], cb[2])])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{parse_samples, RawSample};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn samples(entries: &[(&str, f32)]) -> Vec<ForecastSample> {
        let raw: Vec<RawSample> = entries
            .iter()
            .map(|&(time, uv)| RawSample::new(format!("2024-06-21T{time}"), uv))
            .collect();
        parse_samples(&raw)
    }

    fn assert_well_formed(stops: &[GradientStop], arc_start: f32, arc_end: f32) {
        assert!(!stops.is_empty());
        assert_eq!(stops.first().unwrap().position, arc_start);
        assert_eq!(stops.last().unwrap().position, arc_end);
        assert!(stops.windows(2).all(|w| w[0].position < w[1].position), "{stops:?}");
    }

    #[test]
    fn midnight_noon_midnight_day() {
        let day = samples(&[("00:00", 0.0), ("12:00", 5.5), ("23:59", 0.0)]);
        let stops = build_gradient_stops(&day, 0.125, 0.875);
        assert_well_formed(&stops, 0.125, 0.875);

        assert_eq!(stops[0].color, PaletteColor::Green);
        let noon = stops.iter().find(|s| (s.position - 0.5).abs() < 1e-6).unwrap();
        // 5.5 rounds to 6
        assert_eq!(noon.color, PaletteColor::Orange);
        assert_eq!(stops.last().unwrap().color, PaletteColor::Green);
        assert!(stops.iter().filter(|s| s.position > 0.5).all(|s| s.color == PaletteColor::Green));
    }

    #[test]
    fn boundaries_are_inserted_with_end_sample_colors() {
        let day = samples(&[("08:00", 3.0), ("16:00", 8.0)]);
        let stops = build_gradient_stops(&day, 0.0, 1.0);
        assert_eq!(stops.len(), 4);
        assert_well_formed(&stops, 0.0, 1.0);
        assert_eq!(stops[0].color, PaletteColor::Yellow);
        assert_eq!(stops[3].color, PaletteColor::Red);
        assert!((stops[1].position - 1.0 / 3.0).abs() < 1e-6);
        assert!((stops[2].position - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn colocated_samples_keep_the_later_color() {
        // 10:00 and 10:00:30 land on the same minute
        let day = samples(&[("06:00", 0.0), ("10:00:00", 2.0), ("10:00:30", 9.0), ("18:00", 0.0)]);
        let stops = build_gradient_stops(&day, 0.0, 1.0);
        assert_well_formed(&stops, 0.0, 1.0);
        let at_ten: Vec<_> = stops.iter().filter(|s| (s.position - 10.0 / 24.0).abs() < 1e-3).collect();
        assert_eq!(at_ten.len(), 1);
        assert_eq!(at_ten[0].color, PaletteColor::Red);
    }

    #[test]
    fn later_sample_wins_even_when_it_sorts_first() {
        // On a 0.1 wide arc one minute is well under the colocation epsilon
        let day = samples(&[("12:01", 1.0), ("12:00", 12.0)]);
        let stops = build_gradient_stops(&day, 0.0, 0.1);
        assert_well_formed(&stops, 0.0, 0.1);
        assert_eq!(stops.len(), 3);
        assert!((stops[1].position - 0.05).abs() < 1e-6);
        assert_eq!(stops[1].color, PaletteColor::Purple);
    }

    #[test]
    fn samples_on_the_boundaries_are_snapped_not_duplicated() {
        let day = samples(&[("00:00", 11.0), ("12:00", 4.0)]);
        let stops = build_gradient_stops(&day, 0.25, 0.75);
        assert_well_formed(&stops, 0.25, 0.75);
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].color, PaletteColor::Purple);
        assert_eq!(stops[2].color, PaletteColor::Yellow);
    }

    #[test]
    fn single_sample_spans_the_whole_arc() {
        let day = samples(&[("00:00", 6.0)]);
        let stops = build_gradient_stops(&day, 0.125, 0.875);
        assert_well_formed(&stops, 0.125, 0.875);
        assert_eq!(stops.len(), 2);
        assert!(stops.iter().all(|s| s.color == PaletteColor::Orange));
    }

    #[test]
    fn empty_input_gives_no_stops() {
        assert!(build_gradient_stops(&[], 0.125, 0.875).is_empty());
        assert_eq!(color_at(&[], 0.5), None);
    }

    #[test]
    fn blends_between_stops() {
        let stops = [
            GradientStop { position: 0.0, color: PaletteColor::Green },
            GradientStop { position: 0.5, color: PaletteColor::Red },
            GradientStop { position: 1.0, color: PaletteColor::Red },
        ];
        assert_eq!(color_at(&stops, -1.0), Some(PaletteColor::Green.rgb()));
        assert_eq!(color_at(&stops, 0.0), Some(PaletteColor::Green.rgb()));
        assert_eq!(color_at(&stops, 0.5), Some(PaletteColor::Red.rgb()));
        assert_eq!(color_at(&stops, 0.75), Some(PaletteColor::Red.rgb()));
        let [g, r] = [PaletteColor::Green.rgb(), PaletteColor::Red.rgb()];
        let mid = color_at(&stops, 0.25).unwrap();
        for i in 0..3 {
            let lo = g[i].min(r[i]);
            let hi = g[i].max(r[i]);
            assert!(mid[i] >= lo && mid[i] <= hi);
        }
    }

    fn sample_at_minute(minute: u32, uv_index: f32) -> ForecastSample {
        let timestamp = NaiveDate::from_ymd_opt(2024, 6, 21)
            .unwrap()
            .and_hms_opt(minute / 60, minute % 60, 0)
            .unwrap();
        ForecastSample { timestamp, uv_index }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn stops_are_well_formed_for_any_day(
            entries in prop::collection::vec((0u32..1440, 0.0f32..15.0), 1..12),
            sorted in any::<bool>(),
            arc_start in 0.0f32..0.9,
            span in prop_oneof![1e-6f32..1e-4, 1e-4f32..1.0],
        ) {
            let mut entries = entries;
            if sorted {
                entries.sort_by_key(|&(minute, _)| minute);
            }
            let day: Vec<ForecastSample> = entries.iter().map(|&(m, uv)| sample_at_minute(m, uv)).collect();
            let arc_end = (arc_start + span).min(1.0);
            prop_assume!(arc_end > arc_start);

            let stops = build_gradient_stops(&day, arc_start, arc_end);
            prop_assert!(!stops.is_empty());
            prop_assert_eq!(stops.first().unwrap().position, arc_start);
            prop_assert_eq!(stops.last().unwrap().position, arc_end);
            prop_assert!(stops.windows(2).all(|w| w[0].position < w[1].position), "{:?}", stops);
            prop_assert!(stops.iter().all(|s| s.position >= arc_start && s.position <= arc_end));
        }
    }
}
