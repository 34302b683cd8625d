use std::collections::BTreeSet;

use crate::charts::ticks::TickSet;
use crate::domain::ChartRecord;

/// Names of every numeric series present in `records`, sorted.
pub fn series_names(records: &[ChartRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.series.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `(position, value)` pairs for one series. Records missing the series are
/// skipped rather than plotted as zero.
#[allow(clippy::cast_precision_loss)]
pub fn series_points(records: &[ChartRecord], name: &str) -> Vec<(f64, f64)> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record
                .series
                .get(name)
                .filter(|value| value.is_finite())
                .map(|value| (index as f64, *value))
        })
        .collect()
}

/// Position of each tick date on the x axis.
#[allow(clippy::cast_precision_loss)]
pub fn tick_positions(records: &[ChartRecord], ticks: &[String]) -> Vec<f64> {
    ticks
        .iter()
        .filter_map(|tick| records.iter().position(|record| &record.date == tick))
        .map(|index| index as f64)
        .collect()
}

/// Upper x bound for `records` plotted at their index.
#[allow(clippy::cast_precision_loss)]
pub fn x_bound(records: &[ChartRecord]) -> f64 {
    records.len().saturating_sub(1).max(1) as f64
}

/// X-axis labels for a renderer that spaces labels evenly over
/// `[0, x_bound]`. At most `max_slots` slots are used; each tick is written
/// into the slot nearest its record and the rest stay empty. When two
/// ticks land in one slot the one closer to the slot keeps it.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn axis_labels(records: &[ChartRecord], ticks: &TickSet, max_slots: usize) -> Vec<String> {
    let slots = max_slots.clamp(2, records.len().max(2));
    let step = x_bound(records) / (slots - 1) as f64;
    let mut nearest: Vec<Option<(f64, &str)>> = vec![None; slots];

    for tick in &ticks.ticks {
        let Some(index) = records.iter().position(|record| &record.date == tick) else {
            continue;
        };
        let x = index as f64;
        let slot = ((x / step).round() as usize).min(slots - 1);
        let distance = (x - slot as f64 * step).abs();
        let closer = match nearest[slot] {
            Some((best, _)) => distance < best,
            None => true,
        };
        if closer {
            nearest[slot] = Some((distance, tick.as_str()));
        }
    }

    nearest
        .into_iter()
        .map(|entry| entry.map_or_else(String::new, |(_, tick)| ticks.formatter.format(tick)))
        .collect()
}

/// Y bounds covering every point, always starting at zero.
pub fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let max = points
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max);
    [0.0, if max > 0.0 { max } else { 1.0 }]
}
