//! Aggregate statistics over a dive log.
//!
//! All functions are pure passes over a slice of entries. Nothing is cached
//! between calls, so repeated calls on the same input give identical results.

use std::collections::{BTreeMap, HashMap};

use chrono::{Days, NaiveDate};

use crate::config::StatsConfig;
use crate::error::DiveLogError;
use crate::models::{DiveEntry, FishingType};
use crate::parse::{month_key, parse_date};

/// One row of a ranked breakdown (species, fishing method, month).
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct Tally {
    pub key: String,
    pub count: u64,
}

/// Total logged time in minutes. Zero for an empty log.
pub fn total_duration(entries: &[DiveEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.duration)).sum()
}

/// Mean depth across all entries.
pub fn average_depth(entries: &[DiveEntry]) -> Result<f64, DiveLogError> {
    bounded_mean(entries, "average_depth", |e| e.depth)
}

/// Longest single dive in minutes.
pub fn max_duration(entries: &[DiveEntry]) -> Result<u32, DiveLogError> {
    entries
        .iter()
        .map(|e| e.duration)
        .max()
        .ok_or_else(|| DiveLogError::empty("max_duration"))
}

pub fn max_depth(entries: &[DiveEntry]) -> Result<f64, DiveLogError> {
    if entries.is_empty() {
        return Err(DiveLogError::empty("max_depth"));
    }
    Ok(entries.iter().map(|e| e.depth).fold(f64::MIN, f64::max))
}

pub fn average_visibility(entries: &[DiveEntry]) -> Result<f64, DiveLogError> {
    bounded_mean(entries, "average_visibility", |e| e.visibility)
}

pub fn average_water_temperature(entries: &[DiveEntry]) -> Result<f64, DiveLogError> {
    bounded_mean(entries, "average_water_temperature", |e| {
        e.weather.water_temperature
    })
}

/// Mean rating over the entries that carry one.
pub fn average_rating(entries: &[DiveEntry]) -> Result<f64, DiveLogError> {
    let (sum, count) = entries
        .iter()
        .filter_map(|e| e.rating)
        .fold((0u64, 0u64), |(sum, count), r| {
            (sum + u64::from(r), count + 1)
        });

    if count == 0 {
        return Err(DiveLogError::empty("average_rating"));
    }
    Ok(sum as f64 / count as f64)
}

/// Number of fish caught across every entry.
pub fn total_fish(entries: &[DiveEntry]) -> u64 {
    entries
        .iter()
        .flat_map(|e| e.catches.iter())
        .map(|c| u64::from(c.quantity))
        .sum()
}

/// Fish caught per species, most caught first.
pub fn fish_by_species(entries: &[DiveEntry]) -> Vec<Tally> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for c in entries.iter().flat_map(|e| e.catches.iter()) {
        *counts.entry(c.species.as_str()).or_default() += u64::from(c.quantity);
    }
    rank(counts.into_iter().map(|(k, v)| (k.to_string(), v)))
}

/// Dive count per fishing type, most used first.
pub fn dives_by_method(entries: &[DiveEntry]) -> Vec<Tally> {
    let mut counts: HashMap<FishingType, u64> = HashMap::new();
    for e in entries {
        *counts.entry(e.fishing_type).or_default() += 1;
    }
    rank(counts.into_iter().map(|(k, v)| (k.as_str().to_string(), v)))
}

/// Dive count per `YYYY-MM`, oldest month first.
pub fn dives_by_month(entries: &[DiveEntry]) -> Result<Vec<Tally>, DiveLogError> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for e in entries {
        let date = parse_date(&e.date)?;
        *counts.entry(month_key(date)).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .map(|(key, count)| Tally { key, count })
        .collect())
}

/// Entries dated after `today - window_days`. Future-dated entries count.
pub fn recent_activity(
    entries: &[DiveEntry],
    today: NaiveDate,
    window_days: u32,
) -> Result<u64, DiveLogError> {
    let cutoff = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut count = 0;
    for e in entries {
        if parse_date(&e.date)? > cutoff {
            count += 1;
        }
    }
    Ok(count)
}

/// Everything the statistics screen shows, computed in one call.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct LogSummary {
    pub total_dives: u64,
    pub total_fish: u64,
    /// Total time in water, minutes
    pub total_duration_min: u64,
    pub avg_depth: f64,
    pub max_depth: f64,
    pub avg_visibility: f64,
    /// Unit label for depth and visibility figures
    pub distance_unit: String,
    /// Mean of the rated entries, 0 when none are rated
    pub avg_rating: f64,
    pub avg_water_temp_c: f64,
    pub fish_by_species: Vec<Tally>,
    pub top_species: Vec<Tally>,
    pub dives_by_method: Vec<Tally>,
    pub dives_by_month: Vec<Tally>,
    pub recent_activity: u64,
}

impl LogSummary {
    /// Compute the summary for `entries` as seen on `today`.
    ///
    /// An empty log yields an all-zero summary rather than an error.
    pub fn compute(
        entries: &[DiveEntry],
        today: NaiveDate,
        config: &StatsConfig,
    ) -> Result<Self, DiveLogError> {
        if entries.is_empty() {
            return Ok(Self::empty(config));
        }

        let units = config.units;
        let fish_by_species = fish_by_species(entries);
        let top_species = fish_by_species
            .iter()
            .take(config.top_species_limit as usize)
            .cloned()
            .collect();

        let summary = LogSummary {
            total_dives: entries.len() as u64,
            total_fish: total_fish(entries),
            total_duration_min: total_duration(entries),
            avg_depth: units.depth_from_m(average_depth(entries)?),
            max_depth: units.depth_from_m(max_depth(entries)?),
            avg_visibility: units.depth_from_m(average_visibility(entries)?),
            distance_unit: units.depth_label().to_string(),
            avg_rating: average_rating(entries).unwrap_or(0.0),
            avg_water_temp_c: average_water_temperature(entries)?,
            fish_by_species,
            top_species,
            dives_by_method: dives_by_method(entries),
            dives_by_month: dives_by_month(entries)?,
            recent_activity: recent_activity(entries, today, config.recent_window_days)?,
        };

        tracing::debug!(
            total_dives = summary.total_dives,
            total_fish = summary.total_fish,
            recent = summary.recent_activity,
            "computed dive log summary"
        );
        Ok(summary)
    }

    fn empty(config: &StatsConfig) -> Self {
        LogSummary {
            total_dives: 0,
            total_fish: 0,
            total_duration_min: 0,
            avg_depth: 0.0,
            max_depth: 0.0,
            avg_visibility: 0.0,
            distance_unit: config.units.depth_label().to_string(),
            avg_rating: 0.0,
            avg_water_temp_c: 0.0,
            fish_by_species: Vec::new(),
            top_species: Vec::new(),
            dives_by_method: Vec::new(),
            dives_by_month: Vec::new(),
            recent_activity: 0,
        }
    }
}

/// Arithmetic mean, clamped to the observed extremes so rounding in the
/// running sum can never push it outside `[min, max]`.
fn bounded_mean<F>(
    entries: &[DiveEntry],
    statistic: &'static str,
    value: F,
) -> Result<f64, DiveLogError>
where
    F: Fn(&DiveEntry) -> f64,
{
    if entries.is_empty() {
        return Err(DiveLogError::empty(statistic));
    }

    let mut sum = 0.0;
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for entry in entries {
        let v = value(entry);
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }

    let mean = sum / entries.len() as f64;
    if min <= max {
        Ok(mean.clamp(min, max))
    } else {
        // every value was NaN
        Ok(mean)
    }
}

fn rank(counts: impl Iterator<Item = (String, u64)>) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = counts.map(|(key, count)| Tally { key, count }).collect();
    tallies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    tallies
}
