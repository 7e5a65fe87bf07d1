#![allow(dead_code)]

use divelog_stats::{
    Current, DiveEntry, EntryId, Equipment, FishingType, UserId, Weather, WeatherCondition,
};

pub fn dive(id: usize, date: &str, depth: f64, duration: u32) -> DiveEntry {
    DiveEntry {
        id: EntryId(format!("dive-{id:04}")),
        user_id: UserId("user-123".to_string()),
        date: date.to_string(),
        time: "06:30".to_string(),
        location: "Eilat Reef".to_string(),
        coordinates: None,
        depth,
        duration,
        visibility: 15.0,
        weather: Weather {
            condition: WeatherCondition::Sunny,
            temperature: 27.0,
            water_temperature: 24.0,
            wind_speed: 8.0,
            wind_direction: "NW".to_string(),
            wave_height: 0.6,
            current: Current::Weak,
        },
        equipment: Equipment {
            mask: "Cressi".to_string(),
            fins: "Mares".to_string(),
            suit: "3mm".to_string(),
            weight: 4.0,
            gear: vec!["knife".to_string(), "dive-watch".to_string()],
        },
        fishing_type: FishingType::Speargun,
        catches: Vec::new(),
        photos: Vec::new(),
        notes: "Calm morning dive".to_string(),
        rating: Some(5),
        created_at: "2026-02-01T06:00:00Z".to_string(),
        updated_at: "2026-02-01T07:15:00Z".to_string(),
    }
}

/// 1,200 synthetic dives: `duration = 20 + i % 60`, `depth = 5 + i % 35`,
/// dates cycling through the 30 days from 2026-02-01.
pub fn large_dive_dataset() -> Vec<DiveEntry> {
    (0..1200)
        .map(|i| {
            let day = 1 + i % 30;
            let date = if day <= 28 {
                format!("2026-02-{day:02}")
            } else {
                format!("2026-03-{:02}", day - 28)
            };
            dive(
                i,
                &date,
                (5 + i % 35) as f64,
                (20 + i % 60) as u32,
            )
        })
        .collect()
}
