use crate::models::{Catch, CatchId, DiveEntry, EntryId, FishingType, User};

pub(crate) const SAMPLE_USER_JSON: &str = r#"{
    "id": "user-123",
    "username": "diver_one",
    "email": "diver@example.com",
    "fullName": "Diver One",
    "createdAt": "2026-01-01T12:00:00Z",
    "role": "user",
    "preferences": {
        "language": "en",
        "units": "metric",
        "theme": "dark",
        "notifications": {
            "diveReminders": true,
            "weatherAlerts": true,
            "safetyTips": false
        }
    }
}"#;

pub(crate) const SAMPLE_ENTRY_JSON: &str = r#"{
    "id": "dive-001",
    "userId": "user-123",
    "date": "2026-02-01",
    "time": "06:30",
    "location": "Eilat Reef",
    "depth": 18,
    "duration": 42,
    "visibility": 15,
    "weather": {
        "condition": "sunny",
        "temperature": 27,
        "waterTemperature": 24,
        "windSpeed": 8,
        "windDirection": "NW",
        "waveHeight": 0.6,
        "current": "weak"
    },
    "equipment": {
        "mask": "Cressi",
        "fins": "Mares",
        "suit": "3mm",
        "weight": 4,
        "gear": ["knife", "dive-watch"]
    },
    "fishingType": "speargun",
    "catches": [],
    "photos": [],
    "notes": "Calm morning dive",
    "rating": 5,
    "createdAt": "2026-02-01T06:00:00Z",
    "updatedAt": "2026-02-01T07:15:00Z"
}"#;

pub(crate) fn sample_user() -> User {
    serde_json::from_str(SAMPLE_USER_JSON).unwrap()
}

pub(crate) fn sample_entry() -> DiveEntry {
    serde_json::from_str(SAMPLE_ENTRY_JSON).unwrap()
}

pub(crate) fn entry(id: &str, date: &str, depth: f64, duration: u32) -> DiveEntry {
    DiveEntry {
        id: EntryId(id.to_string()),
        date: date.to_string(),
        depth,
        duration,
        ..sample_entry()
    }
}

pub(crate) fn catch(species: &str, quantity: u32) -> Catch {
    Catch {
        id: CatchId(format!("catch-{species}")),
        species: species.to_string(),
        weight: None,
        length: None,
        quantity,
        method: FishingType::Speargun,
        released: false,
        photo: None,
        notes: None,
    }
}
