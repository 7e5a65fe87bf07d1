use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatchId(pub String);

uniffi::custom_newtype!(EntryId, String);
uniffi::custom_newtype!(UserId, String);
uniffi::custom_newtype!(CatchId, String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum FishingType {
    Speargun,
    PoleSpear,
    Hook,
    Net,
    Other,
}

impl FishingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FishingType::Speargun => "speargun",
            FishingType::PoleSpear => "pole_spear",
            FishingType::Hook => "hook",
            FishingType::Net => "net",
            FishingType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FishingType::Speargun => "Speargun",
            FishingType::PoleSpear => "Pole spear",
            FishingType::Hook => "Hook and line",
            FishingType::Net => "Net",
            FishingType::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Foggy,
}

/// Water current strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum Current {
    None,
    Weak,
    Medium,
    Strong,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub condition: WeatherCondition,
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Water temperature in Celsius
    pub water_temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    /// Wave height in meters
    pub wave_height: f64,
    pub current: Current,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub mask: String,
    pub fins: String,
    pub suit: String,
    /// Ballast weight in kilograms
    pub weight: f64,
    #[serde(default)]
    pub gear: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Catch {
    pub id: CatchId,
    pub species: String,
    /// Weight in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Length in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    pub quantity: u32,
    pub method: FishingType,
    pub released: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single logged dive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct DiveEntry {
    pub id: EntryId,
    pub user_id: UserId,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Local time of day, `HH:MM`
    pub time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Depth in meters
    pub depth: f64,
    /// Duration in minutes
    pub duration: u32,
    /// Visibility in meters
    pub visibility: f64,
    pub weather: Weather,
    pub equipment: Equipment,
    pub fishing_type: FishingType,
    #[serde(default)]
    pub catches: Vec<Catch>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub notes: String,
    /// Star rating, 1-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    Moderator,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::Moderator => "moderator",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    He,
    En,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

const FEET_PER_METER: f64 = 3.28084;

impl Units {
    /// Convert a depth stored in meters into this unit system.
    pub fn depth_from_m(&self, depth_m: f64) -> f64 {
        match self {
            Units::Metric => depth_m,
            Units::Imperial => depth_m * FEET_PER_METER,
        }
    }

    pub fn depth_label(&self) -> &'static str {
        match self {
            Units::Metric => "m",
            Units::Imperial => "ft",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub dive_reminders: bool,
    pub weather_alerts: bool,
    pub safety_tips: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub language: Language,
    pub units: Units,
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<String>,
    pub notifications: NotificationPreferences,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub role: UserRole,
    pub preferences: UserPreferences,
}
