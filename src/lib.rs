pub mod aggregate;
pub mod bindings;
pub mod config;
pub mod connection;
pub mod error;
pub mod filter;
pub mod json;
pub mod models;
pub mod parse;
pub mod share;
pub mod validate;

#[cfg(test)]
mod testutil;

uniffi::setup_scaffolding!();

pub use aggregate::{
    average_depth, average_rating, average_visibility, average_water_temperature, dives_by_method,
    dives_by_month, fish_by_species, max_depth, max_duration, recent_activity, total_duration,
    total_fish, LogSummary, Tally,
};
pub use config::StatsConfig;
pub use connection::{normalize_connection_type, ConnectionState, EffectiveType};
pub use error::DiveLogError;
pub use filter::{filter_entries, FilterOptions};
pub use models::{
    Catch, CatchId, Coordinates, Current, DiveEntry, Equipment, EntryId, FishingType, Language,
    NotificationPreferences, Theme, Units, User, UserId, UserPreferences, UserRole, Weather,
    WeatherCondition,
};
pub use share::{
    dive_summary_message, group_share_url, individual_whatsapp_url, normalize_israeli_phone,
};
pub use validate::{validate_entry, validate_user};
