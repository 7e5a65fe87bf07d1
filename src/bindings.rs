//! Foreign-function surface. Thin owned-argument wrappers over the library.

use crate::aggregate::{self, LogSummary, Tally};
use crate::config::StatsConfig;
use crate::connection::{self, ConnectionState};
use crate::error::DiveLogError;
use crate::filter::FilterOptions;
use crate::json;
use crate::models::{DiveEntry, User};
use crate::parse::{self, parse_date};
use crate::share;
use crate::validate;

#[uniffi::export]
pub fn total_duration(entries: Vec<DiveEntry>) -> u64 {
    aggregate::total_duration(&entries)
}

#[uniffi::export]
pub fn average_depth(entries: Vec<DiveEntry>) -> Result<f64, DiveLogError> {
    aggregate::average_depth(&entries)
}

#[uniffi::export]
pub fn max_duration(entries: Vec<DiveEntry>) -> Result<u32, DiveLogError> {
    aggregate::max_duration(&entries)
}

#[uniffi::export]
pub fn max_depth(entries: Vec<DiveEntry>) -> Result<f64, DiveLogError> {
    aggregate::max_depth(&entries)
}

#[uniffi::export]
pub fn average_visibility(entries: Vec<DiveEntry>) -> Result<f64, DiveLogError> {
    aggregate::average_visibility(&entries)
}

#[uniffi::export]
pub fn average_water_temperature(entries: Vec<DiveEntry>) -> Result<f64, DiveLogError> {
    aggregate::average_water_temperature(&entries)
}

#[uniffi::export]
pub fn average_rating(entries: Vec<DiveEntry>) -> Result<f64, DiveLogError> {
    aggregate::average_rating(&entries)
}

#[uniffi::export]
pub fn total_fish(entries: Vec<DiveEntry>) -> u64 {
    aggregate::total_fish(&entries)
}

#[uniffi::export]
pub fn fish_by_species(entries: Vec<DiveEntry>) -> Vec<Tally> {
    aggregate::fish_by_species(&entries)
}

#[uniffi::export]
pub fn dives_by_method(entries: Vec<DiveEntry>) -> Vec<Tally> {
    aggregate::dives_by_method(&entries)
}

#[uniffi::export]
pub fn dives_by_month(entries: Vec<DiveEntry>) -> Result<Vec<Tally>, DiveLogError> {
    aggregate::dives_by_month(&entries)
}

#[uniffi::export]
pub fn recent_dive_count(
    entries: Vec<DiveEntry>,
    today: String,
    window_days: u32,
) -> Result<u64, DiveLogError> {
    aggregate::recent_activity(&entries, parse_date(&today)?, window_days)
}

#[uniffi::export]
pub fn normalize_connection_type(state: ConnectionState) -> String {
    connection::normalize_connection_type(&state).to_string()
}

/// `today` is the caller's local date, `YYYY-MM-DD`.
#[uniffi::export]
pub fn summarize_log(
    entries: Vec<DiveEntry>,
    today: String,
    config: StatsConfig,
) -> Result<LogSummary, DiveLogError> {
    let today = parse_date(&today)?;
    LogSummary::compute(&entries, today, &config)
}

#[uniffi::export]
pub fn filter_dive_entries(entries: Vec<DiveEntry>, filters: FilterOptions) -> Vec<DiveEntry> {
    entries.into_iter().filter(|e| filters.matches(e)).collect()
}

#[uniffi::export]
pub fn filters_active(filters: FilterOptions) -> bool {
    filters.is_active()
}

#[uniffi::export]
pub fn validate_dive_entry(entry: DiveEntry, users: Vec<User>) -> Result<(), DiveLogError> {
    validate::validate_entry(&entry, &users)
}

#[uniffi::export]
pub fn validate_user(user: User) -> Result<(), DiveLogError> {
    validate::validate_user(&user)
}

#[uniffi::export]
pub fn import_dive_entries(payload: String) -> Result<Vec<DiveEntry>, DiveLogError> {
    json::entries_from_json(&payload)
}

#[uniffi::export]
pub fn import_users(payload: String) -> Result<Vec<User>, DiveLogError> {
    json::users_from_json(&payload)
}

#[uniffi::export]
pub fn export_dive_entries(entries: Vec<DiveEntry>) -> Result<String, DiveLogError> {
    json::entries_to_json(&entries)
}

#[uniffi::export]
pub fn export_file_name(today: String) -> Result<String, DiveLogError> {
    Ok(json::export_file_name(parse_date(&today)?))
}

#[uniffi::export]
pub fn load_stats_config(payload: String) -> Result<StatsConfig, DiveLogError> {
    StatsConfig::from_json(&payload)
}

/// Canonical `YYYY-MM-DD` form of a date, or a parse error.
#[uniffi::export]
pub fn normalize_date(date: String) -> Result<String, DiveLogError> {
    Ok(parse_date(&date)?.format("%Y-%m-%d").to_string())
}

/// Canonical `HH:MM:SS` form of a time of day, or a parse error.
#[uniffi::export]
pub fn normalize_time(time: String) -> Result<String, DiveLogError> {
    Ok(parse::parse_time(&time)?.format("%H:%M:%S").to_string())
}

#[uniffi::export]
pub fn month_key(date: String) -> Result<String, DiveLogError> {
    Ok(parse::month_key(parse_date(&date)?))
}

#[uniffi::export]
pub fn normalize_israeli_phone(phone: String) -> String {
    share::normalize_israeli_phone(&phone)
}

#[uniffi::export]
pub fn individual_whatsapp_url(phone: String, message: String) -> String {
    share::individual_whatsapp_url(&phone, &message)
}

#[uniffi::export]
pub fn group_share_url(invite_link: Option<String>, message: String) -> String {
    share::group_share_url(invite_link.as_deref(), &message)
}

#[uniffi::export]
pub fn dive_summary_message(entry: DiveEntry) -> String {
    share::dive_summary_message(&entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::EffectiveType;
    use crate::testutil::{catch, entry, sample_entry, sample_user, SAMPLE_USER_JSON};

    #[test]
    fn test_aggregate_wrappers() {
        let log = vec![
            entry("dive-001", "2026-02-01", 10.0, 30),
            entry("dive-002", "2026-02-02", 20.0, 50),
        ];
        assert_eq!(total_duration(log.clone()), 80);
        assert_eq!(average_depth(log.clone()).unwrap(), 15.0);
        assert_eq!(max_duration(log).unwrap(), 50);
        assert!(average_depth(Vec::new()).is_err());
    }

    #[test]
    fn test_normalize_wrapper() {
        let state = ConnectionState {
            effective_type: Some(EffectiveType::ThreeG),
            is_online: true,
        };
        assert_eq!(normalize_connection_type(state), "3g");
    }

    #[test]
    fn test_summarize_log_parses_today() {
        let summary = summarize_log(
            vec![sample_entry()],
            "2026-02-10".to_string(),
            StatsConfig::default(),
        )
        .unwrap();
        assert_eq!(summary.total_dives, 1);
        assert_eq!(summary.recent_activity, 1);

        let err = summarize_log(
            vec![sample_entry()],
            "yesterday".to_string(),
            StatsConfig::default(),
        );
        assert!(matches!(
            err,
            Err(DiveLogError::Parse { field: "date", .. })
        ));
    }

    #[test]
    fn test_filter_and_validate_wrappers() {
        let filters = FilterOptions {
            min_depth: Some(20.0),
            ..Default::default()
        };
        assert!(filter_dive_entries(vec![sample_entry()], filters).is_empty());
        assert!(validate_dive_entry(sample_entry(), vec![sample_user()]).is_ok());
        assert!(validate_dive_entry(sample_entry(), Vec::new()).is_err());
        assert!(validate_user(sample_user()).is_ok());
    }

    #[test]
    fn test_json_wrappers() {
        let exported = export_dive_entries(vec![sample_entry()]).unwrap();
        assert_eq!(import_dive_entries(exported).unwrap(), vec![sample_entry()]);
        assert_eq!(
            export_file_name("2026-02-01".to_string()).unwrap(),
            "orca-dive-log-2026-02-01.json"
        );
        assert_eq!(
            load_stats_config("{}".to_string()).unwrap(),
            StatsConfig::default()
        );
    }

    #[test]
    fn test_extended_statistic_wrappers() {
        let mut first = entry("dive-001", "2026-01-20", 10.0, 30);
        first.catches = vec![catch("Mullet", 3)];
        first.rating = Some(3);
        let second = entry("dive-002", "2026-02-02", 20.0, 50);
        let log = vec![first, second];

        assert_eq!(max_depth(log.clone()).unwrap(), 20.0);
        assert_eq!(average_visibility(log.clone()).unwrap(), 15.0);
        assert_eq!(average_water_temperature(log.clone()).unwrap(), 24.0);
        assert_eq!(average_rating(log.clone()).unwrap(), 4.0);
        assert_eq!(total_fish(log.clone()), 3);
        assert_eq!(fish_by_species(log.clone())[0].key, "Mullet");
        assert_eq!(dives_by_method(log.clone())[0].count, 2);
        assert_eq!(dives_by_month(log.clone()).unwrap().len(), 2);
        assert_eq!(
            recent_dive_count(log.clone(), "2026-02-10".to_string(), 14).unwrap(),
            1
        );
        assert!(recent_dive_count(log, "soon".to_string(), 14).is_err());
    }

    #[test]
    fn test_import_users_feeds_validation() {
        let users = import_users(format!("[{SAMPLE_USER_JSON}]")).unwrap();
        assert_eq!(users.len(), 1);
        assert!(validate_dive_entry(sample_entry(), users).is_ok());
        assert!(matches!(
            import_users("[{}]".to_string()),
            Err(DiveLogError::Json(_))
        ));
    }

    #[test]
    fn test_parse_wrappers() {
        assert_eq!(normalize_date(" 2026-02-01 ".to_string()).unwrap(), "2026-02-01");
        assert_eq!(normalize_time("06:30".to_string()).unwrap(), "06:30:00");
        assert_eq!(month_key("2026-02-01".to_string()).unwrap(), "2026-02");
        assert!(normalize_date("2026-02-30".to_string()).is_err());
        assert!(normalize_time("25:00".to_string()).is_err());
    }

    #[test]
    fn test_filters_active_wrapper() {
        assert!(!filters_active(FilterOptions::default()));
        assert!(filters_active(FilterOptions {
            min_rating: Some(3),
            ..Default::default()
        }));
    }

    #[test]
    fn test_share_wrappers() {
        assert_eq!(normalize_israeli_phone("050-123 4567".to_string()), "501234567");
        assert!(
            individual_whatsapp_url("050-1234567".to_string(), "hi".to_string())
                .starts_with("https://wa.me/972501234567?text=hi")
        );
        assert_eq!(
            group_share_url(None, "hi".to_string()),
            "https://wa.me/?text=hi"
        );
        assert!(dive_summary_message(sample_entry()).contains("Eilat Reef"));
    }
}
