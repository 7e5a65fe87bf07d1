//! Text and links for sharing a dive report to WhatsApp.

use crate::models::DiveEntry;
use crate::parse::parse_date;

const WHATSAPP_BASE: &str = "https://wa.me/";
const ISRAEL_COUNTRY_CODE: &str = "972";

/// Strip everything but digits and drop a single leading trunk `0`.
pub fn normalize_israeli_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    match digits.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => digits,
    }
}

/// Direct chat link to an Israeli number with `message` prefilled.
pub fn individual_whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE}{ISRAEL_COUNTRY_CODE}{}?text={}",
        normalize_israeli_phone(phone),
        urlencoding::encode(message)
    )
}

/// Link for sharing to a group. A configured invite link wins; otherwise
/// the message goes to WhatsApp's contact picker.
pub fn group_share_url(invite_link: Option<&str>, message: &str) -> String {
    match invite_link.map(str::trim).filter(|l| !l.is_empty()) {
        Some(link) => link.to_string(),
        None => format!("{WHATSAPP_BASE}?text={}", urlencoding::encode(message)),
    }
}

/// Multi-line report of a single dive, WhatsApp markdown.
pub fn dive_summary_message(entry: &DiveEntry) -> String {
    let catches = if entry.catches.is_empty() {
        "• No fish caught this time".to_string()
    } else {
        entry
            .catches
            .iter()
            .map(|c| match c.weight {
                Some(w) => format!("• {} ({} g)", c.species, w),
                None => format!("• {}", c.species),
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    // fall back to the raw text for dates that do not parse
    let date = parse_date(&entry.date)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| entry.date.clone());

    let notes = match entry.notes.trim() {
        "" => "No special notes",
        n => n,
    };

    let mut lines = vec![
        "🌊🐋 *New dive report from Orca* 🐟🤿".to_string(),
        String::new(),
        format!("📍 *Location:* {}", entry.location),
        format!("📅 *Date:* {date}"),
        format!("⏰ *Time:* {}", entry.time),
        format!("🌊 *Depth:* {} m", entry.depth),
        format!("⏱️ *Duration:* {} min", entry.duration),
        format!("👀 *Visibility:* {} m", entry.visibility),
        format!("🌡️ *Water:* {}°C", entry.weather.water_temperature),
        String::new(),
        "🎣 *Catch:*".to_string(),
        catches,
        String::new(),
        format!("📝 *Notes:* {notes}"),
    ];
    if !entry.photos.is_empty() {
        lines.push(String::new());
        lines.push("📸 Dive photo attached 👇".to_string());
    }
    lines.join("\n")
}
