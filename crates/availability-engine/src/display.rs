//! Presentation text for the availability card.
//!
//! Kept apart from [`crate::aggregate`] so the summary itself stays plain data.

use crate::aggregate::WeeklySummary;
use crate::locale::Locale;

/// `"14h"` for whole hours, `"14h 30m"` otherwise.
pub fn format_duration(hours: i64, minutes: i64) -> String {
    if minutes == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {minutes}m")
    }
}

/// Day count with the right plural for `locale`.
///
/// French treats 0 and 1 as singular ("0 jour", "1 jour"); English only 1.
pub fn format_day_count(count: usize, locale: Locale) -> String {
    match locale {
        Locale::French if count <= 1 => format!("{count} jour"),
        Locale::French => format!("{count} jours"),
        Locale::English if count == 1 => "1 day".to_string(),
        Locale::English => format!("{count} days"),
    }
}

fn no_availability_label(locale: Locale) -> &'static str {
    match locale {
        Locale::French => "Aucune disponibilité",
        Locale::English => "No availability",
    }
}

/// One-line card text, e.g. `"Lundi, Mardi, Jeudi · 14h · 3 jours"`.
pub fn render_summary(summary: &WeeklySummary, locale: Locale) -> String {
    let days = if summary.localized_days.is_empty() {
        no_availability_label(locale).to_string()
    } else {
        summary.localized_days.join(", ")
    };

    format!(
        "{} · {} · {}",
        days,
        format_duration(summary.hours, summary.minutes),
        format_day_count(summary.active_day_count, locale)
    )
}
