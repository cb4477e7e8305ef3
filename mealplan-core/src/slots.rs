//! Expand a date range into the (date, slot) obligations to fill.

use chrono::{Datelike, NaiveDate};

use crate::settings::UNKNOWN_SLOT_ORDER;
use crate::types::{SlotDefinition, SlotToFill};

/// Weekday index with Sunday as 0.
pub fn weekday_index(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always 0..=6
    date.weekday().num_days_from_sunday() as u8
}

/// One obligation per selected slot on every non-skipped day, in date order.
///
/// Within a day, slots follow the order of `slot_ids`. A slot id without a
/// definition uses the id as its display name.
pub fn generate_slots(
    start: NaiveDate,
    end: NaiveDate,
    slot_ids: &[String],
    skip_weekdays: &[u8],
    definitions: &[SlotDefinition],
) -> Vec<SlotToFill> {
    let mut slots = Vec::new();
    for date in start.iter_days().take_while(|d| *d <= end) {
        let weekday = weekday_index(date);
        if skip_weekdays.contains(&weekday) {
            continue;
        }
        for slot_id in slot_ids {
            slots.push(SlotToFill {
                date,
                slot_id: slot_id.clone(),
                slot_name: slot_name(slot_id, definitions),
                weekday,
            });
        }
    }
    slots
}

fn slot_name(slot_id: &str, definitions: &[SlotDefinition]) -> String {
    definitions
        .iter()
        .find(|def| def.id == slot_id)
        .map(|def| def.name.clone())
        .unwrap_or_else(|| slot_id.to_string())
}

/// Display order of a slot; unknown slots sort last.
pub fn slot_order(slot_id: &str, definitions: &[SlotDefinition]) -> u32 {
    definitions
        .iter()
        .find(|def| def.id == slot_id)
        .map(|def| def.order)
        .unwrap_or(UNKNOWN_SLOT_ORDER)
}
