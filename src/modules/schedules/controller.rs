use crate::error::AdminError;
use crate::modules::bookings::crud::BookingCrud;
use crate::modules::report::{FailedItem, SeedReport, SeededItem};
use crate::modules::schedules::{
    crud::ScheduleCrud,
    model::day_names,
    remap::ScheduleRemap,
    schema::{CreatedSchedule, ReassignedBooking, RecreateReport},
    seed::{INITIAL, REPLACEMENTS},
};
use crate::store::DocumentStore;

/// Replaces the whole schedule collection with [`REPLACEMENTS`].
///
/// Steps run in order and are not rolled back on failure: snapshot the old
/// schedules, build the time-keyed remap, point matching bookings at the new
/// IDs, delete every old schedule, then write the replacements.
pub async fn recreate(store: &dyn DocumentStore) -> Result<RecreateReport, AdminError> {
    let schedules = ScheduleCrud::new(store);
    let bookings = BookingCrud::new(store);

    let current = schedules.find_all().await?;
    for schedule in &current {
        tracing::info!(
            id = %schedule.id,
            time = schedule.time.as_deref().unwrap_or(""),
            "existing schedule"
        );
    }

    let remap = ScheduleRemap::build(
        current
            .iter()
            .filter_map(|s| s.time.as_deref().map(|time| (s.id.as_str(), time))),
        REPLACEMENTS.iter().map(|r| (r.id, r.time)),
    );
    for entry in remap.entries() {
        tracing::info!(old = %entry.old_id, new = %entry.new_id, time = %entry.time, "schedule mapping");
    }

    let mut bookings_updated = Vec::new();
    for booking in bookings.find_all().await? {
        let Some(old_id) = booking.schedule_id else {
            continue;
        };
        let Some(new_id) = remap.new_id(&old_id) else {
            continue;
        };
        if new_id == old_id {
            continue;
        }

        bookings.reassign_schedule(&booking.id, new_id).await?;
        tracing::info!(booking = %booking.id, old = %old_id, new = %new_id, "booking updated");
        bookings_updated.push(ReassignedBooking {
            booking_id: booking.id,
            new_schedule_id: new_id.to_string(),
            old_schedule_id: old_id,
        });
    }

    let mut removed = Vec::with_capacity(current.len());
    for schedule in current {
        schedules.delete(&schedule.id).await?;
        tracing::info!(id = %schedule.id, "schedule deleted");
        removed.push(schedule.id);
    }

    let mut created = Vec::with_capacity(REPLACEMENTS.len());
    for (display_order, replacement) in REPLACEMENTS.iter().enumerate() {
        schedules.put(replacement, display_order as i64).await?;
        tracing::info!(id = replacement.id, time = replacement.time, "schedule created");
        created.push(CreatedSchedule {
            id: replacement.id.to_string(),
            time: replacement.time.to_string(),
            duration_hours: replacement.duration_hours(),
        });
    }

    Ok(RecreateReport {
        remap,
        bookings_updated,
        removed,
        created,
    })
}

/// Inserts the initial schedules under generated IDs.
pub async fn seed(store: &dyn DocumentStore) -> Result<SeedReport, AdminError> {
    let crud = ScheduleCrud::new(store);
    let mut report = SeedReport::default();

    for schedule in INITIAL {
        let label = format!(
            "{} at {} ({})",
            schedule.class_type,
            schedule.time,
            day_names(schedule.days)
        );
        match crud.create(schedule).await {
            Ok(id) => {
                tracing::info!(%id, time = schedule.time, "schedule added");
                report.added.push(SeededItem { id, label });
            }
            Err(e) => {
                tracing::warn!(time = schedule.time, error = %e, "schedule insert failed");
                report.failed.push(FailedItem {
                    label,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
