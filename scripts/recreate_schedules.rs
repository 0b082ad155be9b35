//! Replaces every class schedule with the descriptive-ID set and rewrites
//! `scheduleId` on the bookings that pointed at the old documents.
//!
//! Run with: cargo run --bin recreate_schedules

use gym_admin::config;
use gym_admin::modules::schedules::controller;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let store = config::bootstrap(None).await?;

    println!("📋 Recreating class schedules...");
    let report = controller::recreate(&store).await?;

    for entry in report.remap.entries() {
        println!("   Mapping: {} -> {} ({})", entry.old_id, entry.new_id, entry.time);
    }

    println!("\n🔄 Bookings:");
    for booking in &report.bookings_updated {
        println!(
            "   ✅ Booking {} updated: {} -> {}",
            booking.booking_id, booking.old_schedule_id, booking.new_schedule_id
        );
    }

    println!("\n🗑️  Removed:");
    for id in &report.removed {
        println!("   ❌ {}", id);
    }

    println!("\n✨ Created:");
    for schedule in &report.created {
        println!("   ✅ {} ({} - {}h)", schedule.id, schedule.time, schedule.duration_hours);
    }

    println!("\n✅ Schedules recreated");
    println!("\nSummary:");
    println!("   - Schedules removed: {}", report.removed.len());
    println!("   - Schedules created: {}", report.created.len());
    println!("   - Bookings updated: {}", report.bookings_updated.len());
    Ok(())
}
