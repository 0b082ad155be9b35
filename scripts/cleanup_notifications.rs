//! Deletes delivered notifications and reminders older than 30 days.
//!
//! Run with: cargo run --bin cleanup_notifications

use chrono::Utc;
use gym_admin::config;
use gym_admin::modules::notifications::controller;
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

    println!("🧹 Removing old notifications...");
    let report = controller::cleanup_sent(&store, Utc::now()).await?;

    println!("   Cutoff: {}", report.cutoff.to_rfc3339());
    for cleanup in &report.collections {
        println!("   - {}: {} deleted", cleanup.collection, cleanup.deleted.len());
    }
    println!("\n✅ Cleanup complete. {} documents deleted", report.total_deleted());
    Ok(())
}
