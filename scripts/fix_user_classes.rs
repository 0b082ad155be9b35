//! Moves every user from the legacy `classLimit` field to `classesPerMonth`.
//!
//! Run with: cargo run --bin fix_user_classes

use gym_admin::config;
use gym_admin::modules::users::{controller, model::DEFAULT_CLASSES_PER_MONTH};
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

    println!("Scanning users...");
    let report = controller::backfill_classes_per_month(&store).await?;

    for user in &report.migrated {
        println!("✅ User updated: {}", user.email);
        println!(
            "   classLimit {} → classesPerMonth {}",
            user.previous_limit, DEFAULT_CLASSES_PER_MONTH
        );
    }
    for user in &report.cleaned {
        println!("✅ User cleaned: {}", user.email);
        println!(
            "   Removed classLimit {} (already has classesPerMonth {})",
            user.dropped_limit, user.classes_per_month
        );
    }
    for email in &report.untouched {
        println!("⏭️  User OK: {}", email);
    }

    println!(
        "\nSummary: {} migrated, {} cleaned, {} untouched",
        report.migrated.len(),
        report.cleaned.len(),
        report.untouched.len()
    );
    Ok(())
}
