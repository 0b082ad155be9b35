//! Backfills `classesPerMonth` on existing plans.
//!
//! Run with: cargo run --bin update_plans_classes -- [service_account.json]

use gym_admin::config;
use gym_admin::modules::plans::{controller, model::describe_allowance};
use std::env;
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
    let store = config::bootstrap(env::args().nth(1)).await?;

    println!("Updating plans with classesPerMonth...\n");
    let report = controller::backfill_classes(&store).await?;

    for plan in &report.updated {
        println!("✅ {}: {}", plan.name, describe_allowance(plan.classes_per_month));
    }
    for name in &report.unknown {
        println!("⚠️  Unknown plan: {}", name);
    }
    for failure in &report.failed {
        println!("❌ Failed to update {}: {}", failure.label, failure.error);
    }

    println!("\n✅ {} plans updated", report.updated.len());
    Ok(())
}
