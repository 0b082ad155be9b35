//! Inserts the initial plans and class schedules.
//!
//! Run with: cargo run --bin seed_catalog -- [service_account.json]

use gym_admin::config;
use gym_admin::modules::report::SeedReport;
use gym_admin::modules::{plans, schedules};
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

fn print_report(kind: &str, report: &SeedReport) {
    for item in &report.added {
        println!("   ✅ {} added: {}", kind, item.label);
    }
    for item in &report.failed {
        println!("   ❌ Failed to add {}: {}", item.label, item.error);
    }
    println!("\n   {}/{} added\n", report.added.len(), report.total());
}

async fn run() -> anyhow::Result<()> {
    let store = config::bootstrap(env::args().nth(1)).await?;

    println!("[PLANS] Adding plans...\n");
    let plan_report = plans::controller::seed(&store).await?;
    print_report("Plan", &plan_report);

    println!("[SCHEDULES] Adding class schedules...\n");
    let schedule_report = schedules::controller::seed(&store).await?;
    print_report("Schedule", &schedule_report);

    println!("{:=<50}", "");
    println!("Plans added: {}", plan_report.added.len());
    println!("Schedules added: {}", schedule_report.added.len());
    Ok(())
}
