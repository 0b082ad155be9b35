//! Run with: cargo run --bin update_user_plan -- <email> "<plan name>"

use gym_admin::config;
use gym_admin::modules::users::{controller, schema::AssignPlanArgs};
use gym_admin::AdminError;
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            if let Some(AdminError::PlanNotFound { available, .. }) = e.downcast_ref::<AdminError>() {
                eprintln!("\nAvailable plans:");
                for name in available {
                    eprintln!("  - {}", name);
                }
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = AssignPlanArgs::from_args(&args)?;

    println!("Updating user: {}", args.email);
    println!("Plan: {}\n", args.plan_name);

    let store = config::bootstrap(None).await?;
    let report = controller::assign_plan(&store, &args).await?;

    println!("✅ User updated");
    println!("\nSummary:");
    println!("  User: {} ({})", report.email, report.user_id);
    println!("  Plan: {} ({})", report.plan_name, report.plan_id);
    match &report.classes_per_month {
        Some(allowance) => println!("  Classes/month: {}", allowance),
        None => println!("  Classes/month: unlimited"),
    }
    println!("  Status: active");
    Ok(())
}
