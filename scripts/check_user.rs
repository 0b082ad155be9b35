//! Run with: cargo run --bin check_user -- <email>

use gym_admin::config;
use gym_admin::modules::users::{controller, schema::InspectUserArgs};
use gym_admin::store::Value;
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

fn shown(value: &Option<Value>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "NOT SET".to_string())
}

async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = InspectUserArgs::from_args(&args)?;

    let store = config::bootstrap(None).await?;
    let user = controller::inspect(&store, &args).await?;

    println!("User: {}", user.email);
    println!("UID: {}\n", user.id);

    println!("Relevant fields:");
    println!("  - planName: {}", shown(&user.plan_name));
    println!("  - classLimit: {}", shown(&user.class_limit));
    println!("  - classesPerMonth: {}", shown(&user.classes_per_month));
    println!("  - membershipStatus: {}", shown(&user.membership_status));

    println!("\nAll fields:");
    for (key, value) in &user.fields {
        println!("  - {}: {}", key, value);
    }

    Ok(())
}
