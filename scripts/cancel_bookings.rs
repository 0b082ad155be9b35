//! Run with: cargo run --bin cancel_bookings -- <email> <quantity>

use gym_admin::config;
use gym_admin::modules::bookings::{controller, schema::CancelBookingsArgs};
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
    let args: Vec<String> = env::args().skip(1).collect();
    let args = CancelBookingsArgs::from_args(&args)?;

    let store = config::bootstrap(None).await?;

    println!("Looking up user '{}' and up to {} confirmed bookings...", args.email, args.quantity);
    let report = controller::cancel_confirmed(&store, &args).await?;

    println!("✅ User found: {}\n", report.user_id);
    for booking in &report.cancelled {
        println!(
            "✅ Cancelled: {} - {}",
            booking.schedule_type,
            booking.class_date.as_deref().unwrap_or("no date")
        );
    }

    println!("\n✅ Total cancelled: {} bookings", report.cancelled.len());
    Ok(())
}
