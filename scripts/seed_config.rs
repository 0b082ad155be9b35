//! Writes the initial `config/*` documents.
//!
//! Run with: cargo run --bin seed_config -- [service_account.json]

use gym_admin::config;
use gym_admin::modules::settings::controller;
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

    println!("Creating initial configuration...\n");
    let documents = controller::seed(&store).await?;

    let total = documents.len();
    for (i, doc) in documents.iter().enumerate() {
        println!("[{}/{}] ✅ {} written", i + 1, total, doc.id);
        for (key, value) in &doc.highlights {
            println!("      - {}: {}", key, value);
        }
        println!();
    }

    println!("Documents written:");
    for doc in &documents {
        println!("   - config/{}", doc.id);
    }
    Ok(())
}
