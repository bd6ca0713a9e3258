//! CLI Doctor Command
//!
//! Checks credentials and the external tools the pipeline shells out to.

use anyhow::Result;
use std::env;
use tokio::process::Command;

use roomlens_config::RoomLensConfig;

/// Executes the full doctor diagnosis.
pub async fn run(config: &RoomLensConfig) -> Result<()> {
    println!("\n🔍 Running RoomLens Doctor...\n");

    let keys_ok = check_api_keys(config);
    let tools_ok = check_ffmpeg().await;

    println!();
    if keys_ok && tools_ok {
        println!("✅ All checks passed! RoomLens is ready to analyze rooms.");
    } else {
        println!("❌ Some checks failed! Please fix the errors above.");
    }

    Ok(())
}

fn check_api_keys(config: &RoomLensConfig) -> bool {
    println!("Checking Credentials:");

    let configured = config
        .provider
        .as_ref()
        .and_then(|p| p.api_key.as_ref())
        .map(|k| !k.is_empty())
        .unwrap_or(false);
    if configured {
        println!("  🟢 provider.apiKey is set in config");
        return true;
    }

    let mut found = false;
    for var in ["GEMINI_API_KEY", "OPENAI_API_KEY"] {
        match env::var(var) {
            Ok(val) if !val.is_empty() => {
                println!("  🟢 {} is set", var);
                found = true;
            }
            _ => println!("  🟡 {} is missing", var),
        }
    }
    if !found {
        println!("  🔴 No API key found in config or environment (REQUIRED)");
    }
    found
}

async fn check_ffmpeg() -> bool {
    println!("Checking Video Tools:");

    let mut all_good = true;
    for tool in ["ffmpeg", "ffprobe"] {
        let available = Command::new(tool)
            .arg("-version")
            .output()
            .await
            .map(|out| out.status.success())
            .unwrap_or(false);
        if available {
            println!("  🟢 {} is available", tool);
        } else {
            println!("  🟡 {} is missing (video analysis disabled)", tool);
            all_good = false;
        }
    }
    all_good
}
