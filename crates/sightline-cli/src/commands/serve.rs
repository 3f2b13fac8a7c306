//! Server command implementation

use anyhow::Result;

pub async fn cmd_serve(host: &str, port: Option<u16>) -> Result<()> {
    // Flag wins; PORT env covers container deployments; 8000 otherwise
    let port = port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(8000);

    println!("🚀 Starting Sightline insight server...");
    println!("   Listening: http://{}:{}", host, port);
    println!();
    println!("   Press Ctrl+C to stop");

    sightline_server::serve(host, port).await?;

    Ok(())
}
