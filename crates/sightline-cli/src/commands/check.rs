//! Provider check command implementation

use anyhow::Result;

use sightline_core::ai::{ChatBackend, ProviderClient};
use sightline_core::models::{ChartData, DataPoint};
use sightline_core::{format_chart_data, generate_insights};

/// Probe the configured provider and optionally round-trip one question
pub async fn cmd_check(question: Option<&str>) -> Result<()> {
    println!("🔍 Checking provider configuration...\n");

    let backend = std::env::var("SIGHTLINE_BACKEND").unwrap_or_else(|_| "azure".to_string());
    println!("  SIGHTLINE_BACKEND: {}", backend);

    let provider = match ProviderClient::from_env() {
        Some(p) => p,
        None => {
            println!("  ⚠️  Provider not configured\n");
            println!("For Azure OpenAI, set:");
            println!("  export AZURE_OPENAI_ENDPOINT=https://<resource>.openai.azure.com");
            println!("  export AZURE_OPENAI_API_KEY=<key>");
            println!("  export AZURE_OPENAI_DEPLOYMENT_NAME=<deployment>");
            println!();
            println!("The server still starts without these; answers degrade to placeholders.");
            return Ok(());
        }
    };

    println!("  Host: {}", provider.host());
    println!("  Deployment: {}\n", provider.model());

    print!("Checking provider availability... ");
    if provider.health_check().await {
        println!("✅ Connected");
    } else {
        println!("❌ Failed");
        println!("\n⚠️  Could not reach the provider at {}", provider.host());
        return Ok(());
    }

    if let Some(question) = question {
        println!("\n📋 Asking a sample question over built-in chart data...\n");

        let data = sample_chart_data();
        let block = format_chart_data(&data);
        let insights = generate_insights(Some(&provider), &block, &[question.to_string()]).await;

        for insight in insights {
            println!("  Q: {}", insight.question);
            println!("  A: {}", insight.answer);
        }
    }

    Ok(())
}

/// Quarterly sample data matching what the visual sends
fn sample_chart_data() -> ChartData {
    let rows = [
        ("Q1", "North", 100.5),
        ("Q2", "South", 150.2),
        ("Q3", "East", 200.8),
        ("Q4", "West", 175.3),
    ];

    ChartData {
        category1_data: rows.iter().map(|(q, _, _)| q.to_string()).collect(),
        category2_data: rows.iter().map(|(_, r, _)| r.to_string()).collect(),
        measures_data: rows.iter().map(|(_, _, m)| *m).collect(),
        measure_names: vec![],
        raw_data: rows
            .iter()
            .map(|(q, r, m)| DataPoint {
                category1: Some(q.to_string()),
                category2: Some(r.to_string()),
                measure: Some(*m),
                ..Default::default()
            })
            .collect(),
    }
}
