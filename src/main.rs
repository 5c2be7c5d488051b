use anyhow::{Context, Result};
use brief_rs::cli;
use brief_rs::launch;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config()?;

    // 日志写入stderr，stdout只输出JSON结果
    let default_filter = if config.verbose {
        "brief_rs=debug,info"
    } else {
        "brief_rs=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = launch(&config, args.to_input()).await?;
    let json = serde_json::to_string_pretty(&result).context("Failed to serialize brief")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write brief to {:?}", path))?;
            tracing::info!("💾 brief written to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
