use anyhow::Result;
use briefly::{cli, launch, workflow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config()?;

    // 进度信息走stdout，诊断日志走stderr
    let default_level = if config.verbose { "briefly=debug,warn" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = launch(&config).await {
        // 分析失败已给出一句话说明，不再打印底层错误链
        if workflow::is_reported(&err) {
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}
