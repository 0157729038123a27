use anyhow::Result;
use std::{env, io, sync::Arc};
use tag_slug::{
    Slugifier, application::ports::util::SlugGenerator, cli, config::SlugConfig,
    infrastructure::util::DefaultSlugGenerator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = bootstrap() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = SlugConfig::from_env()?;
    let slugifier = Slugifier::from_config(&config)?;
    let generator: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::new(slugifier));

    let args: Vec<String> = env::args().skip(1).collect();
    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(
        generator.as_ref(),
        config.default_locale(),
        &args,
        stdin.lock(),
        &mut stdout.lock(),
    )?;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    // stdout carries the slugs, so logs go to stderr.
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
