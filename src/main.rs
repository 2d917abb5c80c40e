//! sqrt-bench CLI
//! Standard vs AVX vs Newton-Raphson square root timings

use anyhow::Context;
use sqrt_bench::config::LoggingConfig;
use sqrt_bench::{run_comparison, Avx, Config};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_logging(&config.logging)?;

    config.validate()?;
    let avx = Avx::detect().context("this benchmark needs AVX at run time")?;

    info!(
        input = config.input,
        iterations = config.iterations,
        "Configuration loaded"
    );

    run_comparison(&config, avx)?;
    Ok(())
}

/// Logs go to stderr so stdout carries only the report
fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("invalid log level {:?}", logging.level))?;

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    if logging.json_output {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}
