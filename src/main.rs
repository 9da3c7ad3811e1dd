//! `ddx` benchmark entrypoint.
//!
//! Reads cases from `DDX_CASES_PATH`, runs them through the configured
//! generation model and prints the summary as JSON on stdout.

use std::sync::Arc;

use anyhow::Context;
use mimalloc::MiMalloc;

use ddx::benchmark::{BenchmarkRunner, BenchmarkSummary, ClinicalCase, load_cases};
use ddx::config::Config;
use ddx::constants::DEFAULT_EMBEDDING_MODEL;
use ddx::embedding::{BertEmbedder, EmbeddingProvider};
use ddx::generation::{GenaiGenerator, GenerationProvider};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let cases_path = config
        .cases_path
        .as_ref()
        .with_context(|| format!("{} must point to a JSON case file", Config::ENV_CASES_PATH))?;
    let cases = load_cases(cases_path)?;

    tracing::info!(
        model = %config.generation_model,
        cases = cases.len(),
        cases_path = %cases_path.display(),
        "DDx benchmark starting"
    );

    if config.embedding_model_path.is_none() {
        tracing::warn!(
            "No {} configured, running embedder in stub mode (expected a local copy of {})",
            Config::ENV_EMBEDDING_MODEL_PATH,
            DEFAULT_EMBEDDING_MODEL
        );
    }
    let embedder = Arc::new(BertEmbedder::load(config.embedder_config())?);

    let summary = if config.mock_provider {
        run_mock(embedder, &cases).await?
    } else {
        let generator = Arc::new(GenaiGenerator::new(config.generator_config())?);
        run(generator, embedder, &cases).await?
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

async fn run<G, E>(
    generator: Arc<G>,
    embedder: Arc<E>,
    cases: &[ClinicalCase],
) -> anyhow::Result<BenchmarkSummary>
where
    G: GenerationProvider,
    E: EmbeddingProvider + 'static,
{
    let runner = BenchmarkRunner::new(generator, embedder);
    Ok(runner.run_all(cases).await?)
}

#[cfg(feature = "mock")]
async fn run_mock(
    embedder: Arc<BertEmbedder>,
    cases: &[ClinicalCase],
) -> anyhow::Result<BenchmarkSummary> {
    use ddx::constants::DEFAULT_GROUND_TRUTH;
    use ddx::generation::ScriptedGenerator;

    tracing::warn!("Using scripted generation provider (testing only)");
    let generator = Arc::new(ScriptedGenerator::new(format!(
        " 1. {DEFAULT_GROUND_TRUTH}\n2. Sarcoidosis\n3. Tuberculosis"
    )));
    run(generator, embedder, cases).await
}

#[cfg(not(feature = "mock"))]
async fn run_mock(
    _embedder: Arc<BertEmbedder>,
    _cases: &[ClinicalCase],
) -> anyhow::Result<BenchmarkSummary> {
    anyhow::bail!(
        "{} is set but ddx was built without the `mock` feature",
        Config::ENV_MOCK_PROVIDER
    )
}
