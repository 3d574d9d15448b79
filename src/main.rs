use anyhow::{bail, Context, Result};
use tracing::Level;

fn main() -> Result<()> {
    let cfg = sshgen::RunConfig::default();

    let level = if cfg.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = cfg.source_path.clone();
    let target = cfg.target_path.clone();
    let generator = sshgen::Generator::new(cfg);

    let report = generator.run().with_context(|| {
        format!(
            "failed to generate {} from {}",
            target.display(),
            source.display()
        )
    })?;

    tracing::info!("{}", report.summary().trim_end());

    if !report.is_success() {
        bail!("{} section(s) failed:\n{}", report.failures.len(), report.summary());
    }
    Ok(())
}
