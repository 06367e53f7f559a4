use anyhow::{Context, Result};

use luau_docs_extract::config::Config;

fn main() -> Result<()> {
    let config = Config::from_command_line()?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();

    let summary = luau_docs_extract::run(&config).with_context(|| {
        format!(
            "Failed to extract '{}' entries from {}",
            config.prefix,
            config.input.display()
        )
    })?;

    log::info!(
        "Wrote {} of {} entries to {}",
        summary.kept_entries,
        summary.total_entries,
        summary.output.display()
    );

    Ok(())
}
