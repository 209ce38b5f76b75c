// src/bin/cli.rs
use comic_recs::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| {
        comic_recs::loge!("CLI: {}", e);
        color_eyre::eyre::eyre!("{e}")
    })
}
