use anyhow::Context;

use mazewalk::generators::Generator;
use mazewalk::server::{Server, ServerConfig};

/// Parses `key=value` arguments (port, width, height, generator, seed) on
/// top of the defaults.
fn parse_config() -> anyhow::Result<ServerConfig> {
    let mut config = ServerConfig::default();

    for arg in std::env::args().skip(1) {
        let (key, value) = arg
            .split_once('=')
            .with_context(|| format!("expected key=value, got: {}", arg))?;
        match key {
            "port" => config.port = value.parse().context("invalid port")?,
            "width" => config.width = value.parse().context("invalid width")?,
            "height" => config.height = value.parse().context("invalid height")?,
            "generator" => {
                config.generator = value.parse::<Generator>().map_err(anyhow::Error::msg)?
            }
            "seed" => config.seed = Some(value.parse().context("invalid seed")?),
            other => anyhow::bail!("unknown option: {}", other),
        }
    }

    if config.width < 2 || config.height < 2 {
        anyhow::bail!("width and height must be at least 2");
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let _guard = mazewalk::logging::init();

    let config = parse_config()?;
    tracing::info!(
        "[main] serving {}x{} mazes carved by {} on port {}",
        config.width,
        config.height,
        config.generator,
        config.port
    );

    let mut server = Server::new(config);
    server.run().context("server failed")?;
    Ok(())
}
