//! Command line for the `rackstore-web` binary

use crate::config::{ConfigError, RackConfig, CONFIG_FILE_NAME};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Parsed command line. `None` means "use the config file value".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: PathBuf,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Write a default `rackstore.toml` under `root` if there is none
    pub init: bool,
}

pub fn build_cli() -> Command {
    Command::new("rackstore-web")
        .about("Serve the parts rack inventory UI")
        .arg(
            Arg::new("root")
                .long("root")
                .help("Repository root holding data/ and rackstore.toml (default: .)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Listen address (overrides [web].host)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .help("Listen port (overrides [web].port)")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("init")
                .long("init")
                .help("Write a default rackstore.toml under --root if missing")
                .action(ArgAction::SetTrue),
        )
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        CliArgs {
            root: matches
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            host: matches.get_one::<String>("host").cloned(),
            port: matches.get_one::<u16>("port").copied(),
            init: matches.get_flag("init"),
        }
    }

    /// Effective configuration: the root's config file (written first when
    /// `--init` is set), then command line overrides
    pub fn resolve_config(&self) -> Result<RackConfig, ConfigError> {
        if self.init {
            RackConfig::write_default_if_missing(&self.root.join(CONFIG_FILE_NAME))?;
        }
        let mut config = RackConfig::load_or_default(&self.root)?;
        if let Some(host) = &self.host {
            config.web.host = host.clone();
        }
        if let Some(port) = self.port {
            config.web.port = port;
        }
        Ok(config)
    }
}
