// src/cli/mod.rs
use clap::Parser;
use crate::core::config::{parse_level, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "Secure password generator API", long_about = None)]
pub struct Args {
    /// API server port (overrides WEB_PORT)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind (overrides WEB_ADDRESS)
    #[arg(long)]
    pub address: Option<String>,

    /// Log level: error, warn, info, debug, trace (overrides LOG_LEVEL)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.web_port = port;
        }
        if let Some(address) = &self.address {
            config.web_address = address.clone();
        }
        if let Some(level) = self.log_level.as_deref().and_then(parse_level) {
            config.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["rust_passgen", "--port", "9100", "--log-level", "trace"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.web_port, 9100);
        assert_eq!(config.web_address, "0.0.0.0");
        assert_eq!(config.log_level, log::LevelFilter::Trace);
    }
}
