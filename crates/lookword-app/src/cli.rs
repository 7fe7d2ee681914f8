use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lookword_config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Word lookup service: local dictionary + scraped word lists + thesaurus
#[derive(Debug, Parser)]
#[command(name = "lookword", version)]
pub struct Args {
    /// JSON config file; environment variables still override it
    #[arg(short, long, env = "LOOKWORD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Dictionary file to load instead of the configured one
    #[arg(short, long)]
    pub dict: Option<PathBuf>,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    /// Command line flags win over file and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dict) = &self.dict {
            config.dictionary.path = dict.display().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["lookword", "--port", "9000", "--dict", "data/en-vi.txt"]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dictionary.path, "data/en-vi.txt");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
