use crate::config::toml_config::{AppConfig, DEFAULT_CONFIG_FILE};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "study-abroad-api")]
#[command(about = "Program catalog and contact form API for the study-abroad site")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory of built front-end assets
    #[arg(long)]
    pub static_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Start with an empty program catalog")]
    pub no_seed: bool,
}

impl CliArgs {
    /// Command-line flags win over the file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = Some(dir.clone());
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }
        if self.no_seed {
            config.catalog.seed_sample_programs = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let args = CliArgs::parse_from([
            "study-abroad-api",
            "--port",
            "8081",
            "--json-logs",
            "--no-seed",
        ]);
        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(args.config, DEFAULT_CONFIG_FILE);
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, "json");
        assert!(!config.catalog.seed_sample_programs);
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let args = CliArgs::parse_from(["study-abroad-api"]);
        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
