use crate::config::harvest::HarvestConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "subject-harvest")]
#[command(about = "Fetch book metadata per subject from Open Library into one JSON file")]
pub struct CliConfig {
    /// Optional TOML file with [source], [subjects], [load] and [error_handling] sections
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the subject list path (JSON array of strings)
    #[arg(long)]
    pub subjects: Option<String>,

    /// Override the output file path
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then command line overrides.
    pub fn to_harvest_config(&self) -> Result<HarvestConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                HarvestConfig::from_file(path)?
            }
            None => HarvestConfig::default(),
        };

        if let Some(subjects) = &self.subjects {
            config.subjects.path = subjects.clone();
        }
        if let Some(output) = &self.output {
            config.load.output_path = output.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["subject-harvest"]);
        assert_eq!(cli.to_harvest_config().unwrap(), HarvestConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[load]\noutput_path = \"from_file.json\"\n[source]\nlimit = 5\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "subject-harvest",
            "--config",
            path.as_str(),
            "--output",
            "from_flag.json",
            "--subjects",
            "subjects.json",
        ]);
        let config = cli.to_harvest_config().unwrap();

        assert_eq!(config.output_path(), "from_flag.json");
        assert_eq!(config.subjects_path(), "subjects.json");
        assert_eq!(config.source.limit, 5);
    }
}
