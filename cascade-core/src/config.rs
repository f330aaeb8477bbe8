//! Engine configuration, stored as json5 next to the host server's own config.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/cascade_config.json5");

/// Tuning knobs of the flow engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FluidConfig {
    /// How many path search queues the pool retains between ticks.
    pub queue_pool_size: usize,
    /// Initial node capacity of a freshly allocated queue.
    pub queue_capacity: usize,
    /// A search node is abandoned once its remaining depth plus this slack
    /// drops to zero or below.
    pub search_slack: u8,
}

impl FluidConfig {
    /// Loads the config at `path`, writing the bundled default there first if
    /// the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("Wrote default fluid config to {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: FluidConfig = serde_json5::from_str(&config_str)?;
        config.validate()?;
        if config.queue_capacity < 16 {
            log::warn!(
                "Fluid queue capacity {} is very small, searches will reallocate",
                config.queue_capacity
            );
        }
        Ok(config)
    }

    /// Checks that every value is within its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_pool_size == 0 {
            return Err(ConfigError::Invalid("Queue pool size must be at least 1"));
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::Invalid("Queue capacity must be at least 1"));
        }
        if !(1..=8).contains(&self.search_slack) {
            return Err(ConfigError::Invalid("Search slack must be in range 1..8"));
        }
        Ok(())
    }
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            queue_pool_size: 16,
            queue_capacity: 64,
            search_slack: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::path::PathBuf;
    use std::process;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("cascade-{name}-{}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_bundled_default_matches() {
        let parsed: FluidConfig = serde_json5::from_str(DEFAULT_CONFIG).expect("bundled config");
        assert_eq!(parsed, FluidConfig::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = FluidConfig {
            queue_pool_size: 0,
            ..FluidConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = FluidConfig {
            queue_capacity: 0,
            ..FluidConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        for search_slack in [0, 9] {
            let config = FluidConfig {
                search_slack,
                ..FluidConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = scratch_dir("create");
        let path = dir.join("config").join("cascade_config.json5");

        let config = FluidConfig::load_or_create(&path).expect("created config");
        assert_eq!(config, FluidConfig::default());
        assert_eq!(fs::read_to_string(&path).expect("written file"), DEFAULT_CONFIG);

        // A second load parses the written file.
        let config = FluidConfig::load_or_create(&path).expect("loaded config");
        assert_eq!(config, FluidConfig::default());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_reports_bad_files() {
        let dir = scratch_dir("bad");
        fs::create_dir_all(&dir).expect("scratch dir");

        let path = dir.join("broken.json5");
        fs::write(&path, "{ queue_pool_size: ").expect("write");
        assert!(matches!(
            FluidConfig::load_or_create(&path),
            Err(ConfigError::Parse(_))
        ));

        let path = dir.join("invalid.json5");
        fs::write(
            &path,
            "{ queue_pool_size: 4, queue_capacity: 32, search_slack: 12 }",
        )
        .expect("write");
        assert!(matches!(
            FluidConfig::load_or_create(&path),
            Err(ConfigError::Invalid(_))
        ));
        let _ = fs::remove_dir_all(dir);
    }
}
