//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["veracity.toml", ".veracity.toml"];

/// Prefix of environment overrides, e.g. `VERACITY_OUTPUT__FORMAT=json`
const ENV_PREFIX: &str = "VERACITY_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `VERACITY_<SECTION>__<KEY>` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./veracity.toml` or `./.veracity.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/veracity/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        // Explicit path: highest priority for files
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/veracity/config.toml if set,
    /// otherwise falls back to ~/.config/veracity/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("veracity").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<7}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND  ] Project:  {}", path.display());
        } else {
            println!("  [       ] Project:  ./veracity.toml or ./.veracity.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{:<7}] Global:   {}", mark, path.display());
        }

        println!("  [       ] Env:      {}<SECTION>__<KEY>", ENV_PREFIX);
        println!("  [       ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.recommendation.threshold, 70);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("veracity"));
    }

    #[test]
    fn test_later_sources_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("veracity.toml");
        let explicit = dir.path().join("explicit.toml");

        fs::write(
            &global,
            "[recommendation]\nthreshold = 60\nquestionable_below = 20\n[output]\ncolor = false\n",
        )
        .unwrap();
        fs::write(&project, "[recommendation]\nthreshold = 55\n").unwrap();
        fs::write(&explicit, "[analysis]\nprocessing_ms = 500\n").unwrap();

        let config: FileConfig =
            ConfigLoader::figment(
                Some(global.as_path()),
                Some(project.as_path()),
                Some(explicit.as_path()),
            )
                .extract()
                .unwrap();

        assert_eq!(config.recommendation.threshold, 55);
        assert_eq!(config.recommendation.questionable_below, 20);
        assert!(!config.output.color);
        assert_eq!(config.analysis.processing_ms, 500);
        assert_eq!(config.analysis.analyzing_ms, 4000);
    }

    #[test]
    fn test_env_overrides_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("explicit.toml", "[output]\nformat = \"full\"\n")?;
            jail.set_env("VERACITY_OUTPUT__FORMAT", "json");
            jail.set_env("VERACITY_RECOMMENDATION__THRESHOLD", "65");

            let explicit = PathBuf::from("explicit.toml");
            let config: FileConfig = ConfigLoader::figment(None, None, Some(explicit.as_path()))
                .merge(Env::prefixed(ENV_PREFIX).split("__"))
                .extract()?;

            assert_eq!(config.output.format, "json");
            assert_eq!(config.recommendation.threshold, 65);
            Ok(())
        });
    }

    #[test]
    fn test_missing_global_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config: FileConfig =
            ConfigLoader::figment(Some(dir.path().join("absent.toml").as_path()), None, None)
                .extract()
                .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("broken.toml");
        fs::write(&explicit, "[recommendation]\nthreshold = \"high\"\n").unwrap();

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(explicit.as_path())).extract();
        assert!(result.is_err());
    }
}
