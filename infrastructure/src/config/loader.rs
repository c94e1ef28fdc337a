//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: &[&str] = &["duo-chat.toml", ".duo-chat.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./duo-chat.toml` or `./.duo-chat.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/duo-chat/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path.map(PathBuf::as_path),
        )
    }

    /// Load with explicit locations for every layer
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: &Path,
        explicit_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        if let Some(project_path) = Self::find_project_config(project_dir) {
            figment = figment.merge(Toml::file(project_path));
        }

        // Explicit path wins over everything; a missing file is an error here
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/duo-chat/config.toml if set,
    /// otherwise the platform config dir equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("duo-chat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_config(Path::new("."))
    }

    fn find_project_config(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./duo-chat.toml or ./.duo-chat.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duo_domain::Model;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.generator.model.is_none());
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("duo-chat"));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_from(None, dir.path(), None).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(
            &global,
            "[generator]\nmodel = \"gemini-1.5-pro\"\n[output]\ncolor = false\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(".duo-chat.toml"),
            "[generator]\nmodel = \"gemini-2.0-flash\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from(Some(&global), dir.path(), None).unwrap();

        assert_eq!(config.generator.parse_model(), Model::Gemini20Flash);
        // Untouched keys from the global file survive the merge
        assert!(!config.output.color);
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("duo-chat.toml"),
            "[evaluator]\nmodel = \"deepseek-ai/DeepSeek-V3\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[evaluator]\nmodel = \"deepseek-ai/DeepSeek-R1\"\n").unwrap();

        let config = ConfigLoader::load_from(None, dir.path(), Some(&explicit)).unwrap();

        assert_eq!(config.evaluator.parse_model(), Model::DeepSeekR1);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ConfigLoader::load_from(None, dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("duo-chat.toml"), "[repl]\nshow_progress = \"yes\"\n").unwrap();
        assert!(ConfigLoader::load_from(None, dir.path(), None).is_err());
    }
}
