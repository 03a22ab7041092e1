//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use redline_catalog::Catalog;

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["redline.toml", ".redline.toml", "redline.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            // Try to find config in current directory or parent directories
            None => Self::find_config(&cwd)?.unwrap_or_default(),
        };
        tracing::debug!(?config, "loaded cli config");

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest directory holding any of the config names wins; within
    /// a directory, names are tried in `CONFIG_NAMES` order. A file that
    /// exists but does not parse is an error.
    fn find_config(start: &Path) -> Result<Option<CliConfig>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    let path = config_path.to_string_lossy();
                    return CliConfig::load(&path).map(Some);
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// The embedded catalog.
    pub fn catalog(&self) -> &'static Catalog {
        redline_catalog::catalog()
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Read a catalog from a JSON file.
    pub fn read_catalog(&self, path: &str) -> Result<Catalog> {
        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Catalog::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn context_in(dir: &Path) -> Context {
        Context {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_no_config_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Context::find_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_config_found_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        write(dir.path(), "redline.toml", "[output]\npretty = true\n");

        let config = Context::find_config(&nested).unwrap().unwrap();
        assert!(config.output.pretty);
    }

    #[test]
    fn test_nearest_directory_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        write(dir.path(), "redline.toml", "[output]\npretty = true\n");
        write(&nested, "redline.json", r#"{"output": {"currency_symbol": "EUR "}}"#);

        let config = Context::find_config(&nested).unwrap().unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.output.currency_symbol, "EUR ");
    }

    #[test]
    fn test_redline_toml_preferred_over_dotfile() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "redline.toml", "[output]\ncurrency_symbol = \"A\"\n");
        write(dir.path(), ".redline.toml", "[output]\ncurrency_symbol = \"B\"\n");

        let config = Context::find_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output.currency_symbol, "A");
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "redline.toml", "[validation]\nwarnings_as_errors = tru\n");

        let err = Context::find_config(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("redline.toml"));
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "custom.toml", "[validation]\nwarnings_as_errors = true\n");
        let path = dir.path().join("custom.toml");

        let ctx = Context::load(path.to_str(), Output::new(false, true)).unwrap();
        assert!(ctx.config.validation.warnings_as_errors);
    }

    #[test]
    fn test_read_catalog_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let json = redline_catalog::catalog().to_json(false).unwrap();
        write(dir.path(), "catalog.json", &json);

        let catalog = context_in(dir.path()).read_catalog("catalog.json").unwrap();
        assert_eq!(&catalog, redline_catalog::catalog());
    }

    #[test]
    fn test_read_catalog_errors_name_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "broken.json", "{\"products\": [");
        let ctx = context_in(dir.path());

        let err = ctx.read_catalog("broken.json").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse catalog file"));

        let err = ctx.read_catalog("missing.json").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read catalog file"));
    }
}
