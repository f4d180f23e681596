use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

/// Write the default configuration to `path`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(path, default_config_toml())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_path;
    use tempfile::TempDir;

    #[test]
    fn writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        write_default_config(&path, false).unwrap();
        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.scoring, crate::config::ScoringConfig::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_default_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_default_config(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[scoring]"));
    }
}
