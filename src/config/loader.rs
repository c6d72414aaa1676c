use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::RiskformConfig;

const CONFIG_FILE_NAME: &str = ".riskform.toml";

/// Read the raw contents of a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML string and validate the scoring sections.
///
/// A file that does not parse is an error. A file that parses but
/// describes an unusable scorer is downgraded: the offending sections are
/// dropped with a warning and the defaults take over.
pub fn parse_and_validate_config(contents: &str) -> Result<RiskformConfig, String> {
    let mut config = toml::from_str::<RiskformConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.build_model() {
        eprintln!("Warning: Invalid scoring config: {}. Using defaults.", e);
        config.model = None;
        config.ratings = None;
    }

    Ok(config)
}

/// Try loading config from a specific path, returning `None` on any
/// failure.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RiskformConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found".
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub(crate) fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load config by searching the current directory and its ancestors for
/// `.riskform.toml`. Defaults when nothing usable is found.
pub fn load_config() -> RiskformConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return RiskformConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RiskformConfig::default()
        })
}

/// Load config from an explicit path, or fall back to ancestor search.
///
/// An explicit path that cannot be read or parsed is a hard error; the
/// user asked for that file specifically.
pub fn load_config_from(path: Option<&Path>) -> anyhow::Result<RiskformConfig> {
    match path {
        Some(path) => {
            let contents = read_config_file(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            parse_and_validate_config(&contents).map_err(anyhow::Error::msg)
        }
        None => Ok(load_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RatingBands;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ratings_override() {
        let contents = indoc! {r#"
            [ratings]
            average = 400
            good = 600
            excellent = 800
        "#};
        let config = parse_and_validate_config(contents).unwrap();
        assert_eq!(
            config.ratings,
            Some(RatingBands {
                average: 400,
                good: 600,
                excellent: 800,
            })
        );
        assert_eq!(config.model, None);
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(parse_and_validate_config("ratings = 'nope").is_err());
    }

    #[test]
    fn test_unusable_scoring_sections_fall_back_to_defaults() {
        // Thresholds out of order: parses, but cannot build a scorer.
        let contents = indoc! {r#"
            [ratings]
            average = 800
            good = 600
            excellent = 400
        "#};
        let config = parse_and_validate_config(contents).unwrap();
        assert_eq!(config, RiskformConfig::default());
    }

    #[test]
    fn test_missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            try_load_config_from_path(&dir.path().join(CONFIG_FILE_NAME)),
            None
        );
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            indoc! {r#"
                [ratings]
                average = 450
                good = 640
                excellent = 780
            "#},
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(
            config.ratings,
            Some(RatingBands {
                average: 450,
                good: 640,
                excellent: 780,
            })
        );

        // An explicit path that does not exist is a hard error.
        assert!(load_config_from(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_directory_ancestors_walks_upward() {
        let ancestors: Vec<_> =
            directory_ancestors(PathBuf::from("/a/b/c"), 3).collect();
        assert_eq!(
            ancestors,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
            ]
        );
    }
}
