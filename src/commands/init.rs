use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".riskform.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Riskform Configuration
#
# Both sections are optional; missing sections use the built-in model.

# Lower score thresholds of the Average, Good, and Excellent bands.
# Scores below `average` are rated Poor.
[ratings]
average = 500
good = 650
excellent = 750

# Logistic model coefficient overrides. All four values must be supplied
# together, with one entry per feature:
#
# [model]
# means = [...]
# stds = [...]
# weights = [...]
# intercept = -2.84
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .riskform.toml configuration file");

    Ok(())
}
