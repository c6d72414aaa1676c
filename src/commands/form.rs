//! Launches the interactive scoring form.

use std::path::Path;

use anyhow::Result;

use crate::config::loader::load_config_from;
use crate::tui::FormTui;

pub fn run_form(config_path: Option<&Path>) -> Result<()> {
    let config = load_config_from(config_path)?;
    let model = config.build_model()?;

    log::debug!("Starting interactive form");
    let mut tui = FormTui::new(Box::new(model))?;
    tui.run()
}
