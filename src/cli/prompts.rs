//! Interactive confirmation prompts for the headless report path

use std::path::Path;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Ask before overwriting an existing export file. Defaults to no.
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
