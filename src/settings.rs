use anyhow::{Context, Result};
use directories_next::BaseDirs;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const BANK_ENV_VAR: &str = "QUIZSET_BANK";

#[derive(Debug)]
pub struct Settings {
    pub number_of_questions: usize,
    pub wordwrap_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            number_of_questions: 20,
            wordwrap_width: 80,
        }
    }
}

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("quizset");
    dir.push("questions");
    Ok(dir)
}

/// Question bank locations: the ones given on the command line, then the
/// `QUIZSET_BANK` path list, then the user data directory.
pub fn resolve_bank_paths(cli_paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    resolve_bank_paths_from(cli_paths, env::var_os(BANK_ENV_VAR))
}

fn resolve_bank_paths_from(
    cli_paths: &[PathBuf],
    env_paths: Option<OsString>,
) -> Result<Vec<PathBuf>> {
    if !cli_paths.is_empty() {
        return Ok(cli_paths.to_vec());
    }
    if let Some(env_paths) = env_paths.filter(|p| !p.is_empty()) {
        return Ok(env::split_paths(&env_paths).collect());
    }
    Ok(vec![get_data_dir()?])
}
