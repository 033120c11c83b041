use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Cli;
use crate::provision::{PLACEHOLDER_MESSAGE, Provisioner, STARTUP_MESSAGE};
use crate::util::fs::DirState;

pub fn run(cli: Cli) -> Result<()> {
    let provisioner = Provisioner::from_current_exe()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&provisioner, cli.dry_run, &mut out)
}

/// Ensure the directory, write the placeholder, and report each step to `out`.
fn execute(provisioner: &Provisioner, dry_run: bool, out: &mut impl Write) -> Result<()> {
    debug!(dir = %provisioner.target(), dry_run, "provisioning");
    if dry_run {
        if provisioner.plan_directory()? == DirState::Created {
            writeln!(out, "[dry-run] would create {}", provisioner.target())?;
        }
        writeln!(out, "[dry-run] would write {}", provisioner.placeholder_path())?;
        return Ok(());
    }

    writeln!(out, "{}", STARTUP_MESSAGE).context("writing to stdout")?;

    let state = provisioner.ensure_directory()?;
    writeln!(out, "{}", state.message(provisioner.target()))?;

    provisioner.write_placeholder_file()?;
    writeln!(out, "{}", PLACEHOLDER_MESSAGE)?;
    Ok(())
}
