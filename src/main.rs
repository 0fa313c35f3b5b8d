// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hello_world::io::{is_broken_pipe, write_welcome_message};

/// Prints a welcome message.
#[derive(Debug, Parser)]
#[command(name = "hello-world", version, about, long_about = None)]
pub struct App {
    /// ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    init_tracing();

    match App::try_parse() {
        Ok(args) => {
            if !args.ignored.is_empty() {
                debug!(ignored = ?args.ignored, "ignoring arguments");
            }
        }
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                return Ok(());
            }
            // arguments never fail the command
            kind => debug!(?kind, "ignoring arguments clap rejected"),
        },
    }

    let stdout = io::stdout();
    match write_welcome_message(&mut stdout.lock()) {
        Err(err) if is_broken_pipe(&err) => Ok(()),
        result => result,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
