// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::trace;

use crate::get_welcome_message;

/// Writes the welcome message followed by a newline. If the writer fails
/// an error will be returned.
pub fn write_welcome_message<W: Write>(out: &mut W) -> Result<()> {
    let message = get_welcome_message();
    writeln!(out, "{message}").context("writing welcome message")?;
    out.flush().context("flushing welcome message")?;
    trace!(greeting = message, "wrote welcome message");
    Ok(())
}

/// Whether `err` was caused by writing to a closed pipe.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
