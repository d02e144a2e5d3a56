//! The call boundary to the COFF linker proper.
//!
//! Everything on the far side of `Backend::link` is opaque to us: symbol resolution, relocations,
//! section layout and PE emission are the backend's business, as is its own error reporting. We
//! hand over one fully translated argument vector and get back a single success/failure bit.

use crate::error::Result;
use anyhow::Context as _;
use std::process::Command;

pub(crate) trait Backend {
    /// Runs one link job. `args[0]` is the backend's own program name, the remaining elements its
    /// arguments. Returns whether the backend reported success.
    fn link(&self, args: &[String]) -> Result<bool>;
}

/// Invokes the external COFF linker as a child process. The process boundary is what turns our
/// owned strings into the argv pointer array the backend sees; nothing outlives the call.
pub(crate) struct CoffLinker;

impl Backend for CoffLinker {
    fn link(&self, args: &[String]) -> Result<bool> {
        let (program, rest) = args
            .split_first()
            .context("translated command is empty")?;
        tracing::debug!("invoking backend: {program}");
        let status = Command::new(program)
            .args(rest)
            .status()
            .with_context(|| format!("failed to run backend linker `{program}`"))?;
        Ok(status.success())
    }
}
