//! A GNU ld style front end for a COFF linker.
//!
//! Toolchains that target Windows from a Unix-ish driver (mingw-w64 style) invoke the linker with
//! Unix `ld` syntax. This crate parses that syntax, resolves `-lNAME` references against the `-L`
//! search path, rewrites everything into the backend linker's own flag vocabulary and runs the
//! backend once with the result. It never looks inside an object or archive file; all the actual
//! linking lives behind the one call in `backend`.

use crate::args::ArgumentList;
use crate::backend::CoffLinker;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub(crate) mod arch;
pub(crate) mod args;
pub(crate) mod backend;
pub mod error;
pub(crate) mod library;
pub(crate) mod option_table;
pub(crate) mod translate;

pub struct Driver {
    args: ArgumentList,
}

impl Driver {
    /// Parses the supplied GNU-style arguments, which should not include the program name.
    pub fn from_args<S: AsRef<str>, I: Iterator<Item = S>>(args: I) -> error::Result<Self> {
        Ok(Driver {
            args: args::parse(args)?,
        })
    }

    /// Translates the arguments and runs the backend linker, returning whether the link
    /// succeeded. A dry run (`-###`) echoes the translated command and succeeds without invoking
    /// the backend.
    pub fn run(&self) -> error::Result<bool> {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::from_default_env())
            .init();

        translate::link(&self.args, &CoffLinker)
    }
}
