//! Rewrites the parsed GNU-style arguments into the backend's native flag vocabulary.
//!
//! The rules run in a fixed order and the output list is append-only, so for a given argument
//! vector and filesystem state the emitted command is fully deterministic. Single-valued flags
//! are last-wins; repeated flags and positional inputs keep their relative order.

use crate::arch::Machine;
use crate::args::ArgumentList;
use crate::backend::Backend;
use crate::error::Result;
use crate::library;
use crate::option_table::Opt;
use itertools::Itertools;
use std::path::PathBuf;
use std::str::FromStr;

/// Name of the backend linker. Always the first element of the translated command.
pub(crate) const BACKEND_PROGRAM: &str = "lld-link";

pub(crate) fn translate(args: &ArgumentList) -> Result<Vec<String>> {
    let mut cmd = vec![BACKEND_PROGRAM.to_owned()];

    if let Some(value) = args.last_value(Opt::Entry) {
        cmd.push(format!("-entry:{value}"));
    }
    if let Some(value) = args.last_value(Opt::Subsystem) {
        cmd.push(format!("-subsystem:{value}"));
    }
    if let Some(value) = args.last_value(Opt::OutImplib) {
        cmd.push(format!("-implib:{value}"));
    }
    if let Some(value) = args.last_value(Opt::Stack) {
        cmd.push(format!("-stack:{value}"));
    }

    if let Some(value) = args.last_value(Opt::Output) {
        cmd.push(format!("-out:{value}"));
    } else if args.has(Opt::Shared) {
        cmd.push("-out:a.dll".to_owned());
    } else {
        cmd.push("-out:a.exe".to_owned());
    }

    if args.has(Opt::Shared) {
        cmd.push("-dll".to_owned());
    }

    let machine = args
        .last_value(Opt::Machine)
        .map(Machine::from_str)
        .transpose()?;
    if let Some(machine) = machine {
        cmd.push(format!("-machine:{}", machine.native_name()));
    }

    for value in args.values(Opt::Mllvm) {
        cmd.push(format!("-mllvm:{value}"));
    }

    // The backend only predefines __ImageBase; mingw startup code references __image_base__, so
    // we always alias one to the other.
    if machine.is_some_and(Machine::underscore_prefixed_symbols) {
        cmd.push("-alternatename:__image_base__=___ImageBase".to_owned());
    } else {
        cmd.push("-alternatename:__image_base__=__ImageBase".to_owned());
    }

    let search_paths: Vec<PathBuf> = args.values(Opt::SearchPath).map(PathBuf::from).collect();
    let static_only = args.has(Opt::Static);

    for (opt, value) in args.inputs_and_libs() {
        match opt {
            Opt::Input => cmd.push(value.to_owned()),
            Opt::Lib => {
                let resolved = library::search_library(value, &search_paths, static_only)?;
                tracing::debug!("resolved -l{value} to {}", resolved.display());
                cmd.push(resolved.display().to_string());
            }
            _ => unreachable!(),
        }
    }

    if args.has(Opt::Verbose) {
        cmd.push("-verbose".to_owned());
    }

    Ok(cmd)
}

/// Translates and then runs the backend, returning whether the link succeeded. With `--verbose`
/// or `-###` the assembled command is echoed to stdout first; `-###` stops there and reports
/// success without invoking the backend at all.
pub(crate) fn link(args: &ArgumentList, backend: &impl Backend) -> Result<bool> {
    let cmd = translate(args)?;

    if args.has(Opt::Verbose) || args.has(Opt::DryRun) {
        println!("{}", cmd.iter().join(" "));
    }
    if args.has(Opt::DryRun) {
        return Ok(true);
    }

    backend.link(&cmd)
}
