//! A handwritten parser for our arguments.
//!
//! The incoming syntax is GNU ld's, so we can't lean on a general-purpose CLI library: long
//! options need to be accepted with a single '-' in addition to the more common double-dash,
//! `-l`/`-L` take their values either joined or as a separate token, and the relative order of
//! repeated flags and positional inputs has to survive parsing because the translation pass
//! re-emits them interleaved.
//!
//! All classification goes through the table in `option_table`; this module only supplies the
//! token mechanics and the ordered, read-only list the translator consumes.

use crate::error::Result;
use crate::option_table;
use crate::option_table::Arity;
use crate::option_table::Opt;
use anyhow::bail;

#[derive(Debug)]
pub(crate) struct Argument {
    pub(crate) opt: Opt,
    pub(crate) value: Option<String>,
}

/// The parsed argument vector. Built once per invocation, read-only afterwards. The position of
/// an argument is its index in the list; parsing never reorders anything.
#[derive(Debug)]
pub(crate) struct ArgumentList {
    args: Vec<Argument>,
}

/// Parses the supplied arguments, which should not include the program name. Any syntax problem
/// is fatal: a flag without its required value, a token that matches no known spelling, or an
/// argument vector with nothing to link.
pub(crate) fn parse<S: AsRef<str>, I: Iterator<Item = S>>(mut input: I) -> Result<ArgumentList> {
    let mut args = Vec::new();

    while let Some(token) = input.next() {
        let token = token.as_ref();

        if !token.starts_with('-') {
            args.push(Argument {
                opt: Opt::Input,
                value: Some(token.to_owned()),
            });
            continue;
        }
        let stripped = token.strip_prefix("--").unwrap_or(&token[1..]);

        if let Some(spec) = option_table::find_exact(stripped) {
            let value = match spec.arity {
                Arity::Flag => None,
                Arity::TakesValue => match input.next() {
                    Some(value) => Some(value.as_ref().to_owned()),
                    None => bail!("{token}: missing argument"),
                },
            };
            args.push(Argument {
                opt: spec.opt,
                value,
            });
        } else if let Some((spec, rest)) = option_table::find_joined(stripped) {
            args.push(Argument {
                opt: spec.opt,
                value: Some(rest.to_owned()),
            });
        } else {
            bail!("unknown argument: {token}");
        }
    }

    let list = ArgumentList { args };
    if !list.has(Opt::Input) && !list.has(Opt::Lib) {
        bail!("no input files");
    }
    Ok(list)
}

impl ArgumentList {
    pub(crate) fn has(&self, opt: Opt) -> bool {
        self.args.iter().any(|arg| arg.opt == opt)
    }

    /// The value of the last occurrence of `opt`. Single-valued flags are last-wins, matching GNU
    /// ld: a wrapper script can append overrides without scrubbing what came before.
    pub(crate) fn last_value(&self, opt: Opt) -> Option<&str> {
        self.args
            .iter()
            .rev()
            .find(|arg| arg.opt == opt)
            .and_then(|arg| arg.value.as_deref())
    }

    /// Values of every occurrence of `opt`, in command-line order.
    pub(crate) fn values(&self, opt: Opt) -> impl Iterator<Item = &str> {
        self.args
            .iter()
            .filter(move |arg| arg.opt == opt)
            .filter_map(|arg| arg.value.as_deref())
    }

    /// Positional inputs and `-l` references, interleaved in command-line order. Both always
    /// carry a value.
    pub(crate) fn inputs_and_libs(&self) -> impl Iterator<Item = (Opt, &str)> {
        self.args
            .iter()
            .filter(|arg| matches!(arg.opt, Opt::Input | Opt::Lib))
            .filter_map(|arg| arg.value.as_deref().map(|value| (arg.opt, value)))
    }
}
