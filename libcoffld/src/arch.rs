//! The machines the backend can target, keyed by the GNU emulation names `-m` accepts.

use anyhow::bail;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Machine {
    I386,
    X86_64,
    Thumb,
    Arm64,
}

impl FromStr for Machine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i386pe" => Ok(Machine::I386),
            // Despite the name, i386pep is the 64-bit PE+ emulation.
            "i386pep" => Ok(Machine::X86_64),
            "thumb2pe" => Ok(Machine::Thumb),
            "arm64pe" => Ok(Machine::Arm64),
            _ => bail!("unknown parameter: -m{s}"),
        }
    }
}

impl Machine {
    /// The machine name in the backend's own flag vocabulary.
    pub(crate) fn native_name(self) -> &'static str {
        match self {
            Machine::I386 => "x86",
            Machine::X86_64 => "x64",
            Machine::Thumb => "arm",
            Machine::Arm64 => "arm64",
        }
    }

    /// 32-bit x86 decorates C symbols with a leading underscore, so references to ImageBase need
    /// an extra underscore there.
    pub(crate) fn underscore_prefixed_symbols(self) -> bool {
        matches!(self, Machine::I386)
    }
}
