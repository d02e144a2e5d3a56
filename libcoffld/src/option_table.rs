//! The table of options we accept, GNU ld spellings only. The backend linker's own option
//! syntax never appears here; producing it is `translate`'s job.

/// Canonical identity of an option. Alias spellings (e.g. `-e` for `-entry`) resolve to the same
/// `Opt` at lookup time, so nothing downstream of the parser can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Opt {
    /// A positional input file. Not present in the table; anything that doesn't start with a dash
    /// classifies as this.
    Input,
    Lib,
    SearchPath,
    Entry,
    Subsystem,
    OutImplib,
    Stack,
    Output,
    Shared,
    Machine,
    Mllvm,
    Static,
    Verbose,
    DryRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    Flag,
    TakesValue,
}

pub(crate) struct OptionSpec {
    pub(crate) opt: Opt,
    /// Accepted spellings, without leading dashes.
    pub(crate) spellings: &'static [&'static str],
    pub(crate) arity: Arity,
    /// Whether the value may be written directly after the spelling (`-lfoo`, `-L/usr/lib`) in
    /// addition to being a separate token.
    pub(crate) joined: bool,
}

const fn flag(opt: Opt, spellings: &'static [&'static str]) -> OptionSpec {
    OptionSpec {
        opt,
        spellings,
        arity: Arity::Flag,
        joined: false,
    }
}

const fn value(opt: Opt, spellings: &'static [&'static str]) -> OptionSpec {
    OptionSpec {
        opt,
        spellings,
        arity: Arity::TakesValue,
        joined: false,
    }
}

const fn joined_value(opt: Opt, spellings: &'static [&'static str]) -> OptionSpec {
    OptionSpec {
        opt,
        spellings,
        arity: Arity::TakesValue,
        joined: true,
    }
}

pub(crate) const OPTION_TABLE: &[OptionSpec] = &[
    value(Opt::Entry, &["entry", "e"]),
    value(Opt::Subsystem, &["subs", "subsystem"]),
    value(Opt::OutImplib, &["out-implib"]),
    value(Opt::Stack, &["stack"]),
    value(Opt::Output, &["o"]),
    flag(Opt::Shared, &["shared"]),
    value(Opt::Machine, &["m"]),
    value(Opt::Mllvm, &["mllvm"]),
    joined_value(Opt::SearchPath, &["L"]),
    joined_value(Opt::Lib, &["l"]),
    flag(Opt::Static, &["Bstatic", "static"]),
    flag(Opt::Verbose, &["verbose"]),
    flag(Opt::DryRun, &["###"]),
];

/// Finds the option whose spelling is exactly `stripped` (leading dashes already removed).
pub(crate) fn find_exact(stripped: &str) -> Option<&'static OptionSpec> {
    OPTION_TABLE
        .iter()
        .find(|spec| spec.spellings.contains(&stripped))
}

/// Finds an option written in joined form (`-lfoo`). Exact matches are tried first by the parser,
/// so the returned remainder is always non-empty.
pub(crate) fn find_joined(stripped: &str) -> Option<(&'static OptionSpec, &str)> {
    OPTION_TABLE
        .iter()
        .filter(|spec| spec.joined)
        .find_map(|spec| {
            spec.spellings.iter().find_map(|spelling| {
                stripped
                    .strip_prefix(spelling)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (spec, rest))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::OPTION_TABLE;
    use super::Opt;

    #[test]
    fn spellings_are_unique() {
        let mut seen: Vec<&str> = Vec::new();
        for spec in OPTION_TABLE {
            assert!(!spec.spellings.is_empty());
            for spelling in spec.spellings {
                assert!(
                    !spelling.starts_with('-'),
                    "spelling cannot start with a dash: `{spelling}`"
                );
                assert!(!seen.contains(spelling), "duplicate spelling `{spelling}`");
                seen.push(spelling);
            }
        }
    }

    #[test]
    fn aliases_classify_to_one_id() {
        assert_eq!(super::find_exact("entry").unwrap().opt, Opt::Entry);
        assert_eq!(super::find_exact("e").unwrap().opt, Opt::Entry);
        assert_eq!(super::find_exact("Bstatic").unwrap().opt, Opt::Static);
        assert_eq!(super::find_exact("static").unwrap().opt, Opt::Static);
    }

    #[test]
    fn joined_lookup() {
        let (spec, rest) = super::find_joined("lfoo").unwrap();
        assert_eq!(spec.opt, Opt::Lib);
        assert_eq!(rest, "foo");

        let (spec, rest) = super::find_joined("L/usr/lib").unwrap();
        assert_eq!(spec.opt, Opt::SearchPath);
        assert_eq!(rest, "/usr/lib");

        // A bare `-l` is not a joined form; the parser handles it as separate-value.
        assert!(super::find_joined("l").is_none());
        assert!(super::find_joined("entry").is_none());
    }
}
