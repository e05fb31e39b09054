//! Command-line surface: `chperm [OPTION]... [OWNER][:[GROUP]] [MODE] FILE...`
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::constants::PROGRAM_NAME;
use crate::policy::{Flags, Options};
use crate::types::{looks_like_mode, Error, IdField};

pub const USAGE: &str = "\
Usage: chperm [OPTION]... [OWNER][:[GROUP]] [MODE] FILE...
Change the owner, group, and/or permissions of each FILE.

Options:
  -c, --changes          like verbose but report only when a change is made
  -f, --silent, --quiet  suppress most error messages
  -v, --verbose          output a diagnostic for every file processed
  -R, --recursive        operate on files and directories recursively
  -h, --no-dereference   affect symbolic links instead of any referenced file
  -L, --dereference      dereference all symbolic links
      --help             display this help and exit
      --version          output version information and exit

MODE can be:
  - Numeric (octal): 755, 644, etc.
  - Symbolic: u+x, g-w, o=r, a+rw, etc.
A MODE starting with '-' (e.g. -w) must follow '--':  chperm -- root -w /u

Examples:
  chperm root /u              Change the owner of /u to \"root\".
  chperm root:staff /u        Change owner to \"root\" and group to \"staff\".
  chperm root 755 /u          Change owner to \"root\" and permissions to 755.
  chperm root:staff 644 /u    Change owner, group, and permissions.
  chperm :staff u+x /u        Change group and add execute for user.
  chperm -hR root 755 /u      Recursively change owner and permissions.
";

mod options {
    pub const CHANGES: &str = "changes";
    pub const QUIET: &str = "quiet";
    pub const VERBOSE: &str = "verbose";
    pub const RECURSIVE: &str = "recursive";
    pub const NO_DEREFERENCE: &str = "no-dereference";
    pub const DEREFERENCE: &str = "dereference";
    pub const HELP: &str = "help";
    pub const VERSION: &str = "version";
    pub const OPERANDS: &str = "operands";
}

/// A validated invocation, ready to be resolved and run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub options: Options,
    pub owner_group: String,
    pub mode: Option<String>,
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    Help,
    Version,
    Run(Invocation),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Invalid(#[from] Error),
}

pub fn command() -> Command {
    let flag = |id: &'static str, short: char, help: &'static str| {
        Arg::new(id)
            .long(id)
            .short(short)
            .help(help)
            .action(ArgAction::SetTrue)
    };
    Command::new(PROGRAM_NAME)
        .override_usage("chperm [OPTION]... [OWNER][:[GROUP]] [MODE] FILE...")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(flag(options::CHANGES, 'c', "like verbose but report only when a change is made"))
        .arg(flag(options::QUIET, 'f', "suppress most error messages").visible_alias("silent"))
        .arg(flag(options::VERBOSE, 'v', "output a diagnostic for every file processed"))
        .arg(flag(options::RECURSIVE, 'R', "operate on files and directories recursively"))
        .arg(flag(
            options::NO_DEREFERENCE,
            'h',
            "affect symbolic links instead of any referenced file",
        ))
        .arg(flag(options::DEREFERENCE, 'L', "dereference all symbolic links"))
        .arg(
            Arg::new(options::HELP)
                .long(options::HELP)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(options::VERSION)
                .long(options::VERSION)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(options::OPERANDS)
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(OsString)),
        )
}

/// Parse process arguments (program name first).
///
/// # Errors
///
/// `CliError::Usage` for unknown options, `CliError::Invalid` for conflicting flags or missing
/// operands.
pub fn parse<I, T>(args: I) -> Result<Parsed, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    if matches.get_flag(options::HELP) {
        return Ok(Parsed::Help);
    }
    if matches.get_flag(options::VERSION) {
        return Ok(Parsed::Version);
    }

    let options = Options::from_flags(flags_of(&matches))?;
    let operands: Vec<OsString> = matches
        .get_many::<OsString>(options::OPERANDS)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    let (owner_group, mode, files) = split_operands(operands)?;
    Ok(Parsed::Run(Invocation {
        options: options.with_apply_permissions(mode.is_some()),
        owner_group,
        mode,
        files,
    }))
}

fn flags_of(m: &ArgMatches) -> Flags {
    Flags {
        recursive: m.get_flag(options::RECURSIVE),
        verbose: m.get_flag(options::VERBOSE),
        changes_only: m.get_flag(options::CHANGES),
        quiet: m.get_flag(options::QUIET),
        no_dereference: m.get_flag(options::NO_DEREFERENCE),
        dereference: m.get_flag(options::DEREFERENCE),
    }
}

/// Split `OWNER[:GROUP] [MODE] FILE...`.
///
/// The second operand is MODE only when it looks like one and at least one more operand follows;
/// otherwise it is the first file.
fn split_operands(operands: Vec<OsString>) -> Result<(String, Option<String>, Vec<PathBuf>), Error> {
    match operands.len() {
        0 => return Err(Error::MissingOperand("operand")),
        1 => return Err(Error::MissingOperand("file operand")),
        _ => {}
    }
    let mut rest = operands.into_iter();
    let owner_raw = rest.next().unwrap_or_default();
    let owner_group = owner_raw.into_string().map_err(|raw| Error::InvalidIdentifier {
        field: IdField::OwnerGroup,
        token: raw.to_string_lossy().into_owned(),
    })?;

    let mut rest: Vec<OsString> = rest.collect();
    let mode = match rest.first().and_then(|t| t.to_str()) {
        Some(token) if rest.len() > 1 && looks_like_mode(token) => Some(token.to_string()),
        _ => None,
    };
    if mode.is_some() {
        rest.remove(0);
    }
    let files = rest.into_iter().map(PathBuf::from).collect();
    Ok((owner_group, mode, files))
}
