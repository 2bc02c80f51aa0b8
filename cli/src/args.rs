//! Hand-rolled argv scanner for the `pbin` CLI.
//!
//! The flag grammar mixes bare tokens (`-hour`, `-never`), flag+value
//! pairs (`-expire 1day`), and a positional `https://` URL, which does
//! not map cleanly onto a declarative parser — so we scan `argv`
//! ourselves, the way the teacher's agent binary does.

use std::path::PathBuf;

use pbin_core::hosts::Expiry;

/// What the CLI was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Encrypt stdin (or a source file) and submit it.
    Put,
    /// Fetch and decrypt the paste at this URL.
    Get { url: String },
}

/// Fully parsed command-line invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub mode: Mode,
    pub base64: bool,
    pub burn_after_read: bool,
    pub open_discussion: bool,
    pub expiry: Expiry,
    pub output: Option<PathBuf>,
    pub password: Option<String>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            mode: Mode::Put,
            base64: false,
            burn_after_read: false,
            open_discussion: false,
            expiry: Expiry::default(),
            output: None,
            password: None,
        }
    }
}

/// Parses `argv` (excluding the program name) into a [`Cli`].
pub fn parse(argv: &[String]) -> Result<Cli, String> {
    let mut cli = Cli::default();
    let mut saw_url = false;

    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-base64" | "-b64" => cli.base64 = true,
            "-burn" | "-burnafterread" => cli.burn_after_read = true,
            "-open" | "-discussion" | "-comments" => cli.open_discussion = true,
            "-hour" | "-day" | "-week" | "-month" | "-year" | "-never" => {
                let token = &arg[1..];
                cli.expiry = Expiry::parse(token)
                    .ok_or_else(|| format!("unrecognized expiry token: {token}"))?;
            }
            "-expire" | "-x" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                cli.expiry = Expiry::parse(value)
                    .ok_or_else(|| format!("unrecognized expiry token: {value}"))?;
            }
            "-o" => {
                let value = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
                cli.output = Some(PathBuf::from(value));
            }
            "-p" => {
                let value = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
                cli.password = Some(value.clone());
            }
            s if s.starts_with("https://") => {
                if saw_url {
                    return Err("only one paste URL may be given".into());
                }
                cli.mode = Mode::Get { url: s.to_string() };
                saw_url = true;
            }
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }

    if cli.burn_after_read && cli.open_discussion {
        return Err("-burn and -open/-discussion are mutually exclusive".into());
    }

    Ok(cli)
}
