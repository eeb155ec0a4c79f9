use std::io::Write;

use colored::Colorize;
use svcs_sdk::{
    CommitOutcome, ConfigOutcome, IndexError, Repository, SdkError, StoreError, TrackOutcome,
};
use tracing::debug;

use crate::cli::*;

const HELP: &str = "These are SVCS commands:\n\
config     Get and set a username.\n\
add        Add a file to the index.\n\
log        Show commit logs.\n\
commit     Save changes.\n\
checkout   Restore a file.";

pub fn run_command(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let help_word = matches!(
        cli.command.as_ref(),
        Some(Command::Unknown(args)) if args.first().is_some_and(|a| a == "help")
    );
    let Some(command) = cli.command.as_ref().filter(|_| !(cli.help || help_word)) else {
        writeln!(out, "{HELP}")?;
        return Ok(());
    };
    if let Command::Unknown(args) = command {
        let name = args.first().map(String::as_str).unwrap_or_default();
        writeln!(out, "'{name}' is not a SVCS command.")?;
        return Ok(());
    }

    let repo = Repository::open(&cli.root, cli.repo_options())?;
    debug!(root = %repo.root().display(), "running command");

    match command {
        Command::Config(args) => cmd_config(&repo, args, out),
        Command::Add(args) => cmd_add(&repo, args, out),
        Command::Log => cmd_log(&repo, out),
        Command::Commit(args) => cmd_commit(&repo, args, out),
        Command::Checkout(args) => cmd_checkout(&repo, args, out),
        Command::Unknown(_) => Ok(()),
    }
}

/// Print the message for a user error, or hand an environment error back.
fn report(err: SdkError, arg: &str, out: &mut impl Write) -> anyhow::Result<()> {
    if !err.is_user_error() {
        return Err(err.into());
    }
    debug!(error = %err, "user error");
    match err {
        SdkError::EmptyMessage => writeln!(out, "Message was not passed.")?,
        SdkError::CommitNotFound(_) => writeln!(out, "Commit does not exist.")?,
        SdkError::Index(IndexError::NotFound(_)) => writeln!(out, "Can't find '{arg}'.")?,
        SdkError::Index(IndexError::NotAFile(_)) => writeln!(out, "'{arg}' is not a file.")?,
        SdkError::Index(IndexError::InvalidPath(_)) => {
            writeln!(out, "'{arg}' is outside the project.")?
        }
        SdkError::Store(StoreError::FileNotFound { path, .. }) => {
            writeln!(out, "Commit does not contain '{path}'.")?
        }
        other => writeln!(out, "{other}")?,
    }
    Ok(())
}

fn cmd_config(repo: &Repository, args: &ConfigArgs, out: &mut impl Write) -> anyhow::Result<()> {
    match repo.run(|r, s| Ok(r.configure(s, args.name.as_deref())))? {
        ConfigOutcome::Unset => writeln!(out, "Please, tell me who you are.")?,
        ConfigOutcome::Name(name) => writeln!(out, "The username is {name}.")?,
    }
    Ok(())
}

fn cmd_add(repo: &Repository, args: &AddArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let Some(path) = args.path.as_deref().filter(|p| !p.is_empty()) else {
        let state = repo.load_state()?;
        let tracked = repo.tracked(&state);
        if tracked.is_empty() {
            writeln!(out, "Add a file to the index.")?;
        } else {
            writeln!(out, "Tracked files:")?;
            for file in tracked {
                writeln!(out, "{}", file.path)?;
            }
        }
        return Ok(());
    };

    match repo.run(|r, s| r.track(s, path)) {
        Ok(TrackOutcome::Tracked(_)) => writeln!(out, "The file '{path}' is tracked.")?,
        Ok(TrackOutcome::AlreadyTracked(_)) => {
            writeln!(out, "The file '{path}' is already tracked.")?
        }
        Err(e) => report(e, path, out)?,
    }
    Ok(())
}

fn cmd_log(repo: &Repository, out: &mut impl Write) -> anyhow::Result<()> {
    let state = repo.load_state()?;
    let records = repo.log(&state);
    if records.is_empty() {
        writeln!(out, "No commits yet.")?;
        return Ok(());
    }
    for record in records.iter().rev() {
        writeln!(out, "commit {}", record.hash.to_hex().yellow())?;
        writeln!(out, "Author: {}", record.author)?;
        writeln!(out, "{}", record.message)?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_commit(repo: &Repository, args: &CommitArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let message = args.message.as_deref().unwrap_or_default();
    match repo.run(|r, s| r.commit(s, message)) {
        Ok(CommitOutcome::Committed(_)) => writeln!(out, "Changes are committed.")?,
        Ok(CommitOutcome::NothingToCommit(_)) => writeln!(out, "Nothing to commit.")?,
        Err(e) => report(e, message, out)?,
    }
    Ok(())
}

fn cmd_checkout(repo: &Repository, args: &CheckoutArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let Some(hash) = args.hash.as_deref().filter(|h| !h.is_empty()) else {
        writeln!(out, "Commit id was not passed.")?;
        return Ok(());
    };

    match repo.run(|r, s| r.checkout(s, hash)) {
        Ok(outcome) => writeln!(out, "Switched to commit {}.", outcome.fingerprint)?,
        Err(e) => report(e, hash, out)?,
    }
    Ok(())
}
