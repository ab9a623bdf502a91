use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use precommit_strictness::manifest::DEFAULT_MANIFEST;
use precommit_strictness::HOOK_NAME_ENV;

/// Version-based strictness gate for pre-commit hooks.
///
/// Without a subcommand, runs `check`. Use `check` explicitly as the hook
/// entry so file names appended by pre-commit are never read as subcommands.
#[derive(Debug, Parser)]
#[command(
    name = "precommit-strictness",
    version,
    about,
    args_conflicts_with_subcommands = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the strictness level and gate the hook named by PRE_COMMIT_HOOK_NAME
    Check(CheckArgs),
    /// List every known hook and whether it runs at the current level
    Plan {
        #[command(flatten)]
        source: SourceArgs,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Files passed by pre-commit (ignored)
        #[arg(
            hide = true,
            value_name = "FILES",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        _files: Vec<OsString>,
    },
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Path to the project manifest
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Path to a KDL hook policy file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Hook to gate
    #[arg(long, env = HOOK_NAME_ENV)]
    hook: Option<OsString>,

    /// Files passed by pre-commit (ignored)
    #[arg(
        hide = true,
        value_name = "FILES",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    _files: Vec<OsString>,
}

fn main() {
    precommit_strictness::init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // A pre-run check must not fail the commit over its own arguments.
        Err(e) => {
            tracing::warn!("Ignoring arguments ({}); running default check", e.kind());
            let hook = std::env::var_os(HOOK_NAME_ENV).map(|h| h.to_string_lossy().into_owned());
            precommit_strictness::run_check(
                std::path::Path::new(DEFAULT_MANIFEST),
                None,
                hook.as_deref(),
            );
            return;
        }
    };

    match cli.command {
        Some(Commands::Check(args)) => run_check(args),
        Some(Commands::Plan { source, json, .. }) => precommit_strictness::run_plan(
            &source.manifest,
            source.config.as_deref(),
            json,
        ),
        None => run_check(cli.check),
    }
}

fn run_check(args: CheckArgs) {
    let hook = args.hook.map(|h| h.to_string_lossy().into_owned());
    precommit_strictness::run_check(
        &args.source.manifest,
        args.source.config.as_deref(),
        hook.as_deref(),
    )
}
