use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Write;
use std::process::ExitCode;
use vcs::areas::repository::Repository;
use vcs::artifacts::core::PagerWriter;
use vcs::config::Config;
use vcs::error::VcsError;
use vcs::logging;

const USER_ERROR_EXIT_CODE: u8 = 1;
const FATAL_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "vcs",
    version = "0.1.0",
    about = "A local snapshot version control system",
    long_about = "Tracks whole-directory snapshots in a .vcs directory. \
    Files are staged with add/rm, recorded with commit, and restored or \
    swapped with checkout.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(long, global = true, help = "Print debug diagnostics to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create an empty repository",
        long_about = "This command creates a .vcs directory in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The directory to create the repository in")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command records the current content of the given files (directories expand to their files) in the index."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "rm",
        about = "Stage a removal or unstage a file",
        long_about = "Committed files are staged for removal and deleted from the working directory. \
        Files that were only staged are unstaged."
    )]
    Rm {
        #[arg(index = 1, required = true, help = "The files or directories to remove")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes",
        long_about = "This command creates a new commit on the current branch from the previous snapshot and the staged changes."
    )]
    Commit {
        #[arg(short, long, default_value = "", help = "The commit message")]
        message: String,
        #[arg(long, help = "The commit author (defaults to VCS_AUTHOR_NAME)")]
        author: Option<String>,
    },
    #[command(
        name = "log",
        about = "Show the history of the current branch",
        long_about = "This command lists the commits reachable from the current branch tip, newest first."
    )]
    Log,
    #[command(
        name = "global-log",
        about = "Show every commit ever made",
        long_about = "This command lists every commit in the repository, in creation order."
    )]
    GlobalLog,
    #[command(
        name = "status",
        about = "Show branches and working tree status",
        long_about = "This command lists the branches and the staged, removed, modified and untracked files."
    )]
    Status,
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "With a name, this command creates a branch at the current branch tip. \
        Without one, it lists the branches."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Restore files or switch branches",
        long_about = "checkout -- <path> restores a file from the current branch tip. \
        checkout <commit> -- <path> restores it from the given commit. \
        checkout <branch> switches to the branch.",
        override_usage = "vcs checkout -- <path>...\n       vcs checkout <commit> -- <path>...\n       vcs checkout <branch>"
    )]
    Checkout {
        #[arg(help = "The branch to switch to, or the commit to restore from")]
        target: Option<String>,
        #[arg(last = true, help = "The files to restore")]
        paths: Vec<String>,
    },
    #[command(
        name = "hash-object",
        about = "Compute a file's address and optionally store it",
        long_about = "This command prints the address of a file's content and can write it to the object store."
    )]
    HashObject {
        #[arg(short, long, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw bytes of a stored object. \
        It accepts a full address or a unique prefix of at least 4 characters."
    )]
    CatFile {
        #[arg(index = 1, help = "The object address")]
        object: String,
    },
    #[command(
        name = "ls-tree",
        about = "List the snapshot of a commit",
        long_about = "This command lists every path and blob address in a commit's tree (the current branch tip by default)."
    )]
    LsTree {
        #[arg(index = 1, help = "The commit address")]
        commit: Option<String>,
    },
}

impl Commands {
    fn is_paged(&self) -> bool {
        matches!(self, Commands::Log | Commands::GlobalLog)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(error),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from_env()?;
    logging::init(&config.log_filter, cli.verbose)?;

    let is_terminal = std::io::stdout().is_terminal();
    colored::control::set_override(is_terminal);

    let pwd = std::env::current_dir().context("Unable to read the current directory")?;

    let command = match cli.command {
        Commands::Init { path } => {
            let dir = match path {
                Some(path) => pwd.join(path),
                None => pwd,
            };
            Repository::init(&dir, Box::new(std::io::stdout()))?;

            return Ok(());
        }
        command => command,
    };

    let pager = (command.is_paged() && is_terminal && config.pager).then(Pager::new);
    let writer: Box<dyn Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let repository = Repository::discover(&pwd, writer)?.with_config(config);

    match command {
        Commands::Init { .. } => {}
        Commands::Add { paths } => repository.add(&paths)?,
        Commands::Rm { paths } => repository.remove(&paths)?,
        Commands::Commit { message, author } => repository.commit(&message, author.as_deref())?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Status => repository.status()?,
        Commands::Branch { name } => repository.branch(name.as_deref())?,
        Commands::Checkout { target, paths } => checkout(&repository, target, paths)?,
        Commands::HashObject { write, file } => repository.hash_object(&file, write)?,
        Commands::CatFile { object } => repository.cat_file(&object)?,
        Commands::LsTree { commit } => repository.ls_tree(commit.as_deref())?,
    }

    repository.writer().flush()?;

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}

/// Pick the checkout form from the argument shape.
fn checkout(repository: &Repository, target: Option<String>, paths: Vec<String>) -> Result<()> {
    match (target, paths.is_empty()) {
        (None, false) => {
            for path in &paths {
                repository.checkout_file(path)?;
            }
        }
        (Some(commit), false) => {
            for path in &paths {
                repository.checkout_file_from_commit(&commit, path)?;
            }
        }
        (Some(branch), true) => repository.checkout_branch(&branch)?,
        (None, true) => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "checkout needs a branch name or `-- <path>`",
            )
            .exit(),
    }

    Ok(())
}

/// User mistakes print their message; anything else is reported as fatal.
fn report(error: anyhow::Error) -> ExitCode {
    match error.downcast_ref::<VcsError>() {
        Some(vcs_error) if vcs_error.is_user_error() => {
            eprintln!("{vcs_error}");
            ExitCode::from(USER_ERROR_EXIT_CODE)
        }
        _ => {
            eprintln!("fatal: {error:#}");
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
