//! CLI entry point for jls

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use jls::{EntryFilter, ListFormatter, ListOptions, Node, resolve};

const LONG_ABOUT: &str = "\
'ls' for a file system simulated by a structured JSON document.

Navigates the tree described by the document and lists the files and
folders it contains. The document is a recursive object of the form:

{
    \"name\": \"dir1\",
    \"size\": 4096,
    \"time_modified\": 1699957865,
    \"permissions\": \"drwxr-xr-x\",
    \"contents\": [
        {
            \"name\": \"file1\",
            \"size\": 8911,
            \"time_modified\": 1699941437,
            \"permissions\": \"-rw-r--r--\"
        }
    ]
}

An entry is a directory exactly when it has a \"contents\" array.";

/// Determine whether to use color output based on the environment.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    // Respect FORCE_COLOR environment variable
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    // Respect TERM=dumb
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

// -h is the human-readable-sizes flag, so clap's automatic help short
// flag is disabled and --help is declared explicitly.
#[derive(Parser, Debug)]
#[command(name = "jls")]
#[command(about = "ls for directory trees described by a JSON document")]
#[command(long_about = LONG_ABOUT)]
#[command(version, disable_help_flag = true)]
struct Args {
    /// Path of the folder to navigate with ls, '.' by default
    #[arg(default_value = ".")]
    path: String,

    /// Include all entries, including those starting with a dot
    #[arg(short = 'A')]
    show_hidden: bool,

    /// Display additional information about entries
    #[arg(short = 'l')]
    long_format: bool,

    /// Display entries in reverse order
    #[arg(short = 'r')]
    reverse_order: bool,

    /// Sort entries by the time they were last modified
    #[arg(short = 't')]
    sort_by_time: bool,

    /// Display human-readable sizes (combined with -l)
    #[arg(short = 'h')]
    human_readable: bool,

    /// Show only files with 'file' or only directories with 'dir'
    #[arg(long = "filter", value_name = "KIND")]
    filter: Option<String>,

    /// JSON document describing the tree
    #[arg(long = "file", value_name = "PATH", default_value = "structure.json")]
    file: PathBuf,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

fn main() {
    let args = Args::parse();

    // --filter is validated here rather than by clap so the message
    // matches the tool's own error format.
    let filter = match args.filter.as_deref() {
        Some(value) => match value.parse::<EntryFilter>() {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => None,
    };

    let data = fs::read_to_string(&args.file).unwrap_or_else(|e| {
        eprintln!("jls: cannot read '{}': {}", args.file.display(), e);
        process::exit(1);
    });
    let root: Node = serde_json::from_str(&data).unwrap_or_else(|e| {
        eprintln!("jls: invalid tree document '{}': {}", args.file.display(), e);
        process::exit(1);
    });

    let options = ListOptions {
        path: args.path,
        show_hidden: args.show_hidden,
        long_format: args.long_format,
        reverse_order: args.reverse_order,
        sort_by_time: args.sort_by_time,
        human_readable: args.human_readable,
        filter,
    };

    let node = match resolve(&root, &options.path) {
        Ok(node) => node,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let formatter = ListFormatter::new(options).with_color(should_use_color());
    if let Err(e) = formatter.print(node) {
        eprintln!("jls: error writing output: {}", e);
        process::exit(1);
    }
}
