use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use learnshelf::model::{Level, Priority, Status};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

impl From<CompletionShell> for clap_complete::Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => clap_complete::Shell::Bash,
            CompletionShell::Zsh => clap_complete::Shell::Zsh,
            CompletionShell::Fish => clap_complete::Shell::Fish,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Beginner => Level::Beginner,
            LevelArg::Intermediate => Level::Intermediate,
            LevelArg::Advanced => Level::Advanced,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    NotStarted,
    InProgress,
    Completed,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::NotStarted => Status::NotStarted,
            StatusArg::InProgress => Status::InProgress,
            StatusArg::Completed => Status::Completed,
        }
    }
}

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "learnshelf",
    bin_name = "learnshelf",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Enable shell completions:\n  eval \"$(learnshelf completions bash)\"  # add to ~/.bashrc\n  eval \"$(learnshelf completions zsh)\"   # add to ~/.zshrc"
)]
#[command(about = "Keep track of what you are learning", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Only log errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help_heading = "Options"
    )]
    pub quiet: bool,

    /// Act as this user instead of the configured one
    #[arg(long, global = true, value_name = "ID", help_heading = "Options")]
    pub user: Option<String>,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

/// Builds the clap Command, for completion generation.
pub fn build_command() -> clap::Command {
    Cli::command()
}

/// Editable resource fields shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct ResourceFields {
    /// Free-text description (an empty value clears it)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Category name or id ("none" clears it)
    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,

    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,

    #[arg(short = 'S', long, value_enum)]
    pub status: Option<StatusArg>,

    /// Completion percentage (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub progress: Option<u8>,

    /// Attach a link, optionally titled (repeatable)
    #[arg(long = "link", value_name = "[TITLE=]URL")]
    pub links: Vec<String>,

    /// Mark as favorite (--favorite=false to unmark)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub favorite: Option<bool>,

    /// Share publicly (--public=false to make private)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub public: Option<bool>,
}

/// Filters for `list`. Each accepts "all" to mean no constraint.
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Case-insensitive text matched against title and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category name or id
    #[arg(short, long)]
    pub category: Option<String>,

    /// beginner, intermediate, advanced
    #[arg(short, long)]
    pub level: Option<String>,

    /// low, medium, high
    #[arg(short, long)]
    pub priority: Option<String>,

    /// not-started, in-progress, completed
    #[arg(short = 'S', long)]
    pub status: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a learning resource
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        #[command(flatten)]
        fields: ResourceFields,
    },

    /// List resources, with library stats
    #[command(alias = "ls", display_order = 2)]
    List(ListArgs),

    /// Show resources in full
    #[command(alias = "v", display_order = 3)]
    View {
        /// Indexes, ranges or ids (e.g. 1 3-5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a resource (unset flags keep current values)
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Index or id of the resource
        selector: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// Drop existing links before adding --link ones
        #[arg(long)]
        clear_links: bool,

        #[command(flatten)]
        fields: ResourceFields,
    },

    /// Record progress and/or status
    #[command(display_order = 5)]
    Progress {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Completion percentage (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        set: Option<u8>,

        #[arg(short = 'S', long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Delete resources with their links and files
    #[command(alias = "rm", display_order = 6)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Library statistics
    #[command(display_order = 7)]
    Stats {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// List or add categories
    #[command(alias = "cat", display_order = 8)]
    Categories {
        #[command(subcommand)]
        action: Option<CategoryCommands>,
    },

    /// Show or generate configuration
    #[command(display_order = 20)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Print a shell completion script
    #[command(display_order = 21)]
    Completions {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a category
    Add {
        name: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Display colour, e.g. "#2563eb"
        #[arg(long)]
        color: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print a commented learnshelf.toml template
    Gen,
}
