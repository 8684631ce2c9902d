use crate::types::{LogLevel, OutputFormat, SortField, SortOrder};
use clap::{Parser, Subcommand};
use rolodex_types::UserId;

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(about = "Browse REST user directories from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory API base URL (overrides config file)"
    )]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Path to the config file")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Browse,

    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },

    Companies,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    List {
        #[arg(
            long,
            help = "Keep users whose name contains this text (case-insensitive)"
        )]
        search: Option<String>,

        #[arg(long, help = "Keep users at exactly this company (\"all\" disables)")]
        company: Option<String>,

        #[arg(long)]
        sort: Option<SortField>,

        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },

    Show {
        id: UserId,
    },
}
