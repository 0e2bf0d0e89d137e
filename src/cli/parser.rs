use crate::config::Backend;
use crate::export::ExportFormat;
use crate::models::PersonKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for frontdesk
/// Front-desk check-in registry backed by SQLite
#[derive(Parser)]
#[command(
    name = "frontdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Front-desk check-in registry: volunteers, guests and staff shifts with daily statistics",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the storage backend from the configuration
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Check in a volunteer
    Volunteer {
        #[arg(long)]
        name: String,

        /// Work area (tours, gardens, events, gift-shop, maintenance, office, other)
        #[arg(long)]
        area: String,

        #[arg(long)]
        activities: String,

        /// Visit date (default: today, e.g. 7/22/2025)
        #[arg(long)]
        date: Option<String>,

        /// Arrival time (default: now, e.g. 3:45:12 PM)
        #[arg(long = "in")]
        time_in: Option<String>,

        /// Departure time
        #[arg(long = "out")]
        time_out: Option<String>,
    },

    /// Register a guest visit
    Guest {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Visit reason (wedding, historic, volunteer, donation, other)
        #[arg(long)]
        reason: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long, help = "Subscribe the guest to the newsletter")]
        newsletter: bool,

        #[arg(long, help = "Bride's name (wedding visits)")]
        bride: Option<String>,

        #[arg(long, help = "Groom's name (wedding visits)")]
        groom: Option<String>,

        #[arg(long = "tour-guide")]
        tour_guide: Option<String>,

        /// Visit date (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Record a staff clock-in
    ClockIn {
        #[arg(long)]
        name: String,

        #[arg(long)]
        date: Option<String>,

        /// Time of day (default: now)
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Record a staff clock-out
    ClockOut {
        #[arg(long)]
        name: String,

        #[arg(long)]
        date: Option<String>,

        /// Time of day (default: now)
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List registered people
    List {
        #[arg(long, value_enum, help = "Only list records of this type")]
        kind: Option<PersonKind>,

        #[arg(long, help = "Only list volunteers working in this area")]
        area: Option<String>,
    },

    /// Distinct names of volunteers or staff
    Names {
        #[arg(long, value_enum, default_value = "volunteer")]
        kind: PersonKind,
    },

    /// Delete a person record by type and id
    Del {
        #[arg(long, value_enum)]
        kind: PersonKind,

        #[arg(long)]
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show registry statistics
    Stats,

    /// Export the whole registry
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'y', help = "Overwrite an existing backup without asking")]
        yes: bool,
    },

    /// Serve the JSON HTTP API
    Serve {
        /// Listen address (default from config, e.g. 127.0.0.1:3000)
        #[arg(long)]
        bind: Option<String>,
    },
}
