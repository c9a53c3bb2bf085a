//! Command-line argument structures for `skilldb`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Add, search, update and delete employee skill records
#[derive(Parser, Debug)]
#[command(name = "skilldb")]
#[command(about = "skilldb - Employee skill database", long_about = None)]
#[command(version)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, global = true, default_value = skilldb_core::config::DEFAULT_DB_FILE_NAME)]
    pub db: PathBuf,

    /// Directory where uploaded résumés are stored
    #[arg(long, global = true, default_value = skilldb_core::config::DEFAULT_RESUME_DIR)]
    pub resumes: PathBuf,

    /// How long to wait on a locked database, in milliseconds
    #[arg(long, global = true, default_value = "5000")]
    pub busy_timeout_ms: u64,

    /// Write rolling log files to this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new employee
    Add {
        /// Employee ID (must be unique)
        #[arg(long = "id")]
        employee_id: String,

        /// Employee name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        fields: RecordFields,
    },

    /// Show one employee by ID
    Get { employee_id: String },

    /// List every employee
    List,

    /// Search ID, name, email, role, skills, certifications and location
    Search {
        keyword: String,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Filter by skill and/or location
    Filter {
        /// Substring of primary or secondary skills
        #[arg(long, default_value = "")]
        skill: String,

        /// Substring of current location
        #[arg(long, default_value = "")]
        location: String,
    },

    /// Replace an employee's record; omitted fields keep their current value
    Update {
        employee_id: String,

        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: RecordFields,
    },

    /// Update a single field
    Set {
        employee_id: String,
        /// Column name, e.g. role or total_experience
        field: String,
        value: String,
    },

    /// Delete an employee (no error if absent)
    Delete { employee_id: String },

    /// Export records as CSV
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only export keyword matches
        #[arg(long, conflicts_with_all = ["skill", "location"])]
        keyword: Option<String>,

        #[arg(long)]
        skill: Option<String>,

        #[arg(long)]
        location: Option<String>,
    },
}

/// Optional record fields shared by `add` and `update`.
#[derive(Args, Debug, Default, Clone)]
pub struct RecordFields {
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub primary_skills: Option<String>,

    #[arg(long)]
    pub secondary_skills: Option<String>,

    #[arg(long)]
    pub certifications: Option<String>,

    /// Years, fractional allowed
    #[arg(long)]
    pub total_experience: Option<f64>,

    /// Years, fractional allowed
    #[arg(long)]
    pub relevant_experience: Option<f64>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub aspiration: Option<String>,

    #[arg(long)]
    pub action_plan: Option<String>,

    /// ISO date, e.g. 2027-03-31
    #[arg(long)]
    pub target_date: Option<String>,

    /// Résumé file to upload (pdf or docx)
    #[arg(long, value_name = "FILE")]
    pub resume: Option<PathBuf>,
}
