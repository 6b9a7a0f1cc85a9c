use clap::{Parser, Subcommand};
use recordkeep::model::{RecordId, RecordType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recordkeep", version)]
#[command(about = "Keep credential records tagged with marks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the stored records (default: $RECORDKEEP_DATA or the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records
    #[command(alias = "ls")]
    List {
        /// Only records carrying this mark
        #[arg(short, long)]
        mark: Option<String>,
    },

    /// Show one record, password included
    Show {
        id: RecordId,
    },

    /// Add a record
    Add {
        /// Record type
        #[arg(short = 't', long = "type", default_value_t = RecordType::default())]
        record_type: RecordType,

        #[arg(short, long, default_value = "")]
        login: String,

        #[arg(short, long, default_value = "")]
        password: String,

        /// Marks separated by ';' (e.g. "work; vpn")
        #[arg(short, long)]
        marks: Option<String>,

        /// Use this id instead of minting one
        #[arg(long)]
        id: Option<RecordId>,
    },

    /// Add a blank record and print its id
    New,

    /// Replace fields of a record
    #[command(alias = "edit")]
    Update {
        id: RecordId,

        #[arg(short = 't', long = "type")]
        record_type: Option<RecordType>,

        #[arg(short, long)]
        login: Option<String>,

        #[arg(short, long)]
        password: Option<String>,

        /// Marks separated by ';' (replaces all marks)
        #[arg(short, long)]
        marks: Option<String>,
    },

    /// Remove a record
    #[command(alias = "rm")]
    Remove {
        id: RecordId,
    },

    /// Print the marks of a record in editable form
    Marks {
        id: RecordId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_marks() {
        let cli = Cli::try_parse_from([
            "recordkeep", "add", "-t", "ssh", "-l", "root", "-m", "prod; db",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                record_type,
                login,
                marks,
                id,
                ..
            }) => {
                assert_eq!(record_type, RecordType::Ssh);
                assert_eq!(login, "root");
                assert_eq!(marks.as_deref(), Some("prod; db"));
                assert!(id.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_remove_numeric_and_text_ids() {
        let cli = Cli::try_parse_from(["recordkeep", "rm", "17"]).unwrap();
        match cli.command {
            Some(Commands::Remove { id }) => assert_eq!(id, RecordId::from(17)),
            other => panic!("expected remove, got {:?}", other),
        }

        let cli = Cli::try_parse_from(["recordkeep", "remove", "abc"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Remove { id: RecordId::Text(_) })
        ));
    }

    #[test]
    fn test_parse_quoted_digits_as_text_id() {
        let cli = Cli::try_parse_from(["recordkeep", "show", "\"42\""]).unwrap();
        match cli.command {
            Some(Commands::Show { id }) => assert_eq!(id, RecordId::Text("42".into())),
            other => panic!("expected show, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["recordkeep", "add", "--type", "ftp"]).is_err());
    }

    #[test]
    fn test_global_data_dir() {
        let cli = Cli::try_parse_from(["recordkeep", "ls", "--data-dir", "/tmp/rk"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/rk")));
    }
}
