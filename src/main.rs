use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use taskvault::config::VaultPaths;
use taskvault::crypto::CipherKind;
use taskvault::storage::UserStore;

#[derive(Parser)]
#[command(
    name = "taskvault",
    version,
    about = "Console-based objective and task tracker",
    long_about = "TaskVault is a single-user, console-driven objective and task \
                  tracker. Records are kept in one text file per user; giving a \
                  password at login obfuscates the file at rest with a toy \
                  stream cipher keyed by that password."
)]
struct Cli {
    /// Storage root (defaults to the platform config directory)
    #[arg(long, env = "TASKVAULT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Cipher variant for password-protected records: vigenere or caesar
    #[arg(long, default_value = "vigenere")]
    cipher: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => VaultPaths::with_base_dir(dir),
        None => VaultPaths::new()?,
    };
    let cipher: CipherKind = cli.cipher.parse()?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Storage root: {}", paths.base_dir().display());
            println!("User files:   {}", paths.users_dir().display());
            println!("Cipher:       {:?}", cipher);
        }
        None => {
            paths.ensure_directories()?;
            let store = UserStore::with_cipher(paths, cipher);
            taskvault::cli::run_session(&store)?;
        }
    }

    Ok(())
}
