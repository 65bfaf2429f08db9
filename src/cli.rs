use clap::{Parser, Subcommand};

use crate::error::{Error, Result};
use crate::item::LfmItem;
use crate::lfm::Lfm;
use crate::path::LfmPath;
use crate::storage::constants::{DEFAULT_FOLDER_TYPE, TYPE_INPUT, WORKING_DIR_INPUT};
use crate::storage::utils::OutputFormat;
use crate::utils::confirm_deletion;

/// Resolve file-manager paths and manage folders in the configured storage.
#[derive(Debug, Parser)]
#[command(name = "lfm", version, about)]
pub struct Args {
    /// Working directory of the request, e.g. `/1/photos`
    #[arg(short = 'w', long, global = true, env = "LFM_WORKING_DIR")]
    pub working_dir: Option<String>,

    /// Folder category: `file` or `image`
    #[arg(short = 't', long = "type", global = true)]
    pub category: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the storage path of the working directory
    Path {
        #[arg(short, long)]
        name: Option<String>,
        /// Root folder type used without a working directory
        #[arg(long, default_value = DEFAULT_FOLDER_TYPE)]
        folder_type: String,
        /// Print the location on the storage host
        #[arg(long)]
        absolute: bool,
    },
    /// Print the public url of the working directory
    Url {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long, default_value = DEFAULT_FOLDER_TYPE)]
        folder_type: String,
    },
    /// List folders, or files with --files
    Ls {
        #[arg(long)]
        files: bool,
        #[arg(long)]
        json: bool,
    },
    /// Create a folder inside the working directory
    Mkdir { name: String },
    /// Delete the working directory, or an entry inside it
    Rm {
        name: Option<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

impl Args {
    /// Request inputs carried by the global flags.
    pub fn inputs(&self) -> Vec<(&'static str, String)> {
        let mut inputs = Vec::new();
        if let Some(working_dir) = &self.working_dir {
            inputs.push((WORKING_DIR_INPUT, working_dir.clone()));
        }
        if let Some(category) = &self.category {
            inputs.push((TYPE_INPUT, category.clone()));
        }
        inputs
    }
}

pub async fn run(command: Command, lfm: &Lfm) -> Result<()> {
    let mut path = LfmPath::new(lfm);
    log::debug!(
        "run command={:?} working_dir={}",
        command,
        path.normalize_working_dir()
    );

    match command {
        Command::Path {
            name,
            folder_type,
            absolute,
        } => {
            if let Some(name) = name {
                path.set_name(name);
            }
            let resolved = if absolute {
                path.absolute_path_in(&folder_type)?
            } else {
                path.path_in(&folder_type)?
            };
            let resolved = resolved.ok_or(Error::FolderTypeNotAllowed { folder_type })?;
            println!("{resolved}");
        }
        Command::Url { name, folder_type } => {
            if let Some(name) = name {
                path.set_name(name);
            }
            let url = path
                .url_in(&folder_type)
                .ok_or(Error::FolderTypeNotAllowed { folder_type })?;
            println!("{url}");
        }
        Command::Ls { files, json } => {
            let items = if files {
                path.files().await?
            } else {
                path.folders().await?
            };
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            };
            print_items(&path.sort_items(items), format)?;
        }
        Command::Mkdir { name } => {
            if !path.create_folder(&name).await? {
                return Err(Error::FolderAlreadyExists {
                    path: format!("{}/{}", path.target(), name),
                });
            }
            println!("Created directory: {name}");
        }
        Command::Rm { name, force } => {
            if let Some(name) = name {
                path.set_name(name);
            }
            let target = path.target();
            if !confirm_deletion(&target, force)? {
                println!("Aborted");
                return Ok(());
            }
            path.delete().await?;
            println!("Deleted: {target}");
        }
    }
    Ok(())
}

fn print_items(items: &[LfmItem], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for item in items {
                println!("{}", item.name);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(items).map_err(std::io::Error::from)?;
            println!("{json}");
        }
    }
    Ok(())
}
