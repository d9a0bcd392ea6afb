use anyhow::Result;
use clap::{Parser, Subcommand};
use cloudinary_client::app::App;
use cloudinary_client::UploadKind;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "cloudinary-client")]
#[command(about = "Upload and delete Cloudinary images and videos")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload a file and print the resulting asset as JSON.
    Upload {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Public ID to assign. Omit to let Cloudinary pick one.
        #[arg(long)]
        name: Option<String>,

        #[arg(long, default_value = "image", value_parser = parse_kind_arg)]
        kind: UploadKind,
    },
    /// Delete an asset by public ID.
    Delete {
        #[arg(value_name = "NAME")]
        name: String,

        #[arg(long, default_value = "image", value_parser = parse_kind_arg)]
        kind: UploadKind,
    },
}

fn parse_kind_arg(input: &str) -> std::result::Result<UploadKind, String> {
    input.parse()
}

async fn run(app: &App, command: Command) -> Result<()> {
    match command {
        Command::Upload { path, name, kind } => {
            let result = app.upload_file(&path, name.as_deref(), kind).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Delete { name, kind } => {
            app.delete(&name, kind).await?;
            info!("Deleted {} {}", kind, name);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudinary_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    match App::new() {
        Ok(app) => match run(&app, args.command).await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("Request failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize client: {}", e);
            std::process::exit(1);
        }
    }
}
