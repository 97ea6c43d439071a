//! Frontdesk CLI - voice receptionist toolkit.

mod config;
mod prompt;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::AgentConfig;
use frontdesk_core::CallInfo;
use frontdesk_tools::{EscalationService, HttpEscalationClient};
use frontdesk_voice::RoomService;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(about = "Voice receptionist for Priya's Beauty Lounge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a knowledge-base lookup and print the tool reply
    Lookup {
        /// Customer question
        question: String,
    },
    /// Create a supervisor help request
    Escalate {
        /// Customer phone number
        #[arg(long, default_value = "unknown")]
        phone: String,
        /// Call identifier (room name)
        #[arg(long, default_value = "manual")]
        call_id: String,
        /// Customer question
        question: String,
    },
    /// End a call by deleting its platform room
    EndCall {
        /// Room name
        room: String,
    },
    /// Print the tool schemas declared to the reasoning model
    Schemas,
    /// Print the rendered agent instructions
    Instructions,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AgentConfig::from_env();

    match cli.command {
        Commands::Lookup { question } => {
            let registry =
                session::build_registry(&config, Arc::new(session::UnconfiguredCallControl));
            let runtime =
                session::CallRuntime::new(registry, CallInfo::unknown_caller("cli-lookup"));

            let reply = runtime
                .dispatch(
                    "check_knowledge_base",
                    serde_json::json!({ "question": question }),
                )
                .await
                .context("lookup was cancelled")?;
            println!("{reply}");
        }
        Commands::Escalate {
            phone,
            call_id,
            question,
        } => {
            let client = HttpEscalationClient::new(&config.escalation);
            let call = CallInfo {
                customer_phone: phone,
                call_id,
            };

            let id = client
                .create(&call, &question)
                .await
                .context("failed to create help request")?;
            println!("created: {id}");
        }
        Commands::EndCall { room } => {
            let rooms = RoomService::new(&config.livekit)?;
            rooms.end_call(&room).await?;
            println!("ended: {room}");
        }
        Commands::Schemas => {
            let registry =
                session::build_registry(&config, Arc::new(session::UnconfiguredCallControl));
            println!("{}", serde_json::to_string_pretty(&registry.schemas())?);
        }
        Commands::Instructions => {
            println!("{}", prompt::agent_instructions(chrono::Local::now()));
            println!("---");
            println!("{}", prompt::GREETING_INSTRUCTIONS);
        }
    }

    Ok(())
}
