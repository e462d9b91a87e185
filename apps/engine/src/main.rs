//! One-shot CLI around the generation core: the stand-in for the HTTP
//! collaborator. Loads config, wires the client, runs a single flow, prints
//! the result.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engine::chat::reply::conversational_reply;
use engine::config::Config;
use engine::generation::generator::{generate_plan, generate_plan_from_message};
use engine::llm_client::{self, GroqClient};
use engine::models::chat::UserContext;
use engine::models::profile::QuestionnaireProfile;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "engine v{} (model: {})",
        env!("CARGO_PKG_VERSION"),
        llm_client::MODEL
    );

    let client = GroqClient::new(config.groq_api_key.clone());
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.split_first() {
        Some((cmd, rest)) if cmd == "plan" && !rest.is_empty() => {
            let plan = generate_plan_from_message(&client, &rest.join(" ")).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Some((cmd, rest)) if cmd == "questionnaire" && rest.len() == 1 => {
            let raw = std::fs::read_to_string(&rest[0])?;
            let profile: QuestionnaireProfile = serde_json::from_str(&raw)?;
            let plan = generate_plan(&client, &profile).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Some((cmd, rest)) if cmd == "chat" && !rest.is_empty() => {
            let reply =
                conversational_reply(&client, &UserContext::default(), &[], &rest.join(" ")).await;
            println!("{reply}");
        }
        _ => {
            eprintln!(
                "usage: engine plan <mensaje> | engine questionnaire <perfil.json> | engine chat <mensaje>"
            );
            std::process::exit(2);
        }
    }

    Ok(())
}
