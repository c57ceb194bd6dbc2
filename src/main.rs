use anyhow::{Context, Result};
use tgroute::telegram::{Recipient, SendOptions, TelegramClient, Transport, Update, UpdateKind};
use tracing::{info, warn};

// Relays a single update, read from a file, through the bot API:
// callbacks get acknowledged and plain messages are echoed back.
#[tokio::main]
async fn main() -> Result<()> {
    // Configure tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let update_file = args
        .next()
        .context("usage: tgroute <update.json> [config.toml]")?;
    let config_file = args.next().unwrap_or_else(|| "config.toml".into());

    let config = tgroute::utils::get_config(&config_file).await?;
    let raw = tokio::fs::read(&update_file)
        .await
        .with_context(|| format!("Could not read {}", update_file))?;
    let update = Update::decode(&raw)?;
    let client = TelegramClient::new(config.bot);

    info!("Relaying update {} ...", update.id);
    match update.kind {
        UpdateKind::Callback(callback) => {
            let answered = client
                .answer_callback(&callback.respond().with_text("Received"))
                .await?;
            info!("Callback {} answered: {}", callback.id, answered);
        }
        UpdateKind::Query(query) => {
            warn!("Inline query {} from {} is not handled", query.id, query.from.destination());
        }
        UpdateKind::Message(message) => {
            if message.text.is_empty() {
                warn!("Message {} has no text, nothing to echo", message.message_id);
                return Ok(());
            }
            let options = SendOptions {
                reply_to_message_id: Some(message.message_id),
                ..Default::default()
            };
            let sent = client
                .send_text(&message.chat, &message.text, &options)
                .await?;
            info!(
                "Echoed to {} as message {}",
                message.chat.destination(),
                sent.message_id
            );
        }
        UpdateKind::Empty => warn!("Update {} carries nothing to relay", update.id),
    }
    Ok(())
}
