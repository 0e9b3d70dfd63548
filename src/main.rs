//! Brobot: a Discord bot for the evolution game.  Commands are plugins (see `plugin`), the
//! creature tree itself is built in `evolution`.

mod config;
mod context;
mod event;
mod evolution;
mod handler;
mod helper;
mod logging;
mod plugin;

use serenity::{all::GatewayIntents, Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = crate::config::Config::load().await?;
    let token = cfg.general.discord_token.clone();
    let handler = handler::Handler::new(cfg);

    // Things we want discord to tell us about.  Message content is needed to read creature posts
    // and prefixed commands.
    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    Client::builder(&token, intents)
        .event_handler(handler)
        .await?
        .start()
        .await
        .map_err(Into::into)
}
