use crate::{config::Config, context::Context, event::Event};
use serenity::all::{Message, Ready};
use tokio::sync::RwLock;

/// Receives serenity's callbacks and hands each one to Brobot's plugins as an [`Event`].
///
/// Owns the live configuration, which `reload` swaps out while the bot keeps running.
pub struct Handler {
    cfg: RwLock<Config>,
}

impl<'a> Handler {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg: RwLock::new(cfg),
        }
    }

    fn ctx(&'a self, discord_ctx: &'a serenity::all::Context) -> Context<'a> {
        Context {
            cfg: &self.cfg,
            cache: &discord_ctx.cache,
            http: &discord_ctx.http,
            cache_http: discord_ctx,
        }
    }
}

#[serenity::async_trait]
impl serenity::all::EventHandler for Handler {
    async fn ready(&self, discord_ctx: serenity::all::Context, ready: Ready) {
        Event::Ready(ready).handle(self.ctx(&discord_ctx)).await;
    }

    async fn message(&self, discord_ctx: serenity::all::Context, msg: Message) {
        Event::Message(msg).handle(self.ctx(&discord_ctx)).await;
    }
}
