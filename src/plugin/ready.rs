use crate::{event::*, log_internal, plugin::*};
use anyhow::Result;

/// Consumes the event sent once the connection to Discord is ready.
pub struct Ready;

#[serenity::async_trait]
impl Plugin for Ready {
    fn name(&self) -> &'static str {
        "ready"
    }

    async fn usage(&self, _ctx: &Context) -> Option<String> {
        None
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Ready(_) = event else {
            return Ok(EventHandled::No);
        };

        let prefix = &ctx.cfg.read().await.general.command_prefix;
        log_internal!("Listening for commands prefixed with \"{}\"", prefix);
        Ok(EventHandled::Yes)
    }
}
