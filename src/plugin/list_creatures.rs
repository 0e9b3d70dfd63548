use crate::{
    event::*,
    evolution::{build_creature_graph, pack_messages, render_evolution_tree, CreatureEntry},
    helper::{ChannelIdHelper, MessageHelper},
    log_internal,
    logging::AsyncPrintColor,
    plugin::*,
};
use anyhow::Result;

/// Posts the evolution game's creature tree, built from the evolutions channel history.
pub struct ListCreatures;

#[serenity::async_trait]
impl Plugin for ListCreatures {
    fn name(&self) -> &'static str {
        "list-creatures"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} - list every creature of the evolution game with links to their messages",
            prefix,
            self.name()
        ))
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Some((msg, _)) = event.is_bot_cmd(ctx, self.name()).await else {
            return Ok(EventHandled::No);
        };

        let (guild_id, evolutions_channel_id, char_limit, page_size) = {
            let cfg = ctx.cfg.read().await;
            let game = &cfg.evolution_game;
            (
                game.guild_id(),
                game.evolutions_channel_id(),
                game.message_char_limit(),
                game.fetch_page_size(),
            )
        };

        // Only available in the evolution game's server
        if guild_id.is_some() && msg.guild_id != guild_id {
            return Ok(EventHandled::No);
        }

        let typing = msg.channel_id.start_typing(ctx.http);

        let history = evolutions_channel_id.full_history(ctx, page_size).await?;
        log_internal!(
            "Fetched {} messages from \"{}\"",
            history.len(),
            evolutions_channel_id.color(ctx.http).await,
        );

        let entries: Vec<CreatureEntry> = history.iter().map(|m| m.creature_entry()).collect();
        let graph = build_creature_graph(&entries);
        log_internal!(
            "Parsed {} creatures ({} names mentioned)",
            graph.creatures.len(),
            graph.known_names.len(),
        );

        let chunks = match render_evolution_tree(&graph.creatures) {
            Ok(tree) => pack_messages(&tree, char_limit),
            Err(err) => {
                typing.stop();
                msg.reply(ctx.cache_http, format!("Could not list creatures: {}", err))
                    .await?;
                return Ok(EventHandled::Yes);
            }
        };

        for chunk in &chunks {
            msg.channel_id.say(ctx.cache_http, chunk.as_str()).await?;
        }
        typing.stop();

        log_internal!("Sent {} creature list message(s)", chunks.len());

        let response = if chunks.is_empty() {
            "No evolutions found"
        } else {
            "Done"
        };
        msg.reply(ctx.cache_http, response).await?;
        Ok(EventHandled::Yes)
    }
}
