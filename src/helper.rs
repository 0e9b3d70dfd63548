//! Miscellaneous convenience methods

use crate::{context::Context, evolution::CreatureEntry};
use anyhow::Result;
use serenity::all::{ChannelId, GetMessages, Message, MessageId};

#[serenity::async_trait]
pub trait MessageHelper {
    async fn is_from_owner(&self, ctx: &Context) -> bool;
    fn creature_entry(&self) -> CreatureEntry;
}

#[serenity::async_trait]
impl MessageHelper for Message {
    async fn is_from_owner(&self, ctx: &Context) -> bool {
        let owners = &ctx.cfg.read().await.general.bot_owners;
        let author_global_name = &self.author.name;

        owners.contains(author_global_name)
    }

    /// The message as input to the evolution game, linked back to where it was posted.
    fn creature_entry(&self) -> CreatureEntry {
        CreatureEntry::new(self.content.clone(), self.link())
    }
}

#[serenity::async_trait]
pub trait ChannelIdHelper {
    async fn full_history(&self, ctx: &Context, page_size: u8) -> Result<Vec<Message>>;
}

#[serenity::async_trait]
impl ChannelIdHelper for ChannelId {
    /// Every message in the channel, oldest first.
    ///
    /// Discord only hands out history a page at a time, newest to oldest, so keep asking for the
    /// page before the oldest message seen until a short page comes back.
    async fn full_history(&self, ctx: &Context, page_size: u8) -> Result<Vec<Message>> {
        let page_size = page_size.max(1);
        let mut messages = Vec::new();
        let mut before: Option<MessageId> = None;

        loop {
            let mut request = GetMessages::new().limit(page_size);
            if let Some(before) = before {
                request = request.before(before);
            }

            let page = self.messages(ctx.cache_http, request).await?;
            let Some(oldest) = page.last() else {
                break;
            };
            before = Some(oldest.id);

            let is_last_page = page.len() < usize::from(page_size);
            messages.extend(page);
            if is_last_page {
                break;
            }
        }

        messages.reverse();
        Ok(messages)
    }
}

/// Join words into a sentence: `a`, `a and b`, `a, b, and c`.
pub fn list_from_words<S: AsRef<str>>(words: &[S]) -> String {
    match words {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [rest @ .., last] => {
            let rest: Vec<&str> = rest.iter().map(|word| word.as_ref()).collect();
            format!("{}, and {}", rest.join(", "), last.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_lists() {
        assert_eq!(list_from_words::<&str>(&[]), "");
        assert_eq!(list_from_words(&["Blob"]), "Blob");
        assert_eq!(list_from_words(&["Blob", "Glorp"]), "Blob and Glorp");
        assert_eq!(
            list_from_words(&["Blob", "Glorp", "Zed", "Hybroid"]),
            "Blob, Glorp, Zed, and Hybroid"
        );
    }
}
