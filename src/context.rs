use crate::config::Config;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything a plugin needs while handling one event: Brobot's configuration plus serenity's
/// cache and http handles.
pub struct Context<'a> {
    // Brobot's own context types
    pub cfg: &'a RwLock<Config>,
    // Discord/Serenity context types
    pub cache: &'a Arc<serenity::all::Cache>,
    pub http: &'a Arc<serenity::all::Http>,
    pub cache_http: &'a CacheHttp,
}

/// Many Serenity functions take a `impl CacheHttp` in order to first check the cache if the item
/// is available and fall back to an http request otherwise.  The most readily available type that
/// impl's this is named very differently in a way that could be confusing, and so we alias it.
pub type CacheHttp = serenity::all::Context;
