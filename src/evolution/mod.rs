//! Evolution game creature tree.
//!
//! Players post creatures into an evolutions channel, one message per creature, in a loose
//! `Name: ...` / `Evolved from: ...` format.  This module turns that channel history into a
//! nested Markdown listing:
//!
//! - [`parser`] pulls a single creature out of one message
//! - [`graph`] runs the parser over a whole channel history
//! - [`query`] finds roots, hybrids and children in the resulting collection
//! - [`render`] renders each evolution root and its descendants as indented bullets
//! - [`pack`] slices the rendering into chunks that fit in a Discord message
//!
//! Everything here is synchronous and pure.  Fetching the history and sending the chunks is the
//! caller's job.

mod creature;
mod error;
pub mod graph;
pub mod pack;
pub mod parser;
pub mod query;
pub mod render;

pub use creature::{validate_creature, validate_creatures, Creature};
pub use error::CreatureError;
pub use graph::{build_creature_graph, CreatureEntry};
pub use pack::{pack_messages, DISCORD_MESSAGE_LIMIT};
pub use render::render_evolution_tree;
