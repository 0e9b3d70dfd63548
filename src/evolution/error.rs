use thiserror::Error;

/// Errors raised by the creature queries and renderer.
///
/// Messages that do not describe a creature are never an error; they are skipped while building
/// the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreatureError {
    /// A creature breaks one of the data model invariants.
    #[error("{}: {reason}", describe_position(.index))]
    InvalidCreature {
        /// Position within the collection, `None` when a lone creature was validated.
        index: Option<usize>,
        reason: &'static str,
    },

    /// No creature in the collection carries the requested name.
    #[error("Creature with name {name} not found in creatures")]
    CreatureNotFound { name: String },

    /// A creature is, directly or through other creatures, its own ancestor.
    #[error("Creature {name} evolves from one of its own descendants")]
    EvolutionCycle { name: String },
}

fn describe_position(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!("creature #{} in creatures", index),
        None => "creature".to_owned(),
    }
}
