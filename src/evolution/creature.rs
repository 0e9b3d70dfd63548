use super::CreatureError;

/// A creature posted to the evolutions channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    /// Display name.  Compared case-insensitively when looking creatures up.
    pub name: String,
    /// Names of the creatures this one evolved from, in the order they were written.
    /// - empty: a root creature
    /// - one name: a plain evolution
    /// - two or more: a hybrid
    pub evolved_from: Vec<String>,
    /// Link to the message the creature was posted in.  Only used for display.
    pub link: String,
}

impl Creature {
    pub fn is_root(&self) -> bool {
        self.evolved_from.is_empty()
    }

    pub fn is_hybrid(&self) -> bool {
        self.evolved_from.len() > 1
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Check a single creature against the data model invariants.
pub fn validate_creature(creature: &Creature) -> Result<(), CreatureError> {
    check(creature, None)
}

/// Check every creature of a collection, failing on the first invalid one.
pub fn validate_creatures(creatures: &[Creature]) -> Result<(), CreatureError> {
    creatures
        .iter()
        .enumerate()
        .try_for_each(|(index, creature)| check(creature, Some(index)))
}

fn check(creature: &Creature, index: Option<usize>) -> Result<(), CreatureError> {
    let reason = if creature.name.trim().is_empty() {
        "name is empty"
    } else if creature
        .evolved_from
        .iter()
        .any(|parent| parent.trim().is_empty())
    {
        "evolved_from contains an empty name"
    } else {
        return Ok(());
    };

    Err(CreatureError::InvalidCreature { index, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn creature(name: &str, evolved_from: &[&str]) -> Creature {
        Creature {
            name: name.to_owned(),
            evolved_from: evolved_from.iter().map(|s| s.to_string()).collect(),
            link: String::new(),
        }
    }

    #[test]
    fn well_formed_creatures_pass() {
        let creatures = vec![creature("Blob", &[]), creature("Blobzilla", &["Blob"])];
        assert_eq!(validate_creatures(&creatures), Ok(()));
    }

    #[test]
    fn empty_name_is_rejected_with_position() {
        let creatures = vec![creature("Blob", &[]), creature("  ", &["Blob"])];
        let err = validate_creatures(&creatures).unwrap_err();
        assert_eq!(
            err,
            CreatureError::InvalidCreature {
                index: Some(1),
                reason: "name is empty",
            }
        );
        assert_eq!(err.to_string(), "creature #1 in creatures: name is empty");
    }

    #[test]
    fn empty_parent_name_is_rejected() {
        let err = validate_creature(&creature("Blob", &["Glorp", ""])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "creature: evolved_from contains an empty name"
        );
    }

    #[test]
    fn names_match_ignoring_case() {
        let blob = creature("Blob", &[]);
        assert!(blob.has_name("bLOB"));
        assert!(!blob.has_name("Blobzilla"));
    }

    #[test]
    fn ancestor_count_decides_kind() {
        assert!(creature("Blob", &[]).is_root());
        assert!(!creature("Blobzilla", &["Blob"]).is_hybrid());
        assert!(creature("Hybroid", &["Blob", "Blobzilla"]).is_hybrid());
    }
}
