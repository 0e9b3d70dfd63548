//! Lookups over a creature collection.
//!
//! Every function validates the whole collection before looking at it, so a malformed creature
//! fails the call instead of producing a partial answer.

use super::{validate_creatures, Creature, CreatureError};

/// Creatures that did not evolve from anything.
pub fn root_creatures(creatures: &[Creature]) -> Result<Vec<&Creature>, CreatureError> {
    validate_creatures(creatures)?;
    Ok(creatures.iter().filter(|c| c.is_root()).collect())
}

/// Distinct parent lists of every hybrid, in order of first appearance.
///
/// Two hybrids are of the same type only if they list the same parents in the same order:
/// `[A, B]` and `[B, A]` are different types.
pub fn hybrid_types(creatures: &[Creature]) -> Result<Vec<Vec<String>>, CreatureError> {
    validate_creatures(creatures)?;

    let mut types: Vec<Vec<String>> = Vec::new();
    for creature in creatures.iter().filter(|c| c.is_hybrid()) {
        if !types.contains(&creature.evolved_from) {
            types.push(creature.evolved_from.clone());
        }
    }

    Ok(types)
}

/// Headings of the evolution tree: each root creature's name on its own, followed by every
/// hybrid type.
pub fn evolution_roots(creatures: &[Creature]) -> Result<Vec<Vec<String>>, CreatureError> {
    let roots = root_creatures(creatures)?
        .into_iter()
        .map(|root| vec![root.name.clone()]);
    let hybrids = hybrid_types(creatures)?;

    Ok(roots.chain(hybrids).collect())
}

/// The first creature whose name matches, ignoring case.
pub fn creature_with_name<'a>(
    name: &str,
    creatures: &'a [Creature],
) -> Result<&'a Creature, CreatureError> {
    validate_creatures(creatures)?;

    creatures
        .iter()
        .find(|c| c.has_name(name))
        .ok_or_else(|| CreatureError::CreatureNotFound {
            name: name.to_owned(),
        })
}

/// Creatures that evolved from exactly `parent_names`.
///
/// Unlike [`hybrid_types`], order does not matter here: a creature evolved from `[B, A]` is a
/// child of `[A, B]`.  Names are compared ignoring case.
pub fn child_creatures_of<'a, S: AsRef<str>>(
    parent_names: &[S],
    creatures: &'a [Creature],
) -> Result<Vec<&'a Creature>, CreatureError> {
    validate_creatures(creatures)?;

    let parents = normalized(parent_names);
    Ok(creatures
        .iter()
        .filter(|c| c.evolved_from.len() == parent_names.len())
        .filter(|c| normalized(&c.evolved_from) == parents)
        .collect())
}

/// Lowercased and sorted, for comparing name lists as multisets.
fn normalized<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(|n| n.as_ref().to_lowercase()).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn creature(name: &str, evolved_from: &[&str]) -> Creature {
        Creature {
            name: name.to_owned(),
            evolved_from: evolved_from.iter().map(|s| s.to_string()).collect(),
            link: format!("https://discord.com/channels/1/2/{}", name.to_lowercase()),
        }
    }

    fn names(creatures: &[&Creature]) -> Vec<String> {
        creatures.iter().map(|c| c.name.clone()).collect()
    }

    fn blob_family() -> Vec<Creature> {
        vec![
            creature("Blob", &[]),
            creature("Blobzilla", &["Blob"]),
            creature("Hybroid", &["Blob", "Blobzilla"]),
        ]
    }

    #[test]
    fn blob_family_queries() {
        let creatures = blob_family();

        assert_eq!(names(&root_creatures(&creatures).unwrap()), vec!["Blob"]);
        assert_eq!(
            hybrid_types(&creatures).unwrap(),
            vec![vec!["Blob", "Blobzilla"]]
        );
        assert_eq!(
            evolution_roots(&creatures).unwrap(),
            vec![vec!["Blob"], vec!["Blob", "Blobzilla"]]
        );
        assert_eq!(
            names(&child_creatures_of(&["Blob"], &creatures).unwrap()),
            vec!["Blobzilla"]
        );
    }

    #[test]
    fn roots_have_no_parents() {
        let mut creatures = blob_family();
        creatures.push(creature("Glorp", &[]));

        let roots = root_creatures(&creatures).unwrap();
        assert_eq!(names(&roots), vec!["Blob", "Glorp"]);
        assert!(roots.iter().all(|c| c.evolved_from.is_empty()));
    }

    #[test]
    fn hybrid_types_respect_parent_order() {
        let creatures = vec![
            creature("A", &[]),
            creature("B", &[]),
            creature("AB", &["A", "B"]),
            creature("BA", &["B", "A"]),
            creature("AB2", &["A", "B"]),
        ];

        assert_eq!(
            hybrid_types(&creatures).unwrap(),
            vec![vec!["A", "B"], vec!["B", "A"]]
        );
    }

    #[test]
    fn child_lookup_ignores_parent_order_and_case() {
        let creatures = vec![
            creature("A", &[]),
            creature("B", &[]),
            creature("BA", &["B", "A"]),
            creature("ab", &["a", "b"]),
            creature("ABC", &["A", "B", "C"]),
            creature("AA", &["A", "A"]),
        ];

        assert_eq!(
            names(&child_creatures_of(&["A", "B"], &creatures).unwrap()),
            vec!["BA", "ab"]
        );
        assert_eq!(
            names(&child_creatures_of(&["A", "A"], &creatures).unwrap()),
            vec!["AA"]
        );
    }

    #[test]
    fn lookup_by_name_ignores_case() {
        let creatures = blob_family();
        let found = creature_with_name("bLoBzIlLa", &creatures).unwrap();
        assert_eq!(found.name, "Blobzilla");
    }

    #[test]
    fn lookup_with_duplicate_names_returns_first() {
        let mut creatures = blob_family();
        creatures.push(Creature {
            link: "second".to_owned(),
            ..creature("Blob", &[])
        });

        let found = creature_with_name("Blob", &creatures).unwrap();
        assert_ne!(found.link, "second");
    }

    #[test]
    fn lookup_of_unknown_name_fails() {
        let err = creature_with_name("Nonexistent", &blob_family()).unwrap_err();
        assert_eq!(
            err,
            CreatureError::CreatureNotFound {
                name: "Nonexistent".to_owned()
            }
        );
        assert!(err.to_string().contains("Nonexistent"));

        assert!(creature_with_name("Nonexistent", &[]).is_err());
    }

    #[test]
    fn invalid_creature_fails_every_query() {
        let mut creatures = blob_family();
        creatures.push(creature("", &["Blob"]));

        let expected = CreatureError::InvalidCreature {
            index: Some(3),
            reason: "name is empty",
        };
        assert_eq!(root_creatures(&creatures).unwrap_err(), expected);
        assert_eq!(hybrid_types(&creatures).unwrap_err(), expected);
        assert_eq!(evolution_roots(&creatures).unwrap_err(), expected);
        assert_eq!(creature_with_name("Blob", &creatures).unwrap_err(), expected);
        assert_eq!(
            child_creatures_of(&["Blob"], &creatures).unwrap_err(),
            expected
        );
    }
}
