use super::{parser::parse_creature_entry, Creature};

/// One message of the evolutions channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureEntry {
    pub text: String,
    /// Where the message lives, e.g. `https://discord.com/channels/<guild>/<channel>/<message>`
    pub link: String,
}

impl CreatureEntry {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Every creature found in a channel history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatureGraph {
    /// Creatures in the order their messages were given.  Duplicate names are kept.
    pub creatures: Vec<Creature>,
    /// Every name seen so far, creature names and the names they evolved from alike, in the order
    /// they were encountered.
    pub known_names: Vec<String>,
}

/// Parse every entry, oldest first, skipping messages that are not creature posts.
pub fn build_creature_graph<'a, I>(entries: I) -> CreatureGraph
where
    I: IntoIterator<Item = &'a CreatureEntry>,
{
    let mut graph = CreatureGraph::default();

    for entry in entries {
        let Some(parsed) = parse_creature_entry(&entry.text) else {
            continue;
        };

        let creature = parsed.with_link(entry.link.as_str());
        graph.known_names.push(creature.name.clone());
        graph
            .known_names
            .extend(creature.evolved_from.iter().cloned());
        graph.creatures.push(creature);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_input_order_and_links() {
        let entries = vec![
            CreatureEntry::new("Name: Blob\n", "link/1"),
            CreatureEntry::new("nice one!", "link/2"),
            CreatureEntry::new("Name: Blobzilla\nEvolved from: Blob\n", "link/3"),
        ];

        let graph = build_creature_graph(&entries);

        assert_eq!(
            graph.creatures,
            vec![
                Creature {
                    name: "Blob".to_owned(),
                    evolved_from: vec![],
                    link: "link/1".to_owned(),
                },
                Creature {
                    name: "Blobzilla".to_owned(),
                    evolved_from: vec!["Blob".to_owned()],
                    link: "link/3".to_owned(),
                },
            ]
        );
        assert_eq!(graph.known_names, vec!["Blob", "Blobzilla", "Blob"]);
    }

    #[test]
    fn duplicate_names_are_all_kept() {
        let entries = vec![
            CreatureEntry::new("Name: Blob", "link/1"),
            CreatureEntry::new("Name: blob", "link/2"),
        ];

        let graph = build_creature_graph(&entries);

        assert_eq!(graph.creatures.len(), 2);
        assert_eq!(graph.creatures[1].link, "link/2");
    }

    #[test]
    fn no_entries_no_creatures() {
        assert_eq!(build_creature_graph(&Vec::<CreatureEntry>::new()), CreatureGraph::default());
    }
}
