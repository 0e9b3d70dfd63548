//! Markdown rendering of the evolution tree.
//!
//! ```text
//! ## [Blob](link)
//!  * [Blobzilla](link)
//!    * [Blobzilla Prime](link)
//! ## [Blob](link) and [Blobzilla](link)
//!  * [Hybroid](link)
//! ```

use super::{
    query::{child_creatures_of, creature_with_name, evolution_roots},
    validate_creature, validate_creatures, Creature, CreatureError,
};
use crate::helper::list_from_words;

const INDENT: &str = "  ";

/// `[name](link)`
pub fn creature_line(creature: &Creature) -> String {
    format!("[{}]({})", creature.name, creature.link)
}

/// Creature links joined into a sentence, e.g. `[A](..), [B](..), and [C](..)`.
pub fn creature_list(creatures: &[&Creature]) -> String {
    let lines: Vec<String> = creatures.iter().map(|c| creature_line(c)).collect();
    list_from_words(&lines)
}

/// One bullet per child, each followed by its own descendants one level deeper.
///
/// `depth` starts at 1, which is not indented.
pub fn render_children_recursive(
    children: &[&Creature],
    creatures: &[Creature],
    depth: usize,
) -> Result<String, CreatureError> {
    validate_creatures(creatures)?;
    children
        .iter()
        .try_for_each(|child| validate_creature(child))?;

    let mut path = Vec::new();
    render_children(children, creatures, depth, &mut path)
}

/// The whole tree: a `##` heading per evolution root, followed by its descendants.
///
/// Roots without any children are left out entirely.
pub fn render_evolution_tree(creatures: &[Creature]) -> Result<String, CreatureError> {
    let mut tree = String::new();

    for heading_names in evolution_roots(creatures)? {
        let children = child_creatures_of(&heading_names, creatures)?;
        if children.is_empty() {
            continue;
        }

        let heading_creatures = heading_names
            .iter()
            .map(|name| creature_with_name(name, creatures))
            .collect::<Result<Vec<_>, _>>()?;

        tree.push_str(&format!("## {}\n", creature_list(&heading_creatures)));
        tree.push_str(&render_children_recursive(&children, creatures, 1)?);
    }

    Ok(tree)
}

fn render_children<'a>(
    children: &[&'a Creature],
    creatures: &'a [Creature],
    depth: usize,
    path: &mut Vec<&'a str>,
) -> Result<String, CreatureError> {
    let mut rendered = String::new();
    let indent = INDENT.repeat(depth.saturating_sub(1));

    for &child in children {
        if path.iter().any(|name| child.has_name(name)) {
            return Err(CreatureError::EvolutionCycle {
                name: child.name.clone(),
            });
        }

        rendered.push_str(&format!("{} * {}\n", indent, creature_line(child)));

        let grandchildren = child_creatures_of(&[child.name.as_str()], creatures)?;
        if grandchildren.is_empty() {
            continue;
        }

        path.push(&child.name);
        rendered.push_str(&render_children(&grandchildren, creatures, depth + 1, path)?);
        path.pop();
    }

    Ok(rendered)
}
