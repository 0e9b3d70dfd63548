//! Reads one creature out of a free-form chat message.
//!
//! Players are not consistent about formatting, so the labels are matched loosely:
//!
//! ```text
//! **Name:** Hybroid
//! *Evolved from:* Hybrid of [Blob](https://...), and Blobzilla
//! ```

use super::Creature;
use regex::Regex;
use std::sync::LazyLock;

/// `[label](url)` after emphasis markers are gone.
static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"\[(.*?)\]\(.*?\)"));

/// `Name:` label.  Case sensitive, the value is the rest of the line.
static NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"Name:[^\S\n]*([^\n]+)"));

/// `Evolved from:`, `Evolution:`, `Evolves into:`, `Evol... <word>:` and so on, at the start of a
/// line.  The value is the rest of that line.
static EVOLVED: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?im)^[^\S\n]*(?:Evolved|Evolution|Evol\w*)(?:[^\S\n]+(?:from|of|into|\w+))?[^\S\n]*:[^\S\n]*([^\n]+)",
    )
});

static EVOLUTION_OF: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?im)^[^\S\n]*Evolution of:[^\S\n]*([^\n]+)"));

/// Leading `Hybrid of`, including the common misspellings.
static HYBRID_OF: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\s*(?:Hybrid|Hybryd|Hy\w*d)\s+of\b"));

/// Separators between parent names: `,`, `/`, `&`, `and`, `, and`.
static PARENT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\s*(?:, and |,|/|&|\sand\s)\s*"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid creature pattern `{}`: {}", pattern, e))
}

/// A creature read from a message, before it is tied to the message it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCreature {
    pub name: String,
    pub evolved_from: Vec<String>,
}

impl ParsedCreature {
    pub fn with_link(self, link: impl Into<String>) -> Creature {
        Creature {
            name: self.name,
            evolved_from: self.evolved_from,
            link: link.into(),
        }
    }
}

/// Parse a creature from the text of a message.
///
/// Returns `None` if the text has no `Name:` line, i.e. it is not a creature post.  Never fails
/// otherwise: a missing evolution line simply makes the creature a root.
pub fn parse_creature_entry(text: &str) -> Option<ParsedCreature> {
    let text = strip_markdown(text);

    let name = NAME.captures(&text)?.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }

    let evolved_from = EVOLVED
        .captures(&text)
        .or_else(|| EVOLUTION_OF.captures(&text))
        .and_then(|captures| captures.get(1))
        .map(|parents| split_parents(parents.as_str()))
        .unwrap_or_default();

    Some(ParsedCreature {
        name: name.to_owned(),
        evolved_from,
    })
}

/// Drop emphasis, code and underline markers, and reduce links to their label.
fn strip_markdown(text: &str) -> String {
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '`' | '*' | '_'))
        .collect();

    LINK.replace_all(&text, "$1").into_owned()
}

fn split_parents(parents: &str) -> Vec<String> {
    let parents = HYBRID_OF.replace(parents.trim(), "");

    PARENT_SEPARATOR
        .split(&parents)
        .map(str::trim)
        .filter(|parent| !parent.is_empty())
        .map(str::to_owned)
        .collect()
}
