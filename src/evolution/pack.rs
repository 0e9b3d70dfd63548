//! Splits a rendered tree into Discord-sized messages.

/// Maximum number of characters in a Discord message.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Split `document` into chunks of at most `limit` characters.
///
/// Each `##` heading starts a new section and sections are never merged.  A section that fits is
/// sent as is; a longer one is packed greedily line by line, never breaking a line across two
/// chunks.  The only exception is a single line longer than `limit` by itself, which is cut into
/// `limit`-sized pieces.
pub fn pack_messages(document: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);

    sections(document)
        .into_iter()
        .flat_map(|section| {
            if char_len(section) <= limit {
                vec![section.to_owned()]
            } else {
                pack_lines(section.trim_end_matches('\n'), limit)
            }
        })
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

/// Text before the first heading, if any, then one slice per heading.
fn sections(document: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;

    for (offset, line) in line_offsets(document) {
        if line.starts_with("##") && offset != start {
            sections.push(&document[start..offset]);
            start = offset;
        }
    }
    if start < document.len() {
        sections.push(&document[start..]);
    }

    sections
}

fn line_offsets(document: &str) -> impl Iterator<Item = (usize, &str)> {
    document.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

fn pack_lines(section: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut pending: Vec<&str> = Vec::new();
    let mut pending_len = 0;

    for piece in section.split('\n').flat_map(|line| split_long_line(line, limit)) {
        let piece_len = char_len(piece);
        // Joining adds a newline in front of every line but the first
        let added = if pending.is_empty() {
            piece_len
        } else {
            piece_len + 1
        };

        if !pending.is_empty() && pending_len + added > limit {
            chunks.push(pending.join("\n"));
            pending.clear();
            pending_len = piece_len;
        } else {
            pending_len += added;
        }
        pending.push(piece);
    }

    if !pending.is_empty() {
        chunks.push(pending.join("\n"));
    }

    chunks
}

/// `line` itself, or consecutive `limit`-character pieces of it when it is too long.
fn split_long_line(line: &str, limit: usize) -> Vec<&str> {
    if char_len(line) <= limit {
        return vec![line];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for (count, (index, _)) in line.char_indices().enumerate() {
        if count > 0 && count % limit == 0 {
            pieces.push(&line[start..index]);
            start = index;
        }
    }
    pieces.push(&line[start..]);

    pieces
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
