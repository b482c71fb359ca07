/// Character statistics for the statistics sheet
use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Number of characters listed in the statistics sheet by default
pub const DEFAULT_TOP_K: usize = 3;

/// How often one character occurs in the concatenated names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCount {
    /// One extended grapheme cluster ("e", "é", "👍🏽", " ")
    pub character: String,
    pub count: usize,
}

impl CharacterCount {
    /// Label for the sheet; whitespace would otherwise render as nothing
    pub fn label(&self) -> &str {
        match self.character.as_str() {
            " " => "␠",
            "\t" => "⇥",
            "\n" => "⏎",
            other => other,
        }
    }
}

/// The `k` most frequent characters across all names joined together
///
/// Names are concatenated in order with no separator. Ordering is by count
/// descending, then by where the character first appears in the joined text.
pub fn top_characters<S: AsRef<str>>(names: &[S], k: usize) -> Vec<CharacterCount> {
    let text: String = names.iter().map(|name| name.as_ref()).collect();

    // grapheme -> (count, first seen)
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
    for (seen, grapheme) in text.graphemes(true).enumerate() {
        tally.entry(grapheme).or_insert((0, seen)).0 += 1;
    }

    let mut counts: Vec<(&str, usize, usize)> = tally
        .into_iter()
        .map(|(grapheme, (count, first_seen))| (grapheme, count, first_seen))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    counts
        .into_iter()
        .take(k)
        .map(|(grapheme, count, _)| CharacterCount {
            character: grapheme.to_string(),
            count,
        })
        .collect()
}

/// Snapshot shown by the statistics sheet
///
/// Built fresh each time the sheet opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Items in the current filtered subset
    pub item_count: usize,
    /// Requested number of top characters
    pub k: usize,
    /// Top characters over the full, unfiltered names
    pub top_characters: Vec<CharacterCount>,
}

impl Statistics {
    pub fn compute<S: AsRef<str>>(names: &[S], item_count: usize, k: usize) -> Self {
        Self {
            item_count,
            k,
            top_characters: top_characters(names, k),
        }
    }
}
