//! Result rendering.
//!
//! One line per spelling:
//!
//! ```text
//! <word> - <symbol1>,<symbol2>,... - <rank1> <rank2> ...
//! ```
//!
//! Words come out in ascending lexicographic order (the result map is
//! ordered); spellings for a word keep the order the engine produced them,
//! with no extra sorting. The file writer appends, so successive runs
//! accumulate into one artifact.

use crate::api::Spelling;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Render one output line for `word` spelled as `spelling`.
pub fn format_line(word: &str, spelling: &Spelling) -> String {
    let ranks: Vec<String> = spelling.ranks.iter().map(usize::to_string).collect();
    format!("{} - {} - {}", word, spelling.symbols.join(","), ranks.join(" "))
}

/// Write every line of `spellings` to `out`.
pub fn write_lines<W: Write>(mut out: W, spellings: &BTreeMap<String, Vec<Spelling>>) -> io::Result<()> {
    for (word, word_spellings) in spellings {
        for spelling in word_spellings {
            writeln!(out, "{}", format_line(word, spelling))?;
        }
    }
    Ok(())
}

/// Append every line of `spellings` to the file at `path`, creating it if
/// needed.
pub fn append_lines(path: impl AsRef<Path>, spellings: &BTreeMap<String, Vec<Spelling>>) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    write_lines(&mut out, spellings)?;
    out.flush()
}
