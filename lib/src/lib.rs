//! ntclose — materialize per-predicate transitive closures of N-Triples data.
//!
//! Given a stream of subject–predicate–object statements, every predicate's
//! relation set is closed under transitivity: whenever `(a, p, b)` and
//! `(b, p, c)` hold, `(a, p, c)` is derived. The output is the deduplicated
//! union of original and derived triples, grouped by predicate, so
//! downstream consumers never need recursive graph queries.
//!
//! Quick start: close a document held in memory
//!
//! ```
//! use ntclose::{run, Options};
//!
//! let input = "<a> <p> <b> .\n<b> <p> <c> .\n";
//! let mut output = Vec::new();
//! run(input.as_bytes(), &mut output, Options::default()).expect("well-formed input");
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("<a> <p> <c> ."));
//! ```
//!
//! The phases can also be driven separately, for example to pool several
//! inputs into one closure:
//!
//! ```
//! use ntclose::{Closer, Options};
//!
//! let mut closer = Closer::new(Options::default());
//! closer.load("<a> <p> <b> .\n".as_bytes()).unwrap();
//! closer.load("<b> <p> <c> .\n".as_bytes()).unwrap();
//! closer.close();
//! assert_eq!(closer.num_relations(), 3);
//! let mut output = Vec::new();
//! closer.write(&mut output).unwrap();
//! ```

pub mod consts;
pub mod errors;
pub mod options;
pub mod relation;
pub mod trie;

mod closure;
mod parser;
mod writer;

use std::io::{BufRead, Write};

use log::debug;

use crate::relation::RelationStore;
use crate::trie::Trie;

pub use crate::errors::{Error, Result, SyntaxErrorKind};
pub use crate::options::Options;

/// A closure session: the interned terms and the predicate index for one
/// run, with explicit construction and teardown instead of global roots.
///
/// Phases are strictly sequential: [`load`](Closer::load) everything first,
/// then [`close`](Closer::close) once, then [`write`](Closer::write).
#[derive(Debug)]
pub struct Closer {
    options: Options,
    terms: Trie<()>,
    predicates: Trie<RelationStore>,
    lines: u64,
}

impl Closer {
    pub fn new(options: Options) -> Self {
        Closer {
            options,
            terms: Trie::new(),
            predicates: Trie::new(),
            lines: 0,
        }
    }

    /// Parse one input stream into the session. May be called repeatedly to
    /// pool several documents into the same closure; line numbers in errors
    /// are relative to the stream they occurred in.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let outcome = parser::parse(
            reader,
            &mut self.terms,
            &mut self.predicates,
            self.options.max_token_len,
        )?;
        self.lines += outcome.lines;
        debug!(
            "parsed {} lines, {} triples ({} total lines so far)",
            outcome.lines, outcome.triples, self.lines
        );
        Ok(())
    }

    /// Transitively close every predicate's relation set, in place.
    pub fn close(&mut self) {
        closure::close_all(&mut self.predicates);
        debug!("closure left {} relations", self.num_relations());
    }

    /// Serialize the current relation sets, deduplicated and grouped by
    /// predicate. Call after [`close`](Closer::close) to get the closure;
    /// calling it before simply writes the deduplicated input.
    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        writer::write_all(&self.terms, &self.predicates, out)
    }

    /// Number of relations currently held, across all predicates. Counts
    /// stored relations, including any not-yet-deduplicated derivations.
    pub fn num_relations(&self) -> usize {
        self.predicates
            .walk()
            .map(|id| self.predicates.payload(id).len())
            .sum()
    }

    /// Number of distinct predicates with at least one relation.
    pub fn num_predicates(&self) -> usize {
        self.predicates
            .walk()
            .filter(|id| !self.predicates.payload(*id).is_empty())
            .count()
    }

    /// Total input lines consumed so far.
    pub fn lines_read(&self) -> u64 {
        self.lines
    }
}

impl Default for Closer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Parse `input`, close every predicate, and write the result to `output`.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, options: Options) -> Result<()> {
    let mut closer = Closer::new(options);
    closer.load(input)?;
    closer.close();
    closer.write(output)
}
