//! Serialization of closed relations, deduplicated per predicate.
//!
//! Relations are materialized as canonical `subject predicate object`
//! lines and interned into a dedup tree scoped to one predicate; emitting
//! that tree in structural order prints every distinct line exactly once.
//! The dedup tree is dropped before the next predicate is visited.

use std::io::Write;

use crate::errors::Result;
use crate::relation::RelationStore;
use crate::trie::Trie;

/// Write every predicate's deduplicated relations to `out`, predicates in
/// the index's structural order.
pub fn write_all<W: Write>(
    terms: &Trie<()>,
    predicates: &Trie<RelationStore>,
    out: &mut W,
) -> Result<()> {
    for id in predicates.walk() {
        let store = predicates.payload(id);
        if store.is_empty() {
            continue;
        }
        let predicate = predicates.reconstruct(id);
        let mut dedup: Trie<bool> = Trie::new();
        for relation in store.iter() {
            let mut line = terms.reconstruct(relation.subject);
            line.push(b' ');
            line.extend_from_slice(&predicate);
            line.push(b' ');
            line.extend_from_slice(&terms.reconstruct(relation.object));
            let node = dedup.intern(&line);
            *dedup.payload_mut(node) = true;
        }
        for node in dedup.walk() {
            if *dedup.payload(node) {
                out.write_all(&dedup.reconstruct(node))?;
                out.write_all(b" .\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::Relation;

    #[test]
    fn duplicate_relations_print_once() {
        let mut terms: Trie<()> = Trie::new();
        let a = terms.intern(b"<a>");
        let b = terms.intern(b"<b>");
        let mut predicates: Trie<RelationStore> = Trie::new();
        let p = predicates.intern(b"<p>");
        for _ in 0..3 {
            predicates.payload_mut(p).push(Relation { subject: a, object: b });
        }
        let mut out = Vec::new();
        write_all(&terms, &predicates, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<a> <p> <b> .\n");
    }

    #[test]
    fn output_is_grouped_by_predicate() {
        let mut terms: Trie<()> = Trie::new();
        let a = terms.intern(b"<a>");
        let b = terms.intern(b"<b>");
        let mut predicates: Trie<RelationStore> = Trie::new();
        let q = predicates.intern(b"<q>");
        let p = predicates.intern(b"<p>");
        predicates.payload_mut(q).push(Relation { subject: a, object: b });
        predicates.payload_mut(p).push(Relation { subject: b, object: a });
        let mut out = Vec::new();
        write_all(&terms, &predicates, &mut out).unwrap();
        // structural order of the predicate index, not insertion order
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<b> <p> <a> .\n<a> <q> <b> .\n"
        );
    }

    #[test]
    fn lines_within_a_predicate_follow_dedup_tree_order() {
        let mut terms: Trie<()> = Trie::new();
        let a = terms.intern(b"<a>");
        let b = terms.intern(b"<b>");
        let c = terms.intern(b"<c>");
        let mut predicates: Trie<RelationStore> = Trie::new();
        let p = predicates.intern(b"<p>");
        predicates.payload_mut(p).push(Relation { subject: c, object: a });
        predicates.payload_mut(p).push(Relation { subject: a, object: b });
        let mut out = Vec::new();
        write_all(&terms, &predicates, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<a> <p> <b> .\n<c> <p> <a> .\n"
        );
    }
}
