//! Streaming tokenizer for line-oriented N-Triples-like input.
//!
//! A single forward pass over the byte stream: tokens are accumulated into
//! a reusable buffer, interned as they complete, and each finished line
//! appends one relation to its predicate's store. Nothing larger than one
//! token is ever buffered.
//!
//! Quoted literals (`"..."`) and bracketed IRIs (`<...>`) are copied
//! verbatim, delimiters included. A backslash always copies itself plus the
//! following byte without interpreting escape semantics, wherever it
//! appears. The first malformed byte aborts the parse with the current line
//! number; there is no recovery.

use std::io::{self, BufRead};

use crate::errors::{Error, Result, SyntaxErrorKind};
use crate::relation::{Relation, RelationStore};
use crate::trie::{NodeId, Trie};

/// Counters reported back after a successful parse.
#[derive(Debug, Clone, Copy)]
pub struct ParseOutcome {
    pub lines: u64,
    pub triples: u64,
}

/// Parse `reader` to exhaustion, interning subject/object tokens into
/// `terms` and predicate tokens into `predicates`, where each predicate
/// node collects its relations.
pub fn parse<R: BufRead>(
    mut reader: R,
    terms: &mut Trie<()>,
    predicates: &mut Trie<RelationStore>,
    max_token_len: usize,
) -> Result<ParseOutcome> {
    let mut buf: Vec<u8> = Vec::new();
    let mut line: u64 = 1;
    let mut triples: u64 = 0;

    let mut in_quote = false;
    let mut in_iri = false;
    // set once a line has token content; a bare newline is only blank
    // (and skippable) while this is unset
    let mut line_has_content = false;
    // a '#' opens a comment only as the first non-whitespace byte of a line
    let mut fresh_line = true;
    // between tokens: spaces and tabs are separators, not content
    let mut skipping_ws = true;

    let mut subject: Option<NodeId> = None;
    let mut predicate: Option<NodeId> = None;

    loop {
        let Some(c) = next_byte(&mut reader)? else {
            break;
        };

        // verbatim backslash pair, regardless of surrounding state
        if c == b'\\' {
            let Some(next) = next_byte(&mut reader)? else {
                return Err(syntax(line, SyntaxErrorKind::TrailingBackslash));
            };
            push_token_byte(&mut buf, b'\\', max_token_len, line)?;
            push_token_byte(&mut buf, next, max_token_len, line)?;
            line_has_content = true;
            continue;
        }

        if in_quote {
            if c == b'\n' {
                return Err(syntax(line, SyntaxErrorKind::UnterminatedQuote));
            }
            push_token_byte(&mut buf, c, max_token_len, line)?;
            if c == b'"' {
                in_quote = false;
            }
            continue;
        }

        if in_iri {
            if c == b'\n' {
                return Err(syntax(line, SyntaxErrorKind::UnterminatedIri));
            }
            push_token_byte(&mut buf, c, max_token_len, line)?;
            if c == b'>' {
                in_iri = false;
            }
            continue;
        }

        if skipping_ws {
            if c == b' ' || c == b'\t' {
                continue;
            }
            if c == b'#' && fresh_line {
                loop {
                    match next_byte(&mut reader)? {
                        None | Some(b'\n') => break,
                        Some(_) => {}
                    }
                }
                line += 1;
                continue;
            }
            fresh_line = false;
            skipping_ws = false;
        }

        // whitespace ends the current field; a period does too once the
        // object is being read
        if c == b' ' || c == b'\t' || (c == b'.' && predicate.is_some()) {
            skipping_ws = true;
            match (subject, predicate) {
                (None, _) => subject = Some(terms.intern(&buf)),
                (Some(_), None) => predicate = Some(predicates.intern(&buf)),
                (Some(subj), Some(pred)) => {
                    let object = terms.intern(&buf);
                    let mut have_period = c == b'.';
                    // consume the rest of the line: optional whitespace, at
                    // most one period, then the line end
                    loop {
                        match next_byte(&mut reader)? {
                            None | Some(b'\n') => {
                                if !have_period {
                                    return Err(syntax(line, SyntaxErrorKind::MissingPeriod));
                                }
                                break;
                            }
                            Some(b' ') | Some(b'\t') => {}
                            Some(b'.') if !have_period => have_period = true,
                            Some(other) => {
                                return Err(syntax(
                                    line,
                                    SyntaxErrorKind::UnexpectedCharacter(other),
                                ));
                            }
                        }
                    }
                    line += 1;
                    predicates.payload_mut(pred).push(Relation {
                        subject: subj,
                        object,
                    });
                    triples += 1;
                    subject = None;
                    predicate = None;
                    fresh_line = true;
                    line_has_content = false;
                }
            }
            buf.clear();
            continue;
        }

        if c == b'"' {
            push_token_byte(&mut buf, c, max_token_len, line)?;
            in_quote = true;
            line_has_content = true;
            continue;
        }

        if c == b'<' {
            push_token_byte(&mut buf, c, max_token_len, line)?;
            in_iri = true;
            line_has_content = true;
            continue;
        }

        if c == b'\n' {
            if !line_has_content {
                line += 1;
                skipping_ws = true;
                fresh_line = true;
                continue;
            }
            return Err(syntax(line, SyntaxErrorKind::MissingPeriod));
        }

        return Err(syntax(line, SyntaxErrorKind::UnexpectedCharacter(c)));
    }

    Ok(ParseOutcome {
        lines: line.saturating_sub(1),
        triples,
    })
}

fn syntax(line: u64, kind: SyntaxErrorKind) -> Error {
    Error::Syntax { line, kind }
}

fn push_token_byte(buf: &mut Vec<u8>, byte: u8, max: usize, line: u64) -> Result<()> {
    if buf.len() >= max {
        return Err(syntax(line, SyntaxErrorKind::TokenTooLong));
    }
    buf.push(byte);
    Ok(())
}

fn next_byte<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    let available = reader.fill_buf()?;
    if available.is_empty() {
        return Ok(None);
    }
    let byte = available[0];
    reader.consume(1);
    Ok(Some(byte))
}
