//! Classifier: best-covering search over the sub-grammar lattice
//!
//! Every sub-grammar is run at every reachable position, forming a lattice
//! of candidate firings. A dynamic-programming pass selects the covering
//! of the whole input with minimum total weight, where each firing costs
//! its sub-grammar's fixed base priority. Weights are integer
//! centiweights, so comparisons are exact.
//!
//! Tie-breaking is deterministic and reproducible: positions are relaxed
//! left to right, sub-grammars in declaration order, and a candidate
//! replaces the incumbent only on strictly smaller cost. An equal-cost
//! covering therefore resolves to the leftmost-earliest firing, then the
//! earlier sub-grammar, then the sub-grammar's own emission order.
//!
//! Classification never fails: the word and punctuation fallbacks cover
//! any single unit, so a covering always exists.

use tracing::trace;

use crate::grammar::CompiledGrammarSet;
use crate::tagger::TAGGERS;
use crate::token::{Sentence, Span, Token};
use crate::tokenize::WordUnit;

#[derive(Debug, Clone)]
struct Edge {
    cost: u64,
    prev: usize,
    token: Token,
}

/// Classify a tokenized input into its best-covering sentence.
pub fn classify(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Sentence {
    let n = units.len();
    let mut best: Vec<Option<Edge>> = vec![None; n + 1];
    best[0] = Some(Edge {
        cost: 0,
        prev: 0,
        token: Token::Word {
            text: String::new(),
        },
    });

    for i in 0..n {
        let Some(cost_here) = best[i].as_ref().map(|e| e.cost) else {
            continue;
        };
        for tagger in TAGGERS {
            for m in (tagger.tag)(grammar, &units[i..]) {
                debug_assert!(m.consumed >= 1, "taggers must consume at least one unit");
                let Some(end) = i.checked_add(m.consumed).filter(|e| *e <= n) else {
                    continue;
                };
                let cost = cost_here + u64::from(tagger.weight);
                if best[end].as_ref().map_or(true, |e| cost < e.cost) {
                    trace!(tagger = tagger.kind, from = i, to = end, cost, "relaxed");
                    best[end] = Some(Edge {
                        cost,
                        prev: i,
                        token: m.token,
                    });
                }
            }
        }
    }

    // Backtrack from the end. The fallbacks make every prefix reachable,
    // so the unwrap chain below cannot fail for any input.
    let mut spans = Vec::new();
    let mut pos = n;
    while pos > 0 {
        let edge = best[pos]
            .take()
            .expect("word fallback guarantees total coverage");
        spans.push(Span {
            token: edge.token,
            consumed: pos - edge.prev,
        });
        pos = edge.prev;
    }
    spans.reverse();

    let sentence = Sentence {
        spans,
        total_units: n,
    };
    debug_assert!(sentence.is_total_covering());
    sentence
}
