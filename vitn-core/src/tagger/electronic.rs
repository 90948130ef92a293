//! Electronic-address sub-grammar
//!
//! Spoken form: username, a spoken "@" phrase, then domain parts joined by
//! the spoken dot word. Already-written address tokens (matched by the
//! lexicon's written pattern) and bare protocol words pass through.

use crate::grammar::CompiledGrammarSet;
use crate::token::{Electronic, Token};
use crate::tokenize::WordUnit;

use super::{key, match_phrase, Matches, TagMatch};

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let mut out = Matches::new();
    let Some(first) = units.first().filter(|u| !u.is_punct()) else {
        return out;
    };

    // already-written address or URL token
    if grammar.electronic_pattern().is_match(first.key()) {
        let raw = first.raw();
        let token = match raw.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => {
                Electronic {
                    username: Some(user.to_string()),
                    domain: Some(domain.to_string()),
                    protocol: None,
                }
            }
            _ => Electronic {
                username: None,
                domain: None,
                protocol: Some(raw.to_string()),
            },
        };
        out.push(TagMatch {
            consumed: 1,
            token: Token::Electronic(token),
        });
    } else if lexicon.is_protocol(first.key()) {
        out.push(TagMatch {
            consumed: 1,
            token: Token::Electronic(Electronic {
                username: None,
                domain: None,
                protocol: Some(first.raw().to_string()),
            }),
        });
    }

    // spoken form: user "a còng" part ("chấm" part)+
    if let Some((at_len, ())) = match_phrase(lexicon.electronic_at(), &units[1..]) {
        let mut i = 1 + at_len;
        if let Some(head) = key(units, i) {
            let mut domain = head.to_string();
            i += 1;
            while key(units, i).is_some_and(|k| lexicon.is_electronic_dot(k)) {
                let Some(part) = key(units, i + 1) else { break };
                domain.push('.');
                domain.push_str(part);
                i += 2;
                out.push(TagMatch {
                    consumed: i,
                    token: Token::Electronic(Electronic {
                        username: Some(first.key().to_string()),
                        domain: Some(domain.clone()),
                        protocol: None,
                    }),
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::testing;

    #[test]
    fn test_spoken_address() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "minh a còng gmail chấm com");
        let matches = tag(&grammar, &units);
        assert!(matches.iter().any(|m| m.consumed == 6
            && m.token
                == Token::Electronic(Electronic {
                    username: Some("minh".to_string()),
                    domain: Some("gmail.com".to_string()),
                    protocol: None,
                })));
    }

    #[test]
    fn test_written_address_passthrough() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "minh@gmail.com");
        let matches = tag(&grammar, &units);
        assert!(matches.iter().any(|m| m.consumed == 1
            && m.token
                == Token::Electronic(Electronic {
                    username: Some("minh".to_string()),
                    domain: Some("gmail.com".to_string()),
                    protocol: None,
                })));
    }

    #[test]
    fn test_bare_protocol() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "https");
        let matches = tag(&grammar, &units);
        assert!(matches.iter().any(|m| m.consumed == 1
            && m.token
                == Token::Electronic(Electronic {
                    username: None,
                    domain: None,
                    protocol: Some("https".to_string()),
                })));
    }
}
