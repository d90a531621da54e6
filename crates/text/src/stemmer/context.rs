//! Enhanced Confix Stripping for a single word
//!
//! The context tracks the word being reduced and every affix removal made so
//! far, so a failed attempt can be rolled back and retried in another order.
//! A candidate only becomes the result if it is a dictionary root; otherwise
//! the original word is returned.

use super::dictionary::RootDictionary;
use super::rules::{PrefixRule, PREFIX_RULES};
use tracing::trace;

/// Maximum number of prefix-removal rounds (e.g. `mem-per-`, `di-per-`)
const MAX_PREFIX_ROUNDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AffixKind {
    /// -lah, -kah, -tah, -pun
    Particle,
    /// -ku, -mu, -nya
    Possessive,
    /// -kan, -an, -i
    DerivationalSuffix,
    /// plain and disambiguated prefixes, infixes
    Prefix,
}

impl AffixKind {
    fn is_suffix(self) -> bool {
        !matches!(self, AffixKind::Prefix)
    }
}

#[derive(Debug, Clone)]
struct Removal {
    kind: AffixKind,
    /// Prefix rule that proposed the removal
    rule: Option<&'static str>,
    /// Word before the removal
    subject: String,
    /// Word after the removal
    result: String,
    /// Removed affix text
    removed: String,
}

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const DERIVATIONAL_SUFFIXES: &[&str] = &["kan", "an", "i"];

/// Strip the first matching suffix (and any hyphens before it)
fn strip_suffix<'a>(word: &'a str, suffixes: &[&'static str]) -> Option<(&'a str, &'static str)> {
    suffixes.iter().find_map(|suffix| {
        let stem = word.strip_suffix(suffix)?.trim_end_matches('-');
        (!stem.is_empty()).then_some((stem, *suffix))
    })
}

/// Confix shapes where the prefix has to go first (`be-…-lah`, `me-…-i`, …)
fn prefix_takes_precedence(word: &str) -> bool {
    let confix = |prefix: &str, suffix: &str| {
        word.len() >= prefix.len() + suffix.len()
            && word.starts_with(prefix)
            && word.ends_with(suffix)
    };
    confix("be", "lah")
        || confix("be", "an")
        || confix("me", "i")
        || confix("di", "i")
        || confix("pe", "i")
        || confix("ter", "i")
}

pub(crate) struct StemContext<'d> {
    dictionary: &'d RootDictionary,
    original: String,
    current: String,
    removals: Vec<Removal>,
}

impl<'d> StemContext<'d> {
    pub(crate) fn new(word: &str, dictionary: &'d RootDictionary) -> Self {
        StemContext {
            dictionary,
            original: word.to_string(),
            current: word.to_string(),
            removals: Vec::new(),
        }
    }

    /// Run the stripping process and return the root, or the original word
    pub(crate) fn stem(mut self) -> String {
        self.run();
        if self.in_dictionary() {
            trace!(
                target: "ulasan::stemmer",
                word = %self.original,
                root = %self.current,
                rules = ?self.removals.iter().filter_map(|r| r.rule).collect::<Vec<_>>(),
                "Stemmed"
            );
            self.current
        } else {
            self.original
        }
    }

    #[inline]
    fn in_dictionary(&self) -> bool {
        self.dictionary.contains(&self.current)
    }

    fn run(&mut self) {
        if self.in_dictionary() {
            return;
        }

        if prefix_takes_precedence(&self.original) {
            self.remove_prefixes();
            if self.in_dictionary() {
                return;
            }
            self.remove_suffixes();
            if self.in_dictionary() {
                return;
            }
            self.current = self.original.clone();
            self.removals.clear();
        }

        self.remove_suffixes();
        if self.in_dictionary() {
            return;
        }

        self.remove_prefixes();
        if self.in_dictionary() {
            return;
        }

        self.restore_suffixes();
    }

    // ------------------------------------------------------------------
    // Suffixes
    // ------------------------------------------------------------------

    fn remove_suffixes(&mut self) {
        for (kind, suffixes) in [
            (AffixKind::Particle, PARTICLES),
            (AffixKind::Possessive, POSSESSIVES),
            (AffixKind::DerivationalSuffix, DERIVATIONAL_SUFFIXES),
        ] {
            if let Some((result, removed)) = strip_suffix(&self.current, suffixes) {
                let removal = Removal {
                    kind,
                    rule: None,
                    subject: self.current.clone(),
                    result: result.to_string(),
                    removed: removed.to_string(),
                };
                self.apply(removal);
            }
            if self.in_dictionary() {
                return;
            }
        }
    }

    // ------------------------------------------------------------------
    // Prefixes
    // ------------------------------------------------------------------

    fn remove_prefixes(&mut self) {
        for _ in 0..MAX_PREFIX_ROUNDS {
            let before = self.removals.len();
            self.accept_prefix_rules();
            if self.in_dictionary() || self.removals.len() == before {
                return;
            }
        }
    }

    /// Try rules in order until one removes something or a root is reached
    fn accept_prefix_rules(&mut self) {
        let before = self.removals.len();
        for rule in PREFIX_RULES {
            self.apply_prefix_rule(rule);
            if self.in_dictionary() || self.removals.len() > before {
                return;
            }
        }
    }

    fn apply_prefix_rule(&mut self, rule: &PrefixRule) {
        let mut candidate = None;
        for disambiguate in rule.disambiguators {
            candidate = disambiguate(&self.current);
            if candidate
                .as_deref()
                .is_some_and(|c| self.dictionary.contains(c))
            {
                break;
            }
        }

        let Some(result) = candidate else {
            return;
        };
        if result.is_empty() || result == self.current {
            return;
        }

        let removed = self
            .current
            .strip_suffix(result.as_str())
            .unwrap_or(&self.current)
            .to_string();
        trace!(
            target: "ulasan::stemmer",
            rule = rule.name,
            word = %self.current,
            result = %result,
            "Prefix rule fired"
        );
        let removal = Removal {
            kind: AffixKind::Prefix,
            rule: Some(rule.name),
            subject: self.current.clone(),
            result,
            removed,
        };
        self.apply(removal);
    }

    fn apply(&mut self, removal: Removal) {
        self.current = removal.result.clone();
        self.removals.push(removal);
    }

    // ------------------------------------------------------------------
    // Suffix restoration
    // ------------------------------------------------------------------

    /// Put suffixes back one at a time (innermost first) and retry prefixes
    fn restore_suffixes(&mut self) {
        self.restore_prefixes();

        let removals = self.removals.clone();
        let current = self.current.clone();

        for removal in removals.iter().rev() {
            if !removal.kind.is_suffix() {
                continue;
            }

            if removal.removed == "kan" {
                // "-kan" may really be a root-final "k" plus "-an"
                self.current = format!("{}k", removal.result);
                self.remove_prefixes();
                if self.in_dictionary() {
                    return;
                }
                self.current = format!("{}kan", removal.result);
            } else {
                self.current = removal.subject.clone();
            }

            self.remove_prefixes();
            if self.in_dictionary() {
                return;
            }

            self.removals = removals.clone();
            self.current = current.clone();
        }
    }

    /// Undo all prefix removals, keeping suffix removals
    fn restore_prefixes(&mut self) {
        if let Some(first) = self.removals.iter().find(|r| !r.kind.is_suffix()) {
            self.current = first.subject.clone();
        }
        self.removals.retain(|r| r.kind.is_suffix());
    }
}
