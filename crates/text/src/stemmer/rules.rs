//! Prefix disambiguation rules
//!
//! Each rule recognizes one prefix shape and proposes candidate roots in
//! priority order. The stemming context takes the first candidate found in
//! the dictionary, otherwise the last one proposed. Rule numbering follows
//! the Enhanced Confix Stripping rule table (rules 22 and 33 do not exist).
//!
//! Patterns only inspect ASCII letters, so every slice below lands on a
//! char boundary even when the word contains other scripts.

/// Proposes a root candidate for a word, or `None` if the shape does not match
pub(crate) type Disambiguator = fn(&str) -> Option<String>;

/// A named group of disambiguators tried in order
pub(crate) struct PrefixRule {
    pub name: &'static str,
    pub disambiguators: &'static [Disambiguator],
}

// ============================================================================
// Character classes
// ============================================================================

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

#[inline]
fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

#[inline]
fn is_consonant(c: char) -> bool {
    is_letter(c) && !is_vowel(c)
}

#[inline]
fn is_consonant_not_r(c: char) -> bool {
    is_consonant(c) && c != 'r'
}

/// `[bcdfghjkmnpqstvwxyz]`
#[inline]
fn is_consonant_not_rl(c: char) -> bool {
    is_consonant_not_r(c) && c != 'l'
}

/// `[bcdfghjkpqstvxz]`
#[inline]
fn is_consonant_not_sonorant(c: char) -> bool {
    is_consonant(c) && !matches!(c, 'l' | 'm' | 'n' | 'r' | 'w' | 'y')
}

/// ASCII char at byte offset `i`; non-ASCII bytes never satisfy a class
#[inline]
fn at(s: &str, i: usize) -> Option<char> {
    s.as_bytes().get(i).map(|&b| b as char)
}

#[inline]
fn matches_at(s: &str, i: usize, class: fn(char) -> bool) -> bool {
    at(s, i).is_some_and(class)
}

#[inline]
fn literal_at(s: &str, i: usize, lit: &str) -> bool {
    s.as_bytes().get(i..i + lit.len()) == Some(lit.as_bytes())
}

fn prepend(head: &str, rest: &str) -> String {
    let mut out = String::with_capacity(head.len() + rest.len());
    out.push_str(head);
    out.push_str(rest);
    out
}

// ============================================================================
// Plain prefixes (di-, ke-, se-)
// ============================================================================

/// Strip a plain prefix
fn remove_plain_prefix(word: &str) -> Option<String> {
    ["di", "ke", "se"]
        .iter()
        .find_map(|p| word.strip_prefix(p))
        .map(String::from)
}

// ============================================================================
// ber- / be-
// ============================================================================

/// berV… → ber-V…
fn rule_1a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ber")?;
    matches_at(rest, 0, is_vowel).then(|| rest.to_string())
}

/// berV… → be-rV…
fn rule_1b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ber")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("r", rest))
}

/// berCAP… → ber-CAP… where C != 'r' and P != 'er'
fn rule_2(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ber")?;
    (matches_at(rest, 0, is_consonant_not_r)
        && matches_at(rest, 1, is_letter)
        && !literal_at(rest, 2, "er"))
    .then(|| rest.to_string())
}

/// berCAerV… → ber-CAerV… where C != 'r'
fn rule_3(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ber")?;
    (matches_at(rest, 0, is_consonant_not_r)
        && matches_at(rest, 1, is_letter)
        && literal_at(rest, 2, "er")
        && matches_at(rest, 4, is_vowel))
    .then(|| rest.to_string())
}

/// belajar → bel-ajar
fn rule_4(word: &str) -> Option<String> {
    (word == "belajar").then(|| "ajar".to_string())
}

/// beC1erC2… → be-C1erC2… where C1 != {'r' | 'l'}
fn rule_5(word: &str) -> Option<String> {
    let rest = word.strip_prefix("be")?;
    (matches_at(rest, 0, is_consonant_not_rl)
        && literal_at(rest, 1, "er")
        && matches_at(rest, 3, is_consonant))
    .then(|| rest.to_string())
}

// ============================================================================
// ter- / te-
// ============================================================================

/// terV… → ter-V…
fn rule_6a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    matches_at(rest, 0, is_vowel).then(|| rest.to_string())
}

/// terV… → te-rV…
fn rule_6b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("r", rest))
}

/// terCerV… → ter-CerV… where C != 'r'
fn rule_7(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    (matches_at(rest, 0, is_consonant_not_r)
        && literal_at(rest, 1, "er")
        && matches_at(rest, 3, is_vowel))
    .then(|| rest.to_string())
}

/// terCP… → ter-CP… where C != 'r' and P != 'er'
fn rule_8(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    (matches_at(rest, 0, is_consonant_not_r) && !literal_at(rest, 1, "er"))
        .then(|| rest.to_string())
}

/// teC1erC2… → te-C1erC2… where C1 != 'r'
fn rule_9(word: &str) -> Option<String> {
    let rest = word.strip_prefix("te")?;
    (matches_at(rest, 0, is_consonant_not_r)
        && literal_at(rest, 1, "er")
        && matches_at(rest, 3, is_consonant))
    .then(|| rest.to_string())
}

// ============================================================================
// me- family
// ============================================================================

/// me{l|r|w|y}V… → me-{l|r|w|y}V…
fn rule_10(word: &str) -> Option<String> {
    let rest = word.strip_prefix("me")?;
    (matches_at(rest, 0, |c| matches!(c, 'l' | 'r' | 'w' | 'y')) && matches_at(rest, 1, is_vowel))
        .then(|| rest.to_string())
}

/// mem{b|f|v}… → mem-{b|f|v}…
fn rule_11(word: &str) -> Option<String> {
    let rest = word.strip_prefix("mem")?;
    matches_at(rest, 0, |c| matches!(c, 'b' | 'f' | 'v')).then(|| rest.to_string())
}

/// mempe… → mem-pe…
fn rule_12(word: &str) -> Option<String> {
    let rest = word.strip_prefix("mempe")?;
    Some(prepend("pe", rest))
}

/// `{rV|V}` after a nasal prefix
fn starts_r_vowel_or_vowel(rest: &str) -> bool {
    matches_at(rest, 0, is_vowel) || (literal_at(rest, 0, "r") && matches_at(rest, 1, is_vowel))
}

/// mem{rV|V}… → me-m{rV|V}…
fn rule_13a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("mem")?;
    starts_r_vowel_or_vowel(rest).then(|| prepend("m", rest))
}

/// mem{rV|V}… → me-p{rV|V}…
fn rule_13b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("mem")?;
    starts_r_vowel_or_vowel(rest).then(|| prepend("p", rest))
}

/// men{c|d|j|s|t|z}… → men-{c|d|j|s|t|z}…
fn rule_14(word: &str) -> Option<String> {
    let rest = word.strip_prefix("men")?;
    matches_at(rest, 0, |c| matches!(c, 'c' | 'd' | 'j' | 's' | 't' | 'z')).then(|| rest.to_string())
}

/// menV… → me-nV…
fn rule_15a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("men")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("n", rest))
}

/// menV… → me-tV…
fn rule_15b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("men")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("t", rest))
}

/// meng{g|h|q|k}… → meng-{g|h|q|k}…
fn rule_16(word: &str) -> Option<String> {
    let rest = word.strip_prefix("meng")?;
    matches_at(rest, 0, |c| matches!(c, 'g' | 'h' | 'q' | 'k')).then(|| rest.to_string())
}

/// mengV… → meng-V…
fn rule_17a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("meng")?;
    matches_at(rest, 0, is_vowel).then(|| rest.to_string())
}

/// mengV… → meng-kV…
fn rule_17b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("meng")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("k", rest))
}

/// menge… → menge-… (monosyllabic roots)
fn rule_17c(word: &str) -> Option<String> {
    word.strip_prefix("menge").map(String::from)
}

/// mengV… → me-ngV…
fn rule_17d(word: &str) -> Option<String> {
    let rest = word.strip_prefix("meng")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("ng", rest))
}

/// menyV… → me-nyV…
fn rule_18a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("meny")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("ny", rest))
}

/// menyV… → meny-sV…
fn rule_18b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("meny")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("s", rest))
}

/// mempA… → mem-pA… where A != 'e'
fn rule_19(word: &str) -> Option<String> {
    let rest = word.strip_prefix("memp")?;
    matches_at(rest, 0, |c| is_letter(c) && c != 'e').then(|| prepend("p", rest))
}

// ============================================================================
// pe- family
// ============================================================================

/// pe{w|y}V… → pe-{w|y}V…
fn rule_20(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pe")?;
    (matches_at(rest, 0, |c| matches!(c, 'w' | 'y')) && matches_at(rest, 1, is_vowel))
        .then(|| rest.to_string())
}

/// perV… → per-V…
fn rule_21a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("per")?;
    matches_at(rest, 0, is_vowel).then(|| rest.to_string())
}

/// perV… → pe-rV…
fn rule_21b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("per")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("r", rest))
}

/// perCAP… → per-CAP… where C != 'r' and P != 'er'
fn rule_23(word: &str) -> Option<String> {
    let rest = word.strip_prefix("per")?;
    (matches_at(rest, 0, is_consonant_not_r)
        && matches_at(rest, 1, is_letter)
        && !literal_at(rest, 2, "er"))
    .then(|| rest.to_string())
}

/// perCAerV… → per-CAerV… where C != 'r'
fn rule_24(word: &str) -> Option<String> {
    let rest = word.strip_prefix("per")?;
    (matches_at(rest, 0, is_consonant_not_r)
        && matches_at(rest, 1, is_letter)
        && literal_at(rest, 2, "er")
        && matches_at(rest, 4, is_vowel))
    .then(|| rest.to_string())
}

/// pem{b|f|v}… → pem-{b|f|v}…
fn rule_25(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pem")?;
    matches_at(rest, 0, |c| matches!(c, 'b' | 'f' | 'v')).then(|| rest.to_string())
}

/// pem{rV|V}… → pe-m{rV|V}…
fn rule_26a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pem")?;
    starts_r_vowel_or_vowel(rest).then(|| prepend("m", rest))
}

/// pem{rV|V}… → pe-p{rV|V}…
fn rule_26b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pem")?;
    starts_r_vowel_or_vowel(rest).then(|| prepend("p", rest))
}

/// pen{c|d|j|s|t|z}… → pen-{c|d|j|s|t|z}…
fn rule_27(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pen")?;
    matches_at(rest, 0, |c| matches!(c, 'c' | 'd' | 'j' | 's' | 't' | 'z')).then(|| rest.to_string())
}

/// penV… → pe-nV…
fn rule_28a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pen")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("n", rest))
}

/// penV… → pe-tV…
fn rule_28b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pen")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("t", rest))
}

/// peng{g|h|q}… → peng-{g|h|q}…
fn rule_29(word: &str) -> Option<String> {
    let rest = word.strip_prefix("peng")?;
    matches_at(rest, 0, |c| matches!(c, 'g' | 'h' | 'q')).then(|| rest.to_string())
}

/// pengV… → peng-V…
fn rule_30a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("peng")?;
    matches_at(rest, 0, is_vowel).then(|| rest.to_string())
}

/// pengV… → peng-kV…
fn rule_30b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("peng")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("k", rest))
}

/// penge… → penge-… (monosyllabic roots)
fn rule_30c(word: &str) -> Option<String> {
    word.strip_prefix("penge").map(String::from)
}

/// penyV… → pe-nyV…
fn rule_31a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("peny")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("ny", rest))
}

/// penyV… → peny-sV…
fn rule_31b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("peny")?;
    matches_at(rest, 0, is_vowel).then(|| prepend("s", rest))
}

/// pelV… → pe-lV…, except pelajar → ajar
fn rule_32(word: &str) -> Option<String> {
    if word == "pelajar" {
        return Some("ajar".to_string());
    }
    let rest = word.strip_prefix("pe")?;
    (literal_at(rest, 0, "l") && matches_at(rest, 1, is_vowel)).then(|| rest.to_string())
}

/// peCP… → pe-CP… where C != {r|w|y|l|m|n} and P != 'er'
fn rule_34(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pe")?;
    (matches_at(rest, 0, is_consonant_not_sonorant) && !literal_at(rest, 1, "er"))
        .then(|| rest.to_string())
}

/// terC1erC2… → ter-C1erC2… where C1 != 'r'
fn rule_35(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    (matches_at(rest, 0, is_consonant_not_sonorant)
        && literal_at(rest, 1, "er")
        && matches_at(rest, 3, is_consonant))
    .then(|| rest.to_string())
}

/// peC1erC2… → pe-C1erC2… where C1 != {r|w|y|l|m|n}
fn rule_36(word: &str) -> Option<String> {
    let rest = word.strip_prefix("pe")?;
    (matches_at(rest, 0, is_consonant_not_sonorant)
        && literal_at(rest, 1, "er")
        && matches_at(rest, 3, is_consonant))
    .then(|| rest.to_string())
}

// ============================================================================
// Infixes (-er-, -el-, -em-, -in-)
// ============================================================================

/// C{infix}V… kept whole (the word itself may be the root)
fn infix_kept(word: &str, infix: &str) -> Option<String> {
    (matches_at(word, 0, is_consonant) && literal_at(word, 1, infix) && matches_at(word, 3, is_vowel))
        .then(|| word.to_string())
}

/// C{infix}V… → CV…
fn infix_removed(word: &str, infix: &str) -> Option<String> {
    infix_kept(word, infix)?;
    Some(prepend(&word[..1], &word[3..]))
}

fn rule_37a(word: &str) -> Option<String> {
    infix_kept(word, "er")
}

fn rule_37b(word: &str) -> Option<String> {
    infix_removed(word, "er")
}

fn rule_38a(word: &str) -> Option<String> {
    infix_kept(word, "el")
}

fn rule_38b(word: &str) -> Option<String> {
    infix_removed(word, "el")
}

fn rule_39a(word: &str) -> Option<String> {
    infix_kept(word, "em")
}

fn rule_39b(word: &str) -> Option<String> {
    infix_removed(word, "em")
}

fn rule_40a(word: &str) -> Option<String> {
    infix_kept(word, "in")
}

fn rule_40b(word: &str) -> Option<String> {
    infix_removed(word, "in")
}

// ============================================================================
// Pronoun prefixes (ku-, kau-)
// ============================================================================

/// kuA… → ku-A…
fn rule_41(word: &str) -> Option<String> {
    word.strip_prefix("ku").map(String::from)
}

/// kauA… → kau-A…
fn rule_42(word: &str) -> Option<String> {
    word.strip_prefix("kau").map(String::from)
}

/// All disambiguation rules, in the order they are tried
pub(crate) static PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule { name: "plain_prefix", disambiguators: &[remove_plain_prefix] },
    PrefixRule { name: "rule_1", disambiguators: &[rule_1a, rule_1b] },
    PrefixRule { name: "rule_2", disambiguators: &[rule_2] },
    PrefixRule { name: "rule_3", disambiguators: &[rule_3] },
    PrefixRule { name: "rule_4", disambiguators: &[rule_4] },
    PrefixRule { name: "rule_5", disambiguators: &[rule_5] },
    PrefixRule { name: "rule_6", disambiguators: &[rule_6a, rule_6b] },
    PrefixRule { name: "rule_7", disambiguators: &[rule_7] },
    PrefixRule { name: "rule_8", disambiguators: &[rule_8] },
    PrefixRule { name: "rule_9", disambiguators: &[rule_9] },
    PrefixRule { name: "rule_10", disambiguators: &[rule_10] },
    PrefixRule { name: "rule_11", disambiguators: &[rule_11] },
    PrefixRule { name: "rule_12", disambiguators: &[rule_12] },
    PrefixRule { name: "rule_13", disambiguators: &[rule_13a, rule_13b] },
    PrefixRule { name: "rule_14", disambiguators: &[rule_14] },
    PrefixRule { name: "rule_15", disambiguators: &[rule_15a, rule_15b] },
    PrefixRule { name: "rule_16", disambiguators: &[rule_16] },
    PrefixRule { name: "rule_17", disambiguators: &[rule_17a, rule_17b, rule_17c, rule_17d] },
    PrefixRule { name: "rule_18", disambiguators: &[rule_18a, rule_18b] },
    PrefixRule { name: "rule_19", disambiguators: &[rule_19] },
    PrefixRule { name: "rule_20", disambiguators: &[rule_20] },
    PrefixRule { name: "rule_21", disambiguators: &[rule_21a, rule_21b] },
    PrefixRule { name: "rule_23", disambiguators: &[rule_23] },
    PrefixRule { name: "rule_24", disambiguators: &[rule_24] },
    PrefixRule { name: "rule_25", disambiguators: &[rule_25] },
    PrefixRule { name: "rule_26", disambiguators: &[rule_26a, rule_26b] },
    PrefixRule { name: "rule_27", disambiguators: &[rule_27] },
    PrefixRule { name: "rule_28", disambiguators: &[rule_28a, rule_28b] },
    PrefixRule { name: "rule_29", disambiguators: &[rule_29] },
    PrefixRule { name: "rule_30", disambiguators: &[rule_30a, rule_30b, rule_30c] },
    PrefixRule { name: "rule_31", disambiguators: &[rule_31a, rule_31b] },
    PrefixRule { name: "rule_32", disambiguators: &[rule_32] },
    PrefixRule { name: "rule_34", disambiguators: &[rule_34] },
    PrefixRule { name: "rule_35", disambiguators: &[rule_35] },
    PrefixRule { name: "rule_36", disambiguators: &[rule_36] },
    PrefixRule { name: "rule_37", disambiguators: &[rule_37a, rule_37b] },
    PrefixRule { name: "rule_38", disambiguators: &[rule_38a, rule_38b] },
    PrefixRule { name: "rule_39", disambiguators: &[rule_39a, rule_39b] },
    PrefixRule { name: "rule_40", disambiguators: &[rule_40a, rule_40b] },
    PrefixRule { name: "rule_41", disambiguators: &[rule_41] },
    PrefixRule { name: "rule_42", disambiguators: &[rule_42] },
];
