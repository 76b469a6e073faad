//! Korean-locale string ordering for company names.
//!
//! Approximates the CLDR `ko` collation: whitespace, punctuation and symbols
//! sort first, then digits, then Hangul, then Han ideographs, then Latin and
//! other letters. Hangul syllables are already in dictionary order by code
//! point. A standalone initial consonant (ㄱ, ㄴ, ...) sorts just before the
//! syllables that start with it; other standalone jamo follow all syllables.
//! Letter case only breaks ties, lowercase first.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ScriptGroup {
    Space,
    Symbol,
    Digit,
    Hangul,
    Han,
    Letter,
}

fn script_group(ch: char) -> ScriptGroup {
    match ch {
        c if c.is_whitespace() => ScriptGroup::Space,
        c if c.is_numeric() => ScriptGroup::Digit,
        '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => {
            ScriptGroup::Hangul
        }
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' => {
            ScriptGroup::Han
        }
        c if c.is_alphabetic() => ScriptGroup::Letter,
        _ => ScriptGroup::Symbol,
    }
}

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_COUNT: u32 = 11172;
/// Syllables sharing one initial consonant
const SYLLABLES_PER_INITIAL: u32 = 588;

/// Compatibility jamo for the 19 initial consonants, in syllable order
const COMPAT_INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

fn initial_index(ch: char) -> Option<u32> {
    match ch {
        '\u{1100}'..='\u{1112}' => Some(ch as u32 - 0x1100),
        _ => COMPAT_INITIALS
            .iter()
            .position(|&initial| initial == ch)
            .map(|i| i as u32),
    }
}

/// Syllables take odd weights so each initial consonant lands on the even
/// weight just below its first syllable
fn hangul_weight(ch: char) -> u32 {
    let code = ch as u32;
    if (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&code) {
        (code - SYLLABLE_BASE) * 2 + 1
    } else if let Some(index) = initial_index(ch) {
        index * SYLLABLES_PER_INITIAL * 2
    } else {
        SYLLABLE_COUNT * 2 + code
    }
}

fn fold_case(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn primary_key(ch: char) -> (ScriptGroup, u32) {
    match script_group(ch) {
        ScriptGroup::Hangul => (ScriptGroup::Hangul, hangul_weight(ch)),
        group => (group, fold_case(ch) as u32),
    }
}

/// Compares two names the way the Korean locale orders them
pub fn compare_korean(a: &str, b: &str) -> Ordering {
    let primary = a.chars().map(primary_key).cmp(b.chars().map(primary_key));

    primary
        .then_with(|| {
            // lowercase before uppercase at the first case difference
            a.chars()
                .map(|c| c.is_uppercase())
                .cmp(b.chars().map(|c| c.is_uppercase()))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| compare_korean(a, b));
        names
    }

    #[test]
    fn test_hangul_dictionary_order() {
        assert_eq!(
            sorted(vec!["현대차", "기아", "삼성전자", "네이버"]),
            vec!["기아", "네이버", "삼성전자", "현대차"]
        );
    }

    #[test]
    fn test_standalone_jamo_sort_with_their_syllables() {
        assert_eq!(
            sorted(vec!["나", "ㄴ", "가", "ㄱ", "각", "ㅎ", "힣"]),
            vec!["ㄱ", "가", "각", "ㄴ", "나", "ㅎ", "힣"]
        );
        assert_eq!(compare_korean("\u{1100}", "가"), Ordering::Less);
        assert_eq!(compare_korean("ㅏ", "힣"), Ordering::Greater);
    }

    #[test]
    fn test_hangul_before_latin() {
        assert_eq!(
            sorted(vec!["LG전자", "카카오", "SK하이닉스", "삼성"]),
            vec!["삼성", "카카오", "LG전자", "SK하이닉스"]
        );
    }

    #[test]
    fn test_case_is_secondary() {
        assert_eq!(sorted(vec!["beta", "Alpha", "alpha"]), vec!["alpha", "Alpha", "beta"]);
        assert_eq!(compare_korean("acme", "ACME"), Ordering::Less);
    }

    #[test]
    fn test_digits_and_symbols_first() {
        assert_eq!(
            sorted(vec!["가나", "3M", "(주)가나", "Acme"]),
            vec!["(주)가나", "3M", "가나", "Acme"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_korean("삼성", "삼성전자"), Ordering::Less);
        assert_eq!(compare_korean("삼성", "삼성"), Ordering::Equal);
    }
}
