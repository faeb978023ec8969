//! Shared rules for splitting a Korean word (eojeol) into stem and particle

use crate::tables::NounLexicon;

/// Postpositions, longest first so `으로` wins over `로`
const PARTICLES: &[&str] = &[
    "에서는", "으로는", "에게서", "으로", "에서", "에게", "까지", "부터", "처럼", "보다", "하고",
    "이랑", "에는", "랑", "와", "과", "을", "를", "은", "는", "이", "가", "의", "에", "로", "도",
    "만",
];

/// Shortest entry reported from inside a longer word
pub(crate) const MIN_PART_CHARS: usize = 2;

const NUMERALS: &[&str] = &[
    "반", "한", "두", "세", "네", "다섯", "여섯", "일곱", "여덟", "아홉", "열",
];

const COUNTERS: &[&str] = &[
    "개", "컵", "큰술", "작은술", "스푼", "줌", "쪽", "알", "장", "모", "봉", "봉지", "톨", "뿌리",
    "마리", "조각", "꼬집", "대", "단", "통", "송이", "토막", "공기",
];

/// Final syllables of conjugated verbs and adjectives (다진, 삶은, 볶고 ...)
const PREDICATE_ENDINGS: &[&str] = &[
    "다", "고", "서", "며", "면", "게", "진", "친", "른", "운", "된", "할", "썬", "린", "은", "는",
    "한", "인",
];

/// Remove one trailing particle from `word`.
///
/// A known noun is returned unchanged. Otherwise the particle is only removed
/// when what remains is a known noun or at least two syllables long, which
/// keeps words like `오이` or `사과` from being cut down to one syllable.
fn strip_particle<'a>(word: &'a str, lexicon: &NounLexicon) -> &'a str {
    if lexicon.contains(word) {
        return word;
    }

    for particle in PARTICLES {
        if let Some(stem) = word.strip_suffix(particle) {
            if stem.is_empty() {
                continue;
            }
            if lexicon.contains(stem) || stem.chars().count() >= 2 {
                return stem;
            }
        }
    }

    word
}

fn has_predicate_ending(word: &str) -> bool {
    PREDICATE_ENDINGS.iter().any(|ending| word.ends_with(ending))
}

/// Words made of a native numeral and a counter (반개, 한줌, 두쪽)
fn is_quantity(word: &str) -> bool {
    NUMERALS.iter().any(|numeral| {
        word.strip_prefix(numeral)
            .is_some_and(|rest| COUNTERS.contains(&rest))
    })
}

/// Whether a lexicon entry of at least [`MIN_PART_CHARS`] occurs in `chars`
fn contains_entry(chars: &[char], lexicon: &NounLexicon) -> bool {
    (0..chars.len()).any(|start| {
        let rest = &chars[start..];
        lexicon.longest_prefix(rest, MIN_PART_CHARS).is_some()
    })
}

/// How one whitespace-separated word relates to the lexicon.
///
/// Every analyzer classifies words the same way and only differs in how it
/// segments [`WordKind::Mixed`] stems.
#[derive(Debug, PartialEq)]
pub(crate) enum WordKind<'a> {
    /// The stem is a lexicon entry
    Known(&'a str),
    /// No entry occurs in the stem, which still reads as a noun
    Unknown(&'a str),
    /// Entries occur inside a longer stem (다진마늘, 조선부추)
    Mixed(Vec<char>),
    /// A predicate, a quantity or a lone unknown syllable
    Rejected,
}

pub(crate) fn classify<'a>(word: &'a str, lexicon: &NounLexicon) -> WordKind<'a> {
    let stem = strip_particle(word, lexicon);
    if lexicon.contains(stem) {
        return WordKind::Known(stem);
    }
    if has_predicate_ending(stem) {
        return WordKind::Rejected;
    }

    let chars: Vec<char> = stem.chars().collect();
    if contains_entry(&chars, lexicon) {
        WordKind::Mixed(chars)
    } else if chars.len() >= MIN_PART_CHARS && !is_quantity(stem) {
        WordKind::Unknown(stem)
    } else {
        WordKind::Rejected
    }
}

#[derive(Debug, Clone, Copy)]
struct Step {
    uncovered: usize,
    parts: usize,
    start: usize,
    known: bool,
}

/// Lexicon entries covering as much of `chars` as possible.
///
/// Minimizes the number of uncovered syllables first, then the number of
/// entries used. Entries shorter than [`MIN_PART_CHARS`] are not used.
pub(crate) fn cover(chars: &[char], lexicon: &NounLexicon) -> Vec<String> {
    let n = chars.len();
    let mut best: Vec<Step> = Vec::with_capacity(n + 1);
    best.push(Step {
        uncovered: 0,
        parts: 0,
        start: 0,
        known: false,
    });

    for end in 1..=n {
        let previous = best[end - 1];
        let mut current = Step {
            uncovered: previous.uncovered + 1,
            parts: previous.parts,
            start: end - 1,
            known: false,
        };

        if end >= MIN_PART_CHARS {
            let min_start = end.saturating_sub(lexicon.max_chars());
            for start in min_start..=end - MIN_PART_CHARS {
                let piece: String = chars[start..end].iter().collect();
                if !lexicon.contains(&piece) {
                    continue;
                }
                let from = best[start];
                if (from.uncovered, from.parts + 1) < (current.uncovered, current.parts) {
                    current = Step {
                        uncovered: from.uncovered,
                        parts: from.parts + 1,
                        start,
                        known: true,
                    };
                }
            }
        }

        best.push(current);
    }

    let mut pieces = Vec::new();
    let mut end = n;
    while end > 0 {
        let step = best[end];
        if step.known {
            pieces.push(chars[step.start..end].iter().collect());
        }
        end = step.start;
    }
    pieces.reverse();
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> NounLexicon {
        NounLexicon::from_words(["오이", "사과", "두부", "감자", "전분", "감자전분", "물", "새우"])
    }

    #[test]
    fn test_strip_particle() {
        let lexicon = lexicon();
        assert_eq!(strip_particle("두부는", &lexicon), "두부");
        assert_eq!(strip_particle("감자를", &lexicon), "감자");
        assert_eq!(strip_particle("감자전분으로", &lexicon), "감자전분");
        assert_eq!(strip_particle("물을", &lexicon), "물");
        // Known nouns that happen to end like a particle stay whole
        assert_eq!(strip_particle("오이", &lexicon), "오이");
        assert_eq!(strip_particle("사과", &lexicon), "사과");
        // One-syllable remainder of an unknown word is not split
        assert_eq!(strip_particle("삶은", &lexicon), "삶은");
    }

    #[test]
    fn test_has_predicate_ending() {
        assert!(has_predicate_ending("다진"));
        assert!(has_predicate_ending("삶은"));
        assert!(has_predicate_ending("볶고"));
        assert!(!has_predicate_ending("양파"));
        assert!(!has_predicate_ending("반개"));
    }

    #[test]
    fn test_is_quantity() {
        assert!(is_quantity("반개"));
        assert!(is_quantity("한줌"));
        assert!(is_quantity("두쪽"));
        assert!(!is_quantity("반찬"));
        assert!(!is_quantity("한우"));
    }

    #[test]
    fn test_classify() {
        let lexicon = lexicon();
        assert_eq!(classify("두부는", &lexicon), WordKind::Known("두부"));
        assert_eq!(classify("청국장을", &lexicon), WordKind::Unknown("청국장"));
        assert_eq!(
            classify("조선감자", &lexicon),
            WordKind::Mixed("조선감자".chars().collect())
        );
        assert_eq!(classify("다진", &lexicon), WordKind::Rejected);
        assert_eq!(classify("반개", &lexicon), WordKind::Rejected);
        // Single-syllable entries do not make a word mixed
        assert_eq!(classify("물엿", &lexicon), WordKind::Unknown("물엿"));
        assert_eq!(classify("찜", &lexicon), WordKind::Rejected);
    }

    #[test]
    fn test_cover() {
        let lexicon = lexicon();
        let chars = |word: &str| word.chars().collect::<Vec<_>>();
        assert_eq!(cover(&chars("새우두부찜"), &lexicon), vec!["새우", "두부"]);
        // Fewest parts wins over splitting a known compound
        assert_eq!(cover(&chars("햇감자전분"), &lexicon), vec!["감자전분"]);
        assert_eq!(cover(&chars("다진감자"), &lexicon), vec!["감자"]);
        assert!(cover(&chars("청국장"), &lexicon).is_empty());
        assert!(cover(&[], &lexicon).is_empty());
    }
}
