//! Property tests for the classifier's structural guarantees

use proptest::prelude::*;

use vitn_core::InverseNormalizer;

/// Vocabulary drawn from every sub-grammar plus plain words, so fuzzed
/// sequences hit overlapping candidate spans.
const VOCABULARY: &[&str] = &[
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
    "mươi", "mười", "trăm", "nghìn", "triệu", "tỷ", "linh", "lẻ", "mốt", "tư",
    "lăm", "phẩy", "phần", "thứ", "giờ", "phút", "giây", "tháng", "chấm",
    "đồng", "đô", "la", "ki", "lô", "mét", "giêng", "chạp", "rưỡi", "âm",
    "sáng", "chiều", "tối", "ti", "vi", "a", "còng", "và", "của", "giá",
    "vàng", "lên", "xuống", ",", ".", "(", ")",
];

fn word_sequences() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..12)
        .prop_map(|words| words.join(" "))
}

proptest! {
    /// Total coverage: every fuzzed input classifies into spans that
    /// partition its word units exactly.
    #[test]
    fn prop_total_coverage(text in word_sequences()) {
        let normalizer = InverseNormalizer::new().unwrap();
        let sentence = normalizer.classify(&text);
        prop_assert!(sentence.is_total_covering());
    }

    /// Classification never fails and always verbalizes.
    #[test]
    fn prop_always_produces_output(text in word_sequences()) {
        let normalizer = InverseNormalizer::new().unwrap();
        prop_assert!(normalizer.inverse_normalize(&text).is_ok());
    }

    /// Determinism: repeated classification of the same input is
    /// byte-identical.
    #[test]
    fn prop_deterministic(text in word_sequences()) {
        let normalizer = InverseNormalizer::new().unwrap();
        let first = normalizer.inverse_normalize(&text).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(normalizer.inverse_normalize(&text).unwrap(), first.clone());
        }
    }

    /// Any single word outside the grammars round-trips unchanged.
    #[test]
    fn prop_unrecognized_word_passthrough(word in "[bcdghklmnpqrstvx][aeiou]{1,2}ng?") {
        let normalizer = InverseNormalizer::new().unwrap();
        let sentence = normalizer.classify(&word);
        if sentence.spans.len() == 1
            && sentence.spans[0].token.kind() == "word"
        {
            prop_assert_eq!(normalizer.inverse_normalize(&word).unwrap(), word);
        }
    }
}
