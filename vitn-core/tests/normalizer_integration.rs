//! End-to-end tests for the classify -> verbalize pipeline

use vitn_core::{CaseMode, InverseNormalizer, Language, NormalizerConfig};

fn normalize(text: &str) -> String {
    let normalizer = InverseNormalizer::new().unwrap();
    normalizer.inverse_normalize(text).unwrap()
}

#[test]
fn test_tens_five_disambiguation() {
    assert_eq!(normalize("hai mươi năm"), "25");
    assert_eq!(normalize("tám mươi năm"), "85");
    assert_eq!(normalize("một trăm ba mươi năm"), "135");
}

#[test]
fn test_telephone_extraction() {
    assert_eq!(
        normalize("không chín một hai ba bốn năm sáu bảy tám"),
        "0912345678"
    );
}

#[test]
fn test_money_rendering() {
    assert_eq!(normalize("một trăm triệu đồng"), "100 triệu đồng");
}

#[test]
fn test_percentage_decimal_rendering() {
    assert_eq!(normalize("chín phẩy năm tám phần trăm"), "9.58%");
}

#[test]
fn test_date_rendering() {
    assert_eq!(
        normalize("ba mươi tháng tư năm một chín bảy năm"),
        "30/04/1975"
    );
}

#[test]
fn test_money_context_never_misread_as_telephone() {
    // the digit sequence could fire as a telephone number, but the money
    // covering uses a single lower-weight firing
    assert_eq!(normalize("năm bốn hai triệu đồng"), "542 triệu đồng");
    assert_eq!(
        normalize("tôi nhận số tiền là năm bốn hai triệu"),
        "tôi nhận số tiền là 542 triệu"
    );
}

#[test]
fn test_bare_digit_tail_is_telephone() {
    assert_eq!(
        normalize("đuôi số điện thoại của tôi là năm tám năm hai"),
        "đuôi số điện thoại của tôi là 5852"
    );
}

#[test]
fn test_passthrough_idempotence() {
    for word in ["xin", "chào", "hà", "nội", "đồng/lượng", "nđ-cp"] {
        assert_eq!(normalize(word), word);
    }
}

#[test]
fn test_deterministic_output_on_ambiguous_input() {
    let text = "hai mươi năm triệu đồng một lượng";
    let first = normalize(text);
    for _ in 0..20 {
        assert_eq!(normalize(text), first);
    }
}

#[test]
fn test_year_digit_run_resolves_by_weight_table() {
    // "năm" is itself a digit word, so five digit words in a row are a
    // single telephone firing; the fixed priority table resolves the
    // ambiguity the same way on every run
    assert_eq!(normalize("vào năm một chín chín chín"), "vào 51999");
}

#[test]
fn test_full_driver_sentence() {
    assert_eq!(
        normalize("tổng chi phí là một triệu hai trăm hai mươi hai nghìn đồng"),
        "tổng chi phí là 1222000 đồng"
    );
    assert_eq!(
        normalize("giá của nó là một triệu rưỡi"),
        "giá của nó là 1.5 triệu"
    );
    assert_eq!(
        normalize("chỉ hai mươi năm phần trăm dự báo giảm"),
        "chỉ 25% dự báo giảm"
    );
}

#[test]
fn test_date_range_with_punctuation() {
    assert_eq!(
        normalize("(từ ngày ba mươi tháng tư đến ngày bốn tháng năm)"),
        "(từ ngày 30/04 đến ngày 04/05)"
    );
}

#[test]
fn test_time_rendering() {
    assert_eq!(normalize("ba giờ chiều"), "3:00 chiều");
    assert_eq!(normalize("tám giờ mười lăm phút"), "8:15");
    assert_eq!(normalize("bảy giờ rưỡi tối"), "7:30 tối");
}

#[test]
fn test_ordinal_rendering() {
    assert_eq!(normalize("thứ nhất"), "thứ 1");
    assert_eq!(normalize("giải thứ hai mươi ba"), "giải thứ 23");
}

#[test]
fn test_fraction_rendering() {
    assert_eq!(normalize("chín phần mười"), "9/10");
}

#[test]
fn test_electronic_rendering() {
    assert_eq!(
        normalize("gửi về minh a còng gmail chấm com"),
        "gửi về minh@gmail.com"
    );
}

#[test]
fn test_whitelist_substitution() {
    assert_eq!(normalize("xem ti vi buổi tối"), "xem TV buổi tối");
}

#[test]
fn test_measure_negative() {
    assert_eq!(normalize("nhiệt độ xuống âm ba độ xê"), "nhiệt độ xuống -3°C");
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
}

#[test]
fn test_cased_mode_matches_case_insensitively() {
    let config = NormalizerConfig::builder()
        .language(Language::Vietnamese)
        .case_mode(CaseMode::Cased)
        .build();
    let normalizer = InverseNormalizer::with_config(config).unwrap();
    assert_eq!(
        normalizer.inverse_normalize("Hai mươi năm").unwrap(),
        "25"
    );
}

#[test]
fn test_disk_cache_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let config = NormalizerConfig::builder()
        .language(Language::Vietnamese)
        .case_mode(CaseMode::Lowercase)
        .cache_dir(dir.path())
        .overwrite_cache(true)
        .build();
    let built = InverseNormalizer::with_config(config).unwrap();
    assert_eq!(built.inverse_normalize("hai mươi năm").unwrap(), "25");
    assert!(dir.path().join("vi_lower_cased.json").exists());

    let config = NormalizerConfig::builder()
        .language(Language::Vietnamese)
        .case_mode(CaseMode::Lowercase)
        .cache_dir(dir.path())
        .build();
    let restored = InverseNormalizer::with_config(config).unwrap();
    assert_eq!(restored.inverse_normalize("hai mươi năm").unwrap(), "25");
}
