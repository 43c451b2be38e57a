use faktur_server::terbilang::{terbilang, TerbilangError};

#[test]
fn test_zero() {
    assert_eq!(terbilang(0.0).unwrap(), "Nol rupiah");
}

#[test]
fn test_fractions_truncate_toward_zero() {
    assert_eq!(terbilang(0.9).unwrap(), "Nol rupiah");
    assert_eq!(terbilang(-0.5).unwrap(), "Nol rupiah");
    assert_eq!(terbilang(1500.75).unwrap(), "Seribu lima ratus rupiah");
}

#[test]
fn test_single_digits() {
    assert_eq!(terbilang(1.0).unwrap(), "Satu rupiah");
    assert_eq!(terbilang(9.0).unwrap(), "Sembilan rupiah");
}

#[test]
fn test_irregular_teens() {
    assert_eq!(terbilang(10.0).unwrap(), "Sepuluh rupiah");
    assert_eq!(terbilang(11.0).unwrap(), "Sebelas rupiah");
    assert_eq!(terbilang(17.0).unwrap(), "Tujuh belas rupiah");
}

#[test]
fn test_tens() {
    assert_eq!(terbilang(25.0).unwrap(), "Dua puluh lima rupiah");
    assert_eq!(terbilang(90.0).unwrap(), "Sembilan puluh rupiah");
}

#[test]
fn test_irregular_hundred() {
    assert_eq!(terbilang(100.0).unwrap(), "Seratus rupiah");
    assert_eq!(terbilang(101.0).unwrap(), "Seratus satu rupiah");
    assert_eq!(terbilang(250.0).unwrap(), "Dua ratus lima puluh rupiah");
}

#[test]
fn test_irregular_thousand() {
    assert_eq!(terbilang(1000.0).unwrap(), "Seribu rupiah");
    assert_eq!(terbilang(1001.0).unwrap(), "Seribu satu rupiah");
    assert_eq!(terbilang(1500.0).unwrap(), "Seribu lima ratus rupiah");
    // Regular composition everywhere else in the thousands tier.
    assert_eq!(terbilang(2000.0).unwrap(), "Dua ribu rupiah");
    assert_eq!(terbilang(15000.0).unwrap(), "Lima belas ribu rupiah");
    assert_eq!(terbilang(100_000.0).unwrap(), "Seratus ribu rupiah");
}

#[test]
fn test_multi_tier_composition() {
    assert_eq!(
        terbilang(1_500_000.0).unwrap(),
        "Satu juta lima ratus ribu rupiah"
    );
    assert_eq!(
        terbilang(1_500_000_000.0).unwrap(),
        "Satu miliar lima ratus juta rupiah"
    );
    assert_eq!(terbilang(1_000_000_000_000.0).unwrap(), "Satu triliun rupiah");
}

#[test]
fn test_zero_valued_middle_groups_are_skipped() {
    assert_eq!(terbilang(1_000_001.0).unwrap(), "Satu juta satu rupiah");
    assert_eq!(
        terbilang(2_000_000_003.0).unwrap(),
        "Dua miliar tiga rupiah"
    );
}

#[test]
fn test_all_scale_words_in_order() {
    assert_eq!(
        terbilang(999_999_999_999.0).unwrap(),
        "Sembilan ratus sembilan puluh sembilan miliar \
         sembilan ratus sembilan puluh sembilan juta \
         sembilan ratus sembilan puluh sembilan ribu \
         sembilan ratus sembilan puluh sembilan rupiah"
    );
}

#[test]
fn test_supported_maximum() {
    let words = terbilang(999_999_999_999_999.0).unwrap();
    assert!(words.starts_with("Sembilan ratus sembilan puluh sembilan triliun"));
    assert!(words.ends_with("sembilan ratus sembilan puluh sembilan rupiah"));
}

#[test]
fn test_negative_prefixes_minus() {
    assert_eq!(terbilang(-5.0).unwrap(), "Minus Lima rupiah");
    for n in [1.0, 11.0, 100.0, 1000.0, 1_500_000.0, 999_999_999_999.0] {
        let positive = terbilang(n).unwrap();
        assert_eq!(terbilang(-n).unwrap(), format!("Minus {positive}"));
    }
}

#[test]
fn test_output_shape() {
    let samples = [
        1.0,
        11.0,
        25.0,
        100.0,
        101.0,
        1000.0,
        1001.0,
        10_000.0,
        1_500_000.0,
        1_000_000_001.0,
        999_999_999_999_999.0,
    ];
    for amount in samples {
        let words = terbilang(amount).unwrap();
        assert!(!words.contains("  "), "double space in '{words}'");
        assert!(!words.starts_with(' ') && !words.ends_with(' '));
        assert!(words.chars().next().unwrap().is_uppercase());
        assert!(words.ends_with(" rupiah"));
    }
}

#[test]
fn test_determinism() {
    for amount in [0.0, -42.0, 1_234_567.89, 999_999_999_999_999.0] {
        assert_eq!(terbilang(amount), terbilang(amount));
    }
}

#[test]
fn test_out_of_range() {
    assert_eq!(
        terbilang(1e15),
        Err(TerbilangError::OutOfRange(1e15))
    );
    assert!(terbilang(-1e15).is_err());
    assert!(terbilang(1e18).is_err());
    assert!(terbilang(f64::INFINITY).is_err());
    assert!(terbilang(f64::NEG_INFINITY).is_err());
    assert!(terbilang(f64::NAN).is_err());
    // The last in-range value still converts.
    assert!(terbilang(999_999_999_999_999.0).is_ok());
}
