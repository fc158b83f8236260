// tests/health_classification.rs

use mdwatch::health::{HealthStatus, HealthThresholds};

fn defaults() -> HealthThresholds {
    HealthThresholds::default()
}

#[test]
fn representative_temperatures() {
    let t = defaults();

    assert_eq!(t.classify(600.0), HealthStatus::AbnormalHigh);
    assert_eq!(t.classify(30.0), HealthStatus::Low);
    assert_eq!(t.classify(200.0), HealthStatus::Normal);
    assert_eq!(t.classify(42.0), HealthStatus::Borderline);
}

#[test]
fn boundaries_are_deterministic() {
    let t = defaults();

    // low_below is exclusive: exactly 40.0 is no longer "low".
    assert_eq!(t.classify(40.0), HealthStatus::Borderline);
    assert_eq!(t.classify(39.999), HealthStatus::Low);

    // The normal band is inclusive on both ends.
    assert_eq!(t.classify(45.0), HealthStatus::Normal);
    assert_eq!(t.classify(44.999), HealthStatus::Borderline);
    assert_eq!(t.classify(350.0), HealthStatus::Normal);
    assert_eq!(t.classify(350.001), HealthStatus::Borderline);

    // abnormal_above is exclusive: exactly 500.0 is still borderline.
    assert_eq!(t.classify(500.0), HealthStatus::Borderline);
    assert_eq!(t.classify(500.001), HealthStatus::AbnormalHigh);
}

#[test]
fn nan_is_borderline() {
    assert_eq!(defaults().classify(f64::NAN), HealthStatus::Borderline);
}

#[test]
fn custom_thresholds_shift_the_bands() {
    let t = HealthThresholds {
        low_below: 10.0,
        normal_min: 20.0,
        normal_max: 30.0,
        abnormal_above: 40.0,
    };

    assert_eq!(t.classify(5.0), HealthStatus::Low);
    assert_eq!(t.classify(15.0), HealthStatus::Borderline);
    assert_eq!(t.classify(25.0), HealthStatus::Normal);
    assert_eq!(t.classify(35.0), HealthStatus::Borderline);
    assert_eq!(t.classify(45.0), HealthStatus::AbnormalHigh);
}

#[test]
fn display_tags_match_status_lines() {
    assert_eq!(HealthStatus::Normal.to_string(), "normal");
    assert_eq!(HealthStatus::Low.to_string(), "low");
    assert_eq!(HealthStatus::Borderline.to_string(), "borderline");
    assert_eq!(HealthStatus::AbnormalHigh.to_string(), "abnormal-high");
}
