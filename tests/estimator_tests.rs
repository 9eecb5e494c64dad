use grflex::estimator::{Config, Estimator, RoofInput, Season};

const AREAS: [f64; 9] = [0.01, 1.0, 7.5, 12.0, 40.0, 171.0, 180.0, 500.0, 12_345.6];

#[test]
fn area_mode_summer_scenario() {
    let estimator = Estimator::default();
    let estimate = estimator.estimate(&RoofInput::Area("40".into()), Season::Summer);
    assert_eq!(estimate.area, 40.0);
    assert_eq!(estimate.required_mass, 80.0);
    assert_eq!(estimate.tins, 6);
    assert_eq!(estimate.bottles, 6);
    assert!((estimate.matting_area - 42.0).abs() < 1e-9);
    assert_eq!(estimate.long_rolls, 0);
    assert_eq!(estimate.short_rolls, 2);
    assert_eq!(
        estimator.matting_recommendation(&estimate),
        "Recommended: 2 × (1m × 25m)"
    );
}

#[test]
fn dimensions_mode_winter_scenario() {
    let estimator = Estimator::default();
    let input = RoofInput::Dimensions {
        length: "8".into(),
        width: "5".into(),
    };
    let estimate = estimator.estimate(&input, Season::Winter);
    assert_eq!(estimate.area, 40.0);
    assert_eq!(estimate.tins, 6);
    assert_eq!(estimate.bottles, 12);
    assert_eq!(estimate.long_rolls, 0);
    assert_eq!(estimate.short_rolls, 2);
}

#[test]
fn comma_decimal_separator() {
    let estimator = Estimator::default();
    let input = RoofInput::Dimensions {
        length: "8,0".into(),
        width: "5,0".into(),
    };
    assert_eq!(estimator.estimate(&input, Season::Summer).tins, 6);
}

#[test]
fn tins_round_up_and_never_zero() {
    let estimator = Estimator::default();
    for area in AREAS {
        let estimate = estimator.estimate_area(area, Season::Summer);
        let expected = f64::ceil(area * 2.0 / 15.0) as u64;
        assert_eq!(estimate.tins, expected, "area {area}");
        assert!(estimate.tins >= 1, "area {area}");
    }
}

#[test]
fn winter_doubles_bottles() {
    let estimator = Estimator::default();
    for area in AREAS {
        let summer = estimator.estimate_area(area, Season::Summer);
        let winter = estimator.estimate_area(area, Season::Winter);
        assert_eq!(winter.tins, summer.tins);
        assert_eq!(winter.bottles, summer.bottles * 2, "area {area}");
    }
}

#[test]
fn rolls_never_under_cover() {
    let estimator = Estimator::default();
    for area in AREAS {
        let estimate = estimator.estimate_area(area, Season::Summer);
        let matting = area * 1.05;
        let covered = estimate.long_rolls as f64 * 180.0 + estimate.short_rolls as f64 * 25.0;
        assert!(covered >= matting, "area {area}: {covered} < {matting}");
        assert_eq!(estimate.long_rolls, f64::floor(matting / 180.0) as u64);
        assert!(estimate.rolls() >= 1);
    }
}

#[test]
fn long_and_short_rolls_combined() {
    let estimator = Estimator::default();
    let estimate = estimator.estimate_area(200.0, Season::Summer);
    assert_eq!(estimate.long_rolls, 1);
    assert_eq!(estimate.short_rolls, 2);
    assert_eq!(
        estimator.matting_recommendation(&estimate),
        "Recommended: 1 × (1m × 180m) + 2 × (1m × 25m)"
    );
}

#[test]
fn invalid_input_gives_empty_estimate() {
    let estimator = Estimator::default();
    let inputs = [
        RoofInput::Area("".into()),
        RoofInput::Area("abc".into()),
        RoofInput::Area("-40".into()),
        RoofInput::Area("0".into()),
        RoofInput::Dimensions {
            length: "8".into(),
            width: "".into(),
        },
    ];
    for input in inputs {
        let estimate = estimator.estimate(&input, Season::Winter);
        assert!(estimate.is_empty(), "{input:?}");
        assert_eq!(estimate.tins, 0);
        assert_eq!(estimate.bottles, 0);
        assert_eq!(estimate.long_rolls, 0);
        assert_eq!(estimate.short_rolls, 0);
        assert_eq!(estimator.matting_recommendation(&estimate), "Recommended: —");
    }
}

#[test]
fn injected_config_is_used() {
    let estimator = Estimator::new(Config {
        tin_size: 10.0,
        activator_per_tin_winter: 3,
        ..Default::default()
    });
    let estimate = estimator.estimate_area(40.0, Season::Winter);
    assert_eq!(estimate.tins, 8);
    assert_eq!(estimate.bottles, 24);
}

#[test]
fn tiny_roof_still_gets_a_roll() {
    let estimator = Estimator::new(Config {
        short_roll_area: f64::INFINITY,
        ..Default::default()
    });
    let estimate = estimator.estimate_area(1.0, Season::Summer);
    assert_eq!(estimate.long_rolls, 0);
    assert_eq!(estimate.short_rolls, 1);
}

#[test]
fn large_areas_do_not_overflow() {
    let estimator = Estimator::default();
    let estimate = estimator.estimate(&RoofInput::Area("30000000000".into()), Season::Winter);
    assert_eq!(estimate.tins, 4_000_000_000);
    assert_eq!(estimate.bottles, 8_000_000_000);

    let estimate = estimator.estimate(&RoofInput::Area("1e12".into()), Season::Summer);
    assert_eq!(estimate.tins, f64::ceil(1e12 * 2.0 / 15.0) as u64);
    assert!(estimate.rolls() > u64::from(u32::MAX));
}

#[test]
fn unrepresentable_areas_saturate() {
    let estimator = Estimator::default();
    for area in [1e30, 1e300, f64::MAX] {
        let estimate = estimator.estimate_area(area, Season::Winter);
        assert_eq!(estimate.bottles, u64::MAX, "area {area}");
        assert_eq!(estimate.rolls(), u64::MAX, "area {area}");
    }
}
