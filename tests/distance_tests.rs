use grflex::shared::{Coordinate, Distance};

#[test]
fn distance_test() {
    let shrewsbury = Coordinate::from((52.7073, -2.7553));
    let leeds = Coordinate::from((53.8008, -1.5491));
    let d = shrewsbury.distance(&leeds);
    assert!((d.as_miles() - 90.0).abs() < 3.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_miles(62.1371);
    let dist_b = Distance::from_kilometers(100.0);
    assert!((dist_a.as_kilometers() - dist_b.as_kilometers()).abs() < 1e-9);
}

#[test]
fn distance_display_test() {
    assert_eq!(Distance::from_miles(12.345).to_string(), "12.3 mi");
    assert_eq!(Distance::default().to_string(), "0.0 mi");
}

#[test]
fn distance_serializes_as_miles() {
    let json = serde_json::to_string(&Distance::from_kilometers(100.0)).unwrap();
    let miles: f64 = json.parse().unwrap();
    assert!((miles - 62.1371).abs() < 1e-9);
}
