use flashy_analysis::*;
use rstest::rstest;

#[rstest]
#[case("./data/bounce.log", Some(123.0))]
#[case("./data/no_bounce.log", None)]
fn bounce_time(#[case] path: &str, #[case] expected: Option<f64>) {
    assert_eq!(get_bounce_time(path).unwrap(), expected);
}

#[test]
fn bounce_time_errors() {
    assert!(matches!(
        get_bounce_time("./data/bad_bounce.log"),
        Err(Error::InvalidBounceTime(_))
    ));
    assert!(matches!(
        get_bounce_time("./data/missing.log"),
        Err(Error::IOError(_))
    ));
}

#[rstest]
#[case(1.0, 0.0, 1.0, 0.0)]
#[case(1.0, 2.0, 0.0, 0.0)]
#[case(0.5, 1.0, 3.0, 4.0 * std::f64::consts::PI)]
fn single_shell(#[case] r: f64, #[case] dr: f64, #[case] dens: f64, #[case] expected: f64) {
    assert!((shell_mass(r, dr, dens) - expected).abs() < 1e-12);
}

#[test]
fn shell_masses_sum_to_sphere() {
    // ten shells of width 0.1 filling the unit sphere
    let r: Vec<f64> = (0..10).map(|i| 0.05 + 0.1 * i as f64).collect();
    let dr = vec![0.1; 10];
    let dens = vec![2.0; 10];

    let mass = calculate_shell_mass(&r, &dr, &dens).unwrap();
    assert_eq!(mass.len(), 10);

    let total: f64 = mass.iter().sum();
    let sphere = 4.0 / 3.0 * std::f64::consts::PI * 2.0;
    assert!((total - sphere).abs() < 1e-12);
}

#[test]
fn shell_mass_lengths() {
    assert!(matches!(
        calculate_shell_mass(&[1.0, 2.0], &[0.1, 0.1], &[1.0]),
        Err(Error::UnexpectedLength {
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn shock_staircase() {
    let time = [0.0, 1.0, 2.0, 3.0, 4.0];
    let radius = [5.0, 5.0, 7.0, 7.0, 7.0];

    let (t, r) = deduplicate_shock(&time, &radius).unwrap();
    assert_eq!(t, [0.0, 1.0, 4.0]);
    assert_eq!(r, [0.0, 5.0, 7.0]);

    let shock = calculate_shock(&time, &radius).unwrap();
    assert_eq!(shock.time.len(), SHOCK_SAMPLES);
    assert_eq!(shock.radius.len(), SHOCK_SAMPLES);
    assert_eq!(shock.velocity.len(), SHOCK_SAMPLES);

    assert_eq!(shock.time[0], 0.0);
    assert_eq!(shock.time[SHOCK_SAMPLES - 1], 4.0);
    assert_eq!(shock.radius[0], 0.0);
    assert!((shock.radius[SHOCK_SAMPLES - 1] - 7.0).abs() < 1e-12);

    assert!(shock.velocity.iter().all(|v| v.is_finite()));
    assert!((shock.velocity[0] - 5.0).abs() < 1e-9);
    // flat between the last two smoothed points at 2/3 per unit time
    assert!((shock.velocity[SHOCK_SAMPLES - 1] - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn shock_keeps_last_time_of_each_step() {
    let time = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
    let radius = [0.0, 0.0, 1.0, 1.0, 1.0, 2.0];

    let (t, r) = deduplicate_shock(&time, &radius).unwrap();
    assert_eq!(t, [0.0, 0.2, 0.5, 0.6]);
    assert_eq!(r, [0.0, 0.0, 1.0, 2.0]);
}

#[test]
fn shock_sample_count() {
    let shock = calculate_shock_with(&[0.0, 2.0], &[1.0, 3.0], 5).unwrap();
    assert_eq!(shock.time, [0.0, 0.5, 1.0, 1.5, 2.0]);
    assert_eq!(shock.radius.len(), 5);
}

#[rstest]
#[case(&[], &[])]
#[case(&[0.0, 1.0], &[1.0])]
#[case(&[1.0, 1.0], &[1.0, 2.0])]
#[case(&[0.0, f64::NAN], &[1.0, 2.0])]
#[case(&[0.0, 1.0], &[1.0, f64::INFINITY])]
fn shock_rejects_bad_input(#[case] time: &[f64], #[case] radius: &[f64]) {
    assert!(calculate_shock(time, radius).is_err());
}

#[test]
fn shock_zero_width_range() {
    assert!(matches!(
        calculate_shock(&[3.0, 3.0], &[1.0, 2.0]),
        Err(Error::DegenerateTimeRange(t)) if t == 3.0
    ));
}
