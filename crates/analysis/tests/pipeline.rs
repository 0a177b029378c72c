use flashy_analysis::{calculate_shell_mass, calculate_shock, deduplicate_shock};
use flashy_dat::{ColumnKind, Dat};
use flashy_labels::{plot_label, should_plot_log};
use flashy_profile::{write_profile, Profile};
use rstest::{fixture, rstest};

#[fixture]
fn shock_dat() -> Dat {
    Dat::from_file("./data/shock.dat").unwrap()
}

#[rstest]
fn shock_from_restarted_run(shock_dat: Dat) {
    assert_eq!(shock_dat.num_runs().unwrap(), 2);

    let time = shock_dat.get("time").unwrap();
    let radius = shock_dat.get("max_shock_radius").unwrap();
    assert_eq!(time.kind(), ColumnKind::Float);
    assert_eq!(time.len(), 9);

    let time = time.to_f64().unwrap();
    let radius = radius.to_f64().unwrap();

    // staircase 0,0,1,1,3 | 3,6,6,8 collapses to the last time of each step
    let (_, smooth) = deduplicate_shock(&time, &radius).unwrap();
    assert_eq!(smooth, [0.0, 0.0, 1.0e6, 3.0e6, 6.0e6, 8.0e6]);

    let shock = calculate_shock(&time, &radius).unwrap();
    assert_eq!(shock.time[0], time[0]);
    assert_eq!(shock.time.last(), time.last());
    assert!(shock.velocity.iter().all(|v| v.is_finite() && *v >= 0.0));
}

#[rstest]
fn labels_for_dat_columns(shock_dat: Dat) {
    let names = shock_dat.column_names().unwrap();
    assert_eq!(names, ["time", "max_shock_radius", "mass"]);

    assert_eq!(plot_label(&names[1]), r"$r_\mathrm{sh}$ [$\mathrm{cm}$]");
    assert!(should_plot_log(&names[1]));
    assert!(!should_plot_log(&names[0]));
}

#[test]
fn shell_mass_through_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shells.flash");

    let r = [0.5, 1.5, 2.5];
    let dens = vec![1.0, 1.0, 1.0];
    write_profile(&r, &[("dens", &dens)], Some("uniform"), &path).unwrap();

    let profile = Profile::from_file(&path).unwrap();
    let r = profile.r().unwrap();
    let dr = vec![1.0; r.len()];
    let mass = calculate_shell_mass(r, &dr, profile.get("dens").unwrap()).unwrap();

    let total: f64 = mass.iter().sum();
    let sphere = 4.0 / 3.0 * std::f64::consts::PI * 27.0;
    assert!((total - sphere).abs() < 1e-9);
}
