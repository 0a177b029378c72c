use flashy_profile::{write_profile, Error, Profile, ProfileWriter};
use rstest::{fixture, rstest};

#[fixture]
fn progenitor() -> Profile {
    Profile::from_file("./data/progenitor.flash").unwrap()
}

#[rstest]
fn header(progenitor: Profile) {
    assert_eq!(
        progenitor.comment().unwrap(),
        Some("# s12 progenitor, trimmed to four zones")
    );
    assert_eq!(progenitor.variables().unwrap(), ["r", "dens", "temp", "ye"]);
    assert_eq!(progenitor.num_zones().unwrap(), 4);
}

#[rstest]
fn values_skip_blank_and_comment_lines(progenitor: Profile) {
    assert_eq!(progenitor.r().unwrap(), [1.0e5, 2.0e5, 3.0e5, 4.0e5]);
    assert_eq!(
        progenitor.get("dens").unwrap(),
        [1.0e10, 5.0e9, 1.0e9, 2.5e8]
    );
    assert_eq!(progenitor.get("ye").unwrap()[3], 0.5);
}

#[rstest]
fn unknown_variable(progenitor: Profile) {
    assert!(matches!(
        progenitor.get("pres"),
        Err(Error::UnknownVariable(v)) if v == "pres"
    ));
}

#[test]
fn without_comment() {
    let profile = Profile::from_file("./data/no_comment.flash").unwrap();
    assert_eq!(profile.comment().unwrap(), None);
    // only the first word of a name line counts
    assert_eq!(profile.variables().unwrap(), ["r", "dens", "velx"]);
    assert_eq!(profile.get("velx").unwrap(), [-1.0e7, -2.0e7]);
}

#[rstest]
#[case("./data/bad_value.flash")]
#[case("./data/short_row.flash")]
#[case("./data/bad_count.flash")]
#[case("./data/missing_names.flash")]
#[case("./data/overflow_count.flash")]
#[case("./data/huge_count.flash")]
#[case("./data/does_not_exist.flash")]
fn malformed_files(#[case] path: &str) {
    assert!(Profile::from_file(path).is_err());
}

#[test]
fn error_details() {
    let err = Profile::from_file("./data/bad_value.flash").unwrap_err();
    assert!(matches!(err, Error::InvalidValue { line: 5, .. }));

    let err = Profile::from_file("./data/short_row.flash").unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedLength {
            line: 6,
            expected: 3,
            found: 2
        }
    ));

    let err = Profile::from_file("./data/missing_names.flash").unwrap_err();
    assert!(matches!(
        err,
        Error::MissingVariableName {
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn untrusted_variable_counts() {
    let err = Profile::from_file("./data/overflow_count.flash").unwrap_err();
    assert!(matches!(err, Error::InvalidVariableCount(_)));

    // names run out long before the count does
    let err = Profile::from_file("./data/huge_count.flash").unwrap_err();
    assert!(matches!(
        err,
        Error::MissingVariableName {
            expected: 100000000000000,
            found: 3
        }
    ));
}

#[test]
fn fortran_values() {
    let profile = Profile::from_file("./data/fortran.flash").unwrap();
    assert_eq!(profile.r().unwrap(), [1.0e5, 2.0e5]);
    assert_eq!(profile.get("dens").unwrap(), [1.5e-100, 2.5e-100]);
    assert_eq!(profile.get("ye").unwrap(), [0.45, 0.5]);
}

#[test]
fn failed_read_unloads() {
    let mut profile = Profile::from_file("./data/progenitor.flash").unwrap();
    assert!(profile.read_file("./data/short_row.flash").is_err());
    assert!(!profile.is_loaded());
    assert!(matches!(profile.r(), Err(Error::NotLoaded)));
    assert_eq!(profile.to_string(), "Profile { unloaded }");
}

#[test]
fn write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.flash");

    let r = [1.0e5, 2.0e5, 3.0e5];
    let dens = vec![1.0e10, 0.1 + 0.2, 1.0e-300];
    let temp = vec![f64::MAX, 8.0e9, 5.0e9];
    write_profile(&r, &[("dens", &dens), ("temp", &temp)], Some("test"), &path).unwrap();

    let profile = Profile::from_file(&path).unwrap();
    assert_eq!(profile.comment().unwrap(), Some("# test"));
    assert_eq!(profile.variables().unwrap(), ["r", "dens", "temp"]);
    assert_eq!(profile.r().unwrap(), r);
    assert_eq!(profile.get("dens").unwrap(), dens);
    assert_eq!(profile.get("temp").unwrap(), temp);
}

#[test]
fn written_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.flash");

    let mut writer = ProfileWriter::new();
    writer.set_comment("small");
    writer.set_precision(2);
    writer.write(&[1.0, 2.0], &[("dens", [3.0, 4.0])], &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "# small\n\
         number of variables = 1\n\
         dens\n\
         1.00e+00 3.00e+00\n\
         2.00e+00 4.00e+00\n"
    );
}

#[test]
fn missing_comment_still_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bare.flash");
    write_profile(&[1.0], &[("dens", [2.0])], None, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# \nnumber of variables = 1\n"));

    let profile = Profile::from_file(&path).unwrap();
    assert_eq!(profile.comment().unwrap(), Some("#"));
    assert_eq!(profile.get("dens").unwrap(), [2.0]);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.flash");

    let result = write_profile(&[1.0, 2.0], &[("dens", vec![1.0])], None, &path);
    assert!(matches!(
        result,
        Err(Error::UnequalLength {
            expected: 2,
            found: 1,
            ..
        })
    ));
    assert!(!path.exists());
}

#[rstest]
fn profile_rewrite(progenitor: Profile) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.flash");
    progenitor.write(&path).unwrap();

    let copy = Profile::from_file(&path).unwrap();
    assert_eq!(copy.comment().unwrap(), progenitor.comment().unwrap());
    assert_eq!(copy.variables().unwrap(), progenitor.variables().unwrap());
    for name in progenitor.variables().unwrap() {
        assert_eq!(copy.get(name).unwrap(), progenitor.get(name).unwrap());
    }
}

#[rstest]
fn json_export(progenitor: Profile) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    progenitor.write_json(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["variables"][1], "dens");
    assert_eq!(json["values"][0][3], 4.0e5);
}

#[rstest]
fn display(progenitor: Profile) {
    let text = progenitor.to_string();
    assert!(text.contains("variables: 4"));
    assert!(text.contains("zones: 4"));
}
