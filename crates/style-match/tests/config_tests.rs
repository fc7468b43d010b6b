use std::path::PathBuf;

use chrono_tz::Tz;
use style_match::config::Configuration;

#[test]
fn empty_config_uses_defaults() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.profile_path, PathBuf::from("style-profile.json"));
    assert_eq!(cfg.history_limit, 10);
    assert_eq!(cfg.points_per_analysis, 10);
    assert_eq!(cfg.timezone, Tz::UTC);
    assert_eq!(cfg.demo_seed, None);
    assert_eq!(cfg.sampler.stride, 3);
    assert_eq!(cfg.sampler.radius_divisor, 8);
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
profile-path: "/var/lib/style-match/profile.json"
history-limit: 25
points-per-analysis: 5
timezone: "Europe/Paris"
demo-seed: 7
loader-max-concurrent-decodes: 2
sampler:
  stride: 2
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.profile_path, PathBuf::from("/var/lib/style-match/profile.json"));
    assert_eq!(cfg.timezone, Tz::Europe__Paris);
    assert_eq!(cfg.demo_seed, Some(7));
    assert_eq!(cfg.sampler.stride, 2);
    assert_eq!(cfg.sampler.radius_divisor, 8);
    let policy = cfg.history_policy();
    assert_eq!(policy.limit, 25);
    assert_eq!(policy.points_per_analysis, 5);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = serde_yaml::from_str::<Configuration>("photo-library-path: /photos\n").unwrap_err();
    assert!(err.to_string().contains("unknown field"));

    let err = serde_yaml::from_str::<Configuration>("sampler:\n  step: 4\n").unwrap_err();
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn invalid_timezone_is_rejected() {
    assert!(serde_yaml::from_str::<Configuration>("timezone: Mars/Olympus\n").is_err());
}

#[test]
fn zero_values_fail_validation() {
    for yaml in [
        "history-limit: 0\n",
        "loader-max-concurrent-decodes: 0\n",
        "sampler:\n  stride: 0\n",
        "sampler:\n  radius-divisor: 0\n",
        "profile-path: \"\"\n",
    ] {
        let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.validated().is_err(), "{yaml:?} should fail validation");
    }
}

#[test]
fn load_reads_file_or_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.yaml");
    std::fs::write(&path, "history-limit: 3\n").unwrap();
    assert_eq!(Configuration::load(Some(&path)).unwrap().history_limit, 3);
    assert_eq!(Configuration::load(None).unwrap().history_limit, 10);

    let missing = tmp.path().join("missing.yaml");
    let err = Configuration::load(Some(&missing)).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load configuration"));
}
