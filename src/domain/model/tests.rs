// Unit tests for domain models

use super::*;

#[test]
fn test_time_spec_parse_bare_seconds() {
    assert_eq!(TimeSpec::parse("90").unwrap().seconds, 90);
    assert_eq!(TimeSpec::parse("0").unwrap().seconds, 0);
    assert_eq!(TimeSpec::parse("  42 ").unwrap().seconds, 42);
}

#[test]
fn test_time_spec_parse_colon_form() {
    assert_eq!(TimeSpec::parse("1:15").unwrap().seconds, 75);
    assert_eq!(TimeSpec::parse("0:05").unwrap().seconds, 5);
    assert_eq!(TimeSpec::parse("12:00").unwrap().seconds, 720);
}

#[test]
fn test_time_spec_parse_minute_form() {
    assert_eq!(TimeSpec::parse("1m30s").unwrap().seconds, 90);
    assert_eq!(TimeSpec::parse("1m30").unwrap().seconds, 90);
    assert_eq!(TimeSpec::parse("2M05S").unwrap().seconds, 125);
    assert_eq!(TimeSpec::parse("90s").unwrap().seconds, 90);
}

#[test]
fn test_time_spec_parse_invalid() {
    assert!(TimeSpec::parse("abc").is_err());
    assert!(TimeSpec::parse("").is_err());
    assert!(TimeSpec::parse("   ").is_err());
    assert!(TimeSpec::parse("s").is_err());
    assert!(TimeSpec::parse("-10").is_err());
    assert!(TimeSpec::parse("1.5").is_err());
    assert!(TimeSpec::parse("1:2:3").is_err());
    assert!(TimeSpec::parse("1m").is_err());
    assert!(TimeSpec::parse(":30").is_err());
    assert!(TimeSpec::parse("1m30x").is_err());
}

#[test]
fn test_time_spec_parse_overflow_is_rejected() {
    assert!(TimeSpec::parse("99999999999999999999").is_err());
    assert!(TimeSpec::parse("999999999999999999:00").is_err());
}

#[test]
fn test_time_spec_parse_compact() {
    assert_eq!(TimeSpec::parse_compact("10").unwrap().seconds, 10);
    assert_eq!(TimeSpec::parse_compact("1m30s").unwrap().seconds, 90);
    assert_eq!(TimeSpec::parse_compact("12m05").unwrap().seconds, 725);

    assert!(TimeSpec::parse_compact("1m5").is_err());
    assert!(TimeSpec::parse_compact("1:30").is_err());
    assert!(TimeSpec::parse_compact("m30").is_err());
    assert!(TimeSpec::parse_compact("").is_err());
}

#[test]
fn test_time_spec_display() {
    assert_eq!(TimeSpec::from_seconds(75).to_string(), "1:15");
    assert_eq!(TimeSpec::from_components(10, 3).to_string(), "10:03");
}

#[test]
fn test_output_name_candidates() {
    assert_eq!(OutputName::candidate("output", "mp4", 0).file_name(), "output.mp4");
    assert_eq!(OutputName::candidate("output", "mp4", 1).file_name(), "output1.mp4");
    assert_eq!(OutputName::candidate("clip", "avi", 12).file_name(), "clip12.avi");
}

#[test]
fn test_clip_job_creation() {
    let job = ClipJob::new(
        "in.mp4",
        OutputName::new("clip", "mp4"),
        ".",
        10.0,
        25.5,
        ClipFlags::default(),
    )
    .unwrap();

    assert_eq!(job.duration(), 15.5);
    assert_eq!(job.output().file_name(), "clip.mp4");
    assert_eq!(job.output_path(), PathBuf::from(".").join("clip.mp4"));
}

#[test]
fn test_clip_job_rejects_empty_or_inverted_range() {
    let name = OutputName::new("clip", "mp4");
    assert!(ClipJob::new("in.mp4", name.clone(), ".", 10.0, 10.0, ClipFlags::default()).is_err());
    assert!(ClipJob::new("in.mp4", name.clone(), ".", 20.0, 10.0, ClipFlags::default()).is_err());
    assert!(ClipJob::new("in.mp4", name.clone(), ".", -1.0, 10.0, ClipFlags::default()).is_err());
    assert!(ClipJob::new("in.mp4", name, ".", 0.0, f64::NAN, ClipFlags::default()).is_err());
}

#[test]
fn test_field_outcome_value() {
    assert_eq!(FieldOutcome::Accepted(3).value(), Some(3));
    assert_eq!(FieldOutcome::SoftDefault(0, "warn".to_string()).value(), Some(0));
    assert_eq!(FieldOutcome::<u32>::Rejected("no".to_string()).value(), None);
    assert!(FieldOutcome::<u32>::Rejected("no".to_string()).is_rejected());
}

#[test]
fn test_job_report_success_tracks_exit_code() {
    let job = ClipJob::new(
        "in.mp4",
        OutputName::new("clip", "mp4"),
        ".",
        0.0,
        5.0,
        ClipFlags::default(),
    )
    .unwrap();

    assert!(JobReport::new(&job, Some(0), Duration::from_millis(1200)).success);
    assert!(!JobReport::new(&job, Some(1), Duration::ZERO).success);
    assert!(!JobReport::new(&job, None, Duration::ZERO).success);

    let dry = JobReport::dry_run(&job);
    assert!(dry.success);
    assert_eq!(dry.exit_code, None);
    assert_eq!(dry.duration, 5.0);
}
