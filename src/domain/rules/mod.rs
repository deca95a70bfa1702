// Business rules - Validation of clip parameters and auto-mode filenames

use std::path::Path;

use crate::domain::model::*;

/// Characters that may not appear in a clip name
pub const INVALID_NAME_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Literal prefix of auto-mode source files
pub const AUTO_MODE_PREFIX: &str = "degen-";

/// Suffix appended to the target stem of auto-mode outputs
pub const AUTO_MODE_SUFFIX: &str = "_auto";

/// Base name used when no clip name is given
pub const DEFAULT_OUTPUT_BASE: &str = "output";

/// First character of `name` that is not allowed in a clip name
pub fn invalid_name_char(name: &str) -> Option<char> {
    name.chars().find(|c| INVALID_NAME_CHARS.contains(c))
}

/// Check a non-empty clip name for forbidden characters.
///
/// Empty names are handled by the caller, which substitutes a free default.
pub fn validate_clip_name(name: &str) -> FieldOutcome<String> {
    let name = name.trim();
    if name.is_empty() {
        return FieldOutcome::Rejected("no clip name entered".to_string());
    }
    match invalid_name_char(name) {
        Some(c) => FieldOutcome::Rejected(format!("invalid character \"{}\" entered in filename", c)),
        None => FieldOutcome::Accepted(name.to_string()),
    }
}

/// Resolve a start time against the source duration.
///
/// Missing or unparseable input falls back to the start of the video; a
/// start beyond the end of the video is rejected.
pub fn resolve_start(raw: Option<&str>, duration: f64) -> FieldOutcome<f64> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return FieldOutcome::SoftDefault(
            0.0,
            "no start time entered, using start of video".to_string(),
        );
    }

    match TimeSpec::parse(raw) {
        Err(_) => FieldOutcome::SoftDefault(
            0.0,
            format!("invalid start time \"{}\", using start of video", raw),
        ),
        Ok(spec) if spec.as_seconds() > duration => FieldOutcome::Rejected(format!(
            "start time {}s is beyond video length ({:.2}s)",
            spec.seconds, duration
        )),
        Ok(spec) => FieldOutcome::Accepted(spec.as_seconds()),
    }
}

/// Resolve an end time against the source duration.
///
/// Missing or unparseable input falls back to the end of the video, and so
/// does an end beyond the end of the video.
pub fn resolve_end(raw: Option<&str>, duration: f64) -> FieldOutcome<f64> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return FieldOutcome::SoftDefault(
            duration,
            "no end time entered, using end of video".to_string(),
        );
    }

    match TimeSpec::parse(raw) {
        Err(_) => FieldOutcome::SoftDefault(
            duration,
            format!("invalid end time \"{}\", using end of video", raw),
        ),
        Ok(spec) if spec.as_seconds() > duration => FieldOutcome::SoftDefault(
            duration,
            format!(
                "end time {}s is beyond video length, using end of video ({:.2}s)",
                spec.seconds, duration
            ),
        ),
        Ok(spec) => FieldOutcome::Accepted(spec.as_seconds()),
    }
}

/// Match a file name against `degen-<START>-<END>-<TARGET>`.
///
/// Empty fields between hyphens are ignored when reading the times. The
/// target is taken verbatim from after the hyphen closing the end time, so
/// hyphens inside it survive.
pub fn match_auto_mode_name(file_name: &str) -> AutoModeMatch {
    if !file_name.starts_with(AUTO_MODE_PREFIX) {
        return AutoModeMatch::NoMatch(format!("missing \"{}\" prefix", AUTO_MODE_PREFIX));
    }

    let tokens: Vec<&str> = file_name.split('-').filter(|t| !t.is_empty()).collect();
    if tokens.len() < 4 {
        return AutoModeMatch::NoMatch(
            "expected degen-<start>-<end>-<name>".to_string(),
        );
    }

    let start = match TimeSpec::parse_compact(tokens[1]) {
        Ok(t) => t,
        Err(e) => return AutoModeMatch::NoMatch(format!("bad start time: {}", e)),
    };
    let end = match TimeSpec::parse_compact(tokens[2]) {
        Ok(t) => t,
        Err(e) => return AutoModeMatch::NoMatch(format!("bad end time: {}", e)),
    };

    let target = match target_offset(file_name) {
        Some(offset) if offset < file_name.len() => &file_name[offset..],
        _ => return AutoModeMatch::NoMatch("missing target name".to_string()),
    };

    AutoModeMatch::Matched {
        start,
        end,
        target: target.to_string(),
    }
}

/// Byte offset just past the hyphen that ends the third non-empty field
fn target_offset(file_name: &str) -> Option<usize> {
    let mut fields = 0;
    let mut in_field = false;
    for (i, b) in file_name.bytes().enumerate() {
        if b == b'-' {
            if in_field {
                fields += 1;
                in_field = false;
                if fields == 3 {
                    return Some(i + 1);
                }
            }
        } else {
            in_field = true;
        }
    }
    None
}

/// Output name for an auto-mode target: its stem plus `_auto`, keeping
/// the target's extension
pub fn auto_output_name(target: &str, fallback_ext: &str) -> OutputName {
    let path = Path::new(target);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| target.to_string());
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| fallback_ext.to_string());
    OutputName::new(format!("{}{}", stem, AUTO_MODE_SUFFIX), ext)
}

/// Whether `path` has one of the recognized video extensions
pub fn is_recognized_video(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|known| known.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}
