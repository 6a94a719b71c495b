//! Tests for the message format contract

use std::error::Error;
use std::fmt::Display;

use pretty_assertions::assert_eq;

use logbinder_core::backend::render_entry;
use logbinder_core::{format_template, FileLogger, Level, LogError, LogRecord, LoggerExt};

fn entry(
    level: Level,
    error: Option<&(dyn Error + 'static)>,
    template: &str,
    args: &[&dyn Display],
) -> String {
    render_entry(&LogRecord::new(level, error, template, args)).unwrap()
}

/// Strip the `<timestamp> [<code>] [<id>] ` pretext
fn body(entry: &str) -> &str {
    let after_code = entry.find("] [").map(|i| i + 3).unwrap();
    let after_id = entry[after_code..].find("] ").unwrap();
    &entry[after_code + after_id + 2..]
}

#[test]
fn template_without_args_is_written_verbatim() {
    let line = entry(Level::Information, None, "rate is {0}% of {total}", &[]);
    assert_eq!(body(&line), "rate is {0}% of {total}\r\n");
}

#[test]
fn positional_placeholders_are_substituted() {
    let line = entry(Level::Warning, None, "{0}-{1}", &[&"a", &"b"]);
    assert!(line.contains(" [WRN] ["));
    assert_eq!(body(&line), "a-b\r\n");
}

#[test]
fn error_goes_on_the_following_line() {
    let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let line = entry(Level::Error, Some(&err), "save failed", &[]);
    assert_eq!(body(&line), "save failed\r\naccess denied\r\n");
}

#[test]
fn malformed_templates_are_format_errors() {
    for template in ["{0", "{x}", "{2}", "stray }", "{0:N2}", "{0,70000}"] {
        let err = format_template(template, &[&1]).unwrap_err();
        assert!(
            matches!(err, LogError::Format { .. }),
            "{template:?} gave {err:?}"
        );
    }
}

#[test]
fn oversized_alignment_fails_instead_of_writing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("wide.log");
    let logger = FileLogger::new(&path).unwrap();

    let err = logger.info_args("{0,70000}", &[&"x"]).unwrap_err();

    assert!(matches!(err, LogError::Format { .. }), "got {err:?}");
    assert!(!path.exists());
}
