//! Log record model and message template rendering

use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display, Write as _};

use crate::{Level, LogError, Result};

/// Line separator used when an entry spans several lines
pub const LINE_ENDING: &str = "\r\n";

/// One log event, borrowed from the arguments of [`Logger::log`](crate::Logger::log)
///
/// Records are never mutated. Backends build one per `log` call and consume it
/// once.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: Level,
    pub error: Option<&'a (dyn Error + 'static)>,
    pub template: &'a str,
    pub args: &'a [&'a dyn Display],
}

impl<'a> LogRecord<'a> {
    pub fn new(
        level: Level,
        error: Option<&'a (dyn Error + 'static)>,
        template: &'a str,
        args: &'a [&'a dyn Display],
    ) -> Self {
        Self {
            level,
            error,
            template,
            args,
        }
    }

    /// Render the primary message line.
    ///
    /// Without arguments the template is returned verbatim, braces included.
    pub fn message(&self) -> Result<Cow<'a, str>> {
        if self.args.is_empty() {
            return Ok(Cow::Borrowed(self.template));
        }
        format_template(self.template, self.args).map(Cow::Owned)
    }

    /// Full representation of the attached error, if any
    pub fn error_text(&self) -> Option<String> {
        self.error.map(render_error)
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("error", &self.error.map(ToString::to_string))
            .field("template", &self.template)
            .field("args", &self.args.len())
            .finish()
    }
}

/// Render an error and its `source()` chain
pub fn render_error(error: &(dyn Error + 'static)) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(text, "{LINE_ENDING}  Caused by: {cause}");
        source = cause.source();
    }
    text
}

/// Combine a composite format template with positional arguments.
///
/// Placeholders are `{index}` or `{index,alignment}`; a negative alignment
/// pads on the right. `{{` and `}}` produce literal braces. Arguments are
/// rendered through `Display`, which carries no locale.
pub fn format_template(template: &str, args: &[&dyn Display]) -> Result<String> {
    let fail = |reason: String| LogError::Format {
        template: template.to_string(),
        reason,
    };

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(fail(format!("unmatched '}}' at offset {pos}"))),
            '{' => {
                let start = pos + 1;
                let end = loop {
                    match chars.next() {
                        Some((i, '}')) => break i,
                        Some((_, '{')) | None => {
                            return Err(fail(format!("unterminated placeholder at offset {pos}")))
                        }
                        Some(_) => {}
                    }
                };
                let placeholder = &template[start..end];
                write_placeholder(&mut out, placeholder, args).map_err(fail)?;
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Widest padding a placeholder may ask for
const MAX_ALIGNMENT: u32 = u16::MAX as u32;

fn write_placeholder(
    out: &mut String,
    placeholder: &str,
    args: &[&dyn Display],
) -> std::result::Result<(), String> {
    if placeholder.contains(':') {
        return Err(format!("format specifiers are not supported in {{{placeholder}}}"));
    }

    let (index, alignment) = match placeholder.split_once(',') {
        Some((index, alignment)) => {
            let alignment: i32 = alignment
                .trim()
                .parse()
                .map_err(|_| format!("invalid alignment in {{{placeholder}}}"))?;
            (index, alignment)
        }
        None => (placeholder, 0),
    };

    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| format!("invalid argument index in {{{placeholder}}}"))?;
    let arg = args.get(index).ok_or_else(|| {
        format!(
            "index {index} is out of range for {} argument(s)",
            args.len()
        )
    })?;

    if alignment.unsigned_abs() > MAX_ALIGNMENT {
        return Err(format!("alignment in {{{placeholder}}} exceeds {MAX_ALIGNMENT}"));
    }

    let width = alignment.unsigned_abs() as usize;
    let rendered = if alignment < 0 {
        format!("{:<width$}", arg.to_string())
    } else {
        format!("{:>width$}", arg.to_string())
    };
    out.push_str(&rendered);
    Ok(())
}
