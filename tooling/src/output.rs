//! Line-oriented output helpers.

use std::borrow::Cow;
use std::io::Write;

use common::i18n::{Arguments, FluentValue};

use crate::error::{Result, ToolError};

/// Writes each line followed by a newline.
pub(crate) fn write_lines<I, S>(out: &mut dyn Write, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(|source| ToolError::WriteFailed { source })?;
    }
    Ok(())
}

/// Builds Fluent arguments from static names.
pub(crate) fn message_args<'a>(
    pairs: impl IntoIterator<Item = (&'static str, FluentValue<'a>)>,
) -> Arguments<'a> {
    pairs
        .into_iter()
        .map(|(name, value)| (Cow::Borrowed(name), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_item() {
        let mut out = Vec::new();
        write_lines(&mut out, ["a", "", "b"]).expect("write succeeds");
        assert_eq!(String::from_utf8(out).expect("UTF-8"), "a\n\nb\n");
    }

    #[test]
    fn builds_named_arguments() {
        let args = message_args([("count", FluentValue::from(3))]);
        assert!(args.contains_key("count"));
    }
}
