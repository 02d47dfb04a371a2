//! `.loct` file reading and parsing

use super::LANGID_PREFIX;
use crate::error::Result;
use crate::formats::nloc::{LocalizationFile, Message};
use crate::utils::id::parse_id_token;
use std::path::Path;

/// Read a .loct file from disk
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read or isn't UTF-8, and a
/// parse error if a line is malformed.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_nloct<P: AsRef<Path>>(path: P) -> Result<LocalizationFile> {
    let contents = std::fs::read_to_string(path)?;
    parse_nloct(&contents)
}

/// Parse NLOCT text
///
/// # Errors
/// Returns [`Error::InvalidIdentifierLiteral`] for a line whose identifier is
/// neither a quoted literal nor hex, and [`Error::EncodingError`] for a
/// quoted literal outside Latin-1.
///
/// [`Error::InvalidIdentifierLiteral`]: crate::Error::InvalidIdentifierLiteral
/// [`Error::EncodingError`]: crate::Error::EncodingError
pub fn parse_nloct(contents: &str) -> Result<LocalizationFile> {
    let mut file = LocalizationFile::new();
    let mut block_comment = false;

    for (index, raw_line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_start();

        if line.starts_with("###") {
            block_comment = !block_comment;
            continue;
        }
        if block_comment || line.trim_end().is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(value) = strip_langid_prefix(line) {
            let (lang_id, _) = parse_id_token(value.trim(), line_number)?;
            file.lang_id = Some(lang_id);
            continue;
        }

        let (id, rest) = parse_id_token(line, line_number)?;
        file.messages.push(Message {
            id,
            text: rest.trim_start().to_string(),
        });
    }

    tracing::debug!("Parsed {} NLOCT messages", file.messages.len());
    Ok(file)
}

/// Strip a case-insensitive `langid:` prefix
fn strip_langid_prefix(line: &str) -> Option<&str> {
    let prefix = line.get(..LANGID_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(LANGID_PREFIX)
        .then(|| &line[LANGID_PREFIX.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::hash::hash;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_langid_and_quoted_message() {
        let file = parse_nloct("langid: \"en\"\n\"hello\"    World\n").unwrap();
        assert_eq!(file.lang_id, Some(hash(b"en")));
        assert_eq!(file.messages, vec![Message::new(hash(b"hello"), "World")]);
    }

    #[test]
    fn test_hex_identifiers() {
        let file = parse_nloct("LANGID: 1A2B\n100 text here\nA\t  tabbed\n").unwrap();
        assert_eq!(file.lang_id, Some(0x1A2B));
        assert_eq!(
            file.messages,
            vec![Message::new(0x100, "text here"), Message::new(0xA, "tabbed")]
        );
    }

    #[test]
    fn test_text_is_verbatim() {
        let file = parse_nloct("\"k\"  a \"quoted\" # not a comment  \n").unwrap();
        assert_eq!(file.messages[0].text, "a \"quoted\" # not a comment  ");
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let text = "# comment\n\n   \n  # indented comment\n1 one\n";
        let file = parse_nloct(text).unwrap();
        assert_eq!(file.messages, vec![Message::new(1, "one")]);
        assert_eq!(file.lang_id, None);
    }

    #[test]
    fn test_block_comments() {
        let text = "1 one\n###\n2 two\n# still hidden\n  ###\n3 three\n### trailing words\nnot a message\n###\n";
        let file = parse_nloct(text).unwrap();
        let ids: Vec<u32> = file.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let file = parse_nloct("langid: 5\r\n\"a\"    x\r\n\"b\"    y\r\n").unwrap();
        assert_eq!(file.lang_id, Some(5));
        assert_eq!(file.messages[0].text, "x");
        assert_eq!(file.messages[1].text, "y");
    }

    #[test]
    fn test_empty_text() {
        let file = parse_nloct("FF\n\"x\"\n").unwrap();
        assert_eq!(file.messages, vec![Message::new(0xFF, ""), Message::new(hash(b"x"), "")]);
    }

    #[test]
    fn test_invalid_identifier_reports_line() {
        let err = parse_nloct("1 ok\n\nnope text\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIdentifierLiteral { line: 3, ref token } if token == "nope"
        ));
    }

    #[test]
    fn test_invalid_langid() {
        assert!(matches!(
            parse_nloct("langid: zz\n"),
            Err(Error::InvalidIdentifierLiteral { line: 1, .. })
        ));
    }
}
