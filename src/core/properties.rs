//! Properties file parsing.
//!
//! Reads the line-oriented `key=value` format used by `key.properties`.
//! Follows the Java properties grammar: `#`/`!` comments, `=`, `:` or
//! whitespace separators, backslash line continuations and `\uXXXX` escapes.
//! When a key repeats, the last value wins.

use std::collections::BTreeMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Result, SigningError};

/// A syntax error at a specific line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number where the offending logical line starts
    pub line: usize,
    /// What went wrong
    pub reason: String,
}

/// An immutable key-value mapping parsed from a properties file.
///
/// Values are wiped from memory on drop since they usually hold passwords.
#[derive(Clone, Default)]
pub struct Properties {
    entries: BTreeMap<String, Zeroizing<String>>,
}

impl Properties {
    /// Parse properties from text.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` on a malformed `\uXXXX` escape.
    pub fn parse(input: &str) -> std::result::Result<Self, ParseError> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let mut entries = BTreeMap::new();

        for (line, logical) in logical_lines(input) {
            let (key, value) = split_entry(&logical);
            let key = unescape(key).map_err(|reason| ParseError { line, reason })?;
            let value = unescape(value).map_err(|reason| ParseError { line, reason })?;
            entries.insert(key, Zeroizing::new(value));
        }

        Ok(Self { entries })
    }

    /// Read and parse a properties file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file does not exist, `ConfigRead` if it
    /// cannot be read, or `ConfigParse` if it is not valid UTF-8 or contains
    /// a malformed escape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading properties");

        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(SigningError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
                .into())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SigningError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
                .into())
            }
            Err(source) => {
                return Err(SigningError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                }
                .into())
            }
        }

        let bytes = std::fs::read(path).map_err(|source| SigningError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let bytes = Zeroizing::new(bytes);

        let text = std::str::from_utf8(&bytes).map_err(|e| {
            let valid = std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default();
            let line = physical_lines(valid).count()
                + usize::from(valid.is_empty() || valid.ends_with(['\r', '\n']));
            SigningError::ConfigParse {
                path: path.to_path_buf(),
                line,
                reason: "invalid UTF-8".to_string(),
            }
        })?;

        let props = Self::parse(text).map_err(|e| SigningError::ConfigParse {
            path: path.to_path_buf(),
            line: e.line,
            reason: e.reason,
        })?;

        debug!(entries = props.len(), "properties parsed");
        Ok(props)
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Zeroizing::new(v.into())))
                .collect(),
        }
    }
}

// Values are secrets; only keys are printed.
impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Split on `\r\n`, `\n` or a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
fn physical_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(i) => {
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..i];
                rest = &rest[i + width..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// Join physical lines into logical lines, dropping blanks and comments.
///
/// Yields the 1-based number of the first physical line with the joined text.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (idx, raw) in physical_lines(input).enumerate() {
        let line = raw.trim_start_matches(is_blank);

        let (start, mut buf) = match current.take() {
            Some(pending) => pending,
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                (idx + 1, String::new())
            }
        };

        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            buf.push_str(&line[..line.len() - 1]);
            current = Some((start, buf));
        } else {
            buf.push_str(line);
            out.push((start, buf));
        }
    }

    if let Some(pending) = current {
        out.push(pending);
    }

    out
}

/// Split a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut escaped = false;
    let mut has_sep = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' {
            key_end = i;
            has_sep = true;
            break;
        } else if is_blank(c) {
            key_end = i;
            break;
        }
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    if has_sep {
        rest = &rest[1..];
    }
    rest = rest.trim_start_matches(is_blank);
    if !has_sep {
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped.trim_start_matches(is_blank);
        }
    }

    (key, rest)
}

const HIGH_SURROGATE: std::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATE: std::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Read the four hex digits following `\u`.
fn read_code_unit(chars: &mut std::str::Chars<'_>) -> std::result::Result<u32, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("malformed \\uxxxx encoding: \\u{}", hex));
    }
    u32::from_str_radix(&hex, 16).map_err(|e| e.to_string())
}

fn unescape(raw: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_code_unit(&mut chars)?;
                let code = if HIGH_SURROGATE.contains(&unit) {
                    // Supplementary characters are written as a \uXXXX\uXXXX pair.
                    let mut ahead = chars.clone();
                    let low = match (ahead.next(), ahead.next()) {
                        (Some('\\'), Some('u')) => read_code_unit(&mut ahead)?,
                        _ => return Err(format!("unpaired surrogate: \\u{:04X}", unit)),
                    };
                    if !LOW_SURROGATE.contains(&low) {
                        return Err(format!("unpaired surrogate: \\u{:04X}", unit));
                    }
                    chars = ahead;
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                let decoded = char::from_u32(code)
                    .ok_or_else(|| format!("unpaired surrogate: \\u{:04X}", code))?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}
