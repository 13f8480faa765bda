//! Percent-encoding rules.
//!
//! Encoding is only applied when going from a file or path reference into a
//! URI or URL; decoding only when going the other way.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::{Error, Result};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// The first segment of a relative reference must not look like a scheme.
const LEADING_SEGMENT: &AsciiSet = &SEGMENT.add(b':');

/// A host taken from a UNC-like path: `:` and `@` would change its meaning.
const HOST: &AsciiSet = &LEADING_SEGMENT.add(b'@');

pub(crate) fn encode_segment(segment: &str) -> Cow<'_, str> {
    utf8_percent_encode(segment, SEGMENT).into()
}

pub(crate) fn encode_leading_segment(segment: &str) -> Cow<'_, str> {
    utf8_percent_encode(segment, LEADING_SEGMENT).into()
}

pub(crate) fn encode_host(host: &str) -> Cow<'_, str> {
    utf8_percent_encode(host, HOST).into()
}

/// Decodes `%XX` escapes.
///
/// `input` is only used to report a malformed reference.
pub(crate) fn decode<'a>(component: &'a str, input: &str) -> Result<Cow<'a, str>> {
    percent_decode_str(component)
        .decode_utf8()
        .map_err(|_| Error::MalformedUri {
            input: input.to_string(),
            reason: "percent-encoded bytes are not valid UTF-8".to_string(),
        })
}

pub(crate) fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

pub(crate) fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// `pchar` without the escape, plus the non-ASCII characters the library
/// accepts verbatim.
pub(crate) fn is_pchar(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || matches!(c, ':' | '@') || !c.is_ascii()
}

/// Whether `s[at..]` starts with a `%XX` escape.
pub(crate) fn is_escape_at(s: &str, at: usize) -> bool {
    let bytes = s.as_bytes();
    bytes.get(at) == Some(&b'%')
        && bytes.get(at + 1).is_some_and(u8::is_ascii_hexdigit)
        && bytes.get(at + 2).is_some_and(u8::is_ascii_hexdigit)
}

/// Escapes every character `allowed` rejects, leaving valid `%XX` escapes
/// intact.
pub(crate) fn escape_illegal(component: &str, allowed: impl Fn(char) -> bool) -> Cow<'_, str> {
    let needs_work = component
        .char_indices()
        .any(|(i, c)| if c == '%' { !is_escape_at(component, i) } else { !allowed(c) });
    if !needs_work {
        return Cow::Borrowed(component);
    }

    let mut out = String::with_capacity(component.len() + 8);
    let mut buf = [0u8; 4];
    for (i, c) in component.char_indices() {
        let keep = if c == '%' {
            is_escape_at(component, i)
        } else {
            allowed(c)
        };
        if keep {
            out.push(c);
        } else {
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    Cow::Owned(out)
}

/// Checks the scheme syntax `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub(crate) fn is_valid_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Splits a leading `scheme:` off `input`.
pub(crate) fn split_scheme(input: &str) -> (Option<&str>, &str) {
    match input.find(':') {
        Some(idx) if is_valid_scheme(&input[..idx]) => (Some(&input[..idx]), &input[idx + 1..]),
        _ => (None, input),
    }
}
