//! Conversions out of [`UriReference`].

use crate::error::{ConversionError, Error, Result};
use crate::platform::PlatformPolicy;
use crate::reference::encoding::decode;
use crate::reference::{
    FileReference, LocationKind, PathReference, ProtocolRegistry, UriReference, UrlReference,
};

use super::{tag, ConvertTo, Converter, FILE_SCHEME};

/// Decodes a local URI into a validated path.
///
/// Only schemeless and `file` references qualify. A query or fragment,
/// even an empty one, has no place in a path and is rejected.
pub(super) fn uri_to_path(
    uri: &UriReference,
    policy: &dyn PlatformPolicy,
    target: LocationKind,
) -> Result<PathReference> {
    if let Some(scheme) = uri.scheme() {
        if !scheme.eq_ignore_ascii_case(FILE_SCHEME) {
            return Err(Error::UnsupportedScheme {
                scheme: scheme.to_string(),
            });
        }
    }
    if uri.query().is_some() {
        return Err(Error::UnrepresentableComponent {
            component: "query",
            target,
        });
    }
    if uri.fragment().is_some() {
        return Err(Error::UnrepresentableComponent {
            component: "fragment",
            target,
        });
    }

    let input = uri.to_string();
    let path = uri
        .path()
        .split('/')
        .map(|segment| decode_segment(segment, &input, policy))
        .collect::<Result<Vec<_>>>()?
        .join("/");
    let native = match uri.authority() {
        Some(_) if path.is_empty() => {
            return Err(Error::InvalidPath {
                input,
                reason: "authority without a path".to_string(),
            });
        }
        Some(authority) if !authority.is_empty() => {
            format!("//{}{path}", decode_segment(authority, &input, policy)?)
        }
        _ => path,
    };
    PathReference::parse(&native, policy)
}

/// Decodes one segment; an escaped separator would move segment boundaries.
fn decode_segment(segment: &str, input: &str, policy: &dyn PlatformPolicy) -> Result<String> {
    let decoded = decode(segment, input)?;
    if let Some(c) = decoded.chars().find(|&c| policy.is_separator(c)) {
        return Err(Error::InvalidPath {
            input: input.to_string(),
            reason: format!("escaped separator {c:?} inside a segment"),
        });
    }
    Ok(decoded.into_owned())
}

/// Takes a URI over as a URL; the scheme must be present and registered.
pub(super) fn uri_to_url(uri: &UriReference, protocols: &ProtocolRegistry) -> Result<UrlReference> {
    let scheme = uri.scheme().ok_or_else(|| Error::MissingScheme {
        input: uri.to_string(),
    })?;
    protocols.check(scheme)?;
    Ok(UrlReference::from_parts(
        scheme,
        uri.authority().map(str::to_string),
        uri.path().to_string(),
        uri.query().map(str::to_string),
        uri.fragment().map(str::to_string),
    ))
}

impl ConvertTo<FileReference> for UriReference {
    fn convert_to(&self, converter: &Converter) -> std::result::Result<FileReference, ConversionError> {
        let policy = converter.policy();
        let file = uri_to_path(self, policy, LocationKind::File)
            .map(|path| FileReference::new(&path.to_string(), policy));
        tag(self, file)
    }
}

impl ConvertTo<PathReference> for UriReference {
    fn convert_to(&self, converter: &Converter) -> std::result::Result<PathReference, ConversionError> {
        tag(self, uri_to_path(self, converter.policy(), LocationKind::Path))
    }
}

impl ConvertTo<UrlReference> for UriReference {
    fn convert_to(&self, converter: &Converter) -> std::result::Result<UrlReference, ConversionError> {
        tag(self, uri_to_url(self, converter.protocols()))
    }
}
