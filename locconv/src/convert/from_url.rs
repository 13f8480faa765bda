//! Conversions out of [`UrlReference`].

use crate::error::ConversionError;
use crate::platform::PlatformPolicy;
use crate::reference::encoding::escape_illegal;
use crate::reference::{
    authority_char, path_char, query_char, Components, FileReference, Location, PathReference,
    UriReference, UrlReference,
};

use super::{ConvertTo, Converter};

/// Turns a lenient URL into a well-formed URI reference.
///
/// `file:` maps to the empty reference. Separators the policy recognizes in
/// a `file` URL become `/` before the URL is split again, then every
/// character illegal in its component is escaped.
pub(super) fn url_to_uri(url: &UrlReference, policy: &dyn PlatformPolicy) -> UriReference {
    if url.is_empty_file() {
        return UriReference::empty();
    }

    let printed = url.to_string();
    let rest = &printed[url.protocol().len() + 1..];
    let rest: String = if url.is_file() {
        rest.chars()
            .map(|c| if policy.is_separator(c) { '/' } else { c })
            .collect()
    } else {
        rest.to_string()
    };

    let parts = Components::split(&rest);
    UriReference::from_parts(
        Some(url.protocol().to_string()),
        parts
            .authority
            .map(|a| escape_illegal(a, authority_char).into_owned()),
        escape_illegal(parts.path, path_char).into_owned(),
        parts.query.map(|q| escape_illegal(q, query_char).into_owned()),
        parts
            .fragment
            .map(|f| escape_illegal(f, query_char).into_owned()),
    )
}

impl ConvertTo<UriReference> for UrlReference {
    fn convert_to(&self, converter: &Converter) -> Result<UriReference, ConversionError> {
        Ok(url_to_uri(self, converter.policy()))
    }
}

impl ConvertTo<FileReference> for UrlReference {
    fn convert_to(&self, converter: &Converter) -> Result<FileReference, ConversionError> {
        let uri = url_to_uri(self, converter.policy());
        <UriReference as ConvertTo<FileReference>>::convert_to(&uri, converter)
            .map_err(|e| e.rewrap(self, Self::KIND, FileReference::KIND))
    }
}

impl ConvertTo<PathReference> for UrlReference {
    fn convert_to(&self, converter: &Converter) -> Result<PathReference, ConversionError> {
        let uri = url_to_uri(self, converter.policy());
        <UriReference as ConvertTo<PathReference>>::convert_to(&uri, converter)
            .map_err(|e| e.rewrap(self, Self::KIND, PathReference::KIND))
    }
}
