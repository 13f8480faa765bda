//! Conversions out of [`PathReference`], plus the layout encoder shared with
//! file references.

use crate::error::ConversionError;
use crate::platform::PlatformPolicy;
use crate::reference::encoding::{encode_host, encode_leading_segment, encode_segment};
use crate::reference::{FileReference, Layout, PathReference, PathRoot, UriReference, UrlReference};

use super::{ConvertTo, Converter, FILE_SCHEME};

fn join_encoded(segments: &[String]) -> String {
    segments
        .iter()
        .map(|segment| encode_segment(segment))
        .collect::<Vec<_>>()
        .join("/")
}

/// Prints a layout as a URI reference. Total: every layout has a URI form.
pub(super) fn layout_to_uri(layout: &Layout, policy: &dyn PlatformPolicy) -> UriReference {
    let file = || Some(FILE_SCHEME.to_string());
    match layout.root {
        PathRoot::Relative => {
            let path = match layout.segments.split_first() {
                None => String::new(),
                Some((first, [])) => encode_leading_segment(first).into_owned(),
                Some((first, rest)) => {
                    format!("{}/{}", encode_leading_segment(first), join_encoded(rest))
                }
            };
            UriReference::from_parts(None, None, path, None, None)
        }
        PathRoot::Slash => {
            let scheme = if policy.rooted_paths_are_absolute() {
                file()
            } else {
                None
            };
            let path = format!("/{}", join_encoded(&layout.segments));
            UriReference::from_parts(scheme, None, path, None, None)
        }
        PathRoot::DoubleSlash => match layout.segments.split_first() {
            Some((host, rest)) if policy.unc_as_authority() => {
                // A bare host keeps its `/` so the authority is not read back alone
                let path = format!("/{}", join_encoded(rest));
                UriReference::from_parts(file(), Some(encode_host(host).into_owned()), path, None, None)
            }
            _ => {
                let path = format!("//{}", join_encoded(&layout.segments));
                UriReference::from_parts(file(), Some(String::new()), path, None, None)
            }
        },
        PathRoot::Drive(letter) => {
            let path = format!("/{letter}:/{}", join_encoded(&layout.segments));
            UriReference::from_parts(file(), None, path, None, None)
        }
        PathRoot::DriveRelative(letter) => {
            UriReference::from_parts(None, None, format!("{letter}%3A"), None, None)
        }
    }
}

/// A URI with a scheme is taken over as is; a schemeless one gets `file`.
pub(super) fn local_uri_to_url(uri: &UriReference) -> UrlReference {
    UrlReference::from_parts(
        uri.scheme().unwrap_or(FILE_SCHEME),
        uri.authority().map(str::to_string),
        uri.path().to_string(),
        uri.query().map(str::to_string),
        uri.fragment().map(str::to_string),
    )
}

impl ConvertTo<FileReference> for PathReference {
    fn convert_to(&self, converter: &Converter) -> Result<FileReference, ConversionError> {
        Ok(FileReference::new(&self.to_string(), converter.policy()))
    }
}

impl ConvertTo<UriReference> for PathReference {
    fn convert_to(&self, converter: &Converter) -> Result<UriReference, ConversionError> {
        Ok(layout_to_uri(&self.layout(), converter.policy()))
    }
}

impl ConvertTo<UrlReference> for PathReference {
    fn convert_to(&self, converter: &Converter) -> Result<UrlReference, ConversionError> {
        let uri = <Self as ConvertTo<UriReference>>::convert_to(self, converter)?;
        Ok(local_uri_to_url(&uri))
    }
}
