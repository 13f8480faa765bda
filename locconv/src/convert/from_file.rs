//! Conversions out of [`FileReference`].

use crate::error::ConversionError;
use crate::reference::{FileReference, PathReference, UriReference, UrlReference};

use super::from_path::{layout_to_uri, local_uri_to_url};
use super::{tag, ConvertTo, Converter};

impl ConvertTo<PathReference> for FileReference {
    fn convert_to(&self, converter: &Converter) -> Result<PathReference, ConversionError> {
        tag(self, PathReference::parse(self.as_str(), converter.policy()))
    }
}

impl ConvertTo<UriReference> for FileReference {
    fn convert_to(&self, converter: &Converter) -> Result<UriReference, ConversionError> {
        Ok(layout_to_uri(&self.layout(converter.policy()), converter.policy()))
    }
}

impl ConvertTo<UrlReference> for FileReference {
    fn convert_to(&self, converter: &Converter) -> Result<UrlReference, ConversionError> {
        let uri = <Self as ConvertTo<UriReference>>::convert_to(self, converter)?;
        Ok(local_uri_to_url(&uri))
    }
}
