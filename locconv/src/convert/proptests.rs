//! Property-based tests for the conversion matrix.

use super::Converter;
use crate::reference::{FileReference, PathReference, UriReference, UrlReference};
use proptest::prelude::*;

// Segments mixing plain characters with the ones that need escaping
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._?#%:@!\\\\-]{1,12}"
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "/", "//", "///", "c:/", "/c:/", "\\\\"]),
        prop::collection::vec(segment_strategy(), 0..6),
        any::<bool>(),
    )
        .prop_map(|(prefix, segments, trailing)| {
            let mut raw = format!("{prefix}{}", segments.join("/"));
            if trailing {
                raw.push('/');
            }
            raw
        })
}

fn converters() -> [Converter; 2] {
    [Converter::posix(), Converter::windows()]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // to_* is present exactly when as_* succeeds, with the same value
    #[test]
    fn soft_and_strict_agree(raw in raw_path_strategy()) {
        for conv in converters() {
            let file = conv.file(&raw);
            prop_assert_eq!(conv.to_path(Some(&file)), conv.as_path(Some(&file)).ok());
            prop_assert_eq!(conv.to_uri(Some(&file)), conv.as_uri(Some(&file)).ok());
            prop_assert_eq!(conv.to_url(Some(&file)), conv.as_url(Some(&file)).ok());

            let uri = conv.as_uri(Some(&file)).unwrap();
            prop_assert_eq!(conv.to_file(Some(&uri)), conv.as_file(Some(&uri)).ok());
            prop_assert_eq!(conv.to_path(Some(&uri)), conv.as_path(Some(&uri)).ok());
            prop_assert_eq!(conv.to_url(Some(&uri)), conv.as_url(Some(&uri)).ok());

            let url = conv.as_url(Some(&file)).unwrap();
            prop_assert_eq!(conv.to_file(Some(&url)), conv.as_file(Some(&url)).ok());
            prop_assert_eq!(conv.to_path(Some(&url)), conv.as_path(Some(&url)).ok());
            prop_assert_eq!(conv.to_uri(Some(&url)), conv.as_uri(Some(&url)).ok());
        }
    }

    // Printing then parsing gives the same value for every kind
    #[test]
    fn print_parse_idempotent(raw in raw_path_strategy()) {
        for conv in converters() {
            let file = conv.file(&raw);
            prop_assert_eq!(&conv.file(&file.to_string()), &file);

            if let Ok(path) = conv.path(&raw) {
                prop_assert_eq!(&conv.path(&path.to_string()).unwrap(), &path);
            }

            let uri = conv.as_uri(Some(&file)).unwrap();
            prop_assert_eq!(&UriReference::parse(&uri.to_string()).unwrap(), &uri);

            let url = conv.as_url(Some(&file)).unwrap();
            prop_assert_eq!(&UrlReference::parse(&url.to_string()).unwrap(), &url);
        }
    }

    // On POSIX every file reference survives a trip through a URI
    #[test]
    fn posix_uri_round_trip(raw in raw_path_strategy()) {
        let conv = Converter::posix();
        let file = conv.file(&raw);
        let uri = conv.as_uri(Some(&file)).unwrap();
        let back: FileReference = conv.as_file(Some(&uri)).unwrap();
        prop_assert_eq!(back, file);
    }

    // A path that parses also survives URI and URL trips under its policy
    #[test]
    fn path_round_trip(raw in raw_path_strategy()) {
        for conv in converters() {
            if let Ok(path) = conv.path(&raw) {
                let uri = conv.as_uri(Some(&path)).unwrap();
                let back: PathReference = conv.as_path(Some(&uri)).unwrap();
                prop_assert_eq!(&back, &path);

                let url = conv.as_url(Some(&path)).unwrap();
                let back: PathReference = conv.as_path(Some(&url)).unwrap();
                prop_assert_eq!(&back, &path);
            }
        }
    }

    // Percent-encoding only ever produces URI-legal output
    #[test]
    fn encoded_uri_reparses(raw in raw_path_strategy()) {
        for conv in converters() {
            let file = conv.file(&raw);
            let printed = conv.as_uri(Some(&file)).unwrap().to_string();
            prop_assert!(UriReference::parse(&printed).is_ok(), "{} did not reparse", printed);
        }
    }
}
