//! Common test utilities for integration tests.
//!
//! This module provides converters for both platform policies and the
//! fixture tables shared by the conversion test suites.

use locconv::{Converter, Location, LocationKind};

/// Both policies, labelled for assertion messages.
#[allow(dead_code)]
pub fn converters() -> [(&'static str, Converter); 2] {
    [("posix", Converter::posix()), ("windows", Converter::windows())]
}

/// A file reference and its expected printed URI, or `None` when the
/// direction is expected to fail.
#[allow(dead_code)]
pub struct Fixture {
    /// Raw input.
    pub input: &'static str,
    /// Expected output under the POSIX-like policy.
    pub posix: Option<&'static str>,
    /// Expected output under the Windows-like policy.
    pub windows: Option<&'static str>,
}

impl Fixture {
    /// The expectation for the named policy.
    #[allow(dead_code)]
    pub fn expected(&self, policy: &str) -> Option<&'static str> {
        match policy {
            "posix" => self.posix,
            _ => self.windows,
        }
    }
}

#[allow(dead_code)]
const fn fixture(
    input: &'static str,
    posix: Option<&'static str>,
    windows: Option<&'static str>,
) -> Fixture {
    Fixture {
        input,
        posix,
        windows,
    }
}

/// File reference inputs printed as URIs.
#[allow(dead_code)]
pub const FILE_TO_URI: &[Fixture] = &[
    fixture("", Some(""), Some("")),
    fixture("MyFile.ext", Some("MyFile.ext"), Some("MyFile.ext")),
    fixture("some/path/MyFile.ext", Some("some/path/MyFile.ext"), Some("some/path/MyFile.ext")),
    fixture("../some/MyFile.ext", Some("../some/MyFile.ext"), Some("../some/MyFile.ext")),
    fixture("/myProject/myFolder/", Some("file:/myProject/myFolder"), Some("/myProject/myFolder")),
    fixture("//myProject", Some("file://myProject/"), Some("file:////myProject")),
    fixture("//myProject/folder", Some("file://myProject/folder"), Some("file:////myProject/folder")),
    fixture("///myProject/folder", Some("file://myProject/folder"), Some("file:////myProject/folder")),
    fixture("////myProject/folder", Some("file://myProject/folder"), Some("file:////myProject/folder")),
    fixture("c:/some/path/MyFile.ext", Some("c%3A/some/path/MyFile.ext"), Some("file:/c:/some/path/MyFile.ext")),
    fixture("..\\some\\MyFile.ext", Some("..%5Csome%5CMyFile.ext"), Some("../some/MyFile.ext")),
    fixture("/my Folder/file name.ext", Some("file:/my%20Folder/file%20name.ext"), Some("/my%20Folder/file%20name.ext")),
    fixture("/folder/a?b#c", Some("file:/folder/a%3Fb%23c"), Some("/folder/a%3Fb%23c")),
];

/// URI inputs converted to file references.
#[allow(dead_code)]
pub const URI_TO_FILE: &[Fixture] = &[
    fixture("", Some(""), Some("")),
    fixture("MyFile.ext", Some("MyFile.ext"), Some("MyFile.ext")),
    fixture("file:/myProject/myFolder", Some("/myProject/myFolder"), Some("/myProject/myFolder")),
    fixture("file:///myProject/myFolder", Some("/myProject/myFolder"), Some("/myProject/myFolder")),
    fixture("file://myProject/folder", Some("//myProject/folder"), Some("//myProject/folder")),
    fixture("file:////myProject/folder", Some("//myProject/folder"), Some("//myProject/folder")),
    fixture("file://myProject/", Some("//myProject"), Some("//myProject")),
    fixture("file://MyFile.ext", None, None),
    fixture("file://", None, None),
    fixture("file:/c:/some/path", Some("/c:/some/path"), Some("c:/some/path")),
    fixture("file:/c:", Some("/c:"), Some("c:")),
    fixture("file:/c:/", Some("/c:"), Some("c:/")),
    fixture("file:/my%20Folder", Some("/my Folder"), Some("/my Folder")),
    fixture("file:/folder/a%3Fb%23c", Some("/folder/a?b#c"), None),
    fixture("file:/%2Fhost/x", None, None),
    fixture("file:/a%2Fb", None, None),
    fixture("file:/a%5Cb", Some("/a\\b"), None),
    fixture("file:/myProject/myFolder?query#fragment", None, None),
    fixture("file:/myProject#fragment", None, None),
    fixture("mailto:test@example.com", None, None),
    fixture("http://example.com/x", None, None),
];

/// Asserts that a strict failure carries the expected kinds and source.
#[allow(dead_code)]
pub fn assert_unconvertible<S, T>(
    result: Result<T, locconv::ConversionError>,
    source: &S,
    target: LocationKind,
) where
    S: Location,
    T: std::fmt::Debug,
{
    let err = result.expect_err("conversion should fail");
    assert!(err.is_unconvertible(), "{err}");
    assert_eq!(err.source_kind(), S::KIND);
    assert_eq!(err.target_kind(), target);
    assert_eq!(err.source_value(), Some(source.to_string().as_str()));
}
