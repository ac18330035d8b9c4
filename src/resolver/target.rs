//! Parsing decoded payloads into redirect targets.
//!
//! Decoded text is parsed as a URL reference. Absolute URLs are taken as-is;
//! relative references are resolved against a placeholder base so that
//! network-path references (`//host/path`) keep their host while every other
//! relative form ends up with neither scheme nor host.
//!
//! Text with control characters or a leading space is refused before parsing,
//! since the URL parser would silently strip them.

use std::fmt;

use url::{ParseError, Position, Url};

/// Placeholder base for resolving relative references. Its scheme and host
/// never leak into a target.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Why decoded bytes could not be parsed into a reference.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid control character in URL")]
    ControlCharacter,

    #[error("leading space in URL")]
    LeadingSpace,

    #[error("{0}")]
    Url(#[from] ParseError),
}

/// A parsed URL reference with its canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReference {
    scheme: String,
    host: String,
    serialized: String,
}

impl TargetReference {
    /// Parse decoded payload bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, TargetError> {
        let text = std::str::from_utf8(bytes)?;
        if text.chars().any(|c| c.is_ascii_control()) {
            return Err(TargetError::ControlCharacter);
        }
        if text.starts_with(' ') {
            return Err(TargetError::LeadingSpace);
        }

        match Url::parse(text) {
            Ok(url) => Ok(Self::absolute(&url)),
            Err(ParseError::RelativeUrlWithoutBase) => Self::relative(text),
            Err(e) => Err(e.into()),
        }
    }

    fn absolute(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().unwrap_or_default().to_string(),
            serialized: url.as_str().to_string(),
        }
    }

    fn relative(text: &str) -> Result<Self, TargetError> {
        let resolved = Url::parse(RELATIVE_BASE)?.join(text)?;

        if text.starts_with("//") {
            Ok(Self {
                scheme: String::new(),
                host: resolved.host_str().unwrap_or_default().to_string(),
                serialized: format!("//{}", &resolved[Position::BeforeUsername..]),
            })
        } else {
            Ok(Self {
                scheme: String::new(),
                host: String::new(),
                serialized: resolved[Position::BeforePath..].to_string(),
            })
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// A reference can be redirected to when it names a scheme or a host.
    pub fn is_usable(&self) -> bool {
        !self.scheme.is_empty() || !self.host.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    pub fn into_string(self) -> String {
        self.serialized
    }
}

impl fmt::Display for TargetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized)
    }
}
