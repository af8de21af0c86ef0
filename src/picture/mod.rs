//! Picture References
//!
//! Classification of the entry form's picture value and the release
//! discipline for transient object URLs.

pub mod source;

pub use source::PictureSource;

/// The built-in placeholder shown until a picture is chosen; stored
/// verbatim, never uploaded.
pub const PLACEHOLDER_PICTURE: &str = "/assets/placeholder.png";

/// Where a picture value points.
///
/// The entry form's picture field holds the placeholder sentinel, a
/// transient local reference produced by the picker or camera, or a
/// durable remote URL once uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictureRef {
    /// The built-in "no picture chosen" sentinel.
    Placeholder,
    /// A `blob:` object URL backed by in-memory bytes; released when
    /// superseded or on teardown.
    ObjectUrl(String),
    /// A device-local temp path produced by a native capture flow.
    DevicePath(String),
    /// A durable download URL, safe to persist.
    Remote(String),
}

impl PictureRef {
    /// Classify a raw picture value.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("/assets") {
            PictureRef::Placeholder
        } else if value.starts_with("blob:") {
            PictureRef::ObjectUrl(value.to_string())
        } else if value.starts_with("http://") || value.starts_with("https://") {
            PictureRef::Remote(value.to_string())
        } else {
            PictureRef::DevicePath(value.to_string())
        }
    }

    /// The raw value, as held in the form field.
    pub fn as_str(&self) -> &str {
        match self {
            PictureRef::Placeholder => PLACEHOLDER_PICTURE,
            PictureRef::ObjectUrl(url)
            | PictureRef::DevicePath(url)
            | PictureRef::Remote(url) => url,
        }
    }

    /// True when the value still points at a local, non-durable resource
    /// and must be uploaded before the entry document is written.
    pub fn needs_upload(&self) -> bool {
        matches!(self, PictureRef::ObjectUrl(_) | PictureRef::DevicePath(_))
    }

    /// The object URL to release when this value is superseded or torn
    /// down. Only in-memory object URLs are ever released.
    pub fn revocation(&self) -> Option<&str> {
        match self {
            PictureRef::ObjectUrl(url) => Some(url),
            _ => None,
        }
    }
}

/// Release the in-memory object URL behind `picture`, if it holds one.
pub fn release(picture: &PictureRef) {
    if let Some(url) = picture.revocation() {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placeholder() {
        assert_eq!(PictureRef::parse(PLACEHOLDER_PICTURE), PictureRef::Placeholder);
        assert_eq!(PictureRef::parse("/assets/other.png"), PictureRef::Placeholder);
    }

    #[test]
    fn test_parse_object_url() {
        let parsed = PictureRef::parse("blob:https://app.example/uuid");
        assert_eq!(
            parsed,
            PictureRef::ObjectUrl("blob:https://app.example/uuid".to_string())
        );
    }

    #[test]
    fn test_parse_remote() {
        assert_eq!(
            PictureRef::parse("https://cdn.example/p.png"),
            PictureRef::Remote("https://cdn.example/p.png".to_string())
        );
        assert_eq!(
            PictureRef::parse("http://cdn.example/p.png"),
            PictureRef::Remote("http://cdn.example/p.png".to_string())
        );
    }

    #[test]
    fn test_parse_device_path() {
        let parsed = PictureRef::parse("capacitor://localhost/_capacitor_file_/photo.jpg");
        assert!(matches!(parsed, PictureRef::DevicePath(_)));
    }

    #[test]
    fn test_needs_upload() {
        assert!(!PictureRef::Placeholder.needs_upload());
        assert!(!PictureRef::Remote("https://x".to_string()).needs_upload());
        assert!(PictureRef::ObjectUrl("blob:x".to_string()).needs_upload());
        assert!(PictureRef::DevicePath("file:///tmp/p.jpg".to_string()).needs_upload());
    }

    #[test]
    fn test_only_object_urls_are_revocable() {
        assert_eq!(PictureRef::Placeholder.revocation(), None);
        assert_eq!(PictureRef::Remote("https://x".to_string()).revocation(), None);
        assert_eq!(PictureRef::DevicePath("/tmp/p.jpg".to_string()).revocation(), None);
        assert_eq!(
            PictureRef::ObjectUrl("blob:x".to_string()).revocation(),
            Some("blob:x")
        );
    }

    #[test]
    fn test_as_str_round_trips() {
        for raw in [
            PLACEHOLDER_PICTURE,
            "blob:https://app.example/uuid",
            "https://cdn.example/p.png",
            "file:///tmp/p.jpg",
        ] {
            assert_eq!(PictureRef::parse(raw).as_str(), raw);
        }
    }
}
