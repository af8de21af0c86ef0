//! Picture Source Selection
//!
//! The entry form's picture control is polymorphic over two capture
//! capabilities: the native camera flow inside the packaged mobile shell,
//! and a plain file picker everywhere else. The variant is selected once
//! at startup from the environment and provided via context, never
//! re-detected at call time.

use leptos::*;

/// Marker the packaged shell appends to its WebView user agent
const SHELL_UA_MARKER: &str = "DaybookShell";

/// How the entry form obtains a picture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureSource {
    /// Native capture flow (packaged mobile shell)
    Camera,
    /// Browser file picker
    FilePicker,
}

impl PictureSource {
    /// Detect the capability for this environment
    pub fn detect() -> Self {
        let user_agent = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        Self::from_user_agent(&user_agent)
    }

    /// Select the capture variant for the given user agent
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains(SHELL_UA_MARKER) {
            PictureSource::Camera
        } else {
            PictureSource::FilePicker
        }
    }

    /// Value for the file input's `capture` attribute. The camera variant
    /// asks the shell to open the native capture flow; the file picker
    /// leaves the attribute unset.
    pub fn capture_attr(&self) -> Option<&'static str> {
        match self {
            PictureSource::Camera => Some("environment"),
            PictureSource::FilePicker => None,
        }
    }
}

/// Select the picture source once and make it available to the page tree
pub fn provide_picture_source() {
    provide_context(PictureSource::detect());
}

/// The picture source selected at startup
pub fn use_picture_source() -> PictureSource {
    use_context::<PictureSource>().expect("PictureSource not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL_UA: &str =
        "Mozilla/5.0 (Linux; Android 14) AppleWebKit/537.36 Mobile Safari/537.36 DaybookShell/1.0";
    const BROWSER_UA: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 Safari/537.36";

    #[test]
    fn test_shell_user_agent_selects_camera() {
        assert_eq!(PictureSource::from_user_agent(SHELL_UA), PictureSource::Camera);
    }

    #[test]
    fn test_browser_user_agent_selects_file_picker() {
        assert_eq!(
            PictureSource::from_user_agent(BROWSER_UA),
            PictureSource::FilePicker
        );
        assert_eq!(PictureSource::from_user_agent(""), PictureSource::FilePicker);
    }

    #[test]
    fn test_capture_attr_only_set_for_camera() {
        assert_eq!(PictureSource::Camera.capture_attr(), Some("environment"));
        assert_eq!(PictureSource::FilePicker.capture_attr(), None);
    }
}
