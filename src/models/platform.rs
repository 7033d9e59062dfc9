//! Release variants offered on the download section.

/// CPU architecture of a downloadable APK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// 64-bit ARM (`arm64-v8a`)
    Arm64,
    /// 32-bit ARM (`armeabi-v7a`)
    Armeabi,
    /// x86_64 emulators and Chromebooks
    X86,
}

impl Platform {
    /// Every platform, in the order the buttons appear on the page.
    pub const ALL: [Platform; 3] = [Platform::Arm64, Platform::Armeabi, Platform::X86];

    /// ABI name shown in log messages.
    pub fn key(self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::Armeabi => "armeabi",
            Self::X86 => "x86",
        }
    }

    /// ID of the download button for this platform.
    pub fn button_id(self) -> &'static str {
        match self {
            Self::Arm64 => "btn-arm64",
            Self::Armeabi => "btn-armeabi",
            Self::X86 => "btn-x86",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_key() {
        assert_eq!(Platform::Arm64.to_string(), "arm64");
        assert_eq!(Platform::Armeabi.to_string(), "armeabi");
        assert_eq!(Platform::X86.to_string(), "x86");
    }

    #[test]
    fn test_button_ids() {
        assert_eq!(Platform::Arm64.button_id(), "btn-arm64");
        assert_eq!(Platform::Armeabi.button_id(), "btn-armeabi");
        assert_eq!(Platform::X86.button_id(), "btn-x86");
    }
}
