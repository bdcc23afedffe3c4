use serde::{Deserialize, Serialize};

/// Developer-mode toggles, persisted as one flat document.
///
/// Every flag defaults to `false` independently, so partially written
/// documents merge rather than reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevSettings {
    /// Skip the splash screen on startup.
    #[serde(default)]
    pub skip_splash_screen: bool,
    /// Skip the loading screen between steps.
    #[serde(default)]
    pub skip_loading_screen: bool,
    /// Overlay debug information on the form.
    #[serde(default)]
    pub show_debug_info: bool,
    /// Auto-fill the form from the selected dev entry.
    #[serde(default)]
    pub auto_fill_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::DevSettings;

    #[test]
    fn absent_flags_fall_back_individually() {
        let parsed: DevSettings =
            serde_json::from_str(r#"{"showDebugInfo":true}"#).unwrap_or_else(|_| unreachable!());

        assert!(parsed.show_debug_info);
        assert!(!parsed.skip_splash_screen);
        assert!(!parsed.skip_loading_screen);
        assert!(!parsed.auto_fill_enabled);
    }
}
