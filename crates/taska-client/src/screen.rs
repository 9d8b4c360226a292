//! Screen shown after a project has been sent

pub const SUCCESS_TITLE: &str = "Проект отправлен!";
pub const SUCCESS_SUBTITLE: &str = "Мы свяжемся с вами в ближайшее время.";
pub const SUCCESS_BUTTON: &str = "На главную";

/// Confirmation screen with a single "home" action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessScreen {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
}

impl Default for SuccessScreen {
    fn default() -> Self {
        Self {
            title: SUCCESS_TITLE,
            subtitle: SUCCESS_SUBTITLE,
            button_text: SUCCESS_BUTTON,
        }
    }
}

impl SuccessScreen {
    /// Press the button, navigating with the caller's `on_back`
    pub fn press<F: FnOnce()>(&self, on_back: F) {
        on_back();
    }
}
