/// Submit control of a form.
///
/// Disabled while its request is in flight. Submit handlers hold it by `&mut`
/// for the whole request, so a second submit through the same control cannot
/// start. Re-enabled only when the request fails; after a success the page
/// navigates away with the control still disabled.
#[derive(Debug, Clone)]
pub struct SubmitButton {
    idle_label: &'static str,
    busy_label: &'static str,
    disabled: bool,
}

impl SubmitButton {
    pub fn new(idle_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            idle_label,
            busy_label,
            disabled: false,
        }
    }

    pub fn login() -> Self {
        Self::new("Login", "Logging in...")
    }

    pub fn register() -> Self {
        Self::new("Register", "Registering...")
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn label(&self) -> &'static str {
        if self.disabled {
            self.busy_label
        } else {
            self.idle_label
        }
    }

    pub fn begin(&mut self) {
        self.disabled = true;
    }

    pub fn reset(&mut self) {
        self.disabled = false;
    }
}
