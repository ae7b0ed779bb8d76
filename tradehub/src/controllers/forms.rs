use tracing::debug;

use crate::utils::is_blank;

use super::{Shell, ToastKind};

pub const REQUIRED_MISSING: &str = "Please fill in all required fields";
pub const ERROR_CLASS: &str = "error";

pub trait FormField {
    fn value(&self) -> String;
    fn set_invalid(&self, invalid: bool);
}

/// Marks every blank field and reports whether all of them were filled.
pub fn validate_required<F: FormField>(fields: &[F]) -> bool {
    let mut valid = true;
    for field in fields {
        let blank = is_blank(&field.value());
        field.set_invalid(blank);
        valid &= !blank;
    }
    valid
}

pub struct FormGuard<S> {
    shell: S,
}

impl<S: Shell> FormGuard<S> {
    pub fn new(shell: S) -> Self {
        Self { shell }
    }

    /// `false` means the submission must be blocked.
    pub fn on_submit<F: FormField>(&self, required: &[F]) -> bool {
        if validate_required(required) {
            return true;
        }
        debug!("Blocking form submission, required fields are empty");
        self.shell.toast(REQUIRED_MISSING, ToastKind::Error);
        false
    }
}
