/// Read-only view of the analysis configuration the writer depends on.
pub trait LineNumberSettings {
    /// Whether source line numbers should be reported when a statement has one.
    fn line_numbers_enabled(&self) -> bool;
}

impl LineNumberSettings for bool {
    fn line_numbers_enabled(&self) -> bool {
        *self
    }
}
