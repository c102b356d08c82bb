/// Device trust classification derived from a caller-asserted posture string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevicePosture {
    Trusted,
    Compliant,
    /// Anything else, including unknown values.
    Untrusted,
}

impl DevicePosture {
    /// Case-insensitive; unrecognised strings are untrusted.
    pub fn classify(posture: &str) -> Self {
        let p = posture.trim();
        if p.eq_ignore_ascii_case("trusted") {
            DevicePosture::Trusted
        } else if p.eq_ignore_ascii_case("compliant") {
            DevicePosture::Compliant
        } else {
            DevicePosture::Untrusted
        }
    }

    pub fn is_trusted(&self) -> bool {
        !matches!(self, DevicePosture::Untrusted)
    }
}
