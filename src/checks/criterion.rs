/// Outcome for one policy dimension of one package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,

    /// A concern worth surfacing that is not by itself a hard failure.
    /// Whether a warning fails the run depends on the criterion that
    /// raised it.
    Warn,
}

impl Verdict {
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }
}
