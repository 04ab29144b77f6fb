use crate::{FormatVersion, DEFAULT_SINCE};
use anyhow::{anyhow, Result};

/// The versions across which a field is persisted: `since` inclusive, `until` exclusive.
/// An absent `until` means the field was never retired.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ValidityWindow {
    since: FormatVersion,
    until: Option<FormatVersion>,
}

impl Default for ValidityWindow {
    fn default() -> Self {
        Self {
            since: DEFAULT_SINCE,
            until: None,
        }
    }
}

impl ValidityWindow {
    pub fn new(since: FormatVersion, until: Option<FormatVersion>) -> Result<Self> {
        if *since == 0 {
            return Err(anyhow!("since must be positive"));
        }
        if let Some(until) = until {
            if *until == 0 {
                return Err(anyhow!("until must be positive"));
            }
            if since > until {
                return Err(anyhow!("since {} is after until {}", since, until));
            }
        }
        Ok(Self { since, until })
    }

    pub fn since(&self) -> FormatVersion {
        self.since
    }

    pub fn until(&self) -> Option<FormatVersion> {
        self.until
    }

    /// Whether code at `version` emits this field.
    pub fn includes_on_write(&self, version: FormatVersion) -> bool {
        self.since <= version && self.wanted_by(version)
    }

    /// Whether a stream tagged `serialized_version` holds bytes for this field.
    ///
    /// This is a fact about the writer, so it is decided exactly like [`Self::includes_on_write`]
    /// evaluated at the writer's version.
    ///
    /// Checking `since` alone is not enough: a writer at or past `until` omits the field, and
    /// a reader expecting it there would consume the next field's bytes, which breaks
    /// same-version round trips for any version at or past `until`.
    pub fn present_in(&self, serialized_version: FormatVersion) -> bool {
        self.includes_on_write(serialized_version)
    }

    /// Whether code at `current_version` still materializes this field.
    pub fn wanted_by(&self, current_version: FormatVersion) -> bool {
        match self.until {
            None => true,
            Some(until) => current_version < until,
        }
    }
}
