/// State of an HTML checkbox after form submission.
///
/// Browsers omit unchecked boxes entirely and send `on` for checked ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkbox {
    Unchecked,
    Checked,
}

impl Checkbox {
    /// Markers accepted as "checked", compared case-insensitively.
    const CHECKED_MARKERS: [&'static str; 4] = ["on", "true", "1", "yes"];

    /// Map a raw form value onto a checkbox state.
    #[must_use]
    pub fn from_form(raw: Option<&str>) -> Self {
        let Some(value) = raw.map(str::trim) else {
            return Self::Unchecked;
        };

        if Self::CHECKED_MARKERS
            .iter()
            .any(|marker| value.eq_ignore_ascii_case(marker))
        {
            Self::Checked
        } else {
            if !value.is_empty() {
                tracing::debug!(value, "unrecognized checkbox value treated as unchecked");
            }
            Self::Unchecked
        }
    }

    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }
}

/// Parse a record identifier taken from a URL path segment.
#[must_use]
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Parse an optional foreign-key reference from a `<select>` value.
///
/// An empty string means "no reference", never zero.
#[must_use]
pub fn parse_optional_id(raw: Option<&str>) -> Option<i32> {
    let value = raw.map(str::trim).filter(|s| !s.is_empty())?;
    let id = parse_id(value);
    if id.is_none() {
        tracing::debug!(value, "ignoring non-numeric reference id");
    }
    id
}

/// Normalize optional free text: blank input is stored as `NULL`.
#[must_use]
pub fn parse_optional_text(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}
