use chrono::NaiveDate;

/// Calendar format used both by `<input type="date">` and the detail pages.
const ISO_DATE: &str = "%Y-%m-%d";

/// Format an optional release date for display, `None` when unset.
#[must_use]
pub fn format_release_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(ISO_DATE).to_string())
}

/// Parse a release date submitted by a form.
///
/// Empty or malformed input yields `None`; a bad date never fails the request.
#[must_use]
pub fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match NaiveDate::parse_from_str(raw, ISO_DATE) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::debug!(value = raw, error = %err, "ignoring malformed release date");
            None
        }
    }
}
