use chrono::Local;
use site_core::countdown::current_year;
use site_core::SEL_YEAR;

use crate::dom;
use crate::error::UiError;

/// Stamp the current year once; pages left open over New Year keep the old one.
pub fn init() -> Result<(), UiError> {
    let document = dom::document()?;
    let year = current_year(&Local::now());
    for span in dom::select_all(&document, SEL_YEAR) {
        span.set_text_content(Some(&year));
    }
    Ok(())
}
