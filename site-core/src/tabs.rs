//! Menu tab selection.
//!
//! Buttons are exclusive within their own group, but panels are matched by
//! category across the whole page, so a tab in one group can reveal panels
//! that sit under another group.

/// Active flag for each button of a group after `clicked` is pressed.
pub fn button_states(count: usize, clicked: usize) -> Vec<bool> {
    (0..count).map(|idx| idx == clicked).collect()
}

/// Active flag for each panel (by its category) after selecting `category`.
pub fn panel_states<'a, I>(panel_categories: I, category: Option<&str>) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    panel_categories
        .into_iter()
        .map(|panel| panel == category)
        .collect()
}
