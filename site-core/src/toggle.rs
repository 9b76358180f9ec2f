//! "Open one, close the rest" over any set of controlled regions.
//!
//! Dropdowns, accordion items and modals all keep their open state on the
//! element itself; implementors of [`Region`] read and write that state.

pub trait Region {
    fn is_open(&self) -> bool;
    fn set_open(&self, open: bool);
}

pub fn close_all<R: Region>(regions: &[R]) {
    for region in regions {
        region.set_open(false);
    }
}

/// Close every region, then open `target` unless it was already open.
///
/// Returns the target's resulting state, or `None` if `target` is out of
/// range (nothing is touched in that case).
pub fn toggle_exclusive<R: Region>(regions: &[R], target: usize) -> Option<bool> {
    let was_open = regions.get(target)?.is_open();
    close_all(regions);
    if !was_open {
        regions[target].set_open(true);
    }
    Some(!was_open)
}

pub fn open_count<R: Region>(regions: &[R]) -> usize {
    regions.iter().filter(|r| r.is_open()).count()
}
