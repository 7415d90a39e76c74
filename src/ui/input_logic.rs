use super::ScreenId;

/// Screen shown after one press on `current`.
pub fn next_screen(current: ScreenId) -> ScreenId {
    ScreenId::from_index(current.index() + 1)
}
