//! Persisted theme preference
//!
//! The theme engine itself is the renderer's concern; the core only owns the
//! persisted preference under the second named storage entry.

use shared::Theme;

use crate::error::ClientResult;
use crate::storage::{KeyValueStore, THEME_KEY};

/// Read the persisted theme; absence or an unknown value means the default.
pub fn load_theme<S: KeyValueStore>(store: &S) -> Theme {
    store
        .get(THEME_KEY)
        .map(|code| Theme::from_code(&code))
        .unwrap_or_default()
}

/// Persist a theme choice.
pub fn save_theme<S: KeyValueStore>(store: &mut S, theme: Theme) -> ClientResult<()> {
    store.set(THEME_KEY, theme.code())
}
