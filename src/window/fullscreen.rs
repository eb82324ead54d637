use crate::foundation::error::{GuillocheError, GuillocheResult};

/// A surface that can switch between windowed and fullscreen presentation.
pub trait DisplayMode {
    /// Whether the surface is currently fullscreen.
    fn is_fullscreen(&self) -> bool;
    /// Request windowed (`false`) or fullscreen (`true`) presentation.
    fn set_fullscreen(&mut self, fullscreen: bool) -> GuillocheResult<()>;
}

/// Flip the presentation mode and return the mode now in effect.
///
/// A failed switch is rolled back to the previous mode. Only a failure of the rollback is
/// reported as an error; the caller treats it as fatal.
pub fn toggle_fullscreen(display: &mut dyn DisplayMode) -> GuillocheResult<bool> {
    let was = display.is_fullscreen();
    match display.set_fullscreen(!was) {
        Ok(()) => {
            tracing::info!(fullscreen = !was, "video mode switched");
            Ok(!was)
        }
        Err(err) => {
            tracing::warn!("fullscreen toggle failed, restoring previous mode: {err}");
            display.set_fullscreen(was).map_err(|revert| {
                GuillocheError::display(format!(
                    "fullscreen toggle failed ({err}) and the previous mode could not be restored ({revert})"
                ))
            })?;
            Ok(was)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/window/fullscreen.rs"]
mod tests;
