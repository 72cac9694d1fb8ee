use anyhow::Result;

use aster_core::whole_days_between_ms;
use aster_settings::SettingsStore;

/// Store-review collaborator seam: a fire-and-forget OS prompt with no
/// observable result.
pub trait ReviewPrompter {
    fn request_review(&self);
}

/// Decides whether to surface the rating prompt on a given day.
///
/// Prompts fall on days where `days_since_install / 3` is a power of two:
/// 3, 6, 12, 24, 48, ... — a rapidly thinning cadence. Missing install data
/// and installs that already rated never prompt.
pub fn should_prompt_for_rating(
    installed_at_unix_ms: Option<u64>,
    now_unix_ms: u64,
    has_rated: bool,
) -> bool {
    if has_rated {
        return false;
    }
    let Some(installed_at_unix_ms) = installed_at_unix_ms else {
        return false;
    };
    let days = whole_days_between_ms(installed_at_unix_ms, now_unix_ms);
    if days == 0 || days % 3 != 0 {
        return false;
    }
    let x = days / 3;
    (x & (x - 1)) == 0
}

/// Fires the review prompt when today qualifies and the scene is active,
/// recording the rating flag so the install never prompts again.
///
/// Returns whether the prompt was requested.
pub fn request_review_and_record(
    settings: &mut SettingsStore,
    now_unix_ms: u64,
    scene_active: bool,
    prompter: &dyn ReviewPrompter,
) -> Result<bool> {
    if !scene_active {
        return Ok(false);
    }
    if !should_prompt_for_rating(
        Some(settings.installed_at_unix_ms()),
        now_unix_ms,
        settings.has_rated_app(),
    ) {
        return Ok(false);
    }
    prompter.request_review();
    settings.record_has_rated_app()?;
    Ok(true)
}
