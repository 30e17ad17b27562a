//! Token substitution in scene text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::player::PlayerState;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(name|race|class)\}\}").expect("valid token pattern"));

/// Replace `{{name}}`, `{{race}}` and `{{class}}` with the player's values.
///
/// Substitution is a single pass: tokens inside substituted values are left
/// as they are.
pub fn render_text(template: &str, player: &PlayerState) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "name" => player.name.clone(),
            "race" => player.race.clone(),
            _ => player.class.clone(),
        })
        .into_owned()
}
