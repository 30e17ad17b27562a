//! Lint pass over a loaded adventure.
//!
//! Reports dangling choice targets and implausible difficulty classes.
//! None of these stop play: unknown targets re-root to `start` at runtime.

use super::{Adventure, DEATH_SCENE};

/// Highest DC that is still considered sensible.
const MAX_DC: i32 = 30;

/// A warning or error found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Scene id where the issue was found.
    pub scene: String,
    /// Human-readable description.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.scene, self.message)
    }
}

/// Validate an adventure, returning issues sorted by scene id.
pub fn validate_adventure(adventure: &Adventure) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Err(e) = adventure.ensure_playable() {
        issues.push(ValidationIssue {
            scene: "(adventure)".to_string(),
            message: e.to_string(),
            is_error: true,
        });
    }

    for (id, scene) in &adventure.scenes {
        for (index, choice) in scene.choices.iter().enumerate() {
            if !is_known_target(adventure, &choice.next) {
                issues.push(warning(
                    id,
                    format!("choice {index} leads to unknown scene '{}'", choice.next),
                ));
            }
            if let Some(check) = &choice.check {
                if !is_known_target(adventure, choice.fail_target()) {
                    issues.push(warning(
                        id,
                        format!(
                            "choice {index} fails to unknown scene '{}'",
                            choice.fail_target()
                        ),
                    ));
                }
                if !(1..=MAX_DC).contains(&check.dc) {
                    issues.push(warning(
                        id,
                        format!("choice {index} has unusual DC {}", check.dc),
                    ));
                }
            }
        }
    }

    issues.sort_by(|a, b| a.scene.cmp(&b.scene).then(a.message.cmp(&b.message)));
    issues
}

fn is_known_target(adventure: &Adventure, id: &str) -> bool {
    // A missing death scene has a built-in stand-in; a missing defeat scene does not.
    adventure.contains(id) || id == DEATH_SCENE
}

fn warning(scene: &str, message: String) -> ValidationIssue {
    ValidationIssue {
        scene: scene.to_string(),
        message,
        is_error: false,
    }
}
