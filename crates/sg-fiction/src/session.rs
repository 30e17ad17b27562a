//! Game session: the scene state machine.
//!
//! A [`GameSession`] owns everything about one playthrough: the loaded
//! adventure, the character, the player state, flags, the effects ledger,
//! the current scene, and the save slot. The caller drives it:
//!
//! 1. [`GameSession::resolve`] renders the current scene (applying its
//!    effects on the first visit and redirecting to `death` at zero hp),
//! 2. [`GameSession::choose`] selects one of the offered choices,
//! 3. for a choice with a check, [`GameSession::commit`] applies the rolled
//!    outcome once the front end has finished presenting it.
//!
//! While a check is awaiting its commit, `choose` and `resolve` are refused.

use std::time::{Duration, Instant};

use chrono::Utc;
use rand::rngs::StdRng;
use sg_mechanics::{Ability, Catalog, CheckResult, roll_check};

use crate::character::Character;
use crate::config::EngineConfig;
use crate::error::{FictionError, FictionResult};
use crate::narrator::render_text;
use crate::player::{FlagSet, PlayerState};
use crate::save::{SaveRecord, SaveStore, SavedCharacter, discard_save, peek_save};
use crate::scene::{
    Adventure, AppliedEffectsLedger, CheckSpec, DEATH_SCENE, START_SCENE, SceneDefinition,
    apply_effects,
};
use crate::source::AdventureSource;

/// How a terminal scene ended the playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The adventure was won.
    Victory,
    /// The adventure was lost.
    Defeat,
}

/// A choice as offered to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    /// Position in the scene's choice list; pass this to `choose`.
    pub index: usize,
    /// Button text.
    pub text: String,
    /// Check gating the transition, if any.
    pub check: Option<CheckSpec>,
}

/// A rendered scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneView {
    /// Id of the scene actually shown (after any redirect).
    pub scene_id: String,
    /// Text with tokens substituted.
    pub text: String,
    /// Choices whose requirements hold. Empty on terminal scenes.
    pub choices: Vec<ChoiceView>,
    /// Set when this scene ends the playthrough.
    pub ending: Option<Ending>,
}

/// A rolled check waiting to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheck {
    /// Text of the choice that triggered the check.
    pub choice_text: String,
    /// The roll and its classification.
    pub result: CheckResult,
    /// Scene the outcome routes to.
    pub target: String,
}

/// Result of selecting a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The session moved straight to a new scene.
    Moved(SceneView),
    /// A check was rolled; call `commit` to apply it.
    Rolling(PendingCheck),
}

#[derive(Debug, Clone)]
enum Phase {
    Ready,
    AwaitingOutcome(PendingCheck),
}

/// One playthrough of an adventure.
pub struct GameSession<S: SaveStore> {
    config: EngineConfig,
    store: S,
    adventure: Adventure,
    adventure_ref: String,
    death_fallback: SceneDefinition,
    character: Character,
    player: PlayerState,
    flags: FlagSet,
    ledger: AppliedEffectsLedger,
    scene_id: String,
    phase: Phase,
    finished: bool,
    elapsed_before: Duration,
    started: Instant,
    rng: StdRng,
}

impl<S: SaveStore> GameSession<S> {
    /// Begin a new playthrough.
    ///
    /// Any existing save is discarded first. If the adventure fails to load,
    /// nothing is written and the error is returned.
    pub fn begin(
        source: &dyn AdventureSource,
        reference: &str,
        character: Character,
        mut store: S,
        config: EngineConfig,
    ) -> FictionResult<Self> {
        discard_save(&mut store);
        let adventure = load_playable(source, reference)?;
        let player = character.new_player();

        let mut session = Self {
            rng: config.rng(),
            config,
            store,
            adventure,
            adventure_ref: reference.to_string(),
            death_fallback: SceneDefinition::fallback_death(),
            character,
            player,
            flags: FlagSet::new(),
            ledger: AppliedEffectsLedger::new(),
            scene_id: START_SCENE.to_string(),
            phase: Phase::Ready,
            finished: false,
            elapsed_before: Duration::ZERO,
            started: Instant::now(),
        };
        tracing::info!(reference, character = %session.character.name, "adventure started");
        session.save();
        Ok(session)
    }

    /// Resume the saved playthrough, if there is a usable one.
    ///
    /// A corrupt or outdated save is cleared and `Ok(None)` returned. If the
    /// saved adventure can no longer be loaded, the save is cleared and the
    /// load failure returned.
    pub fn resume(
        source: &dyn AdventureSource,
        mut store: S,
        catalog: &Catalog,
        config: EngineConfig,
    ) -> FictionResult<Option<Self>> {
        let Some(record) = peek_save(&mut store, config.save_version) else {
            return Ok(None);
        };

        let adventure = match load_playable(source, &record.adventure_ref) {
            Ok(adventure) => adventure,
            Err(e) => {
                discard_save(&mut store);
                return Err(e);
            }
        };

        let character = Character {
            name: record.character.name.clone(),
            race: lookup(record.character.race_id.as_deref(), |id| catalog.race(id)),
            class: lookup(record.character.class_id.as_deref(), |id| catalog.class(id)),
        };

        tracing::info!(reference = %record.adventure_ref, scene = %record.scene_id, "adventure resumed");
        Ok(Some(Self {
            rng: config.rng(),
            config,
            store,
            adventure,
            adventure_ref: record.adventure_ref,
            death_fallback: SceneDefinition::fallback_death(),
            character,
            player: record.player,
            flags: record.flags,
            ledger: record.applied_effects,
            scene_id: record.scene_id,
            phase: Phase::Ready,
            finished: false,
            elapsed_before: Duration::from_millis(record.elapsed_ms),
            started: Instant::now(),
        }))
    }

    /// Render the current scene.
    pub fn resolve(&mut self) -> FictionResult<SceneView> {
        self.ensure_ready()?;

        loop {
            if !self.adventure.contains(&self.scene_id) && self.scene_id != DEATH_SCENE {
                tracing::warn!(scene = %self.scene_id, "unknown scene, returning to start");
                self.scene_id = START_SCENE.to_string();
                continue;
            }

            let scene = self
                .adventure
                .scene(&self.scene_id)
                .unwrap_or(&self.death_fallback);

            apply_effects(
                &self.scene_id,
                scene,
                &mut self.player,
                &mut self.flags,
                &mut self.ledger,
            );

            if self.player.is_down() && !scene.is_terminal() && self.scene_id != DEATH_SCENE {
                tracing::debug!(scene = %self.scene_id, "hit points exhausted");
                self.scene_id = DEATH_SCENE.to_string();
                continue;
            }

            let view = self.render(scene);
            if view.ending.is_some() {
                self.finish();
            }
            return Ok(view);
        }
    }

    /// Select a choice of the current scene by its index.
    pub fn choose(&mut self, index: usize) -> FictionResult<ChoiceOutcome> {
        self.ensure_ready()?;
        if self.finished {
            return Err(FictionError::PlaythroughOver);
        }

        let choice = self
            .current_scene()
            .and_then(|scene| scene.choices.get(index))
            .ok_or(FictionError::InvalidChoice(index))?
            .clone();
        if !choice.requires.is_satisfied(&self.player, &self.flags) {
            return Err(FictionError::ChoiceUnavailable(index));
        }

        let Some(check) = choice.check else {
            return self.transition(&choice.next).map(ChoiceOutcome::Moved);
        };

        let modifier = self.modifier(check.ability);
        let result = roll_check(&mut self.rng, check.ability, modifier, check.dc);
        let target = if result.is_success() {
            choice.next.clone()
        } else {
            choice.fail_target().to_string()
        };
        let pending = PendingCheck {
            choice_text: choice.text,
            result,
            target,
        };
        self.phase = Phase::AwaitingOutcome(pending.clone());
        Ok(ChoiceOutcome::Rolling(pending))
    }

    /// Apply the rolled check and move to its target scene.
    pub fn commit(&mut self) -> FictionResult<SceneView> {
        match std::mem::replace(&mut self.phase, Phase::Ready) {
            Phase::Ready => Err(FictionError::NoPendingCheck),
            Phase::AwaitingOutcome(pending) => self.transition(&pending.target),
        }
    }

    /// Move to a scene, persist, and render it.
    pub fn transition(&mut self, target: &str) -> FictionResult<SceneView> {
        self.ensure_ready()?;
        tracing::debug!(from = %self.scene_id, to = target, "transition");
        self.scene_id = target.to_string();
        self.save();
        self.resolve()
    }

    /// Persist the playthrough. Failures are logged, never returned.
    ///
    /// Does nothing once a terminal scene has been reached.
    pub fn save(&mut self) {
        if self.finished {
            return;
        }
        let payload = match self.snapshot().encode() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "could not encode save");
                return;
            }
        };
        if let Err(e) = self.store.write(&payload) {
            tracing::error!(error = %e, "could not write save");
        }
    }

    /// Build the save record for the current state.
    pub fn snapshot(&self) -> SaveRecord {
        SaveRecord {
            version: self.config.save_version,
            player: self.player.clone(),
            flags: self.flags.clone(),
            scene_id: self.scene_id.clone(),
            adventure_ref: self.adventure_ref.clone(),
            adventure_title: self.adventure.title.clone(),
            elapsed_ms: u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
            applied_effects: self.ledger.clone(),
            character: SavedCharacter {
                name: self.character.name.clone(),
                race_id: self.character.race.as_ref().map(|r| r.id.clone()),
                class_id: self.character.class.as_ref().map(|c| c.id.clone()),
            },
            saved_at: Utc::now(),
        }
    }

    /// Current derived score of an ability, items included.
    pub fn stat(&self, ability: Ability) -> i32 {
        self.character.stat_sources(&self.player.inventory).stat(ability)
    }

    /// Current check modifier of an ability, items included.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.character
            .stat_sources(&self.player.inventory)
            .modifier(ability)
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The story flags.
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// The effects ledger.
    pub fn ledger(&self) -> &AppliedEffectsLedger {
        &self.ledger
    }

    /// The character.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// The loaded adventure.
    pub fn adventure(&self) -> &Adventure {
        &self.adventure
    }

    /// The reference the adventure was loaded from.
    pub fn adventure_ref(&self) -> &str {
        &self.adventure_ref
    }

    /// Current scene id.
    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    /// The check awaiting commit, if any.
    pub fn pending_check(&self) -> Option<&PendingCheck> {
        match &self.phase {
            Phase::Ready => None,
            Phase::AwaitingOutcome(pending) => Some(pending),
        }
    }

    /// Whether a terminal scene has been reached.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Total play time across resumes.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_before + self.started.elapsed()
    }

    /// The save slot.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn ensure_ready(&self) -> FictionResult<()> {
        match self.phase {
            Phase::Ready => Ok(()),
            Phase::AwaitingOutcome(_) => Err(FictionError::AwaitingOutcome),
        }
    }

    fn current_scene(&self) -> Option<&SceneDefinition> {
        self.adventure.scene(&self.scene_id).or_else(|| {
            (self.scene_id == DEATH_SCENE).then_some(&self.death_fallback)
        })
    }

    fn render(&self, scene: &SceneDefinition) -> SceneView {
        let ending = if scene.victory {
            Some(Ending::Victory)
        } else if scene.defeat {
            Some(Ending::Defeat)
        } else {
            None
        };

        let choices = if ending.is_some() {
            Vec::new()
        } else {
            scene
                .choices
                .iter()
                .enumerate()
                .filter(|(_, c)| c.requires.is_satisfied(&self.player, &self.flags))
                .map(|(index, c)| ChoiceView {
                    index,
                    text: c.text.clone(),
                    check: c.check,
                })
                .collect()
        };

        SceneView {
            scene_id: self.scene_id.clone(),
            text: render_text(&scene.text, &self.player),
            choices,
            ending,
        }
    }

    fn finish(&mut self) {
        if !self.finished {
            tracing::info!(scene = %self.scene_id, "adventure finished");
        }
        self.finished = true;
        discard_save(&mut self.store);
    }
}

/// Load through any source, refusing adventures the state machine cannot
/// enter.
fn load_playable(source: &dyn AdventureSource, reference: &str) -> FictionResult<Adventure> {
    let adventure = source.load(reference)?;
    adventure
        .ensure_playable()
        .map_err(|e| FictionError::LoadFailure {
            reference: reference.to_string(),
            reason: e.to_string(),
        })?;
    Ok(adventure)
}

fn lookup<'c, T: Clone + 'c, E: std::fmt::Display>(
    id: Option<&str>,
    find: impl FnOnce(&str) -> Result<&'c T, E>,
) -> Option<T> {
    let id = id?;
    match find(id) {
        Ok(found) => Some(found.clone()),
        Err(e) => {
            tracing::warn!(error = %e, "saved selection missing from catalog");
            None
        }
    }
}
