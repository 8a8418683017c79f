//! Application layer: every user-level mutation as a store transaction.
//!
//! `AppContext` replaces the original notes app's global `currentGameId` /
//! whole-store globals with an explicit context object: the active game id
//! and the store handle travel together, and each operation is a full
//! load → mutate → stamp `updated_at` → save cycle. Single user, single
//! thread; the save call is atomic from the caller's perspective.

use chrono::Utc;
use thiserror::Error;

use crate::core::{Game, GameId, Hints, IdGen, NotesConfig, Round, TeamSide};
use crate::engine::{AnswerParse, EngineError};
use crate::store::{GameStore, StoreError};

/// Errors surfaced to the UI shell.
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("no game with id {0}")]
    GameNotFound(GameId),

    #[error("no game is open")]
    NoActiveGame,

    #[error("the {side} does not track guessed terms")]
    NoGuessedTerms { side: TeamSide },

    #[error("guessed-term slot {slot} out of range (have {len})")]
    TermSlotOutOfRange { slot: usize, len: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// List-view entry: enough to render a game card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

/// The application context handed to every UI handler.
pub struct AppContext<S: GameStore> {
    store: S,
    config: NotesConfig,
    ids: IdGen,
    active: Option<GameId>,
}

impl<S: GameStore> AppContext<S> {
    /// Context over a store, classic variant, entropy-seeded ids.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: NotesConfig::classic(),
            ids: IdGen::from_entropy(),
            active: None,
        }
    }

    /// Track a different game variant.
    #[must_use]
    pub fn with_config(mut self, config: NotesConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific id generator (deterministic in tests).
    #[must_use]
    pub fn with_ids(mut self, ids: IdGen) -> Self {
        self.ids = ids;
        self
    }

    /// The variant being tracked.
    #[must_use]
    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// The currently open game, if any.
    #[must_use]
    pub fn active_game(&self) -> Option<&GameId> {
        self.active.as_ref()
    }

    // === Game list operations ===

    /// Create a game and open it. A blank or missing name gets the
    /// date-stamped default.
    pub fn create_game(&mut self, name: Option<&str>) -> Result<GameId, NotesError> {
        let now = Utc::now();
        let id = self.ids.next_id(now);

        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => Game::default_name(now),
        };

        let mut games = self.store.load();
        games.insert(id.clone(), Game::new(id.clone(), name, now, &self.config));
        self.store.save(&games)?;

        self.active = Some(id.clone());
        Ok(id)
    }

    /// Game summaries, most recently updated first.
    #[must_use]
    pub fn list_games(&self) -> Vec<GameSummary> {
        let games = self.store.load();
        let mut summaries: Vec<_> = games
            .values()
            .map(|game| GameSummary {
                id: game.id.clone(),
                name: game.name.clone(),
                created_at: game.created_at,
                updated_at: game.updated_at,
            })
            .collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        summaries
    }

    /// Open a game for detail-view operations.
    pub fn open_game(&mut self, id: &GameId) -> Result<Game, NotesError> {
        let games = self.store.load();
        let game = games
            .get(id)
            .cloned()
            .ok_or_else(|| NotesError::GameNotFound(id.clone()))?;
        self.active = Some(id.clone());
        Ok(game)
    }

    /// Fetch a game without opening it.
    pub fn fetch(&self, id: &GameId) -> Result<Game, NotesError> {
        self.store
            .load()
            .get(id)
            .cloned()
            .ok_or_else(|| NotesError::GameNotFound(id.clone()))
    }

    /// Return to the list view.
    pub fn close_game(&mut self) {
        self.active = None;
    }

    /// Rename a game. A blank name falls back to `"Game"`.
    pub fn rename_game(&mut self, id: &GameId, name: &str) -> Result<(), NotesError> {
        let mut games = self.store.load();
        let game = games
            .get_mut(id)
            .ok_or_else(|| NotesError::GameNotFound(id.clone()))?;

        let name = name.trim();
        game.name = if name.is_empty() { "Game".to_owned() } else { name.to_owned() };
        game.touch(Utc::now());

        self.store.save(&games)?;
        Ok(())
    }

    /// Delete one game.
    pub fn delete_game(&mut self, id: &GameId) -> Result<(), NotesError> {
        let mut games = self.store.load();
        if games.remove(id).is_none() {
            return Err(NotesError::GameNotFound(id.clone()));
        }
        self.store.save(&games)?;

        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        Ok(())
    }

    /// Delete a batch of games. Ids not present are skipped.
    pub fn delete_games(&mut self, ids: &[GameId]) -> Result<(), NotesError> {
        let mut games = self.store.load();
        for id in ids {
            games.remove(id);
        }
        self.store.save(&games)?;

        if self.active.as_ref().is_some_and(|active| ids.contains(active)) {
            self.active = None;
        }
        Ok(())
    }

    // === Detail-view operations (require an open game) ===

    /// Set a hint word, on the working round (`round_index: None`) or a
    /// finalized round. Input is trimmed.
    pub fn set_hint(
        &mut self,
        side: TeamSide,
        round_index: Option<usize>,
        hint_index: usize,
        text: &str,
    ) -> Result<(), NotesError> {
        let text = text.trim().to_owned();
        self.mutate_active(|game, _| {
            game.team_mut(side).set_hint(round_index, hint_index, text)?;
            Ok(())
        })
    }

    /// Set one of the opponent's guessed-term slots.
    pub fn set_guessed_term(
        &mut self,
        side: TeamSide,
        slot: usize,
        text: &str,
    ) -> Result<(), NotesError> {
        let text = text.to_owned();
        self.mutate_active(|game, _| {
            let terms = game
                .team_mut(side)
                .guessed_terms
                .as_mut()
                .ok_or(NotesError::NoGuessedTerms { side })?;

            let len = terms.len();
            let term = terms
                .get_mut(slot)
                .ok_or(NotesError::TermSlotOutOfRange { slot, len })?;
            *term = text;
            Ok(())
        })
    }

    /// Apply a drag outcome: move the hint at `from_col` to `to_col`,
    /// swapping with any occupant. A historical round also gets its stored
    /// answer refreshed.
    pub fn place_hint(
        &mut self,
        side: TeamSide,
        round_index: Option<usize>,
        from_col: u8,
        to_col: u8,
    ) -> Result<(), NotesError> {
        self.mutate_active(|game, config| {
            let team = game.team_mut(side);
            match round_index {
                Some(index) => team.swap_round_columns(config, index, from_col, to_col)?,
                None => team.swap_working_columns(config, from_col, to_col),
            }
            Ok(())
        })
    }

    /// Finalize one side's working round. Returns the assigned round number.
    pub fn finalize_round(&mut self, side: TeamSide) -> Result<u32, NotesError> {
        self.mutate_active(|game, config| Ok(game.finalize_round(side, config)?))
    }

    /// Replace a finalized round's hints and answer. Inputs are trimmed;
    /// invalid answer digits fall back to identity columns and are logged.
    pub fn edit_round(
        &mut self,
        side: TeamSide,
        index: usize,
        hints: &[&str],
        answer: &str,
    ) -> Result<AnswerParse, NotesError> {
        let hints: Hints = hints.iter().map(|h| h.trim().to_owned()).collect();
        let answer = answer.trim().to_owned();

        self.mutate_active(|game, config| {
            let parse = game.team_mut(side).edit_round(index, hints, &answer, config)?;
            if !parse.is_clean() {
                tracing::warn!(
                    "answer {answer:?} has invalid column digits at {:?}; kept identity placement",
                    parse.invalid
                );
            }
            Ok(parse)
        })
    }

    /// Delete a finalized round. Survivors keep their round numbers.
    pub fn delete_round(&mut self, side: TeamSide, index: usize) -> Result<Round, NotesError> {
        self.mutate_active(|game, _| Ok(game.team_mut(side).delete_round(index)?))
    }

    /// Load, apply `mutate` to the active game, stamp, save.
    ///
    /// Nothing is persisted when `mutate` fails, matching the original's
    /// validate-before-commit behavior.
    fn mutate_active<T>(
        &mut self,
        mutate: impl FnOnce(&mut Game, &NotesConfig) -> Result<T, NotesError>,
    ) -> Result<T, NotesError> {
        let id = self.active.clone().ok_or(NotesError::NoActiveGame)?;

        let mut games = self.store.load();
        let game = games
            .get_mut(&id)
            .ok_or(NotesError::GameNotFound(id))?;

        let out = mutate(game, &self.config)?;
        game.touch(Utc::now());

        self.store.save(&games)?;
        Ok(out)
    }
}
