//! The game engine state machine.
//!
//! `GameEngine` owns the configuration, the random source, the current
//! `GameState` and the listener list. Every mutation goes through one of
//! its operations, and listeners hear about it once the state has
//! settled.

use log::{debug, info, trace};

use crate::core::{
    EngineError, GameConfig, GameRng, GameState, Letter, RandomSource, Result, Vowels,
};

use super::events::{GameEvent, ListenerId, ListenerList};
use super::figure::{visible_parts, FigurePart};
use super::hint::{disable_half_candidates, Hint, HintDenial, HintOutcome};
use super::status::GameStatus;

/// Single-player hangman engine.
///
/// ## Example
///
/// ```
/// use hangman_engine::core::{GameConfig, Letter};
/// use hangman_engine::engine::{GameEngine, GameStatus};
///
/// let config = GameConfig::new().with_words(["kiwi"]);
/// let mut engine = GameEngine::with_seed(config, 42).unwrap();
/// engine.start_game();
///
/// for c in ['K', 'I', 'W'] {
///     assert!(engine.guess_letter(Letter::new(c).unwrap()).unwrap());
/// }
/// assert_eq!(engine.status().unwrap(), GameStatus::Won);
/// ```
#[derive(Debug)]
pub struct GameEngine<R = GameRng> {
    config: GameConfig,
    words: Vec<Vec<Letter>>,
    rng: R,
    state: Option<GameState>,
    listeners: ListenerList,
}

impl GameEngine<GameRng> {
    /// Create an engine with an RNG seeded from the operating system.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = GameRng::from_entropy();
        debug!("engine seeded with {}", rng.seed());
        Self::with_source(config, rng)
    }

    /// Create an engine with a seeded RNG.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine with an injected random source.
    ///
    /// Fails if `config` does not validate. No game is started.
    pub fn with_source(config: GameConfig, rng: R) -> Result<Self> {
        let words = config.parse_words()?;
        Ok(Self {
            config,
            words,
            rng,
            state: None,
            listeners: ListenerList::new(),
        })
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Lifecycle ===

    /// Start a new game, abandoning any game in progress.
    ///
    /// The word list is never empty, so this always succeeds. The picked
    /// index is reduced modulo the list length whatever the source returns.
    pub fn start_game(&mut self) {
        let index = self.rng.pick_index(self.words.len()) % self.words.len();
        let word = self.words[index].clone();
        let state = GameState::new(word, self.config.placeholder, self.config.category.clone());

        debug!("new game: word #{} ({} letters)", index, state.word_len());
        trace!("secret word: {}", state.word_string());

        let word_len = state.word_len();
        self.state = Some(state);
        self.listeners.emit(&GameEvent::GameStarted { word_len });
    }

    /// Start a game only if none has been started yet.
    ///
    /// Returns true if a game was started.
    pub fn ensure_started(&mut self) -> bool {
        if self.state.is_some() {
            return false;
        }
        self.start_game();
        true
    }

    /// Has a game been started?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    // === Guessing ===

    /// Guess a letter. Returns true if the letter is in the word.
    ///
    /// A correct guess reveals every occurrence. An incorrect guess adds
    /// one to the incorrect counter, unless the letter was already used,
    /// in which case nothing changes. Guesses after the game has ended
    /// are ignored.
    pub fn guess_letter(&mut self, letter: Letter) -> Result<bool> {
        let max_incorrect = self.config.max_incorrect_guesses;
        let state = self.state.as_mut().ok_or(EngineError::NotStarted)?;
        let correct = state.contains(letter);

        if GameStatus::of(state, max_incorrect).is_terminal() {
            debug!("guess {} ignored: game is over", letter);
            return Ok(correct);
        }

        let newly_used = state.mark_used(letter);
        if correct {
            let revealed = state.reveal(letter);
            debug!("guess {}: correct, {} position(s)", letter, revealed);
        } else if newly_used {
            state.add_incorrect();
            debug!(
                "guess {}: incorrect ({}/{})",
                letter,
                state.incorrect_guesses(),
                max_incorrect
            );
        } else {
            debug!("guess {}: already used, not counted", letter);
        }

        self.listeners.emit(&GameEvent::LetterGuessed { letter, correct });
        self.announce_if_over();
        Ok(correct)
    }

    /// Guess a letter given as a character.
    pub fn guess_char(&mut self, c: char) -> Result<bool> {
        self.guess_letter(Letter::new(c)?)
    }

    // === Hints ===

    /// Ask for a hint.
    ///
    /// Returns **`true` if the hint was denied** and `false` if it was
    /// applied. Use `apply_hint` for the hint itself.
    pub fn request_hint(&mut self) -> Result<bool> {
        self.apply_hint().map(|outcome| outcome.is_denied())
    }

    /// Ask for a hint and get the structured outcome.
    ///
    /// A hint is granted while hints remain and the player is more than one
    /// incorrect guess away from losing. The tier is chosen by the number of
    /// hints already used; tiers past the third repeat the vowel hint.
    /// Every granted hint adds one incorrect guess. A denied request leaves
    /// the state untouched.
    ///
    /// Hints are also refused once the game is won or lost
    /// (`HintDenial::GameOver`). A finished game has no hint to offer, and
    /// the presentation layer hides its hint control at that point.
    pub fn apply_hint(&mut self) -> Result<HintOutcome> {
        let max_incorrect = self.config.max_incorrect_guesses;
        let max_hints = self.config.max_hints;
        let state = self.state.as_mut().ok_or(EngineError::NotStarted)?;

        let denial = if GameStatus::of(state, max_incorrect).is_terminal() {
            Some(HintDenial::GameOver)
        } else if state.hints_used() >= max_hints {
            Some(HintDenial::BudgetExhausted)
        } else if state.incorrect_guesses() + 1 >= max_incorrect {
            Some(HintDenial::TooCloseToLoss)
        } else {
            None
        };

        if let Some(denial) = denial {
            debug!("hint denied: {:?}", denial);
            self.listeners.emit(&GameEvent::HintDenied(denial));
            return Ok(HintOutcome::Denied(denial));
        }

        let tier = state.hints_used();
        state.add_hint();
        let hint = match tier {
            0 => Hint::Category(state.category().to_string()),
            1 => Hint::LettersDisabled(disable_half_candidates(state, &mut self.rng)),
            _ => Hint::Vowels(state.vowels()),
        };
        state.add_incorrect();

        debug!(
            "hint {} granted ({}/{} used, {}/{} incorrect)",
            hint.tier(),
            state.hints_used(),
            max_hints,
            state.incorrect_guesses(),
            max_incorrect
        );

        self.listeners.emit(&GameEvent::HintGranted { tier: hint.tier() });
        self.announce_if_over();
        Ok(HintOutcome::Granted(hint))
    }

    /// Distinct vowels of the word in order of first appearance.
    pub fn vowels_in_word(&self) -> Result<Vowels> {
        Ok(self.state()?.vowels())
    }

    /// Hints left in the budget.
    pub fn hints_remaining(&self) -> Result<u32> {
        let used = self.state()?.hints_used();
        Ok(self.config.max_hints.saturating_sub(used))
    }

    // === Queries ===

    /// The current game state.
    pub fn state(&self) -> Result<&GameState> {
        self.state.as_ref().ok_or(EngineError::NotStarted)
    }

    /// An owned copy of the current game state.
    pub fn snapshot(&self) -> Result<GameState> {
        self.state().cloned()
    }

    /// Derived status of the current game.
    pub fn status(&self) -> Result<GameStatus> {
        let state = self.state()?;
        Ok(GameStatus::of(state, self.config.max_incorrect_guesses))
    }

    /// Incorrect guesses left before the game is lost.
    pub fn remaining_guesses(&self) -> Result<u32> {
        let incorrect = self.state()?.incorrect_guesses();
        Ok(self.config.max_incorrect_guesses.saturating_sub(incorrect))
    }

    /// Can `letter` still be guessed?
    pub fn is_letter_available(&self, letter: Letter) -> Result<bool> {
        Ok(!self.state()?.is_used(letter))
    }

    /// Hangman parts to draw for the current incorrect count.
    pub fn figure(&self) -> Result<&'static [FigurePart]> {
        Ok(visible_parts(self.state()?.incorrect_guesses()))
    }

    /// End-of-game message, or `None` while the game is in progress.
    pub fn game_over_message(&self) -> Result<Option<String>> {
        let state = self.state()?;
        let status = GameStatus::of(state, self.config.max_incorrect_guesses);
        Ok(status.message(&state.word_string()))
    }

    // === Listeners ===

    /// Register a callback for game events.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a callback. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn announce_if_over(&mut self) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        let status = GameStatus::of(state, self.config.max_incorrect_guesses);
        if status.is_terminal() {
            info!(
                "game over: {} after {} incorrect guess(es), {} hint(s)",
                status,
                state.incorrect_guesses(),
                state.hints_used()
            );
            self.listeners.emit(&GameEvent::GameOver(status));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn engine(words: &[&str]) -> GameEngine<SequenceSource> {
        let config = GameConfig::new().with_words(words.iter().copied());
        let mut engine = GameEngine::with_source(config, SequenceSource::new([0])).unwrap();
        engine.start_game();
        engine
    }

    #[test]
    fn test_not_started() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 1).unwrap();

        assert!(!engine.is_started());
        assert_eq!(engine.guess_letter(letter('A')), Err(EngineError::NotStarted));
        assert_eq!(engine.request_hint(), Err(EngineError::NotStarted));
        assert_eq!(engine.vowels_in_word(), Err(EngineError::NotStarted));
        assert_eq!(engine.status(), Err(EngineError::NotStarted));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::new().with_words(Vec::<String>::new());
        assert!(matches!(
            GameEngine::with_seed(config, 1),
            Err(EngineError::EmptyWordList)
        ));
    }

    #[test]
    fn test_start_game_picks_from_list() {
        let config = GameConfig::new().with_words(["apple", "banana", "cherry"]);
        let mut engine = GameEngine::with_source(config, SequenceSource::new([2, 1])).unwrap();

        engine.start_game();
        assert_eq!(engine.state().unwrap().word_string(), "CHERRY");

        engine.start_game();
        assert_eq!(engine.state().unwrap().word_string(), "BANANA");
    }

    /// A source that always answers one past the end.
    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn pick_index(&mut self, len: usize) -> usize {
            len
        }

        fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
            vec![len; amount]
        }
    }

    #[test]
    fn test_start_game_wraps_out_of_range_pick() {
        let config = GameConfig::new().with_words(["apple", "banana"]);
        let mut engine = GameEngine::with_source(config, OutOfRange).unwrap();

        engine.start_game();
        assert_eq!(engine.state().unwrap().word_string(), "APPLE");
    }

    #[test]
    fn test_ensure_started() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 9).unwrap();
        assert!(engine.ensure_started());
        assert!(!engine.ensure_started());
        assert!(engine.is_started());
    }

    #[test]
    fn test_correct_guess_reveals_all() {
        let mut engine = engine(&["banana"]);

        assert_eq!(engine.guess_letter(letter('A')), Ok(true));
        let state = engine.state().unwrap();
        assert_eq!(state.revealed_pattern(), "_A_A_A");
        assert_eq!(state.incorrect_guesses(), 0);
        assert!(state.is_used(letter('A')));
    }

    #[test]
    fn test_incorrect_guess_counts_once() {
        let mut engine = engine(&["banana"]);

        assert_eq!(engine.guess_letter(letter('Z')), Ok(false));
        assert_eq!(engine.guess_letter(letter('Z')), Ok(false));
        assert_eq!(engine.state().unwrap().incorrect_guesses(), 1);
        assert_eq!(engine.remaining_guesses(), Ok(5));
    }

    #[test]
    fn test_guess_char() {
        let mut engine = engine(&["banana"]);
        assert_eq!(engine.guess_char('n'), Ok(true));
        assert_eq!(engine.guess_char('?'), Err(EngineError::InvalidLetter('?')));
    }

    #[test]
    fn test_win() {
        let mut engine = engine(&["date"]);
        for c in ['D', 'A', 'T', 'E'] {
            engine.guess_letter(letter(c)).unwrap();
        }
        assert_eq!(engine.status(), Ok(GameStatus::Won));
        assert_eq!(
            engine.game_over_message().unwrap().as_deref(),
            Some("Congrats! You guessed the word: DATE! :D")
        );
    }

    #[test]
    fn test_loss() {
        let mut engine = engine(&["date"]);
        for c in ['B', 'C', 'F', 'G', 'H'] {
            engine.guess_letter(letter(c)).unwrap();
        }
        assert_eq!(engine.status(), Ok(GameStatus::InProgress));
        assert_eq!(engine.game_over_message(), Ok(None));

        engine.guess_letter(letter('J')).unwrap();
        assert_eq!(engine.status(), Ok(GameStatus::Lost));
        assert_eq!(engine.figure().unwrap().len(), 6);
    }

    #[test]
    fn test_guess_after_game_over_ignored() {
        let mut engine = engine(&["date"]);
        for c in ['B', 'C', 'F', 'G', 'H', 'J'] {
            engine.guess_letter(letter(c)).unwrap();
        }
        let before = engine.snapshot().unwrap();

        assert_eq!(engine.guess_letter(letter('D')), Ok(true));
        assert_eq!(engine.guess_letter(letter('K')), Ok(false));
        assert_eq!(engine.snapshot().unwrap(), before);
    }

    #[test]
    fn test_hint_tiers() {
        let mut engine = engine(&["orange"]);

        let first = engine.apply_hint().unwrap();
        assert_eq!(first, HintOutcome::Granted(Hint::Category("Fruit".into())));

        let second = engine.apply_hint().unwrap();
        match second {
            HintOutcome::Granted(Hint::LettersDisabled(letters)) => assert_eq!(letters.len(), 10),
            other => panic!("expected letters disabled, got {:?}", other),
        }

        let third = engine.apply_hint().unwrap();
        assert_eq!(third.to_string(), "Hint 3: The vowels in this word are: OAE");

        let state = engine.state().unwrap();
        assert_eq!(state.hints_used(), 3);
        assert_eq!(state.incorrect_guesses(), 3);
        assert_eq!(engine.hints_remaining(), Ok(0));
    }

    #[test]
    fn test_hint_polarity() {
        let mut engine = engine(&["kiwi"]);
        assert_eq!(engine.request_hint(), Ok(false));
        assert_eq!(engine.request_hint(), Ok(false));
        assert_eq!(engine.request_hint(), Ok(false));
        assert_eq!(engine.request_hint(), Ok(true));
        assert_eq!(engine.state().unwrap().hints_used(), 3);
    }

    #[test]
    fn test_hint_denied_near_loss() {
        let mut engine = engine(&["kiwi"]);
        for c in ['A', 'B', 'C', 'D', 'E'] {
            engine.guess_letter(letter(c)).unwrap();
        }
        let before = engine.snapshot().unwrap();

        assert_eq!(
            engine.apply_hint(),
            Ok(HintOutcome::Denied(HintDenial::TooCloseToLoss))
        );
        assert_eq!(engine.snapshot().unwrap(), before);
    }

    #[test]
    fn test_hint_denied_after_win() {
        let mut engine = engine(&["fig"]);
        for c in ['F', 'I', 'G'] {
            engine.guess_letter(letter(c)).unwrap();
        }
        assert_eq!(
            engine.apply_hint(),
            Ok(HintOutcome::Denied(HintDenial::GameOver))
        );
    }

    #[test]
    fn test_letter_availability() {
        let mut engine = engine(&["kiwi"]);
        assert_eq!(engine.is_letter_available(letter('K')), Ok(true));
        engine.guess_letter(letter('K')).unwrap();
        assert_eq!(engine.is_letter_available(letter('K')), Ok(false));
    }
}
