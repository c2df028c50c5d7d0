use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::error::GuessError;
use crate::wordle::{Guess, LetterStatus, Scoring, Word, MAX_ATTEMPTS, NLETTER};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }
}

/// What a grid cell renders as.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellClass {
    Empty,
    Correct,
    Present,
    Absent,
}

impl From<LetterStatus> for CellClass {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Absent => CellClass::Absent,
            LetterStatus::Present => CellClass::Present,
            LetterStatus::Correct => CellClass::Correct,
        }
    }
}

/// State of a single game: the target, the submitted guesses, the word
/// being typed and the best known status of every letter guessed so far.
#[derive(Clone, Debug)]
pub struct Game {
    target: Word,
    scoring: Scoring,
    guesses: Vec<Guess>,
    current: String,
    status: GameStatus,
    key_status: FxHashMap<char, LetterStatus>,
}

impl Game {
    pub fn new(target: Word, scoring: Scoring) -> Self {
        info!(attempts = MAX_ATTEMPTS, ?scoring, "new game");
        Game {
            target,
            scoring,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            current: String::with_capacity(NLETTER),
            status: GameStatus::Playing,
            key_status: FxHashMap::default(),
        }
    }

    /// Forget everything about the previous game and play for `target`.
    pub fn start_new_game(&mut self, target: Word) {
        *self = Game::new(target, self.scoring);
    }

    /// Returns `true` if the letter was added.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.is_over() || self.current.len() >= NLETTER || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.current.push(ch.to_ascii_uppercase());
        true
    }

    /// Returns `true` if a letter was removed.
    pub fn delete_letter(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.current.pop().is_some()
    }

    /// The word that [`Game::submit_guess`] would submit, without
    /// submitting it.
    pub fn pending_guess(&self) -> Result<Word, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.current.len() != NLETTER {
            return Err(GuessError::WrongLength {
                expected: NLETTER,
                actual: self.current.len(),
            });
        }
        // Only uppercase ASCII letters are ever appended
        Word::parse(&self.current).map_err(|_| GuessError::WrongLength {
            expected: NLETTER,
            actual: self.current.len(),
        })
    }

    /// Submit the in-progress guess and return the resulting status.
    pub fn submit_guess(&mut self) -> Result<GameStatus, GuessError> {
        let word = self.pending_guess()?;
        let guess = Guess::score(&self.target, word, self.scoring);

        self.update_key_status(&guess);
        self.guesses.push(guess);
        self.current.clear();

        self.status = if guess.is_solved() {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        debug!(attempt = self.guesses.len(), %word, status = ?self.status, "guess submitted");
        if self.is_over() {
            info!(status = ?self.status, attempts = self.guesses.len(), "game finished");
        }
        Ok(self.status)
    }

    /// Statuses only ever upgrade: correct beats present beats absent.
    fn update_key_status(&mut self, guess: &Guess) {
        for (&letter, &status) in guess.word.chars().iter().zip(&guess.status) {
            self.key_status
                .entry(letter)
                .and_modify(|known| *known = (*known).max(status))
                .or_insert(status);
        }
    }

    pub fn cell_classification(&self, row: usize, col: usize) -> CellClass {
        match self.guesses.get(row) {
            Some(guess) if col < NLETTER => guess.status[col].into(),
            _ => CellClass::Empty,
        }
    }

    pub fn key_status(&self, letter: char) -> Option<LetterStatus> {
        self.key_status.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn key_statuses(&self) -> &FxHashMap<char, LetterStatus> {
        &self.key_status
    }

    pub fn target(&self) -> Word {
        self.target
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn current_guess(&self) -> &str {
        &self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::*;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    fn game(target: &str) -> Game {
        Game::new(word(target), Scoring::Simple)
    }

    fn type_word(game: &mut Game, s: &str) {
        for c in s.chars() {
            game.append_letter(c);
        }
    }

    fn guess(game: &mut Game, s: &str) -> Result<GameStatus, GuessError> {
        type_word(game, s);
        game.submit_guess()
    }

    #[test]
    fn in_progress_guess_never_exceeds_word_length() {
        let mut game = game("mount");
        type_word(&mut game, "abcdefghij");
        assert_eq!(game.current_guess(), "ABCDE");
        assert!(!game.append_letter('z'));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut game = game("mount");
        assert!(!game.append_letter('1'));
        assert!(!game.append_letter(' '));
        assert!(!game.append_letter('é'));
        assert!(game.append_letter('m'));
        assert_eq!(game.current_guess(), "M");
    }

    #[test]
    fn delete_letter() {
        let mut game = game("mount");
        assert!(!game.delete_letter());
        type_word(&mut game, "mo");
        assert!(game.delete_letter());
        assert_eq!(game.current_guess(), "M");
    }

    #[test]
    fn wrong_length_does_not_touch_history() {
        let mut game = game("mount");
        type_word(&mut game, "mou");
        assert_eq!(
            game.submit_guess(),
            Err(GuessError::WrongLength {
                expected: 5,
                actual: 3
            })
        );
        assert!(game.guesses().is_empty());
        assert_eq!(game.current_guess(), "MOU");
        assert!(game.key_statuses().is_empty());
    }

    #[test]
    fn trust_against_crisp() {
        let mut game = game("crisp");
        assert_eq!(guess(&mut game, "trust"), Ok(GameStatus::Playing));

        let row: Vec<_> = (0..NLETTER).map(|i| game.cell_classification(0, i)).collect();
        use CellClass as C;
        assert_eq!(row, vec![C::Absent, C::Correct, C::Absent, C::Correct, C::Absent]);

        assert_eq!(game.key_status('T'), Some(Absent));
        assert_eq!(game.key_status('R'), Some(Correct));
        assert_eq!(game.key_status('U'), Some(Absent));
        assert_eq!(game.key_status('S'), Some(Correct));
        assert_eq!(game.key_statuses().len(), 4);
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn trust_against_shore() {
        let mut game = game("shore");
        guess(&mut game, "trust").unwrap();
        assert_eq!(game.key_status('T'), Some(Absent));
        assert_eq!(game.key_status('R'), Some(Present));
        assert_eq!(game.key_status('U'), Some(Absent));
        assert_eq!(game.key_status('S'), Some(Present));
        assert_eq!(game.cell_classification(0, 1), CellClass::Present);
    }

    #[test]
    fn unsubmitted_rows_are_empty() {
        let mut game = game("crisp");
        type_word(&mut game, "crisp");
        assert_eq!(game.cell_classification(0, 0), CellClass::Empty);
        assert_eq!(game.cell_classification(5, 4), CellClass::Empty);
    }

    #[test]
    fn winning_in_one() {
        let mut game = game("blink");
        assert_eq!(guess(&mut game, "blink"), Ok(GameStatus::Won));
        assert!(game.is_over());
        assert_eq!(game.guesses().len(), 1);
        for i in 0..NLETTER {
            assert_eq!(game.cell_classification(0, i), CellClass::Correct);
        }

        // Terminal: nothing changes any more
        assert!(!game.append_letter('a'));
        assert!(!game.delete_letter());
        assert_eq!(game.submit_guess(), Err(GuessError::GameOver));
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn losing_after_six_guesses() {
        let mut game = game("mount");
        for w in ["blink", "trust", "plane", "shore", "crisp"] {
            assert_eq!(guess(&mut game, w), Ok(GameStatus::Playing));
        }
        assert_eq!(game.guesses().len(), MAX_ATTEMPTS - 1);
        assert_eq!(guess(&mut game, "blink"), Ok(GameStatus::Lost));
        assert!(game.is_over());
        assert_eq!(game.guesses().len(), MAX_ATTEMPTS);
        assert_eq!(game.target().to_string(), "MOUNT");
        assert!(!game.append_letter('a'));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut game = game("crisp");
        guess(&mut game, "trust").unwrap();
        assert_eq!(game.key_status('R'), Some(Correct));
        // R off position would be present
        guess(&mut game, "rbbbb").unwrap();
        assert_eq!(game.key_status('R'), Some(Correct));
        guess(&mut game, "saaaa").unwrap();
        assert_eq!(game.key_status('S'), Some(Correct));
    }

    #[test]
    fn present_is_not_downgraded_to_absent() {
        let mut game = Game::new(word("shore"), Scoring::Standard);
        // The second O has no unmatched O left in the target
        guess(&mut game, "oozes").unwrap();
        assert_eq!(game.cell_classification(0, 0), CellClass::Present);
        assert_eq!(game.cell_classification(0, 1), CellClass::Absent);
        assert_eq!(game.key_status('O'), Some(Present));
        assert_eq!(game.key_status('Z'), Some(Absent));
    }

    #[test]
    fn duplicate_letters_keep_the_best_status() {
        let mut game = Game::new(word("abbey"), Scoring::Standard);
        guess(&mut game, "bobby").unwrap();
        assert_eq!(game.cell_classification(0, 0), CellClass::Present);
        assert_eq!(game.cell_classification(0, 2), CellClass::Correct);
        assert_eq!(game.cell_classification(0, 3), CellClass::Absent);
        assert_eq!(game.key_status('B'), Some(Correct));
        assert_eq!(game.key_status('O'), Some(Absent));
        assert_eq!(game.key_status('Y'), Some(Correct));
    }

    #[test]
    fn reset_after_game_over() {
        let mut game = game("blink");
        guess(&mut game, "blink").unwrap();
        type_word(&mut game, "xx");

        game.start_new_game(word("plane"));
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.guesses().is_empty());
        assert_eq!(game.current_guess(), "");
        assert!(game.key_statuses().is_empty());
        assert_eq!(game.target(), word("plane"));
        assert_eq!(game.scoring(), Scoring::Simple);
    }
}
