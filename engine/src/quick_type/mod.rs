//! Quick Type Challenge, the game behind "Feature Eins".
//!
//! The player is shown a random word and types it as fast as possible. Each
//! correct answer records a characters-per-second speed; five wrong answers
//! end the round and a summary is shown.
//!
//! All delays are deadlines checked by [`QuickTypeChallenge::tick`], so the
//! whole game is driven by the caller's clock and never spawns a thread.

use std::fmt;
use std::time::{Duration, Instant};

use rand::seq::IndexedRandom;
use tjd_types::round2;
use tjd_types::ui::EffectTimer;
use unicode_segmentation::UnicodeSegmentation;

mod words;

pub use words::WORDS;

pub const MAX_INCORRECT_TRIES: u8 = 5;
/// Title shrink and fade-in when a round starts.
pub const INTRO_DURATION: Duration = Duration::from_millis(300);
/// Pause after the intro before the first word appears.
pub const WORD_SETUP_DELAY: Duration = Duration::from_millis(600);
/// How long a correct answer stays on screen before the next word.
pub const AUTO_NEXT_DELAY: Duration = Duration::from_millis(1500);
pub const SUMMARY_DELAY: Duration = Duration::from_millis(2000);
pub const SHAKE_DURATION: Duration = Duration::from_millis(300);

/// Average speeds above this are rated fast.
pub const FAST_SPEED: f64 = 3.5;
/// Average speeds below this are rated slow.
pub const SLOW_SPEED: f64 = 3.0;

pub const SPEED_HINT: &str = "Average typing speed typically ranges from 3.0 to 3.5 char/s";
pub const INCORRECT_FIELD_ERROR: &str = "Incorrect! Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Idle,
    Started,
    Ended,
}

/// What the game screen should show, derived from the internal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Start button, no round in progress.
    Ready,
    /// Intro running, word not chosen yet.
    Revealing,
    /// Word shown, input accepted.
    Playing,
    /// Correct answer shown, input locked until the next word.
    Advancing,
    /// Game over message shown, summary pending.
    Ending,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Ready,
    Revealing { word_at: Instant },
    Playing,
    Advancing { next_at: Instant },
    Ending { summary_at: Instant },
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Muted,
    Success,
    Error,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameStatus {
    pub text: String,
    pub tone: StatusTone,
}

impl GameStatus {
    fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Result of pressing Enter in the typing field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Submission {
    /// Nothing to submit in the current stage.
    Ignored,
    /// Enter while idle only starts the clock.
    Activated,
    Correct { speed: f64, new_record: bool },
    Incorrect { tries: u8 },
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedRating {
    Fast,
    Typical,
    Slow,
}

impl SpeedRating {
    #[must_use]
    pub fn for_speed(speed: f64) -> Self {
        if speed > FAST_SPEED {
            Self::Fast
        } else if speed < SLOW_SPEED {
            Self::Slow
        } else {
            Self::Typical
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSummary {
    pub correct_answers: u32,
    pub average_speed: f64,
    pub best_speed: f64,
    pub rating: SpeedRating,
}

/// Source of challenge words.
pub trait WordPicker: fmt::Debug + Send {
    fn pick(&mut self) -> &'static str;
}

/// Uniform choice from [`WORDS`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomWordPicker;

impl WordPicker for RandomWordPicker {
    fn pick(&mut self) -> &'static str {
        // Unreachable: WORDS is non-empty.
        WORDS.choose(&mut rand::rng()).copied().unwrap_or("type")
    }
}

/// Cycles through a fixed list. Falls back to [`WORDS`] when given nothing.
#[derive(Debug, Clone)]
pub struct ScriptedWordPicker {
    words: Vec<&'static str>,
    next: usize,
}

impl ScriptedWordPicker {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = &'static str>) -> Self {
        let mut words: Vec<_> = words.into_iter().collect();
        if words.is_empty() {
            words = WORDS.to_vec();
        }
        Self { words, next: 0 }
    }
}

impl WordPicker for ScriptedWordPicker {
    fn pick(&mut self) -> &'static str {
        let word = self.words[self.next % self.words.len()];
        self.next = self.next.wrapping_add(1);
        word
    }
}

/// Characters per second, rounded to two decimals. Zero elapsed time is 0.
#[must_use]
pub fn typing_speed(word: &str, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    round2(word.chars().count() as f64 / secs)
}

/// Render a speed the way the game displays it: `4.25`, `3.0`.
#[must_use]
pub fn format_speed(speed: f64) -> String {
    if speed.fract().abs() < f64::EPSILON {
        format!("{speed:.1}")
    } else {
        format!("{speed}")
    }
}

#[derive(Debug)]
pub struct QuickTypeChallenge {
    picker: Box<dyn WordPicker>,
    phase: Phase,
    state: GameState,
    word: Option<&'static str>,
    typed: String,
    field_error: Option<&'static str>,
    status: Option<GameStatus>,
    started_at: Option<Instant>,
    correct_answers: u32,
    speeds: Vec<f64>,
    incorrect_tries: u8,
    /// Survives replays; lives as long as the tool view.
    best_speed: Option<f64>,
    new_record: bool,
    intro: Option<EffectTimer>,
    shake: Option<EffectTimer>,
}

impl QuickTypeChallenge {
    #[must_use]
    pub fn new(picker: Box<dyn WordPicker>) -> Self {
        Self {
            picker,
            phase: Phase::Ready,
            state: GameState::Idle,
            word: None,
            typed: String::new(),
            field_error: None,
            status: None,
            started_at: None,
            correct_answers: 0,
            speeds: Vec::new(),
            incorrect_tries: 0,
            best_speed: None,
            new_record: false,
            intro: None,
            shake: None,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        match self.phase {
            Phase::Ready => Stage::Ready,
            Phase::Revealing { .. } => Stage::Revealing,
            Phase::Playing => Stage::Playing,
            Phase::Advancing { .. } => Stage::Advancing,
            Phase::Ending { .. } => Stage::Ending,
            Phase::Summary => Stage::Summary,
        }
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn word(&self) -> Option<&'static str> {
        self.word
    }

    #[must_use]
    pub fn typed(&self) -> &str {
        &self.typed
    }

    #[must_use]
    pub fn field_error(&self) -> Option<&'static str> {
        self.field_error
    }

    #[must_use]
    pub fn status(&self) -> Option<&GameStatus> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn incorrect_tries(&self) -> u8 {
        self.incorrect_tries
    }

    #[must_use]
    pub fn best_speed(&self) -> Option<f64> {
        self.best_speed
    }

    /// Whether the last correct answer set the best speed.
    #[must_use]
    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    #[must_use]
    pub fn input_locked(&self) -> bool {
        !matches!(self.phase, Phase::Playing)
    }

    /// Intro animation progress in `0.0..=1.0`; 1.0 once finished or never started.
    #[must_use]
    pub fn intro_progress(&self, now: Instant) -> f32 {
        self.intro.map_or(1.0, |timer| timer.progress(now))
    }

    /// Shake progress after a wrong answer, `None` when not shaking.
    #[must_use]
    pub fn shake_progress(&self, now: Instant) -> Option<f32> {
        self.shake
            .filter(|timer| !timer.is_finished(now))
            .map(|timer| timer.progress(now))
    }

    /// Begin a round. Valid before the first round and from the summary.
    pub fn start(&mut self, now: Instant) -> bool {
        if !matches!(self.phase, Phase::Ready | Phase::Summary) {
            return false;
        }

        self.state = GameState::Idle;
        self.correct_answers = 0;
        self.speeds.clear();
        self.incorrect_tries = 0;
        self.started_at = None;
        self.word = None;
        self.typed.clear();
        self.field_error = None;
        self.status = None;
        self.shake = None;
        self.intro = Some(EffectTimer::new(now, INTRO_DURATION));
        self.phase = Phase::Revealing {
            word_at: now + INTRO_DURATION + WORD_SETUP_DELAY,
        };
        tracing::debug!("Quick Type round started");
        true
    }

    /// Advance deadlines. Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.shake.is_some_and(|timer| timer.is_finished(now)) {
            self.shake = None;
        }
        if self.intro.is_some_and(|timer| timer.is_finished(now)) {
            self.intro = None;
        }

        match self.phase {
            Phase::Revealing { word_at } if now >= word_at => {
                self.word = Some(self.picker.pick());
                self.phase = Phase::Playing;
                true
            }
            Phase::Advancing { next_at } if now >= next_at => {
                if self.state == GameState::Started {
                    self.prepare_next_word(now);
                }
                true
            }
            Phase::Ending { summary_at } if now >= summary_at => {
                self.phase = Phase::Summary;
                tracing::debug!(
                    correct = self.correct_answers,
                    "Quick Type round finished"
                );
                true
            }
            _ => false,
        }
    }

    /// Type one character. The first key while idle starts the clock.
    pub fn input_char(&mut self, c: char, now: Instant) {
        if self.input_locked() || c.is_control() {
            return;
        }
        self.activate(now);
        self.field_error = None;
        self.typed.push(c);
    }

    pub fn backspace(&mut self) {
        if self.input_locked() {
            return;
        }
        if let Some((index, _)) = self.typed.grapheme_indices(true).next_back() {
            self.typed.truncate(index);
        }
    }

    pub fn submit(&mut self, now: Instant) -> Submission {
        if self.input_locked() {
            return Submission::Ignored;
        }
        if self.state == GameState::Idle {
            return if self.activate(now) {
                Submission::Activated
            } else {
                Submission::Ignored
            };
        }
        let (Some(word), Some(started_at)) = (self.word, self.started_at) else {
            return Submission::Ignored;
        };

        if self.typed.trim() == word {
            self.handle_correct(word, now.saturating_duration_since(started_at), now)
        } else {
            self.handle_incorrect(now)
        }
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let average_speed = if self.speeds.is_empty() {
            0.0
        } else {
            round2(self.speeds.iter().sum::<f64>() / self.speeds.len() as f64)
        };
        GameSummary {
            correct_answers: self.correct_answers,
            average_speed,
            best_speed: self.best_speed.unwrap_or(0.0),
            rating: SpeedRating::for_speed(average_speed),
        }
    }

    fn activate(&mut self, now: Instant) -> bool {
        if self.state != GameState::Idle || self.word.is_none() {
            return false;
        }
        self.state = GameState::Started;
        self.status = Some(GameStatus::new("Ready! Start typing...", StatusTone::Muted));
        self.started_at = Some(now);
        true
    }

    fn handle_correct(&mut self, word: &str, elapsed: Duration, now: Instant) -> Submission {
        let speed = typing_speed(word, elapsed);
        let new_record = self.best_speed.is_none_or(|best| speed > best);
        if new_record {
            self.best_speed = Some(speed);
        }
        self.new_record = new_record;

        self.status = Some(GameStatus::new(
            format!("Correct! Speed: {} char/s", format_speed(speed)),
            StatusTone::Success,
        ));
        self.correct_answers += 1;
        self.speeds.push(speed);
        self.phase = Phase::Advancing {
            next_at: now + AUTO_NEXT_DELAY,
        };
        tracing::debug!(word, speed, new_record, "Correct answer");
        Submission::Correct { speed, new_record }
    }

    fn handle_incorrect(&mut self, now: Instant) -> Submission {
        self.incorrect_tries = self.incorrect_tries.saturating_add(1);
        self.shake = Some(EffectTimer::new(now, SHAKE_DURATION));

        if self.incorrect_tries >= MAX_INCORRECT_TRIES {
            self.state = GameState::Ended;
            self.status = Some(GameStatus::new(
                "Too many mistakes! Game ending...",
                StatusTone::Critical,
            ));
            self.field_error = None;
            self.phase = Phase::Ending {
                summary_at: now + SUMMARY_DELAY,
            };
            return Submission::GameOver;
        }

        self.status = Some(GameStatus::new("Oops...", StatusTone::Error));
        self.field_error = Some(INCORRECT_FIELD_ERROR);
        self.typed.clear();
        Submission::Incorrect {
            tries: self.incorrect_tries,
        }
    }

    fn prepare_next_word(&mut self, now: Instant) {
        self.word = Some(self.picker.pick());
        self.typed.clear();
        self.field_error = None;
        self.status = Some(GameStatus::new(
            "KEEP GOING! Continue typing...",
            StatusTone::Muted,
        ));
        self.started_at = Some(now);
        self.phase = Phase::Playing;
    }
}
