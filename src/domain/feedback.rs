use rand::Rng;

/// Tokens (lowercased, whitespace-split) that nudge the score up
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "best",
    "delicious",
    "tasty",
];

/// Tokens (lowercased, whitespace-split) that nudge the score down
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "poor",
    "disappointing",
    "worst",
    "disgusting",
    "cold",
    "overcooked",
];

pub const POSITIVE_EMOJIS: &[char] = &['😊', '😄', '😃', '😀', '😁', '👍', '❤', '😋', '😍'];
pub const NEGATIVE_EMOJIS: &[char] = &['😠', '😡', '👎', '💔', '😞', '😢', '😭', '😤'];

pub const WORD_WEIGHT: f64 = 0.1;
pub const WORD_CAP: f64 = 0.3;

pub const ENGAGEMENT_WEIGHT: f64 = 0.05;
pub const ENGAGEMENT_CAP: f64 = 0.2;
/// Above this many `?`/`!` the engagement bonus is dropped entirely
pub const ENGAGEMENT_LIMIT: usize = 3;

pub const EMOJI_WEIGHT: f64 = 0.1;
pub const EMOJI_CAP: f64 = 0.2;

pub const JITTER_RANGE: f64 = 0.1;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

/// Source of the small random term added to every score.
pub trait Jitter: Send + Sync {
    /// A value in `[-JITTER_RANGE, JITTER_RANGE]`
    fn sample(&self) -> f64;
}

/// Uniform jitter from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformJitter;

impl Jitter for UniformJitter {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(-JITTER_RANGE..=JITTER_RANGE)
    }
}

/// Always returns the same value. Used to make scores reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}

/// Sentiment signals counted from a piece of feedback text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackSignals {
    pub positive_words: usize,
    pub negative_words: usize,
    pub engagement_marks: usize,
    pub positive_emojis: usize,
    pub negative_emojis: usize,
}

impl FeedbackSignals {
    pub fn from_text(feedback: &str) -> Self {
        let lowered = feedback.to_lowercase();
        let mut signals = FeedbackSignals::default();

        for word in lowered.split_whitespace() {
            if POSITIVE_WORDS.contains(&word) {
                signals.positive_words += 1;
            } else if NEGATIVE_WORDS.contains(&word) {
                signals.negative_words += 1;
            }
        }

        for c in feedback.chars() {
            match c {
                '?' | '!' => signals.engagement_marks += 1,
                c if POSITIVE_EMOJIS.contains(&c) => signals.positive_emojis += 1,
                c if NEGATIVE_EMOJIS.contains(&c) => signals.negative_emojis += 1,
                _ => {}
            }
        }

        signals
    }

    /// Deterministic part of the adjustment, before jitter and clamping
    pub fn adjustment(&self) -> f64 {
        let mut adjustment = 0.0;

        adjustment += capped(self.positive_words, WORD_WEIGHT, WORD_CAP);
        adjustment -= capped(self.negative_words, WORD_WEIGHT, WORD_CAP);

        if self.engagement_marks <= ENGAGEMENT_LIMIT {
            adjustment += capped(self.engagement_marks, ENGAGEMENT_WEIGHT, ENGAGEMENT_CAP);
        }

        adjustment += capped(self.positive_emojis, EMOJI_WEIGHT, EMOJI_CAP);
        adjustment -= capped(self.negative_emojis, EMOJI_WEIGHT, EMOJI_CAP);

        adjustment
    }
}

fn capped(count: usize, weight: f64, cap: f64) -> f64 {
    (count as f64 * weight).min(cap)
}

/// Nudge a 1-5 rating toward the sentiment of the feedback text.
///
/// The result is always in `1..=5`. Rounding is half-up, so 3.5 becomes 4.
pub fn calculate_feedback_score(feedback: &str, rating: f64, jitter: &dyn Jitter) -> u8 {
    let signals = FeedbackSignals::from_text(feedback);
    let noise = jitter.sample().clamp(-JITTER_RANGE, JITTER_RANGE);

    let score = (rating + signals.adjustment() + noise).clamp(MIN_SCORE, MAX_SCORE);

    (score + 0.5).floor() as u8
}
