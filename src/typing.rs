//! Typewriter effect for the hero tagline, advanced by a fixed-rate ticker.

pub const TICK_MS: u32 = 70;

/// Roughly two seconds at [`TICK_MS`].
pub const HOLD_TICKS: u32 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Typing,
    Holding { remaining: u32 },
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    hold_ticks: u32,
    stage: Stage,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, hold_ticks: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            index: 0,
            shown: 0,
            hold_ticks,
            stage: Stage::Typing,
        }
    }

    fn phrase(&self) -> &str {
        self.phrases.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// The currently visible prefix, always cut on a char boundary.
    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    /// Returns whether the visible text changed.
    pub fn tick(&mut self) -> bool {
        if self.phrases.is_empty() {
            return false;
        }

        match self.stage {
            Stage::Typing => {
                if self.shown < self.phrase().chars().count() {
                    self.shown += 1;
                    return true;
                }
                self.stage = Stage::Holding {
                    remaining: self.hold_ticks,
                };
                false
            }
            Stage::Holding { remaining: 0 } => {
                self.stage = Stage::Deleting;
                false
            }
            Stage::Holding { remaining } => {
                self.stage = Stage::Holding {
                    remaining: remaining - 1,
                };
                false
            }
            Stage::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                    return true;
                }
                self.index = (self.index + 1) % self.phrases.len();
                self.stage = Stage::Typing;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(typewriter: &mut Typewriter, ticks: usize) {
        for _ in 0..ticks {
            typewriter.tick();
        }
    }

    #[test]
    fn types_character_by_character_on_char_boundaries() {
        let mut typewriter = Typewriter::new(["Go • Rust"], 2);
        assert_eq!(typewriter.text(), "");

        run(&mut typewriter, 4);
        assert_eq!(typewriter.text(), "Go •");
        run(&mut typewriter, 5);
        assert_eq!(typewriter.text(), "Go • Rust");
    }

    #[test]
    fn holds_then_deletes_then_moves_to_next_phrase() {
        let mut typewriter = Typewriter::new(["ab", "xyz"], 1);
        run(&mut typewriter, 2);
        assert_eq!(typewriter.text(), "ab");

        // Enter hold, spend one tick, switch to deleting.
        run(&mut typewriter, 3);
        assert_eq!(typewriter.text(), "ab");

        assert!(typewriter.tick());
        assert_eq!(typewriter.text(), "a");
        run(&mut typewriter, 2);
        assert_eq!(typewriter.text(), "");

        assert!(typewriter.tick());
        assert_eq!(typewriter.text(), "x");
    }

    #[test]
    fn wraps_back_to_the_first_phrase() {
        let mut typewriter = Typewriter::new(["a", "b"], 0);
        let mut seen = Vec::new();
        for _ in 0..20 {
            if typewriter.tick() && !typewriter.text().is_empty() {
                seen.push(typewriter.text().to_string());
            }
        }
        assert!(seen.starts_with(&["a".to_string(), "b".to_string(), "a".to_string()]));
    }

    #[test]
    fn no_phrases_never_changes() {
        let mut typewriter = Typewriter::new(Vec::<String>::new(), 3);
        assert!(!typewriter.tick());
        assert_eq!(typewriter.text(), "");
    }
}
