use crate::core::Rng;

/// Glyphs shown for characters that are not revealed yet
pub const GLYPHS: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Interval between scramble frames, in milliseconds
pub const FRAME_INTERVAL_MS: u32 = 40;

/// Steps needed to reveal one more character
const STEPS_PER_CHAR: usize = 3;

/// Matrix-style reveal: characters lock in left to right, a third of a
/// character per frame, while the rest cycle through random glyphs.
#[derive(Clone, Debug)]
pub struct DecryptText {
    original: Vec<char>,
    steps: usize,
    finished: bool,
    rng: Rng,
}

impl DecryptText {
    pub fn new(original: &str, rng: Rng) -> Self {
        Self {
            original: original.chars().collect(),
            steps: 0,
            finished: false,
            rng,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Characters currently locked to the original text
    pub fn revealed(&self) -> usize {
        // a character at index i is revealed once i < steps / 3
        self.steps.div_ceil(STEPS_PER_CHAR).min(self.original.len())
    }

    /// Produce the next frame, or `None` once the full text has been shown.
    /// The frame that first reaches the full length is still returned.
    pub fn next_frame(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        let revealed = self.revealed();
        let mut text = String::with_capacity(self.original.len());
        for (i, &c) in self.original.iter().enumerate() {
            if i < revealed {
                text.push(c);
            } else {
                let glyph = GLYPHS[(self.rng.next_u32() as usize) % GLYPHS.len()];
                text.push(glyph as char);
            }
        }
        if self.steps >= self.original.len() * STEPS_PER_CHAR {
            self.finished = true;
        }
        self.steps += 1;
        Some(text)
    }
}
