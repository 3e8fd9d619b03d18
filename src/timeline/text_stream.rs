use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Done,
}

/// Character-by-character reveal of a string sequence
///
/// Non-looping streams type each string once and stop on the last one.
/// Looping streams hold a completed string for `pause`, clear it and move on
/// to the next, wrapping after the last.
#[derive(Debug, Clone)]
pub struct DecorativeTextStream {
    strings: Vec<Vec<char>>,
    char_delay: Duration,
    pause: Duration,
    looping: bool,
    index: usize,
    shown: usize,
    visible: String,
    phase: Phase,
    carry: Duration,
}

impl DecorativeTextStream {
    pub fn new<S: AsRef<str>>(strings: &[S], char_delay: Duration) -> Self {
        let strings: Vec<Vec<char>> = strings.iter().map(|s| s.as_ref().chars().collect()).collect();
        let phase = if strings.is_empty() { Phase::Done } else { Phase::Typing };

        Self {
            strings,
            char_delay,
            pause: Duration::ZERO,
            looping: false,
            index: 0,
            shown: 0,
            visible: String::new(),
            phase,
            carry: Duration::ZERO,
        }
    }

    /// Loop forever, holding each completed string for `pause`
    pub fn looping(mut self, pause: Duration) -> Self {
        self.looping = true;
        self.pause = pause;
        self
    }

    /// Hold completed strings for `pause` before moving on
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn advance(&mut self, delta: Duration) {
        self.carry += delta;

        // Zero delays would otherwise spin forever on a looping stream
        let total_chars: usize = self.strings.iter().map(Vec::len).sum();
        let idle_budget = total_chars + self.strings.len() + 1;
        let mut idle_steps = 0;

        loop {
            if idle_steps > idle_budget {
                break;
            }

            match self.phase {
                Phase::Done => break,
                Phase::Typing => {
                    let current = &self.strings[self.index];
                    if self.shown == current.len() {
                        let is_last = self.index + 1 == self.strings.len();
                        self.phase = match (self.looping, is_last) {
                            (true, _) | (false, false) => Phase::Holding,
                            (false, true) => Phase::Done,
                        };
                        continue;
                    }
                    if self.carry < self.char_delay {
                        break;
                    }
                    self.carry -= self.char_delay;
                    if self.char_delay.is_zero() {
                        idle_steps += 1;
                    }
                    self.visible.push(current[self.shown]);
                    self.shown += 1;
                }
                Phase::Holding => {
                    if self.carry < self.pause {
                        break;
                    }
                    self.carry -= self.pause;
                    if self.pause.is_zero() {
                        idle_steps += 1;
                    }
                    self.index = (self.index + 1) % self.strings.len();
                    self.shown = 0;
                    self.visible.clear();
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    /// Text revealed so far
    pub fn visible(&self) -> &str {
        &self.visible
    }

    /// Index of the string currently being revealed
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// True while a completed string is on hold before the next one
    pub fn is_holding(&self) -> bool {
        self.phase == Phase::Holding
    }
}
