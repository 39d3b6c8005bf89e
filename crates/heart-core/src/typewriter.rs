//! Caption typewriter.
//!
//! Scripts use three markers: `<` breaks the line, `>` clears the caption and
//! `|` reveals the backdrop image. Every other character is typed as-is, one
//! per step.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterStep {
    Append(char),
    LineBreak,
    Clear,
    RevealBackdrop,
}

impl From<char> for TypewriterStep {
    fn from(c: char) -> Self {
        match c {
            '<' => TypewriterStep::LineBreak,
            '>' => TypewriterStep::Clear,
            '|' => TypewriterStep::RevealBackdrop,
            other => TypewriterStep::Append(other),
        }
    }
}

/// Receives caption steps as they fall due.
pub trait CaptionSink {
    fn apply(&mut self, step: TypewriterStep);
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    script: Vec<char>,
    cursor: usize,
    started_at: Option<f64>,
    step_sec: f64,
}

impl Typewriter {
    pub fn new(script: &str, step_sec: f64) -> Self {
        Self {
            script: script.chars().collect(),
            cursor: 0,
            started_at: None,
            step_sec,
        }
    }

    /// Start typing. Later calls are ignored so a replay does not restart the
    /// caption.
    pub fn start(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.script.len()
    }

    /// Steps due at `now`. The first character is typed immediately on start.
    pub fn advance(&mut self, now: f64) -> SmallVec<[TypewriterStep; 4]> {
        let mut out = SmallVec::new();
        let Some(t0) = self.started_at else {
            return out;
        };
        let due = if self.step_sec <= 0.0 {
            self.script.len()
        } else {
            (((now - t0) / self.step_sec).floor().max(0.0) as usize + 1).min(self.script.len())
        };
        while self.cursor < due {
            out.push(TypewriterStep::from(self.script[self.cursor]));
            self.cursor += 1;
        }
        out
    }
}
