// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::Cell;
use std::io::{self, IsTerminal, Write};

/// What the possession-factor hardware reports before a challenge is issued.
#[derive(Debug, Clone, Copy)]
pub struct Availability {
    pub available: bool,
    pub enrolled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeOutcome {
    Success,
    Declined,
    Error(String),
}

/// Device-level identity check required before a transfer commits. The
/// workflow treats any non-success as an abort, never a crash.
pub trait Authenticator {
    fn check_availability(&self) -> Availability;
    fn challenge(&self, prompt: &str) -> ChallengeOutcome;
}

/// Interactive stand-in for the device biometric prompt: asks for an
/// explicit approval on the terminal. A non-interactive stdin counts as
/// hardware being unavailable.
pub struct TerminalAuthenticator;

impl Authenticator for TerminalAuthenticator {
    fn check_availability(&self) -> Availability {
        Availability {
            available: io::stdin().is_terminal(),
            enrolled: true,
        }
    }

    fn challenge(&self, prompt: &str) -> ChallengeOutcome {
        print!("{} — approve? [y/N] ", prompt);
        if let Err(err) = io::stdout().flush() {
            return ChallengeOutcome::Error(err.to_string());
        }
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(_) => match line.trim().to_lowercase().as_str() {
                "y" | "yes" => ChallengeOutcome::Success,
                _ => ChallengeOutcome::Declined,
            },
            Err(err) => ChallengeOutcome::Error(err.to_string()),
        }
    }
}

/// Authenticator with a fixed script, for exercising every gate outcome
/// without hardware. Counts issued challenges so callers can assert the
/// gate was never reached.
#[derive(Debug)]
pub struct ScriptedAuthenticator {
    availability: Availability,
    outcome: ChallengeOutcome,
    challenges: Cell<usize>,
}

impl ScriptedAuthenticator {
    fn with(availability: Availability, outcome: ChallengeOutcome) -> Self {
        Self {
            availability,
            outcome,
            challenges: Cell::new(0),
        }
    }

    pub fn approving() -> Self {
        Self::with(
            Availability { available: true, enrolled: true },
            ChallengeOutcome::Success,
        )
    }

    pub fn declining() -> Self {
        Self::with(
            Availability { available: true, enrolled: true },
            ChallengeOutcome::Declined,
        )
    }

    pub fn erroring(reason: &str) -> Self {
        Self::with(
            Availability { available: true, enrolled: true },
            ChallengeOutcome::Error(reason.to_string()),
        )
    }

    pub fn unavailable() -> Self {
        Self::with(
            Availability { available: false, enrolled: false },
            ChallengeOutcome::Declined,
        )
    }

    pub fn not_enrolled() -> Self {
        Self::with(
            Availability { available: true, enrolled: false },
            ChallengeOutcome::Declined,
        )
    }

    pub fn challenges_issued(&self) -> usize {
        self.challenges.get()
    }
}

impl Authenticator for ScriptedAuthenticator {
    fn check_availability(&self) -> Availability {
        self.availability
    }

    fn challenge(&self, _prompt: &str) -> ChallengeOutcome {
        self.challenges.set(self.challenges.get() + 1);
        self.outcome.clone()
    }
}
