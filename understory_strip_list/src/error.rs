// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported to hosts that misuse the transition controller.

use crate::{Mode, ModeTransition};

/// Reasons a mode switch could not begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// A switch was requested while another one is still animating.
    ///
    /// Transitions are never coalesced; the host must call
    /// [`crate::TransitionController::complete_transition`] first.
    #[error("cannot begin a transition while {transition} is still animating")]
    AlreadyAnimating {
        /// The transition currently in flight.
        transition: ModeTransition,
    },
    /// The requested mode is already active.
    #[error("already presenting the {mode} layout")]
    AlreadyInMode {
        /// The active mode.
        mode: Mode,
    },
}
