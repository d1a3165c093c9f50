//! Subscription status transitions.
//!
//! `decide` is the whole state machine: given the current status and a
//! requested transition it either names the next status or the error. The
//! reducers below only stamp the transition timestamps.

use super::super::actions::{
    ActivateSubscriptionInput, CancelSubscriptionInput, PauseSubscriptionInput,
    RenewExpiringSubscriptionInput, ResumeSubscriptionInput, SetExpiringInput,
};
use super::super::errors::{Result, SubscriptionInstanceError};
use super::super::models::{SubscriptionInstanceState, SubscriptionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Activate,
    Pause,
    SetExpiring,
    Resume,
    Renew,
    Cancel,
}

fn decide(status: SubscriptionStatus, transition: Transition) -> Result<SubscriptionStatus> {
    use SubscriptionStatus::*;
    use Transition::*;

    match (transition, status) {
        (Activate, Pending) => Ok(Active),
        (Activate, _) => Err(SubscriptionInstanceError::ActivateNotPending { status }),

        (Pause, Active) => Ok(Paused),
        (Pause, _) => Err(SubscriptionInstanceError::PauseNotActive { status }),

        (SetExpiring, Active) => Ok(Expiring),
        (SetExpiring, _) => Err(SubscriptionInstanceError::SetExpiringNotActive { status }),

        (Resume, Paused) => Ok(Active),
        (Resume, _) => Err(SubscriptionInstanceError::ResumeNotPaused { status }),

        (Renew, Expiring) => Ok(Active),
        (Renew, _) => Err(SubscriptionInstanceError::RenewNotExpiring { status }),

        (Cancel, Cancelled) => Err(SubscriptionInstanceError::CancelAlreadyCancelled),
        (Cancel, _) => Ok(Cancelled),
    }
}

pub fn activate_subscription(
    state: &mut SubscriptionInstanceState,
    input: &ActivateSubscriptionInput,
) -> Result<()> {
    state.status = decide(state.status, Transition::Activate)?;
    state.activated_since = Some(input.activated_since);
    Ok(())
}

pub fn pause_subscription(
    state: &mut SubscriptionInstanceState,
    input: &PauseSubscriptionInput,
) -> Result<()> {
    state.status = decide(state.status, Transition::Pause)?;
    state.paused_since = Some(input.paused_since);
    Ok(())
}

pub fn set_expiring(state: &mut SubscriptionInstanceState, input: &SetExpiringInput) -> Result<()> {
    state.status = decide(state.status, Transition::SetExpiring)?;
    state.expiring_since = Some(input.expiring_since);
    Ok(())
}

pub fn cancel_subscription(
    state: &mut SubscriptionInstanceState,
    input: &CancelSubscriptionInput,
) -> Result<()> {
    state.status = decide(state.status, Transition::Cancel)?;
    state.cancelled_since = Some(input.cancelled_since);
    state.cancellation_reason.clone_from(&input.cancellation_reason);
    Ok(())
}

/// Back to ACTIVE. `activatedSince` keeps the original activation.
pub fn resume_subscription(
    state: &mut SubscriptionInstanceState,
    _input: &ResumeSubscriptionInput,
) -> Result<()> {
    state.status = decide(state.status, Transition::Resume)?;
    state.paused_since = None;
    Ok(())
}

pub fn renew_expiring_subscription(
    state: &mut SubscriptionInstanceState,
    input: &RenewExpiringSubscriptionInput,
) -> Result<()> {
    state.status = decide(state.status, Transition::Renew)?;
    state.expiring_since = None;
    if let Some(renewal_date) = input.renewal_date {
        state.renewal_date = Some(renewal_date);
    }
    Ok(())
}
