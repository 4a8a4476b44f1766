//! The transfer decision.
//!
//! A decision is an ordered list of rules run over a [`PolicySnapshot`]. Each rule
//! either settles the outcome or passes to the next one. Rules read storage but
//! never write it.

use crate::{Config, ServicePolicy};
use regsec_primitives::{
    DenialReason, SettingsInspect, TokenSettings, TransferContext, WhitelistInspect,
};

/// Inputs of one decision, captured before the first rule runs.
pub struct PolicySnapshot<'a, T: Config> {
    pub context: &'a TransferContext<T::TokenId, T::AccountId>,
    pub settings: TokenSettings<T::AccountId>,
    pub policy: ServicePolicy,
    /// Unix time in seconds.
    pub now: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Allow,
    Deny(DenialReason),
}

type Rule<T> = fn(&PolicySnapshot<'_, T>) -> Verdict;

fn rules<T: Config>() -> [Rule<T>; 6] {
    [
        locked::<T>,
        zero_amount::<T>,
        initial_offer::<T>,
        partial_transfer::<T>,
        new_shareholder::<T>,
        whitelisted::<T>,
    ]
}

/// Runs the rules in order and returns the first settled outcome.
pub fn evaluate<T: Config>(snapshot: &PolicySnapshot<'_, T>) -> Result<(), DenialReason> {
    for rule in rules::<T>() {
        match rule(snapshot) {
            Verdict::Continue => continue,
            Verdict::Allow => return Ok(()),
            Verdict::Deny(reason) => return Err(reason),
        }
    }
    // The whitelist rule always settles.
    Err(DenialReason::NotWhitelisted)
}

fn locked<T: Config>(snapshot: &PolicySnapshot<'_, T>) -> Verdict {
    if snapshot.settings.locked {
        Verdict::Deny(DenialReason::Locked)
    } else {
        Verdict::Continue
    }
}

fn zero_amount<T: Config>(snapshot: &PolicySnapshot<'_, T>) -> Verdict {
    if snapshot.context.amount == 0 {
        Verdict::Allow
    } else {
        Verdict::Continue
    }
}

/// Until the offer window closes only the issuer distributes.
fn initial_offer<T: Config>(snapshot: &PolicySnapshot<'_, T>) -> Verdict {
    let from = &snapshot.context.from;
    if snapshot.now < snapshot.settings.initial_offer_end && !snapshot.settings.is_issuer(from) {
        Verdict::Deny(DenialReason::InitialOfferPeriod)
    } else {
        Verdict::Continue
    }
}

fn partial_transfer<T: Config>(snapshot: &PolicySnapshot<'_, T>) -> Verdict {
    let ctx = snapshot.context;
    if ctx.amount < ctx.from_balance && !snapshot.settings.partial_transfers_allowed {
        Verdict::Deny(DenialReason::PartialTransferDisallowed)
    } else {
        Verdict::Continue
    }
}

fn new_shareholder<T: Config>(snapshot: &PolicySnapshot<'_, T>) -> Verdict {
    let ctx = snapshot.context;
    let settings = &snapshot.settings;
    if ctx.to_balance == 0 && !settings.new_shareholders_allowed && !settings.is_issuer(&ctx.from)
    {
        Verdict::Deny(DenialReason::NewShareholdersDisallowed)
    } else {
        Verdict::Continue
    }
}

/// Some registered whitelist must clear the receiver, and under
/// [`ServicePolicy::Strict`] the sender as well. No registered whitelist clears
/// anybody.
fn whitelisted<T: Config>(snapshot: &PolicySnapshot<'_, T>) -> Verdict {
    let whitelists = T::Settings::whitelists();
    let cleared = |who: &T::AccountId| {
        whitelists.iter().any(|whitelist| T::Whitelists::verify(*whitelist, who))
    };

    let ctx = snapshot.context;
    let sender_ok = match snapshot.policy {
        ServicePolicy::Standard => true,
        ServicePolicy::Strict => cleared(&ctx.from),
    };
    if sender_ok && cleared(&ctx.to) {
        Verdict::Allow
    } else {
        Verdict::Deny(DenialReason::NotWhitelisted)
    }
}
