use crate::{mock::*, ActiveService, Error, Event, ServicePolicy};
use frame_support::{assert_noop, assert_ok};
use pallet_whitelist::WhitelistKind;
use regsec_primitives::{DenialReason, TransferContext, TransferRestriction};

fn transfer(
    from: u64,
    to: u64,
    amount: u128,
    from_balance: u128,
    to_balance: u128,
) -> TransferContext<u32, u64> {
    TransferContext { token: TOKEN, from, to, amount, from_balance, to_balance }
}

/// A full-balance transfer between existing holders; only the whitelist rule can object.
fn plain(from: u64, to: u64) -> TransferContext<u32, u64> {
    transfer(from, to, 10, 10, 5)
}

fn register_genesis_whitelist() {
    assert_ok!(SettingsStorage::add_whitelist(RuntimeOrigin::signed(OWNER), 0));
}

fn issuer_sets<F>(f: F)
where
    F: FnOnce(RuntimeOrigin) -> sp_runtime::DispatchResult,
{
    assert_ok!(f(RuntimeOrigin::signed(ISSUER)));
}

#[test]
fn genesis_config_works() {
    new_test_ext().execute_with(|| {
        assert_eq!(Regulator::owner(), Some(OWNER));
        assert_eq!(Regulator::active_service(), Some(0));
        assert_eq!(Regulator::service(0).map(|s| s.policy), Some(ServicePolicy::Standard));
    });
}

// ============================================================================
// Decision pipeline
// ============================================================================

#[test]
fn no_registered_whitelist_fails_closed() {
    new_test_ext().execute_with(|| {
        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Err(DenialReason::NotWhitelisted));
    });
}

#[test]
fn registered_whitelist_clears_receiver() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Ok(()));
        // Standard policy does not look at the sender.
        assert_eq!(Regulator::check(&plain(STRANGER, BOB)), Ok(()));
        assert_eq!(Regulator::check(&plain(ALICE, STRANGER)), Err(DenialReason::NotWhitelisted));
    });
}

#[test]
fn tombstoned_whitelist_no_longer_clears() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        assert_ok!(SettingsStorage::remove_whitelist(RuntimeOrigin::signed(OWNER), 0));
        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Err(DenialReason::NotWhitelisted));
    });
}

#[test]
fn removed_investor_is_no_longer_cleared() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        assert_ok!(Whitelist::remove(RuntimeOrigin::signed(OWNER), 0, BOB));
        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Err(DenialReason::NotWhitelisted));
    });
}

#[test]
fn null_receiver_is_never_cleared() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        assert_eq!(Regulator::check(&plain(ALICE, 0)), Err(DenialReason::NotWhitelisted));
    });
}

#[test]
fn lock_beats_everything() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        issuer_sets(|o| SettingsStorage::set_locked(o, TOKEN, true));

        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Err(DenialReason::Locked));
        assert_eq!(Regulator::check(&transfer(ALICE, BOB, 0, 10, 5)), Err(DenialReason::Locked));
        assert_eq!(Regulator::check(&plain(ISSUER, BOB)), Err(DenialReason::Locked));

        issuer_sets(|o| SettingsStorage::set_locked(o, TOKEN, false));
        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Ok(()));
    });
}

#[test]
fn zero_amount_is_allowed_unless_locked() {
    new_test_ext().execute_with(|| {
        // No whitelist registered, receiver unknown, partial and new holder rules would fail.
        assert_eq!(Regulator::check(&transfer(STRANGER, STRANGER, 0, 10, 0)), Ok(()));
    });
}

#[test]
fn partial_transfers_need_permission() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        let half = transfer(ALICE, BOB, 5, 10, 5);

        assert_eq!(Regulator::check(&half), Err(DenialReason::PartialTransferDisallowed));

        issuer_sets(|o| SettingsStorage::set_partial_transfers(o, TOKEN, true));
        assert_eq!(Regulator::check(&half), Ok(()));
    });
}

#[test]
fn new_shareholders_need_permission_unless_issuer_sends() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();

        assert_eq!(
            Regulator::check(&transfer(ALICE, BOB, 10, 10, 0)),
            Err(DenialReason::NewShareholdersDisallowed)
        );
        assert_eq!(Regulator::check(&transfer(ISSUER, BOB, 10, 10, 0)), Ok(()));

        issuer_sets(|o| SettingsStorage::allow_new_shareholders(o, TOKEN, true));
        assert_eq!(Regulator::check(&transfer(ALICE, BOB, 10, 10, 0)), Ok(()));
    });
}

#[test]
fn only_issuer_sends_during_initial_offer() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        MockTime::set(1_000);
        issuer_sets(|o| SettingsStorage::set_initial_offer_end_date(o, TOKEN, 2_000));

        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Err(DenialReason::InitialOfferPeriod));
        assert_eq!(Regulator::check(&plain(ISSUER, BOB)), Ok(()));

        MockTime::set(2_000);
        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Ok(()));
    });
}

#[test]
fn rules_apply_in_order() {
    new_test_ext().execute_with(|| {
        // Partial and new holder at once, nobody whitelisted: the partial rule reports first.
        assert_eq!(
            Regulator::check(&transfer(STRANGER, STRANGER, 5, 10, 0)),
            Err(DenialReason::PartialTransferDisallowed)
        );
        issuer_sets(|o| SettingsStorage::set_partial_transfers(o, TOKEN, true));
        assert_eq!(
            Regulator::check(&transfer(STRANGER, STRANGER, 5, 10, 0)),
            Err(DenialReason::NewShareholdersDisallowed)
        );
        issuer_sets(|o| SettingsStorage::allow_new_shareholders(o, TOKEN, true));
        assert_eq!(
            Regulator::check(&transfer(STRANGER, STRANGER, 5, 10, 0)),
            Err(DenialReason::NotWhitelisted)
        );
    });
}

#[test]
fn token_whitelist_clears_issuers_of_listed_tokens() {
    new_test_ext().execute_with(|| {
        assert_ok!(Whitelist::create(RuntimeOrigin::signed(OWNER), WhitelistKind::Token));
        assert_ok!(Whitelist::add_token(RuntimeOrigin::signed(OWNER), 1, TOKEN));
        assert_ok!(SettingsStorage::add_whitelist(RuntimeOrigin::signed(OWNER), 1));

        assert_eq!(Regulator::check(&plain(ALICE, ISSUER)), Ok(()));
        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Err(DenialReason::NotWhitelisted));
    });
}

// ============================================================================
// Services
// ============================================================================

#[test]
fn strict_service_checks_sender_too() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        assert_ok!(Regulator::deploy_service(RuntimeOrigin::signed(STRANGER), ServicePolicy::Strict));
        System::assert_last_event(
            Event::ServiceDeployed { service: 1, policy: ServicePolicy::Strict }.into(),
        );

        // Deployed but not active yet.
        assert_eq!(Regulator::check(&plain(STRANGER, BOB)), Ok(()));

        assert_ok!(Regulator::replace_service(RuntimeOrigin::signed(OWNER), 1));
        System::assert_last_event(Event::ReplaceService { old: Some(0), new: 1 }.into());

        assert_eq!(Regulator::check(&plain(STRANGER, BOB)), Err(DenialReason::NotWhitelisted));
        assert_eq!(Regulator::check(&plain(ALICE, BOB)), Ok(()));
    });
}

#[test]
fn only_owner_replaces_service() {
    new_test_ext().execute_with(|| {
        assert_ok!(Regulator::deploy_service(RuntimeOrigin::signed(STRANGER), ServicePolicy::Strict));
        assert_noop!(
            Regulator::replace_service(RuntimeOrigin::signed(STRANGER), 1),
            Error::<Test>::Unauthorized
        );
    });
}

#[test]
fn replacing_with_unknown_service_fails() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            Regulator::replace_service(RuntimeOrigin::signed(OWNER), 7),
            Error::<Test>::InvalidAddress
        );
        assert_eq!(Regulator::active_service(), Some(0));
    });
}

#[test]
fn no_active_service_denies_everything() {
    new_test_ext().execute_with(|| {
        register_genesis_whitelist();
        ActiveService::<Test>::kill();

        assert_eq!(
            <Regulator as TransferRestriction<u32, u64>>::check(&plain(ALICE, BOB)),
            Err(DenialReason::ServiceUnavailable)
        );
        assert_eq!(
            Regulator::check(&transfer(ALICE, BOB, 0, 10, 5)),
            Err(DenialReason::ServiceUnavailable)
        );
    });
}

#[test]
fn ownership_transfer_moves_replace_right() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            Regulator::transfer_ownership(RuntimeOrigin::signed(STRANGER), STRANGER),
            Error::<Test>::Unauthorized
        );
        assert_noop!(
            Regulator::transfer_ownership(RuntimeOrigin::signed(OWNER), 0),
            Error::<Test>::InvalidAddress
        );

        assert_ok!(Regulator::transfer_ownership(RuntimeOrigin::signed(OWNER), ALICE));
        System::assert_last_event(Event::OwnershipTransferred { old: OWNER, new: ALICE }.into());

        assert_ok!(Regulator::deploy_service(RuntimeOrigin::signed(ALICE), ServicePolicy::Strict));
        assert_noop!(
            Regulator::replace_service(RuntimeOrigin::signed(OWNER), 1),
            Error::<Test>::Unauthorized
        );
        assert_ok!(Regulator::replace_service(RuntimeOrigin::signed(ALICE), 1));
    });
}

#[test]
fn check_weight_covers_strict_lookups_on_a_full_registry() {
    // Four registry slots, each verified for both parties against up to four tokens.
    let expected = <() as crate::WeightInfo>::check(4)
        .saturating_add(<() as pallet_whitelist::WeightInfo>::verify(4).saturating_mul(8));
    assert_eq!(<Regulator as TransferRestriction<u32, u64>>::check_weight(), expected);
}
