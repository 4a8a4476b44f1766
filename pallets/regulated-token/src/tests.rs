use crate::{mock::*, Error, Event, WeightInfo};
use frame_support::{assert_noop, assert_ok, dispatch::GetDispatchInfo};
use regsec_primitives::{DenialReason, TransferRestriction};

fn balances() -> (u128, u128, u128) {
    (
        RegulatedToken::balance_of(TOKEN, &OWNER),
        RegulatedToken::balance_of(TOKEN, &ALICE),
        RegulatedToken::balance_of(TOKEN, &BOB),
    )
}

#[test]
fn genesis_config_works() {
    new_test_ext().execute_with(|| {
        let details = RegulatedToken::details(TOKEN).expect("genesis token");
        assert_eq!(details.owner, OWNER);
        assert_eq!(details.symbol.to_vec(), b"ABST".to_vec());
        assert_eq!(details.arbitrator, None);
        assert!(!details.minting_finished);
        assert_eq!(RegulatedToken::total_supply(TOKEN), 100);
        assert_eq!(balances(), (100, 0, 0));
    });
}

// ============================================================================
// Issuance
// ============================================================================

#[test]
fn create_registers_caller_as_owner() {
    new_test_ext().execute_with(|| {
        assert_ok!(RegulatedToken::create(
            RuntimeOrigin::signed(ALICE),
            2,
            b"Second".to_vec(),
            b"SEC".to_vec(),
            6
        ));
        System::assert_last_event(Event::Created { token: 2, owner: ALICE }.into());
        assert_eq!(RegulatedToken::details(2).map(|d| d.decimals), Some(6));
        assert_eq!(RegulatedToken::total_supply(2), 0);

        assert_noop!(
            RegulatedToken::create(RuntimeOrigin::signed(BOB), 2, vec![], vec![], 0),
            Error::<Test>::AlreadyExists
        );
        assert_noop!(
            RegulatedToken::create(RuntimeOrigin::signed(BOB), 3, vec![], b"TOOLONGSYM".to_vec(), 0),
            Error::<Test>::SymbolTooLong
        );
    });
}

#[test]
fn owner_mints_until_finished() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            RegulatedToken::mint(RuntimeOrigin::signed(HACKER), TOKEN, HACKER, 10),
            Error::<Test>::Unauthorized
        );

        assert_ok!(RegulatedToken::mint(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, 50));
        System::assert_last_event(Event::Minted { token: TOKEN, to: ALICE, amount: 50 }.into());
        assert_eq!(RegulatedToken::total_supply(TOKEN), 150);
        assert_eq!(balances(), (100, 50, 0));

        assert_ok!(RegulatedToken::finish_minting(RuntimeOrigin::signed(OWNER), TOKEN));
        System::assert_last_event(Event::MintFinished { token: TOKEN }.into());

        assert_noop!(
            RegulatedToken::mint(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, 1),
            Error::<Test>::MintingFinished
        );
        assert_noop!(
            RegulatedToken::finish_minting(RuntimeOrigin::signed(OWNER), TOKEN),
            Error::<Test>::MintingFinished
        );
    });
}

#[test]
fn mint_is_not_regulated() {
    new_test_ext().execute_with(|| {
        MockRegulator::deny(DenialReason::NotWhitelisted);
        assert_ok!(RegulatedToken::mint(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, 5));
        assert_eq!(MockRegulator::checks(), 0);
    });
}

#[test]
fn mint_rejects_null_receiver_and_overflow() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            RegulatedToken::mint(RuntimeOrigin::signed(OWNER), TOKEN, 0, 1),
            Error::<Test>::InvalidAddress
        );
        assert_noop!(
            RegulatedToken::mint(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, u128::MAX),
            Error::<Test>::Overflow
        );
    });
}

// ============================================================================
// Regulated transfers
// ============================================================================

#[test]
fn transfer_asks_the_regulator() {
    new_test_ext().execute_with(|| {
        assert_ok!(RegulatedToken::transfer(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, 25));
        System::assert_last_event(
            Event::Transferred { token: TOKEN, from: OWNER, to: ALICE, amount: 25 }.into(),
        );
        assert_eq!(balances(), (75, 25, 0));
        assert_eq!(MockRegulator::checks(), 1);
    });
}

#[test]
fn regulated_calls_pay_for_the_regulator_check() {
    let check = <MockRegulator as TransferRestriction<u32, u64>>::check_weight();

    let transfer = crate::Call::<Test>::transfer { token: TOKEN, to: ALICE, amount: 1 };
    assert_eq!(
        transfer.get_dispatch_info().call_weight,
        <() as WeightInfo>::transfer().saturating_add(check)
    );

    let transfer_from =
        crate::Call::<Test>::transfer_from { token: TOKEN, from: OWNER, to: ALICE, amount: 1 };
    assert_eq!(
        transfer_from.get_dispatch_info().call_weight,
        <() as WeightInfo>::transfer_from().saturating_add(check)
    );
}

#[test]
fn denied_transfer_leaves_balances_unchanged() {
    new_test_ext().execute_with(|| {
        MockRegulator::deny(DenialReason::NotWhitelisted);
        assert_noop!(
            RegulatedToken::transfer(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, 25),
            Error::<Test>::PolicyDenied(DenialReason::NotWhitelisted)
        );
        assert_eq!(balances(), (100, 0, 0));
    });
}

#[test]
fn policy_is_checked_before_balance() {
    new_test_ext().execute_with(|| {
        MockRegulator::deny(DenialReason::Locked);
        assert_noop!(
            RegulatedToken::transfer(RuntimeOrigin::signed(ALICE), TOKEN, BOB, 25),
            Error::<Test>::PolicyDenied(DenialReason::Locked)
        );

        MockRegulator::allow();
        assert_noop!(
            RegulatedToken::transfer(RuntimeOrigin::signed(ALICE), TOKEN, BOB, 25),
            Error::<Test>::InsufficientBalance
        );
    });
}

#[test]
fn transfer_edge_cases() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            RegulatedToken::transfer(RuntimeOrigin::signed(OWNER), TOKEN, 0, 1),
            Error::<Test>::InvalidAddress
        );
        assert_noop!(
            RegulatedToken::transfer(RuntimeOrigin::signed(OWNER), 9, ALICE, 1),
            Error::<Test>::UnknownToken
        );

        assert_ok!(RegulatedToken::transfer(RuntimeOrigin::signed(OWNER), TOKEN, OWNER, 40));
        assert_eq!(RegulatedToken::balance_of(TOKEN, &OWNER), 100);
    });
}

#[test]
fn detect_transfer_restriction_reports_reason() {
    new_test_ext().execute_with(|| {
        assert_eq!(RegulatedToken::detect_transfer_restriction(TOKEN, &OWNER, &ALICE, 5), Ok(()));
        MockRegulator::deny(DenialReason::PartialTransferDisallowed);
        assert_eq!(
            RegulatedToken::detect_transfer_restriction(TOKEN, &OWNER, &ALICE, 5),
            Err(DenialReason::PartialTransferDisallowed)
        );
    });
}

#[test]
fn transfer_from_spends_allowance() {
    new_test_ext().execute_with(|| {
        assert_ok!(RegulatedToken::approve(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, 30));
        System::assert_last_event(
            Event::Approved { token: TOKEN, owner: OWNER, spender: ALICE, amount: 30 }.into(),
        );

        assert_ok!(RegulatedToken::transfer_from(RuntimeOrigin::signed(ALICE), TOKEN, OWNER, BOB, 20));
        assert_eq!(balances(), (80, 0, 20));
        assert_eq!(RegulatedToken::allowance(TOKEN, &OWNER, &ALICE), 10);

        assert_noop!(
            RegulatedToken::transfer_from(RuntimeOrigin::signed(ALICE), TOKEN, OWNER, BOB, 11),
            Error::<Test>::InsufficientAllowance
        );
        assert_noop!(
            RegulatedToken::transfer_from(RuntimeOrigin::signed(BOB), TOKEN, OWNER, BOB, 1),
            Error::<Test>::InsufficientAllowance
        );
    });
}

#[test]
fn transfer_from_is_regulated() {
    new_test_ext().execute_with(|| {
        assert_ok!(RegulatedToken::approve(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, 30));
        MockRegulator::deny(DenialReason::NewShareholdersDisallowed);
        assert_noop!(
            RegulatedToken::transfer_from(RuntimeOrigin::signed(ALICE), TOKEN, OWNER, BOB, 20),
            Error::<Test>::PolicyDenied(DenialReason::NewShareholdersDisallowed)
        );
        assert_eq!(RegulatedToken::allowance(TOKEN, &OWNER, &ALICE), 30);
    });
}

// ============================================================================
// Arbitration
// ============================================================================

#[test]
fn arbitrator_is_linked_once_before_minting_ends() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            RegulatedToken::set_multisig_arbitrator(RuntimeOrigin::signed(HACKER), TOKEN, HACKER),
            Error::<Test>::Unauthorized
        );
        assert_noop!(
            RegulatedToken::set_multisig_arbitrator(RuntimeOrigin::signed(OWNER), TOKEN, 0),
            Error::<Test>::InvalidAddress
        );

        assert_ok!(RegulatedToken::set_multisig_arbitrator(
            RuntimeOrigin::signed(OWNER),
            TOKEN,
            ARBITRATOR
        ));
        System::assert_last_event(
            Event::ArbitratorSet { token: TOKEN, arbitrator: ARBITRATOR }.into(),
        );

        assert_noop!(
            RegulatedToken::set_multisig_arbitrator(RuntimeOrigin::signed(OWNER), TOKEN, ALICE),
            Error::<Test>::ArbitratorAlreadySet
        );
    });
}

#[test]
fn arbitrator_cannot_be_linked_after_minting() {
    new_test_ext().execute_with(|| {
        assert_ok!(RegulatedToken::finish_minting(RuntimeOrigin::signed(OWNER), TOKEN));
        assert_noop!(
            RegulatedToken::set_multisig_arbitrator(RuntimeOrigin::signed(OWNER), TOKEN, ARBITRATOR),
            Error::<Test>::MintingFinished
        );
    });
}

#[test]
fn arbitrator_recovers_funds_past_the_regulator() {
    new_test_ext().execute_with(|| {
        assert_ok!(RegulatedToken::set_multisig_arbitrator(
            RuntimeOrigin::signed(OWNER),
            TOKEN,
            ARBITRATOR
        ));
        assert_ok!(RegulatedToken::finish_minting(RuntimeOrigin::signed(OWNER), TOKEN));
        assert_ok!(RegulatedToken::transfer(RuntimeOrigin::signed(OWNER), TOKEN, ALICE, 25));
        assert_eq!(balances(), (75, 25, 0));

        // The regulator would refuse the way back; arbitrage never asks.
        MockRegulator::deny(DenialReason::NotWhitelisted);
        let checks = MockRegulator::checks();

        assert_ok!(RegulatedToken::arbitrage(
            RuntimeOrigin::signed(ARBITRATOR),
            TOKEN,
            ALICE,
            OWNER,
            25
        ));
        System::assert_last_event(
            Event::Arbitraged { token: TOKEN, from: ALICE, to: OWNER, amount: 25 }.into(),
        );
        assert_eq!(balances(), (100, 0, 0));
        assert_eq!(MockRegulator::checks(), checks);
    });
}

#[test]
fn only_arbitrator_may_arbitrage() {
    new_test_ext().execute_with(|| {
        // No arbitrator linked yet.
        assert_noop!(
            RegulatedToken::arbitrage(RuntimeOrigin::signed(OWNER), TOKEN, OWNER, ALICE, 1),
            Error::<Test>::Unauthorized
        );

        assert_ok!(RegulatedToken::set_multisig_arbitrator(
            RuntimeOrigin::signed(OWNER),
            TOKEN,
            ARBITRATOR
        ));
        assert_noop!(
            RegulatedToken::arbitrage(RuntimeOrigin::signed(HACKER), TOKEN, OWNER, HACKER, 1),
            Error::<Test>::Unauthorized
        );
        assert_noop!(
            RegulatedToken::arbitrage(RuntimeOrigin::signed(OWNER), TOKEN, OWNER, ALICE, 1),
            Error::<Test>::Unauthorized
        );
        assert_noop!(
            RegulatedToken::arbitrage(RuntimeOrigin::signed(ARBITRATOR), TOKEN, ALICE, BOB, 1),
            Error::<Test>::InsufficientBalance
        );
    });
}

#[test]
fn arbitrage_rejects_null_parties() {
    new_test_ext().execute_with(|| {
        assert_ok!(RegulatedToken::set_multisig_arbitrator(
            RuntimeOrigin::signed(OWNER),
            TOKEN,
            ARBITRATOR
        ));
        assert_noop!(
            RegulatedToken::arbitrage(RuntimeOrigin::signed(ARBITRATOR), TOKEN, 0, ALICE, 0),
            Error::<Test>::InvalidAddress
        );
        assert_noop!(
            RegulatedToken::arbitrage(RuntimeOrigin::signed(ARBITRATOR), TOKEN, OWNER, 0, 1),
            Error::<Test>::InvalidAddress
        );
    });
}

#[test]
fn ownership_transfer_moves_mint_right() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            RegulatedToken::transfer_ownership(RuntimeOrigin::signed(HACKER), TOKEN, HACKER),
            Error::<Test>::Unauthorized
        );
        assert_ok!(RegulatedToken::transfer_ownership(RuntimeOrigin::signed(OWNER), TOKEN, ALICE));
        System::assert_last_event(
            Event::OwnershipTransferred { token: TOKEN, old: OWNER, new: ALICE }.into(),
        );

        assert_noop!(
            RegulatedToken::mint(RuntimeOrigin::signed(OWNER), TOKEN, OWNER, 1),
            Error::<Test>::Unauthorized
        );
        assert_ok!(RegulatedToken::mint(RuntimeOrigin::signed(ALICE), TOKEN, ALICE, 1));
    });
}
