//! Activation, deactivation and chaining
//!
//! Covers:
//! - forwarding to a hook installed before the gatekeeper
//! - activate then deactivate restores the original slot contents
//! - repeated activation and deactivation without activation
//! - the process-wide service entry points

#[path = "common/testhost/mod.rs"]
mod testhost;

use gatekeeper::{GatekeeperConfig, GatekeeperService, HookSlot, UtilityHook};
use gatekeeper_configs::PolicySettings;
use std::sync::Arc;
use testhost::statements::*;
use testhost::{PassThroughHook, TestHost, TestSession, ALICE, POSTGRES};

fn host_with_prior_hook() -> (TestHost, Arc<PassThroughHook>) {
    let prior = Arc::new(PassThroughHook::new("auditor"));
    let host = TestHost::with_slot(HookSlot::with_hook(prior.clone()));
    (host, prior)
}

fn head_name(slot: &HookSlot) -> Option<String> {
    slot.current().map(|hook| hook.name().to_string())
}

#[test]
fn test_allowed_statement_reaches_prior_hook() {
    let (host, prior) = host_with_prior_hook();
    let service = GatekeeperService::new();
    assert!(service.activate(&host.slot, PolicySettings::default()));

    host.run(&TestSession::plain(ALICE), &vacuum()).unwrap();
    assert_eq!(prior.calls(), 1);
    assert_eq!(host.utility.executed(), vec!["VACUUM".to_string()]);
}

#[test]
fn test_denied_statement_stops_before_prior_hook() {
    let (host, prior) = host_with_prior_hook();
    let service = GatekeeperService::new();
    service.activate(&host.slot, PolicySettings::default());

    assert!(host.run(&TestSession::plain(ALICE), &copy_to_program("id")).is_err());
    assert_eq!(prior.calls(), 0);
    assert_eq!(host.utility.count(), 0);
}

#[test]
fn test_deactivate_restores_prior_hook() {
    let (host, prior) = host_with_prior_hook();
    let prior_ref: Arc<dyn UtilityHook> = prior.clone();
    let service = GatekeeperService::new();

    service.activate(&host.slot, PolicySettings::default());
    assert_eq!(head_name(&host.slot).as_deref(), Some("gatekeeper"));

    assert!(service.deactivate(&host.slot));
    assert!(!service.is_active());
    assert!(host.slot.is_head(&prior_ref));

    // No policy left in the chain.
    host.run(&TestSession::plain(ALICE).running_as(POSTGRES), &copy_to_program("id")).unwrap();
    assert_eq!(prior.calls(), 1);
}

#[test]
fn test_deactivate_restores_empty_slot() {
    let host = TestHost::new();
    let service = GatekeeperService::new();

    service.activate(&host.slot, PolicySettings::default());
    assert!(!host.slot.is_empty());
    service.deactivate(&host.slot);
    assert!(host.slot.is_empty());
}

#[test]
fn test_double_activation_installs_once() {
    let (host, prior) = host_with_prior_hook();
    let service = GatekeeperService::new();

    assert!(service.activate(&host.slot, PolicySettings::default()));
    let head = host.slot.current().unwrap();
    assert!(!service.activate(&host.slot, PolicySettings::default()));
    assert!(host.slot.is_head(&head));

    host.run(&TestSession::plain(ALICE), &vacuum()).unwrap();
    assert_eq!(prior.calls(), 1);
    assert_eq!(host.utility.count(), 1);

    assert!(service.deactivate(&host.slot));
    assert_eq!(head_name(&host.slot).as_deref(), Some("auditor"));
}

#[test]
fn test_deactivate_without_activation_is_noop() {
    let (host, prior) = host_with_prior_hook();
    let prior_ref: Arc<dyn UtilityHook> = prior;
    let service = GatekeeperService::new();

    assert!(!service.deactivate(&host.slot));
    assert!(host.slot.is_head(&prior_ref));
}

#[test]
fn test_deactivate_after_another_hook_chained_on_top() {
    let host = TestHost::new();
    let service = GatekeeperService::new();
    service.activate(&host.slot, PolicySettings::default());

    let late: Arc<dyn UtilityHook> = Arc::new(PassThroughHook::new("late"));
    host.slot.replace(Some(late));

    // Restores the pre-activation state even though the head moved.
    assert!(service.deactivate(&host.slot));
    assert!(host.slot.is_empty());
}

#[test]
fn test_reactivation_after_deactivation() {
    let host = TestHost::new();
    let service = GatekeeperService::new();

    assert!(service.activate(&host.slot, PolicySettings::default()));
    assert!(service.deactivate(&host.slot));
    assert!(service.activate(&host.slot, PolicySettings::default()));
    assert!(host.run(&TestSession::plain(ALICE), &copy_to_program("id")).is_err());
}

#[test]
fn test_global_service_entry_points() {
    let host = TestHost::new();
    let config = GatekeeperConfig::default();

    assert!(gatekeeper::activate(&host.slot, &config));
    assert!(gatekeeper::service().is_active());
    assert!(!gatekeeper::activate(&host.slot, &config));

    assert!(host.run(&TestSession::plain(ALICE), &copy_to_program("id")).is_err());

    assert!(gatekeeper::deactivate(&host.slot));
    assert!(!gatekeeper::deactivate(&host.slot));
    assert!(host.slot.is_empty());
}
