mod common;

use std::time::Duration;
use registration_agent::lease::enums::lease_outcome::LeaseOutcome;
use registration_agent::lease::structs::lease_manager::LeaseManager;
use registration_agent::lease::structs::registration_lease::RegistrationLease;
use registration_agent::protocol::structs::sequence_number::SequenceNumber;
use common::{create_test_context, eventually, register_reply, test_agent_config, FakeRegistry};

const PORT: u16 = 9000;

fn lease(lifetime: u16) -> RegistrationLease {
    let request = vec![0xC4, 0x61, 0, 1, 127, 0, 0, 1, 0x23, 0x28, 0, 0, 0, 42, 3, b's', b'v', b'c'];
    RegistrationLease::new(PORT, request, lifetime, Duration::from_secs(30))
}

#[tokio::test]
async fn test_unregistered_port_is_dropped_without_sending() {
    let registry = FakeRegistry::bind().await;
    let (context, output) = create_test_context(registry.addr, test_agent_config());

    context.port_locks.acquire(PORT);
    context.record_lease(lease(10));
    context.port_locks.release(PORT);

    let outcome = LeaseManager::new(context.clone(), lease(10)).run().await;
    assert_eq!(outcome, LeaseOutcome::Unregistered);
    assert!(!context.port_locks.contains(PORT));
    assert!(context.lease(PORT).is_none());
    assert!(registry.recv(Duration::from_millis(200)).await.is_none());
    assert!(output.contents().is_empty());
}

#[tokio::test]
async fn test_port_locked_again_before_the_wake_is_kept() {
    let registry = FakeRegistry::bind().await;
    let (_server, received) = registry.serve(|request| Some(register_reply(request[2], 3600)));
    let (context, _output) = create_test_context(registry.addr, test_agent_config());

    context.port_locks.acquire(PORT);
    context.port_locks.release(PORT);
    context.port_locks.acquire(PORT);
    assert!(!context.drop_unregistered(PORT));

    context.start_lease(lease(10));
    assert!(eventually(|| context.lease(PORT).is_some_and(|lease| lease.lifetime == 3600)).await);
    assert!(context.port_locks.is_locked(PORT));
    assert_eq!(received.lock().len(), 1);

    context.shutdown();
    context.join_background().await;
}

#[tokio::test]
async fn test_short_lifetime_renews_immediately() {
    let registry = FakeRegistry::bind().await;
    let (_server, received) = registry.serve(|request| Some(register_reply(request[2], 3600)));
    let (context, output) = create_test_context(registry.addr, test_agent_config());

    context.port_locks.acquire(PORT);
    let first_lease = lease(10);
    assert_eq!(first_lease.renewal_delay, Duration::ZERO);
    context.start_lease(first_lease.clone());

    assert!(eventually(|| context.lease(PORT).is_some_and(|lease| lease.lifetime == 3600)).await);
    assert_eq!(received.lock().first(), Some(&first_lease.request.to_vec()), "Renewals resend the stored bytes");
    assert!(output.contents().contains("Reregister 127.0.0.1:9000 succeed with lifetime = 3600"));
    assert_eq!(context.sequence.peek(), SequenceNumber(1), "A renewal consumes a sequence number");

    context.shutdown();
    context.join_background().await;
}

#[tokio::test]
async fn test_failed_renewal_releases_the_port() {
    let registry = FakeRegistry::bind().await;
    let mut config = test_agent_config();
    config.request_timeout_ms = 50;
    let (context, output) = create_test_context(registry.addr, config);

    context.port_locks.acquire(PORT);
    context.record_lease(lease(0));

    let outcome = LeaseManager::new(context.clone(), lease(0)).run().await;
    assert_eq!(outcome, LeaseOutcome::RenewalFailed);
    assert!(!context.port_locks.is_locked(PORT));
    assert!(context.lease(PORT).is_none());
    assert!(output.contents().contains("Reregister 127.0.0.1:9000 failed."));
    assert_eq!(registry.drain(Duration::from_millis(100)).await.len(), 3);
}

#[tokio::test]
async fn test_quit_cancels_a_pending_renewal() {
    let registry = FakeRegistry::bind().await;
    let (context, _output) = create_test_context(registry.addr, test_agent_config());

    context.port_locks.acquire(PORT);
    let task = LeaseManager::new(context.clone(), lease(3600)).spawn();
    context.shutdown();

    let outcome = tokio::time::timeout(Duration::from_secs(2), task).await.unwrap().unwrap();
    assert_eq!(outcome, LeaseOutcome::Cancelled);
    assert!(registry.recv(Duration::from_millis(100)).await.is_none());
}

#[tokio::test]
async fn test_registering_again_replaces_the_task() {
    let registry = FakeRegistry::bind().await;
    let (context, _output) = create_test_context(registry.addr, test_agent_config());

    context.port_locks.acquire(PORT);
    context.start_lease(lease(3600));
    context.start_lease(lease(7200));

    assert!(context.has_lease_task(PORT));
    assert_eq!(context.lease(PORT).map(|lease| lease.lifetime), Some(7200));

    context.shutdown();
    tokio::time::timeout(Duration::from_secs(2), context.join_background()).await.unwrap();
}
