//! Behavioral contracts of the query cache: de-duplication, prefix
//! invalidation, last-request-wins, mutation atomicity, idempotent
//! re-subscription.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;
use traceline_api::ErrorCategory;
use traceline_client::ClientError;
use traceline_core::ResourceKind;
use traceline_query::{
    fetcher, Fetcher, InvalidationKey, Mutation, MutationError, QueryHandle, QueryKey, QueryStore,
};

/// Fetcher that counts invocations and returns the call index as payload.
fn counting_fetcher(calls: Arc<AtomicUsize>) -> Fetcher {
    fetcher(move || {
        let calls = Arc::clone(&calls);
        async move {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!({ "fetch": n }))
        }
    })
}

/// Fetcher that blocks on a semaphore permit before returning.
fn gated_fetcher(calls: Arc<AtomicUsize>, gate: Arc<Semaphore>) -> Fetcher {
    fetcher(move || {
        let calls = Arc::clone(&calls);
        let gate = Arc::clone(&gate);
        async move {
            let permit = gate.acquire().await.expect("gate closed");
            permit.forget();
            let n = calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!({ "fetch": n }))
        }
    })
}

/// Wait until the handle shows fresh (non-stale) successful data.
async fn wait_fresh(handle: &mut QueryHandle) -> traceline_query::QuerySnapshot {
    let mut snapshot = handle.snapshot();
    while !(snapshot.is_success() && !snapshot.is_stale) {
        snapshot = handle.changed().await;
    }
    snapshot
}

fn api_error(status: u16, detail: &str) -> ClientError {
    ClientError::Api {
        status,
        category: ErrorCategory::from_status(status),
        detail: detail.to_string(),
    }
}

#[tokio::test]
async fn concurrent_subscriptions_share_one_fetch() {
    let store = QueryStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Semaphore::new(0));
    let key = QueryKey::new(ResourceKind::Items);

    let mut a = store.subscribe(key.clone(), gated_fetcher(Arc::clone(&calls), Arc::clone(&gate)));
    let b = store.subscribe(key.clone(), gated_fetcher(Arc::clone(&calls), Arc::clone(&gate)));

    assert!(a.snapshot().is_loading());
    assert!(b.snapshot().is_loading());

    // Enough permits for two fetches, so a de-duplication bug would show up
    // as a second call rather than a second task blocking forever.
    gate.add_permits(2);
    let snapshot = wait_fresh(&mut a).await;
    assert!(snapshot.is_success());
    assert!(b.snapshot().is_success());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn resource_invalidation_refetches_every_filtered_list() {
    let store = QueryStore::new();
    let draft_calls = Arc::new(AtomicUsize::new(0));
    let approved_calls = Arc::new(AtomicUsize::new(0));

    let draft = QueryKey::new(ResourceKind::Documents).with_param("status", "Draft");
    let approved = QueryKey::new(ResourceKind::Documents).with_param("status", "Approved");

    let mut a = store.subscribe(draft, counting_fetcher(Arc::clone(&draft_calls)));
    let mut b = store.subscribe(approved, counting_fetcher(Arc::clone(&approved_calls)));
    wait_fresh(&mut a).await;
    wait_fresh(&mut b).await;
    assert_eq!(draft_calls.load(Ordering::SeqCst), 1);
    assert_eq!(approved_calls.load(Ordering::SeqCst), 1);

    store.invalidate(&[InvalidationKey::Resource(ResourceKind::Documents)]);
    wait_fresh(&mut a).await;
    wait_fresh(&mut b).await;

    assert_eq!(draft_calls.load(Ordering::SeqCst), 2);
    assert_eq!(approved_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn superseded_fetch_result_is_discarded() {
    let store = QueryStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let first_gate = Arc::new(Semaphore::new(0));

    let key = QueryKey::new(ResourceKind::WorkOrders);
    let slow_then_fast = {
        let calls = Arc::clone(&calls);
        let first_gate = Arc::clone(&first_gate);
        fetcher(move || {
            let calls = Arc::clone(&calls);
            let first_gate = Arc::clone(&first_gate);
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n == 0 {
                    // The first fetch stalls until explicitly released.
                    let permit = first_gate.acquire().await.expect("gate closed");
                    permit.forget();
                    Ok(json!({ "result": "old" }))
                } else {
                    Ok(json!({ "result": "new" }))
                }
            }
        })
    };

    let mut handle = store.subscribe(key.clone(), slow_then_fast);
    // Make sure the first fetch has started (and claimed call index 0)
    // before superseding it; the replacement completes immediately.
    while calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }
    store.invalidate(&[InvalidationKey::Resource(ResourceKind::WorkOrders)]);
    let snapshot = wait_fresh(&mut handle).await;
    assert_eq!(
        snapshot.data.as_deref(),
        Some(&json!({ "result": "new" }))
    );

    // Now let the stalled first fetch finish; its result must not land.
    first_gate.add_permits(1);
    tokio::time::sleep(Duration::from_millis(50)).await;
    let current = store.snapshot(&key).expect("entry exists");
    assert_eq!(current.data.as_deref(), Some(&json!({ "result": "new" })));
}

#[tokio::test]
async fn failed_mutation_invalidates_nothing() {
    let store = QueryStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = QueryKey::new(ResourceKind::Documents);

    let mut handle = store.subscribe(key.clone(), counting_fetcher(Arc::clone(&calls)));
    let before = wait_fresh(&mut handle).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let mutation = Mutation::new(
        Arc::clone(&store),
        vec![InvalidationKey::Resource(ResourceKind::Documents)],
    );
    let result: Result<(), MutationError> = mutation
        .run(|| async { Err(api_error(422, "validation failed")) })
        .await;
    assert!(matches!(result, Err(MutationError::Client(_))));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let after = store.snapshot(&key).expect("entry exists");
    assert!(!after.is_stale);
    assert_eq!(after.data.as_deref(), before.data.as_deref());
}

#[tokio::test]
async fn successful_mutation_refetches_declared_keys() {
    let store = QueryStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = QueryKey::new(ResourceKind::Audits).with_param("status", "Open");

    let mut handle = store.subscribe(key, counting_fetcher(Arc::clone(&calls)));
    wait_fresh(&mut handle).await;

    let mutation = Mutation::new(
        Arc::clone(&store),
        vec![InvalidationKey::Resource(ResourceKind::Audits)],
    );
    mutation
        .run(|| async { Ok::<_, ClientError>(()) })
        .await
        .expect("mutation succeeds");

    wait_fresh(&mut handle).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn second_run_while_pending_is_rejected() {
    let store = QueryStore::new();
    let gate = Arc::new(Semaphore::new(0));
    let mutation = Arc::new(Mutation::new(Arc::clone(&store), Vec::new()));

    let task = {
        let mutation = Arc::clone(&mutation);
        let gate = Arc::clone(&gate);
        tokio::spawn(async move {
            mutation
                .run(|| async move {
                    let permit = gate.acquire().await.expect("gate closed");
                    permit.forget();
                    Ok::<_, ClientError>(())
                })
                .await
        })
    };

    while !mutation.is_pending() {
        tokio::task::yield_now().await;
    }
    let second: Result<(), MutationError> =
        mutation.run(|| async { Ok::<_, ClientError>(()) }).await;
    assert!(matches!(second, Err(MutationError::AlreadyPending)));

    gate.add_permits(1);
    task.await.expect("task").expect("first run succeeds");
    assert!(!mutation.is_pending());
}

#[tokio::test]
async fn resubscribing_to_fresh_data_does_not_fetch() {
    let store = QueryStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = QueryKey::new(ResourceKind::Items).with_opt_param::<&str>("item_type", None);

    let mut handle = store.subscribe(key.clone(), counting_fetcher(Arc::clone(&calls)));
    wait_fresh(&mut handle).await;
    drop(handle);

    let remounted = store.subscribe(key, counting_fetcher(Arc::clone(&calls)));
    assert!(remounted.snapshot().is_success());
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dropping_all_subscriptions_does_not_cancel_the_fetch() {
    let store = QueryStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Arc::new(Semaphore::new(0));
    let key = QueryKey::new(ResourceKind::Vendors);

    let handle = store.subscribe(key.clone(), gated_fetcher(Arc::clone(&calls), Arc::clone(&gate)));
    drop(handle);

    gate.add_permits(1);
    tokio::time::sleep(Duration::from_millis(50)).await;

    // The fetch completed into the unsubscribed entry; a remount sees the
    // data without a second call.
    let remounted = store.subscribe(key, counting_fetcher(Arc::clone(&calls)));
    assert!(remounted.snapshot().is_success());
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_fetch_retries_once_then_surfaces_error() {
    let store = QueryStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = QueryKey::new(ResourceKind::Capas);

    let always_failing = {
        let calls = Arc::clone(&calls);
        fetcher(move || {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(api_error(500, "boom"))
            }
        })
    };

    let mut handle = store.subscribe(key, always_failing);
    let mut snapshot = handle.snapshot();
    while !snapshot.is_error() {
        snapshot = handle.changed().await;
    }
    // Initial attempt plus exactly one automatic retry.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(snapshot.error.is_some());
}

/// The delete scenario end-to-end: a cached open-NC list, a delete mutation
/// declaring the resource invalid, and the refreshed list no longer holding
/// the deleted record.
#[tokio::test]
async fn delete_refreshes_the_cached_list() {
    let store = QueryStore::new();
    let server_table: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(vec![json!({
        "id": "nc-1",
        "nc_number": "NC-2024-00001",
        "status": "Open",
    })]));

    let key = QueryKey::new(ResourceKind::Nonconformances).with_param("status", "Open");
    let table = Arc::clone(&server_table);
    let mut handle = store.subscribe(
        key,
        fetcher(move || {
            let table = Arc::clone(&table);
            async move { Ok(Value::Array(table.lock().expect("table lock").clone())) }
        }),
    );

    let snapshot = wait_fresh(&mut handle).await;
    let rows: Vec<Value> = snapshot.decode().expect("decodes").expect("has data");
    assert_eq!(rows.len(), 1);

    let mutation = Mutation::new(
        Arc::clone(&store),
        vec![InvalidationKey::Resource(ResourceKind::Nonconformances)],
    );
    let table = Arc::clone(&server_table);
    mutation
        .run(|| async move {
            table
                .lock()
                .expect("table lock")
                .retain(|row| row["id"] != "nc-1");
            Ok::<_, ClientError>(())
        })
        .await
        .expect("delete succeeds");

    let snapshot = wait_fresh(&mut handle).await;
    let rows: Vec<Value> = snapshot.decode().expect("decodes").expect("has data");
    assert!(rows.iter().all(|row| row["id"] != "nc-1"));
}
