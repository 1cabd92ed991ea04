//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use packopener::config::RevealConfig;
use packopener::controller::{ControllerEvent, ControllerHandle};
use packopener::pack::{LifecycleState, PackId};
use packopener::service::{CardRecord, PackService, ServiceError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

/// A call made against [`ScriptedService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    Create(String),
    Open(String),
}

/// In-memory pack service with scripted answers.
///
/// Unscripted creates hand out `pack-1`, `pack-2`, ...; unscripted opens
/// return three cards.
#[derive(Default)]
pub struct ScriptedService {
    creates: Mutex<VecDeque<Result<PackId, ServiceError>>>,
    opens: Mutex<VecDeque<Result<Vec<CardRecord>, ServiceError>>>,
    calls: Mutex<Vec<ServiceCall>>,
    create_delay: Mutex<Duration>,
    open_delay: Mutex<Duration>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_pack(&self, pack_id: &str, cards: Vec<CardRecord>) {
        self.creates.lock().push_back(Ok(PackId::new(pack_id)));
        self.opens.lock().push_back(Ok(cards));
    }

    pub fn fail_create(&self, err: ServiceError) {
        self.creates.lock().push_back(Err(err));
    }

    pub fn fail_open(&self, pack_id: &str, err: ServiceError) {
        self.creates.lock().push_back(Ok(PackId::new(pack_id)));
        self.opens.lock().push_back(Err(err));
    }

    pub fn set_create_delay(&self, delay: Duration) {
        *self.create_delay.lock() = delay;
    }

    pub fn set_open_delay(&self, delay: Duration) {
        *self.open_delay.lock() = delay;
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PackService for ScriptedService {
    async fn create_pack(&self, name: &str) -> Result<PackId, ServiceError> {
        let count = {
            let mut calls = self.calls.lock();
            calls.push(ServiceCall::Create(name.to_string()));
            calls
                .iter()
                .filter(|call| matches!(call, ServiceCall::Create(_)))
                .count()
        };
        let delay = *self.create_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let scripted = self.creates.lock().pop_front();
        scripted.unwrap_or_else(|| Ok(PackId::new(format!("pack-{}", count))))
    }

    async fn open_pack(&self, pack_id: &PackId) -> Result<Vec<CardRecord>, ServiceError> {
        self.calls
            .lock()
            .push(ServiceCall::Open(pack_id.as_str().to_string()));
        let delay = *self.open_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let scripted = self.opens.lock().pop_front();
        scripted.unwrap_or_else(|| Ok(cards(3)))
    }
}

/// `count` card records named `Card 1`, `Card 2`, ...
pub fn cards(count: usize) -> Vec<CardRecord> {
    (1..=count)
        .map(|i| CardRecord {
            id: format!("c{}", i),
            name: format!("Card {}", i),
            image_url: format!("/images/c{}.png", i),
        })
        .collect()
}

pub fn reveal_config() -> RevealConfig {
    RevealConfig {
        step_delay_ms: 500,
        settle_delay_ms: 500,
    }
}

/// An event stamped with the time elapsed since the test started.
pub struct Timed {
    pub at: Duration,
    pub event: ControllerEvent,
}

/// Collect events until `done` matches one, stamping each with elapsed time.
pub async fn collect_until(
    events: &mut UnboundedReceiver<ControllerEvent>,
    start: Instant,
    done: impl Fn(&ControllerEvent) -> bool,
) -> Vec<Timed> {
    let mut collected = Vec::new();
    loop {
        let event = tokio::time::timeout(Duration::from_secs(60), events.recv())
            .await
            .expect("Timed out waiting for controller event")
            .expect("Controller event channel closed");
        let finished = done(&event);
        collected.push(Timed {
            at: start.elapsed(),
            event,
        });
        if finished {
            return collected;
        }
    }
}

/// Collect events until the controller settles back into `Idle`.
pub async fn collect_until_idle(
    events: &mut UnboundedReceiver<ControllerEvent>,
    start: Instant,
) -> Vec<Timed> {
    collect_until(events, start, |event| {
        matches!(event, ControllerEvent::Lifecycle(LifecycleState::Idle))
    })
    .await
}

/// Assert `actual` is `expected_ms` give or take timer granularity.
pub fn assert_at(actual: Duration, expected_ms: u64) {
    let expected = Duration::from_millis(expected_ms);
    assert!(
        actual >= expected && actual < expected + Duration::from_millis(5),
        "expected event at {:?}, got {:?}",
        expected,
        actual
    );
}

/// Indices from `CardRevealed` events, in order.
pub fn revealed_indices(events: &[Timed]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|timed| match timed.event {
            ControllerEvent::CardRevealed { index } => Some(index),
            _ => None,
        })
        .collect()
}

/// Indices from `ScrollIntoView` events, in order.
pub fn scrolled_indices(events: &[Timed]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|timed| match timed.event {
            ControllerEvent::ScrollIntoView { index } => Some(index),
            _ => None,
        })
        .collect()
}

/// Shut the controller down and wait for its task to finish.
pub async fn stop(handle: ControllerHandle, task: tokio::task::JoinHandle<()>) {
    handle.shutdown();
    task.await.expect("Controller task panicked");
}
