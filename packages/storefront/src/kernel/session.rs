//! Process-wide session context over the identity service.
//!
//! Subscribes to subject changes on start, caches the current subject, and
//! fans changes out to its own listeners. Tear down with `shutdown` when
//! the owning surface goes away; after that no further notifications fire.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use anyhow::Result;

use crate::kernel::traits::{
    AuthSubject, BaseIdentityService, SubjectListener, SubscriptionId,
};

/// Handle for removing a session-context listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct SessionContext {
    identity: Arc<dyn BaseIdentityService>,
    current: Arc<RwLock<Option<AuthSubject>>>,
    listeners: Arc<Mutex<HashMap<u64, SubjectListener>>>,
    next_listener: AtomicU64,
    /// Upstream registration with the identity service.
    subscription: SubscriptionId,
}

impl SessionContext {
    /// Subscribe to the identity service and prime the cached subject.
    pub fn start(identity: Arc<dyn BaseIdentityService>) -> Self {
        let current = Arc::new(RwLock::new(identity.current_subject()));
        let listeners: Arc<Mutex<HashMap<u64, SubjectListener>>> =
            Arc::new(Mutex::new(HashMap::new()));

        let upstream_current = Arc::clone(&current);
        let upstream_listeners = Arc::clone(&listeners);
        let subscription = identity.subscribe(Arc::new(move |subject: Option<AuthSubject>| {
            *upstream_current.write().unwrap() = subject.clone();
            let registered: Vec<SubjectListener> =
                upstream_listeners.lock().unwrap().values().cloned().collect();
            for listener in registered {
                listener(subject.clone());
            }
        }));

        Self {
            identity,
            current,
            listeners,
            next_listener: AtomicU64::new(0),
            subscription,
        }
    }

    /// The cached authenticated subject, if any.
    pub fn current(&self) -> Option<AuthSubject> {
        self.current.read().unwrap().clone()
    }

    /// Whether a subject is signed in.
    pub fn signed_in(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    /// Register a listener for subject changes.
    pub fn on_change(&self, listener: SubjectListener) -> ListenerId {
        let id = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().unwrap().insert(id, listener);
        ListenerId(id)
    }

    /// Remove a previously registered listener.
    pub fn remove_listener(&self, id: ListenerId) {
        self.listeners.lock().unwrap().remove(&id.0);
    }

    /// Email/password sign-in.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSubject> {
        self.identity.sign_in(email, password).await
    }

    /// Email/password account creation.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSubject> {
        self.identity.sign_up(email, password).await
    }

    /// Sign the current subject out.
    pub async fn sign_out(&self) -> Result<()> {
        self.identity.sign_out().await
    }

    /// Unsubscribe from the identity service and drop all listeners.
    pub fn shutdown(&self) {
        self.identity.unsubscribe(self.subscription);
        self.listeners.lock().unwrap().clear();
    }
}
