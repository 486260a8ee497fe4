#![forbid(unsafe_code)]

//! Background event sources with deterministic teardown.
//!
//! The inactivity deadline must fire while the event loop is blocked on
//! input, so it runs on a background thread and delivers its message
//! through a channel. Subscriptions are declared by id; the manager
//! reconciles the declared set against what is running:
//!
//! 1. The host declares the active set after each `update()`
//! 2. New ids are started, removed ids are stopped
//! 3. Unchanged ids keep running
//!
//! Arming a new inactivity deadline therefore stops the previous timer
//! thread (new epoch, new id) and starts a fresh one. Even if the old
//! thread already sent its message, the controller drops it by epoch,
//! so the two guards compose: at most one live timer, and a stale
//! delivery is inert.
//!
//! All subscriptions are stopped on drop; no callback can outlive the
//! program that owns the manager.

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

use web_time::Duration;

/// A unique identifier for a subscription.
pub type SubId = u64;

/// A subscription produces messages from an external event source.
///
/// Subscriptions run on background threads and send messages through
/// the provided channel. The manager owns their lifecycle.
pub trait Subscription<M: Send + 'static>: Send {
    /// Unique identifier for reconciliation.
    ///
    /// Subscriptions with the same id are considered identical; the
    /// manager will not restart a running subscription with an
    /// unchanged id.
    fn id(&self) -> SubId;

    /// Produce messages until done or until `stop` is signalled.
    ///
    /// Called on a background thread. Implementations should exit when
    /// the channel disconnects or the stop signal fires.
    fn run(&self, sender: mpsc::Sender<M>, stop: StopSignal);
}

/// Signal for stopping a subscription.
///
/// The manager sets this when a subscription is removed; the
/// subscription observes it through [`StopSignal::wait_timeout`] or
/// [`StopSignal::is_stopped`].
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        (signal, StopTrigger { inner })
    }

    /// Check if the stop signal has been triggered.
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap()
    }

    /// Block until either the stop signal fires or `duration` passes.
    ///
    /// Returns `true` if stopped, `false` on timeout.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        if *stopped {
            return true;
        }
        let (guard, _timeout) = cvar.wait_timeout(stopped, duration).unwrap();
        stopped = guard;
        *stopped
    }
}

struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        *stopped = true;
        cvar.notify_all();
    }
}

struct RunningSubscription {
    id: SubId,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl RunningSubscription {
    fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RunningSubscription {
    fn drop(&mut self) {
        // Signal only; joining in drop could block shutdown.
        self.trigger.stop();
    }
}

/// Manages the lifecycle of subscriptions for a program.
pub struct SubscriptionManager<M: Send + 'static> {
    active: Vec<RunningSubscription>,
    sender: mpsc::Sender<M>,
    receiver: mpsc::Receiver<M>,
}

impl<M: Send + 'static> SubscriptionManager<M> {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            active: Vec::new(),
            sender,
            receiver,
        }
    }

    /// Reconcile the declared subscription set against what is running.
    pub fn reconcile(&mut self, subscriptions: Vec<Box<dyn Subscription<M>>>) {
        let declared: HashSet<SubId> = subscriptions.iter().map(|s| s.id()).collect();

        let mut kept = Vec::new();
        for running in self.active.drain(..) {
            if declared.contains(&running.id) {
                kept.push(running);
            } else {
                tracing::debug!(sub_id = running.id, "stopping subscription");
                running.stop();
            }
        }
        self.active = kept;

        let mut running_ids: HashSet<SubId> = self.active.iter().map(|r| r.id).collect();
        for sub in subscriptions {
            let id = sub.id();
            if !running_ids.insert(id) {
                continue;
            }

            tracing::debug!(sub_id = id, "starting subscription");
            let (signal, trigger) = StopSignal::new();
            let sender = self.sender.clone();
            let thread = thread::spawn(move || sub.run(sender, signal));

            self.active.push(RunningSubscription {
                id,
                trigger,
                thread: Some(thread),
            });
        }
    }

    /// Drain messages delivered since the last call, without blocking.
    pub fn drain_messages(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }

    /// Block until a message arrives or `timeout` passes.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<M> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Stop every running subscription and join its thread.
    pub fn stop_all(&mut self) {
        for running in self.active.drain(..) {
            running.stop();
        }
    }
}

impl<M: Send + 'static> Default for SubscriptionManager<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Send + 'static> Drop for SubscriptionManager<M> {
    fn drop(&mut self) {
        self.stop_all();
    }
}

// --- Built-in subscriptions ---

/// A one-shot timer: delivers a single message after a delay, unless
/// stopped first.
///
/// The inactivity deadline uses the timer epoch as the subscription id,
/// so re-arming replaces the running timer instead of stacking a second
/// one next to it.
pub struct Delay<M: Send + 'static> {
    id: SubId,
    delay: Duration,
    make_msg: Box<dyn Fn() -> M + Send + Sync>,
}

impl<M: Send + 'static> Delay<M> {
    /// Create a one-shot timer with the given id and delay.
    pub fn new(id: SubId, delay: Duration, make_msg: impl Fn() -> M + Send + Sync + 'static) -> Self {
        Self {
            id,
            delay,
            make_msg: Box::new(make_msg),
        }
    }
}

impl<M: Send + 'static> Subscription<M> for Delay<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<M>, stop: StopSignal) {
        if stop.wait_timeout(self.delay) {
            return;
        }
        let _ = sender.send((self.make_msg)());
    }
}

/// A mock subscription for tests: sends its queued messages and stops.
pub struct MockSubscription<M: Send + 'static> {
    id: SubId,
    messages: Vec<M>,
}

impl<M: Send + Clone + 'static> MockSubscription<M> {
    /// Create a mock that sends the given messages immediately.
    pub fn new(id: SubId, messages: Vec<M>) -> Self {
        Self { id, messages }
    }
}

impl<M: Send + Clone + 'static> Subscription<M> for MockSubscription<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<M>, _stop: StopSignal) {
        for msg in &self.messages {
            if sender.send(msg.clone()).is_err() {
                break;
            }
        }
    }
}
