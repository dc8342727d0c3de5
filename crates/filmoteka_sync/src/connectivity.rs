//! Connectivity signal and probe.
//!
//! Connectivity is owned by the hosting environment: it feeds edge-triggered
//! lost/restored notifications into a [`ConnectivitySignal`], and the
//! coordinator observes the current state through a [`ConnectivityProbe`]
//! at each call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Capability for checking connectivity at call time.
///
/// The coordinator depends on this instead of any ambient environment
/// lookup, so tests can substitute a fixed or scripted state.
pub trait ConnectivityProbe: Send + Sync {
    /// Returns true when the remote service is reachable.
    fn is_online(&self) -> bool;
}

impl<P: ConnectivityProbe + ?Sized> ConnectivityProbe for Arc<P> {
    fn is_online(&self) -> bool {
        (**self).is_online()
    }
}

/// A probe holding a settable flag.
#[derive(Debug)]
pub struct StaticProbe {
    online: AtomicBool,
}

impl StaticProbe {
    /// Creates a probe reporting online.
    pub fn online() -> Self {
        Self {
            online: AtomicBool::new(true),
        }
    }

    /// Creates a probe reporting offline.
    pub fn offline() -> Self {
        Self {
            online: AtomicBool::new(false),
        }
    }

    /// Sets the reported state.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

impl ConnectivityProbe for StaticProbe {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

/// The hosting environment's connectivity feed.
///
/// Wraps a watch channel: the host calls [`set_online`] on lost/restored
/// events, probes read the latest value, and the coordinator's reconciler
/// awaits edges through [`subscribe`].
///
/// [`set_online`]: ConnectivitySignal::set_online
/// [`subscribe`]: ConnectivitySignal::subscribe
#[derive(Debug)]
pub struct ConnectivitySignal {
    tx: watch::Sender<bool>,
}

impl ConnectivitySignal {
    /// Creates a signal with the given initial state.
    pub fn new(initially_online: bool) -> Self {
        let (tx, _rx) = watch::channel(initially_online);
        Self { tx }
    }

    /// Records a connectivity transition.
    pub fn set_online(&self, online: bool) {
        self.tx.send_replace(online);
    }

    /// Returns the current state.
    pub fn is_online(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribes to connectivity transitions.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Returns a probe reading this signal's latest state.
    pub fn probe(&self) -> SignalProbe {
        SignalProbe {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ConnectivitySignal {
    fn default() -> Self {
        Self::new(true)
    }
}

/// A probe backed by a [`ConnectivitySignal`].
#[derive(Debug, Clone)]
pub struct SignalProbe {
    rx: watch::Receiver<bool>,
}

impl ConnectivityProbe for SignalProbe {
    fn is_online(&self) -> bool {
        *self.rx.borrow()
    }
}
