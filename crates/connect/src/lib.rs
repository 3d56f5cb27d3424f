//! Fintrack Connect - Brokerage sync for Fintrack.
//!
//! This crate provides the ICICIDirect integration that mirrors mutual-fund
//! SIP holdings into the local investment store.

#[cfg(feature = "icicidirect")]
pub mod icicidirect;

// Re-export commonly used types
#[cfg(feature = "icicidirect")]
pub use icicidirect::{
    Clock, HoldingsSource, IcicidirectClient, IcicidirectConfig, ReconciliationEngine,
    RemoteHoldingsFetcher, RemoteSip, SessionAuthenticator, SipBook, SyncError, SyncOrchestrator,
    SyncRunResult, SystemClock,
};
