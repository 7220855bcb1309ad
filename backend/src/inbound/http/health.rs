//! Health endpoints: liveness and readiness probes for orchestrators.
//!
//! The service moves through three phases: [`Phase::Starting`] until the
//! listener is bound, [`Phase::Serving`] while accepting traffic, and
//! [`Phase::Draining`] once shutdown begins. Readiness holds only while
//! serving; liveness fails once draining starts.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;

/// Lifecycle phase reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Listener not bound yet.
    Starting,
    /// Accepting traffic.
    Serving,
    /// Shutting down; in-flight requests may still complete.
    Draining,
}

impl Phase {
    const fn to_raw(self) -> u8 {
        match self {
            Self::Starting => 0,
            Self::Serving => 1,
            Self::Draining => 2,
        }
    }

    const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Lifecycle phase shared between the server bootstrap and the probes.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting.to_raw()),
        }
    }
}

impl HealthState {
    /// Starts in [`Phase::Starting`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from_raw(self.phase.load(Ordering::Acquire))
    }

    /// Enter [`Phase::Serving`]. Ignored once draining has begun.
    pub fn mark_ready(&self) {
        // A late bind notification must not undo a drain.
        self.phase
            .compare_exchange(
                Phase::Starting.to_raw(),
                Phase::Serving.to_raw(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .ok();
    }

    /// Enter [`Phase::Draining`]; both probes fail from now on.
    pub fn mark_draining(&self) {
        self.phase.store(Phase::Draining.to_raw(), Ordering::Release);
    }

    /// Whether traffic should be routed here.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase() == Phase::Serving
    }

    /// Whether the process should be left running.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.phase() != Phase::Draining
    }
}

#[derive(Serialize)]
struct ProbeBody {
    phase: Phase,
}

fn probe_response(probe_ok: bool, phase: Phase) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ProbeBody { phase })
}

/// Readiness probe. 200 while serving, 503 while starting or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is accepting traffic"),
        (status = 503, description = "Server is starting or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready(), state.phase())
}

/// Liveness probe. 200 until draining starts, 503 after.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive(), state.phase())
}
