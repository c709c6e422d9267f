// ── Per-request context ──

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Request-scoped data handed to every projection.
///
/// Projections only use it to correlate log events today; it is part of the
/// [`ModelMapper`](crate::ModelMapper) signature so sibling mappers can make
/// identity-dependent decisions without an API change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
    received_at: DateTime<Utc>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4())
    }

    pub fn with_request_id(request_id: Uuid) -> Self {
        Self {
            request_id,
            received_at: Utc::now(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
