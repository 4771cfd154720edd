//! # Store Messages
//!
//! The messages a [`StoreClient`](crate::framework::StoreClient) sends to its
//! [`StoreActor`](crate::framework::StoreActor).

use crate::framework::{FrameworkError, RemoteResource, ResourceStore};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a store actor.
///
/// The three remote operations (`LoadList`, `Load`, `Register`) each perform one HTTP
/// exchange and then update the store. `SetCurrent` and `Snapshot` are purely local.
#[derive(Debug)]
pub enum StoreRequest<R: RemoteResource> {
    LoadList {
        respond_to: Response<usize>,
    },
    Load {
        id: String,
        respond_to: Response<R>,
    },
    Register {
        respond_to: Response<()>,
    },
    SetCurrent {
        record: R,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<ResourceStore<R>>,
    },
}
