//! Deterministic fingerprint of match state.
//!
//! Two simulations fed the same configuration, characters and input stream
//! must produce the same digest on every tick. Replays and lockstep peers
//! compare these instead of whole snapshots.

use crate::battlefield::Battlefield;
use crate::snapshot::RenderSnapshot;

/// SHA-256 over the bincode encoding of `snapshot`.
///
/// Field order is fixed by the struct definitions, so the encoding (and the
/// hash) only changes when the observable state does.
///
/// # Errors
///
/// Returns the encoder's error if the snapshot cannot be serialized.
pub fn snapshot_digest(snapshot: &RenderSnapshot) -> bincode::Result<[u8; 32]> {
    use sha2::{Digest, Sha256};

    let bytes = bincode::serialize(snapshot)?;
    Ok(Sha256::digest(&bytes).into())
}

impl Battlefield {
    /// Digest of the current [`snapshot`](Battlefield::snapshot).
    pub fn state_digest(&self) -> bincode::Result<[u8; 32]> {
        snapshot_digest(&self.snapshot())
    }
}
