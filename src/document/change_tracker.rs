use crate::types::{Object, ObjectId};

use super::trailer::PriorTrailer;

/// One object's disposition in an incremental update, as the document's
/// change-tracker sees it.
#[derive(Debug, Clone)]
pub enum ChangedObject {
    /// A new or modified indirect object: written at its own offset with
    /// its full current value.
    Modified { reference: ObjectId, value: Object },
    /// An object number freed in this update. Gets chained into the
    /// xref's free list rather than written out as a `n` record.
    Deleted { reference: ObjectId },
}
impl ChangedObject {
    pub fn reference(&self) -> ObjectId {
        match self {
            ChangedObject::Modified { reference, .. } => *reference,
            ChangedObject::Deleted { reference } => *reference,
        }
    }
}

/// The document's change-tracking collaborator, external to this writer.
///
/// Deciding WHICH objects changed since the last save — diffing the
/// in-memory object graph, recording deletions — is the host document's
/// job, not this crate's. This trait is the seam [`super::driver`] pulls
/// from: an ordered view of what changed, plus the trailer to chain onto.
pub trait ChangeTracker {
    /// Number of objects this update will touch. Used up front to size the
    /// entry table and to short-circuit an update with nothing to write.
    fn changed_count(&self) -> usize;

    /// Whether `object_number` was touched by this update at all.
    fn is_changed(&self, object_number: u32) -> bool;

    /// Changed objects in ascending object-number order. The driver relies
    /// on this order: callers must not interleave object numbers, since the
    /// entry table construction assumes ascending arrival.
    fn iter_sorted_by_object_number(&self) -> Box<dyn Iterator<Item = ChangedObject> + '_>;

    /// The trailer this update chains onto.
    fn trailer(&self) -> &PriorTrailer;
}
