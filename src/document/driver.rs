use std::io::Write;

use crate::{
    types::{Object, ObjectId},
    utils::{write::write_object_type, CountingWriter},
    LowTuxPdfError,
};

use super::{
    change_tracker::{ChangeTracker, ChangedObject},
    entry_table::EntryTable,
    security::SecurityHandler,
    stream_pipeline::run_stream_pipeline,
    trailer::{write_classical_trailer, write_startxref_tail},
    xref::{write_classical_xref, write_compressed_xref, XrefKind},
};

/// Appends one incremental update to `writer`, which must already be
/// positioned at `starting_position` bytes into the combined output — i.e.
/// immediately past the end of the existing document (or the previous
/// update, if this isn't the first). Returns the number of bytes this call
/// wrote.
///
/// An empty change set writes nothing at all and returns `0` — there is no
/// such thing as a minimal no-op update, only no update.
pub fn append_update<W>(
    writer: W,
    tracker: &dyn ChangeTracker,
    starting_position: u64,
    security: Option<&dyn SecurityHandler>,
) -> Result<u64, LowTuxPdfError>
where
    W: std::io::Write,
{
    if tracker.changed_count() == 0 {
        return Ok(0);
    }

    let mut sink = CountingWriter::new(writer);
    // Guards against a source document whose final byte isn't itself a
    // line terminator — harmless to readers, and cheap insurance we take
    // unconditionally rather than trying to inspect the prior tail.
    sink.write_all(b"\r\n")?;

    let prior = tracker.trailer();
    let mut entries = EntryTable::new();
    for changed in tracker.iter_sorted_by_object_number() {
        match changed {
            ChangedObject::Deleted { reference } => {
                entries.append_free(reference)?;
            }
            ChangedObject::Modified { reference, value } => {
                let offset = starting_position + sink.count();
                entries.append_used(reference, offset)?;
                write_changed_object(&mut sink, reference, value, security)?;
            }
        }
    }

    match XrefKind::from_prior_trailer(prior) {
        XrefKind::Classical => {
            let xref_position = starting_position + write_classical_xref(&mut sink, &entries)?;
            write_classical_trailer(&mut sink, prior, &entries, xref_position)?;
        }
        XrefKind::Compressed => {
            let (_trailer_reference, local_position) =
                write_compressed_xref(&mut sink, &entries, prior)?;
            write_startxref_tail(&mut sink, prior, starting_position + local_position)?;
        }
    }

    Ok(sink.count())
}

fn write_changed_object<W>(
    sink: &mut CountingWriter<W>,
    reference: ObjectId,
    value: Object,
    security: Option<&dyn SecurityHandler>,
) -> Result<(), LowTuxPdfError>
where
    W: std::io::Write,
{
    if matches!(value, Object::Null) {
        return Err(LowTuxPdfError::NullObject(Some(reference)));
    }
    let value = match value {
        Object::Stream(mut stream) => {
            let already_compressed = !stream.allows_compression;
            let bytes = run_stream_pipeline(
                reference,
                &mut stream.dictionary,
                stream.content,
                already_compressed,
                security,
            )?;
            stream.content = bytes;
            Object::Stream(stream)
        }
        other => other,
    };
    write_object_type(reference, value, sink)
}

/// Produces the standalone `"obj# gen# obj\r\n...\r\nendobj\r\n"` bytes for
/// each changed object, independent of any xref or trailer. Used by callers
/// that need an object's exact on-disk bytes without assembling a full
/// update — e.g. to diff against a previously written revision.
///
/// Object byte offsets are meaningless outside an actual update, so each
/// object is rendered starting at position `0` in its own buffer.
pub fn get_updated_objects(
    tracker: &dyn ChangeTracker,
    security: Option<&dyn SecurityHandler>,
) -> Result<Vec<(ObjectId, Vec<u8>)>, LowTuxPdfError> {
    let mut out = Vec::with_capacity(tracker.changed_count());
    for changed in tracker.iter_sorted_by_object_number() {
        let ChangedObject::Modified { reference, value } = changed else {
            continue;
        };
        let mut sink = CountingWriter::new(Vec::new());
        write_changed_object(&mut sink, reference, value, security)?;
        out.push((reference, sink.into_inner()));
    }
    Ok(out)
}
