use std::io::Write;

use crate::{
    types::{Dictionary, Name, ObjectId, Stream},
    utils::{write::write_object_type, CountingWriter},
    LowTuxPdfError,
};

use super::entry_table::{partition_into_subsections, EntryTable, XrefEntry, FREE_LIST_HEAD_GENERATION};
use super::trailer::PriorTrailer;

/// Which cross-reference form the prior update used, and therefore which
/// form this update must continue with (spec §4.8 step 4: "PDFs with
/// Incremental Updates should always use the same cross-reference type").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefKind {
    Classical,
    Compressed,
}
impl XrefKind {
    pub fn from_prior_trailer(prior: &PriorTrailer) -> Self {
        if prior.is_xref_stream {
            XrefKind::Compressed
        } else {
            XrefKind::Classical
        }
    }
}

/// Emits the classical textual xref table: `xref\r\n`, one header +
/// fixed-width-record block per contiguous subsection, terminated by a
/// blank line. Returns the byte offset (relative to the sink) of the
/// `xref` keyword.
pub fn write_classical_xref<W>(
    writer: &mut CountingWriter<W>,
    entries: &EntryTable,
) -> Result<u64, LowTuxPdfError>
where
    W: std::io::Write,
{
    let xref_position = writer.count();
    writer.write_all(b"xref\r\n")?;

    let (linked, chain_head) = entries.linked_entries();
    let head_entry = XrefEntry::Free {
        reference: ObjectId::new(0, FREE_LIST_HEAD_GENERATION),
        next_free_obj_num: chain_head,
    };
    let mut full = Vec::with_capacity(linked.len() + 1);
    full.push(head_entry);
    full.extend(linked);

    let object_numbers: Vec<u32> = full.iter().map(XrefEntry::object_number).collect();
    let mut offset = 0usize;
    for (first, count) in partition_into_subsections(&object_numbers) {
        write!(writer, "{first} {count}\r\n")?;
        for entry in &full[offset..offset + count as usize] {
            entry.write_classical_record(writer)?;
        }
        offset += count as usize;
    }
    writer.write_all(b"\r\n")?;
    Ok(xref_position)
}

/// Emits the compressed cross-reference stream: a fresh top-level `Stream`
/// object of type `/XRef`, carrying the trailer dictionary itself.
/// Returns `(trailer_object_id, xref_position)`.
pub fn write_compressed_xref<W>(
    writer: &mut CountingWriter<W>,
    entries: &EntryTable,
    prior: &PriorTrailer,
) -> Result<(ObjectId, u64), LowTuxPdfError>
where
    W: std::io::Write,
{
    let trailer_obj_num = entries.greatest_object_number() + 1;
    let trailer_reference = ObjectId::new(trailer_obj_num, 0);

    let xref_position = writer.count();

    // Free entries collapse to type 1 (used) with a zero offset here — the
    // reference implementation never round-trips the free-list chain
    // through the compressed form (spec §4.5).
    let mut all_entries: Vec<XrefEntry> = entries.iter().copied().collect();
    all_entries.push(XrefEntry::Used {
        reference: trailer_reference,
        byte_offset: xref_position,
    });

    let object_numbers: Vec<u32> = all_entries.iter().map(XrefEntry::object_number).collect();
    let subsections = partition_into_subsections(&object_numbers);
    let mut index = Vec::with_capacity(subsections.len() * 2);
    for (first, count) in &subsections {
        index.push(*first as i64);
        index.push(*count as i64);
    }

    let mut payload = Vec::with_capacity(all_entries.len() * 16);
    for entry in &all_entries {
        match entry {
            XrefEntry::Used { byte_offset, .. } => {
                payload.extend(1u32.to_be_bytes());
                payload.extend(byte_offset.to_be_bytes());
            }
            XrefEntry::Free { .. } => {
                payload.extend(1u32.to_be_bytes());
                payload.extend(0u64.to_be_bytes());
            }
        }
        payload.extend(0u32.to_be_bytes());
    }

    let size = prior.size.max(trailer_obj_num + 1) as i64;
    let mut dictionary = prior.dictionary.clone();
    dictionary.set("Size", size);
    dictionary.set("Prev", prior.position as i64);
    dictionary.remove("DecodeParms");
    dictionary.set("Filter", Name::from("FlateDecode"));
    dictionary.set("W", vec![4i64, 8, 4]);
    dictionary.set("Index", index);
    dictionary.set_type("XRef");

    let compressed =
        super::stream_pipeline::deflate(&payload).map_err(|source| LowTuxPdfError::CompressionError {
            reference: trailer_reference,
            source,
        })?;
    let stream = Stream::new(dictionary, compressed).with_compression(false);
    write_object_type(trailer_reference, stream, writer)?;

    Ok((trailer_reference, xref_position))
}
