use crate::{types::ObjectId, LowTuxPdfError};

/// One row of the cross-reference: either a live object at a byte offset,
/// or a freed object number participating in the free-list chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefEntry {
    Used { reference: ObjectId, byte_offset: u64 },
    Free {
        reference: ObjectId,
        /// Filled in by [`EntryTable::linked_entries`]; zero until then.
        next_free_obj_num: u32,
    },
}
impl XrefEntry {
    pub fn reference(&self) -> ObjectId {
        match *self {
            XrefEntry::Used { reference, .. } => reference,
            XrefEntry::Free { reference, .. } => reference,
        }
    }

    pub fn object_number(&self) -> u32 {
        self.reference().object_number()
    }

    pub fn is_used(&self) -> bool {
        matches!(self, XrefEntry::Used { .. })
    }

    /// Write the fixed 20-byte classical xref record for this entry.
    ///
    /// `10 + 1 + 5 + 1 + 1 + 2` bytes: a zero-padded offset or free-list
    /// pointer, a zero-padded generation field, the `n`/`f` tag, and the
    /// `\r\n` terminator.
    pub fn write_classical_record<W>(&self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
    {
        match self {
            XrefEntry::Used {
                byte_offset,
                reference,
            } => {
                write!(
                    writer,
                    "{byte_offset:010} {:05} n\r\n",
                    reference.generation_number
                )?;
            }
            XrefEntry::Free {
                reference,
                next_free_obj_num,
            } => {
                // Classical rule: the generation written for a free record
                // is one more than the entry's own generation number.
                write!(
                    writer,
                    "{next_free_obj_num:010} {:05} f\r\n",
                    reference.generation_number as u32 + 1
                )?;
            }
        }
        Ok(())
    }
}

/// Generation number used for the object-0 free-list head pseudo-entry.
/// Written into the record as `generation + 1 == 65535`, the classical
/// marker for "permanently free, no generation tracked".
pub const FREE_LIST_HEAD_GENERATION: u16 = 65534;

/// Ascending-order, duplicate-rejecting collection of xref entries for the
/// objects touched by one incremental update.
#[derive(Debug, Default, Clone)]
pub struct EntryTable {
    entries: Vec<XrefEntry>,
}
impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_used(&mut self, reference: ObjectId, byte_offset: u64) -> Result<(), LowTuxPdfError> {
        self.insert(XrefEntry::Used {
            reference,
            byte_offset,
        })
    }

    pub fn append_free(&mut self, reference: ObjectId) -> Result<(), LowTuxPdfError> {
        self.insert(XrefEntry::Free {
            reference,
            next_free_obj_num: 0,
        })
    }

    /// Inserts in ascending object-number position. Changed objects arrive
    /// sorted in the common case, so this is usually an O(1) append; any
    /// out-of-order arrival is still placed correctly by binary search.
    /// A duplicate object number is a logic error in the caller's
    /// change-tracker and is fatal.
    fn insert(&mut self, entry: XrefEntry) -> Result<(), LowTuxPdfError> {
        let object_number = entry.object_number();
        match self
            .entries
            .binary_search_by_key(&object_number, XrefEntry::object_number)
        {
            Ok(_) => Err(LowTuxPdfError::DuplicateEntry(object_number)),
            Err(position) => {
                self.entries.insert(position, entry);
                Ok(())
            }
        }
    }

    pub fn greatest_object_number(&self) -> u32 {
        self.entries.last().map(XrefEntry::object_number).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &XrefEntry> {
        self.entries.iter()
    }

    /// Computes the free-list chain (spec §4.4): walking the table in
    /// reverse object-number order, each free entry's `next_free_obj_num`
    /// is set to the previously-seen free object number (starting at 0).
    /// Returns the linked entries plus the chain head — the object number
    /// that object 0's pseudo-entry should point to next.
    pub fn linked_entries(&self) -> (Vec<XrefEntry>, u32) {
        let mut entries = self.entries.clone();
        let mut next_free = 0u32;
        for entry in entries.iter_mut().rev() {
            if let XrefEntry::Free {
                reference,
                next_free_obj_num,
            } = entry
            {
                *next_free_obj_num = next_free;
                next_free = reference.object_number();
            }
        }
        (entries, next_free)
    }
}

/// Splits ascending, distinct object numbers into maximal runs that
/// increase by exactly 1 — the subsection layout shared by the classical
/// xref table and the compressed xref stream's `Index` array.
pub fn partition_into_subsections(object_numbers: &[u32]) -> Vec<(u32, u32)> {
    let mut sections = Vec::new();
    let mut iter = object_numbers.iter().copied().peekable();
    while let Some(first) = iter.next() {
        let mut count = 1u32;
        let mut previous = first;
        while let Some(&next) = iter.peek() {
            if next == previous + 1 {
                count += 1;
                previous = next;
                iter.next();
            } else {
                break;
            }
        }
        sections.push((first, count));
    }
    sections
}
