use crate::LowTuxPdfError;
mod affine_transform;
mod dictionary;
mod generic_object;
mod object_id;
mod stream;
mod string;
pub use affine_transform::*;
pub use dictionary::*;
pub use generic_object::*;
pub use object_id::*;
pub use stream::*;
pub use string::*;

pub trait PdfType {
    fn write<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write;

    fn write_borrowed<W>(&self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write;

    fn size_hint(&self) -> usize {
        0
    }

    fn write_to_vec(self) -> Result<Vec<u8>, LowTuxPdfError>
    where
        Self: Sized,
    {
        let mut buffer: Vec<u8> = Vec::with_capacity(self.size_hint());
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}
impl PdfType for Vec<u8> {
    fn write<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
    {
        writer.write_all(&self)?;
        Ok(())
    }
    fn size_hint(&self) -> usize {
        self.len()
    }
    fn write_borrowed<W>(&self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
    {
        writer.write_all(self)?;
        Ok(())
    }
}
macro_rules! copy_encode {
    () => {
        fn encode_borrowed<W>(&self, writer: &mut W) -> Result<(), crate::LowTuxPdfError>
        where
            W: std::io::Write,
        {
            (*self).encode(writer)
        }
    };
}
pub(crate) use copy_encode;
pub trait PdfObjectType {
    fn encode<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
        Self: Sized;
    fn encode_borrowed<W>(&self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write;
    fn requires_separator(&self) -> bool {
        true
    }

    fn requires_end_separator(&self) -> bool {
        true
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Null;
impl PdfObjectType for Null {
    fn encode<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
        Self: Sized,
    {
        writer.write_all(b"null")?;
        Ok(())
    }

    copy_encode!();
    fn requires_end_separator(&self) -> bool {
        true
    }
    fn requires_separator(&self) -> bool {
        true
    }
}
impl PdfObjectType for bool {
    fn encode<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
        Self: Sized,
    {
        writer.write_all(if self { b"true" } else { b"false" })?;
        Ok(())
    }

    copy_encode!();

    fn requires_end_separator(&self) -> bool {
        true
    }
    fn requires_separator(&self) -> bool {
        true
    }
}

/// PDF reals never use exponent notation. `ryu` gives the shortest
/// round-trip decimal but will reach for scientific notation on extreme
/// magnitudes; fall back to a fixed-point expansion when it does.
pub(crate) fn format_real(value: f32) -> String {
    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format(value);
    if shortest.contains(['e', 'E']) {
        let mut fixed = format!("{value:.10}");
        if fixed.contains('.') {
            while fixed.ends_with('0') {
                fixed.pop();
            }
            if fixed.ends_with('.') {
                fixed.pop();
            }
        }
        fixed
    } else {
        shortest.to_string()
    }
}
impl PdfObjectType for f32 {
    fn encode<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
        Self: Sized,
    {
        writer.write_all(format_real(self).as_bytes())?;
        Ok(())
    }

    copy_encode!();

    fn requires_end_separator(&self) -> bool {
        true
    }
    fn requires_separator(&self) -> bool {
        true
    }
    fn type_name(&self) -> &'static str {
        "Real"
    }
}
impl PdfObjectType for i64 {
    fn encode<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
        Self: Sized,
    {
        let mut buffer = itoa::Buffer::new();
        let s = buffer.format(self);
        writer.write_all(s.as_bytes())?;
        Ok(())
    }
    copy_encode!();

    fn requires_end_separator(&self) -> bool {
        true
    }
    fn requires_separator(&self) -> bool {
        true
    }

    fn type_name(&self) -> &'static str {
        "Number"
    }
}
impl<T> PdfObjectType for Vec<T>
where
    T: PdfObjectType,
{
    fn encode<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
        Self: Sized,
    {
        writer.write_all(b"[")?;
        let mut first = true;
        for item in self {
            if first {
                first = false;
            } else if item.requires_separator() {
                writer.write_all(b" ")?;
            }
            item.encode(writer)?;
        }
        writer.write_all(b"]")?;
        Ok(())
    }
    fn requires_end_separator(&self) -> bool {
        false
    }
    fn requires_separator(&self) -> bool {
        false
    }

    fn encode_borrowed<W>(&self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
    {
        writer.write_all(b"[")?;
        let mut first = true;
        for item in self {
            if first {
                first = false;
            } else if item.requires_separator() {
                writer.write_all(b" ")?;
            }
            item.encode_borrowed(writer)?;
        }
        writer.write_all(b"]")?;
        Ok(())
    }
}
