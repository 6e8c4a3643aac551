use super::{copy_encode, Object, PdfObjectType};
use crate::LowTuxPdfError;

/// A 2D affine transform, written as the six-element array
/// `[sx shx tx sy shy ty]` (PDF's `cm`/`Matrix` convention).
///
/// Unlike the reference Java implementation this keeps full `f32`
/// precision instead of truncating each coefficient to an integer — see
/// the Open Question writeup in DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub sx: f32,
    pub shx: f32,
    pub tx: f32,
    pub sy: f32,
    pub shy: f32,
    pub ty: f32,
}
impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}
impl AffineTransform {
    pub fn new(sx: f32, shx: f32, tx: f32, sy: f32, shy: f32, ty: f32) -> Self {
        Self {
            sx,
            shx,
            tx,
            sy,
            shy,
            ty,
        }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn translation(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, tx, 1.0, 0.0, ty)
    }

    fn components(&self) -> [f32; 6] {
        [self.sx, self.shx, self.tx, self.sy, self.shy, self.ty]
    }
}
impl From<AffineTransform> for Object {
    fn from(value: AffineTransform) -> Self {
        Object::Array(value.components().into_iter().map(Object::Real).collect())
    }
}
impl PdfObjectType for AffineTransform {
    fn encode<W>(self, writer: &mut W) -> Result<(), LowTuxPdfError>
    where
        W: std::io::Write,
        Self: Sized,
    {
        self.components().to_vec().encode(writer)
    }

    copy_encode!();

    fn requires_end_separator(&self) -> bool {
        false
    }
    fn requires_separator(&self) -> bool {
        false
    }
    fn type_name(&self) -> &'static str {
        "AffineTransform"
    }
}
