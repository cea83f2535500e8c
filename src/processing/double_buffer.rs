use std::mem;

use crate::img::Raster;


/// The `active` raster plus a same-sized `scratch` one.
///
/// Window passes read `active`, write `scratch` and then `swap`, which
/// exchanges the two handles without copying pixels. Scratch starts as a
/// copy of the input.
pub struct DoubleBuffer {
    active: Raster,
    scratch: Raster,
}

impl DoubleBuffer {
    pub fn new(input: Raster) -> Self {
        let scratch = input.clone();
        DoubleBuffer { active: input, scratch }
    }

    pub fn active(&self) -> &Raster { &self.active }
    pub fn active_mut(&mut self) -> &mut Raster { &mut self.active }
    pub fn scratch(&self) -> &Raster { &self.scratch }

    /// `(active, scratch)`; the borrow checker keeps them from aliasing.
    pub fn split_mut(&mut self) -> (&Raster, &mut Raster) {
        (&self.active, &mut self.scratch)
    }

    pub fn swap(&mut self) {
        mem::swap(&mut self.active, &mut self.scratch);
    }

    pub fn into_active(self) -> Raster {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::DoubleBuffer;
    use crate::img::Raster;

    #[test]
    fn scratch_starts_as_copy() {
        let input = Raster::from_pixels(2, 2, vec![1, 2, 3, 4]);
        let buffers = DoubleBuffer::new(input.clone());

        assert_eq!(buffers.active(), &input);
        assert_eq!(buffers.scratch(), &input);
        assert_ne!(buffers.active().pixels().as_ptr(), buffers.scratch().pixels().as_ptr());
    }

    #[test]
    fn swap_exchanges_handles() {
        let mut buffers = DoubleBuffer::new(Raster::filled_with(3, 3, 7));
        {
            let (active, scratch) = buffers.split_mut();
            assert_eq!(active[crate::img::PixelPos::one()], 7);
            *scratch = Raster::filled_with(3, 3, 9);
        }

        let active_ptr = buffers.active().pixels().as_ptr();
        let scratch_ptr = buffers.scratch().pixels().as_ptr();

        buffers.swap();

        assert_eq!(buffers.active().pixels().as_ptr(), scratch_ptr);
        assert_eq!(buffers.scratch().pixels().as_ptr(), active_ptr);
        assert_eq!(buffers.active(), &Raster::filled_with(3, 3, 9));
        assert_eq!(buffers.into_active(), Raster::filled_with(3, 3, 9));
    }
}
