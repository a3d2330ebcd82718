#[derive(Debug, Clone)]
pub struct Im<T, const N_CH: usize> {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride in elements (w * N_CH)
    pub arr: Vec<T>,
}

// Constructor
// -----------------------------------------------------------------------------
impl<T: Copy + Default, const N_CH: usize> Im<T, N_CH> {
    pub fn new(w: usize, h: usize) -> Self {
        let s = w * N_CH;
        let arr = vec![T::default(); s * h];
        Self { w, h, s, arr }
    }
}

impl<T: Copy, const N_CH: usize> Im<T, N_CH> {
    /// Sets every pixel to `px`.
    pub fn fill_px(&mut self, px: [T; N_CH]) {
        for y in 0..self.h {
            let row = &mut self.arr[y * self.s..y * self.s + self.w * N_CH];
            for dst in row.chunks_exact_mut(N_CH) {
                dst.copy_from_slice(&px);
            }
        }
    }

    /// Overwrites pixels `x_start..x_end` of row `y`. The caller keeps the span in bounds.
    #[inline]
    pub fn fill_span(&mut self, y: usize, x_start: usize, x_end: usize, px: [T; N_CH]) {
        let row0 = y * self.s;
        let span = &mut self.arr[row0 + x_start * N_CH..row0 + x_end * N_CH];
        for dst in span.chunks_exact_mut(N_CH) {
            dst.copy_from_slice(&px);
        }
    }

    pub fn px(&self, x: usize, y: usize) -> [T; N_CH] {
        let base = y * self.s + x * N_CH;
        std::array::from_fn(|ch| self.arr[base + ch])
    }
}

impl<T, const N_CH: usize> Im<T, N_CH> {
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, x: usize, y: usize, ch: usize) -> &T {
        unsafe { self.arr.get_unchecked(y * self.s + x * N_CH + ch) }
    }

    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, x: usize, y: usize, ch: usize) -> &mut T {
        unsafe { self.arr.get_unchecked_mut(y * self.s + x * N_CH + ch) }
    }
}

pub type RGBAIm = Im<u8, 4>;
