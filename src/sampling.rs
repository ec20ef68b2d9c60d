use rand::RngCore;

const TWO_POW_32: f64 = 4294967296.0;

/// Reductions Monte Carlo callers apply to raw 32-bit outputs.
pub trait Sampling: RngCore {
    /// Panics if `n` is zero.
    fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }

    /// Spans wider than `u32::MAX` draw from `next_u64` instead of one word.
    fn usize_range(&mut self, low: usize, high: usize) -> usize {
        assert!(low < high, "empty range {low}..{high}");
        let span = high - low;
        match u32::try_from(span) {
            Ok(span) => low + self.below(span) as usize,
            Err(_) => low + (self.next_u64() % span as u64) as usize,
        }
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    fn bilateral(&mut self) -> f64 {
        self.unit() * 2.0 - 1.0
    }

    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.usize_range(0, items.len()))
    }
}

impl<R: RngCore + ?Sized> Sampling for R {}
