use rand::{RngCore, SeedableRng};

const DEFAULT_STATE: [u32; 4] = [123456789, 362436069, 521288629, 88675123];

const SEED_MULTIPLIER: u32 = 1812433253;
const SEED_MASKS: [u32; 4] = [123464980, 3447902351, 2859490775, 47621719];

fn scramble(s: u32) -> u32 {
    let mut s = s.wrapping_mul(SEED_MULTIPLIER).wrapping_add(1);
    s ^= s << 13;
    s ^= s >> 17;
    s
}

/// Four word xorshift generator.
///
/// Every instance owns its state, so sharing one between threads is left to
/// the caller. A freshly constructed generator starts from the fixed default
/// words, which is also what `seed(0)` produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Xorshift128 {
    w0: u32,
    w1: u32,
    w2: u32,
    w3: u32,
}

impl Xorshift128 {
    pub fn new() -> Self {
        let [w0, w1, w2, w3] = DEFAULT_STATE;
        Self { w0, w1, w2, w3 }
    }

    pub fn seeded(value: u32) -> Self {
        let mut rng = Self::new();
        rng.seed(value);
        rng
    }

    /// Resets the state from `value`.
    ///
    /// The accumulator keeps running across retries, so an all-zero candidate
    /// is followed by a fresh one derived from the last scrambled value.
    pub fn seed(&mut self, value: u32) {
        log::trace!("seeding xorshift128 with {value:#010x}");
        let mut s = value;
        loop {
            let mut words = [0; 4];
            for (word, mask) in words.iter_mut().zip(SEED_MASKS) {
                s = scramble(s);
                *word = mask ^ s;
            }

            if words != [0; 4] {
                let [w0, w1, w2, w3] = words;
                *self = Self { w0, w1, w2, w3 };
                return;
            }
            log::debug!("all-zero candidate state for seed {value:#010x}, rescrambling");
        }
    }

    pub fn state(&self) -> [u32; 4] {
        [self.w0, self.w1, self.w2, self.w3]
    }

    /// Restores a generator from words previously taken with [`Self::state`].
    /// Returns `None` for the all-zero quadruple, which xorshift can never leave.
    pub fn from_state(words: [u32; 4]) -> Option<Self> {
        if words == [0; 4] {
            log::warn!("rejecting all-zero xorshift128 state");
            return None;
        }
        let [w0, w1, w2, w3] = words;
        Some(Self { w0, w1, w2, w3 })
    }
}

impl Default for Xorshift128 {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Xorshift128 {
    fn next_u32(&mut self) -> u32 {
        let t = self.w0 ^ (self.w0 << 11);
        self.w0 = self.w1;
        self.w1 = self.w2;
        self.w2 = self.w3;
        self.w3 = (self.w3 ^ (self.w3 >> 19)) ^ (t ^ (t >> 8));
        self.w3
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xorshift128Seed(pub [u8; 4]);

impl From<u32> for Xorshift128Seed {
    fn from(value: u32) -> Self {
        Self(value.to_le_bytes())
    }
}

impl AsMut<[u8]> for Xorshift128Seed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl SeedableRng for Xorshift128 {
    type Seed = Xorshift128Seed;

    fn from_seed(seed: Xorshift128Seed) -> Self {
        Self::seeded(u32::from_le_bytes(seed.0))
    }

    /// Only the low 32 bits of `state` are used.
    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state as u32)
    }
}
