/// Element type of a counts buffer.
///
/// Plain 1D and joint histograms count in `u64`, 2D histograms in `f64`.
pub trait Counter
    : num::Num + num::ToPrimitive + num::FromPrimitive + num::NumAssignOps + PartialOrd<Self> + Copy + std::fmt::Debug
    {
    /// Counter as a f64.
    fn as_f64(&self) -> f64;
    /// Raw 64 bit word used by the array payload.
    fn to_word(&self) -> u64;
    fn from_word(word: u64) -> Self;
    /// Value kind tag written to the array payload.
    fn value_kind() -> u8;
}

impl Counter for u64 {
    #[inline(always)]
    fn as_f64(&self) -> f64 {
        *self as f64
    }
    #[inline(always)]
    fn to_word(&self) -> u64 {
        *self
    }
    #[inline(always)]
    fn from_word(word: u64) -> u64 {
        word
    }
    #[inline(always)]
    fn value_kind() -> u8 {
        0
    }
}

impl Counter for f64 {
    #[inline(always)]
    fn as_f64(&self) -> f64 {
        *self
    }
    #[inline(always)]
    fn to_word(&self) -> u64 {
        self.to_bits()
    }
    #[inline(always)]
    fn from_word(word: u64) -> f64 {
        f64::from_bits(word)
    }
    #[inline(always)]
    fn value_kind() -> u8 {
        1
    }
}
