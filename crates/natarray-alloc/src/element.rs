//! Fixed-layout element types.

#![allow(unsafe_code)]

/// A fixed-size, plain-data element that can live in a raw buffer.
///
/// # Safety
///
/// Implementors must guarantee that:
///
/// - the all-zero bit pattern is a valid value of the type,
/// - the type has no drop glue and owns no heap data,
/// - `Default::default()` never panics.
///
/// Buffers rely on the first point to hand out zero-initialised memory
/// through safe reads.
pub unsafe trait Element: Copy + Default + 'static {}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: primitive with no invalid zero pattern and no drop glue.
            unsafe impl Element for $ty {}
        )*
    };
}

impl_element!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

// SAFETY: an array of zero-valid, drop-free elements is itself zero-valid
// and drop-free.
unsafe impl<T: Element, const N: usize> Element for [T; N] where [T; N]: Default {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_element<T: Element>() {}

    #[test]
    fn primitives_are_elements() {
        assert_element::<u8>();
        assert_element::<i32>();
        assert_element::<f64>();
        assert_element::<bool>();
        assert_element::<char>();
    }

    #[test]
    fn small_arrays_are_elements() {
        assert_element::<[f32; 3]>();
        assert_element::<[[u8; 4]; 4]>();
    }

    #[test]
    fn defaults_are_zero() {
        assert_eq!(i32::default(), 0);
        assert!(!bool::default());
        assert_eq!(char::default(), '\0');
        assert_eq!(<[u16; 2]>::default(), [0, 0]);
    }
}
