//! The unit step used by `incrementable!` / `decrementable!`.

/// Types with a unit value, the amount one increment or decrement moves by.
///
/// Pre-registered for the integer and float primitives. A wrapper over a
/// custom raw type needs an impl of this (plus `AddAssign`/`SubAssign` on
/// the raw type) before it can select the increment/decrement capabilities.
pub trait One {
    /// The unit value.
    const ONE: Self;
}

macro_rules! impl_one {
    (int: $($t:ty),+ $(,)?) => {
        $(
            impl One for $t {
                const ONE: $t = 1;
            }
        )+
    };
    (float: $($t:ty),+ $(,)?) => {
        $(
            impl One for $t {
                const ONE: $t = 1.0;
            }
        )+
    };
}

impl_one!(int: u8, u16, u32, u64, u128, usize);
impl_one!(int: i8, i16, i32, i64, i128, isize);
impl_one!(float: f32, f64);
