//! Timed comparison of four classic comparison sorts.
//!
//! The interesting content lives in [`stable`] and [`unstable`]: bubble,
//! insertion, selection and quicksort in their textbook forms, each
//! sorting a mutable slice in place. [`bench`] drives timed trials over
//! randomly filled integer arrays of doubling size, and [`patterns`]
//! holds the input generators shared by the harness, tests and benches.

/// Shared interface over the sort implementations.
///
/// Every algorithm module exposes a free `sort` function plus a
/// `SortImpl` unit struct implementing this trait, generated by
/// `sort_impl!`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;
}

macro_rules! sort_impl {
    ($name:literal) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                self::sort(v);
            }
        }
    };
}

pub mod bench;
pub mod patterns;
pub mod stable;
pub mod unstable;
