//! Logging shims.
//!
//! With the `defmt` feature the macros forward to `defmt`; without it they
//! compile to nothing but still borrow their arguments so call sites do not
//! trigger unused-variable warnings.

#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            {
                ::defmt::trace!($s $(, $x)*);
            }
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = & $x; )*
            }
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            {
                ::defmt::debug!($s $(, $x)*);
            }
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = & $x; )*
            }
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            {
                ::defmt::info!($s $(, $x)*);
            }
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = & $x; )*
            }
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            {
                ::defmt::warn!($s $(, $x)*);
            }
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = & $x; )*
            }
        }
    };
}
