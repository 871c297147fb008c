//! Compile-time unit safety for sizing quantities.
//!
//! PV nameplate capacity (kWp), stored or delivered energy (kWh) and money (€)
//! all end up as `f64` inside the LP. Wrapping them keeps the result types from
//! mixing a capacity with an energy or a cost.
//!
//! All types use `#[repr(transparent)]`, so they have the same memory layout as
//! `f64`.
//!
//! # Usage
//!
//! ```
//! use pvsizer_core::units::{Euros, KilowattHours, Kilowatts};
//!
//! let pv = Kilowatts(10.0);
//! let capex = pv.cost_at(2500.0);
//! assert_eq!(capex, Euros(25_000.0));
//!
//! let stored = KilowattHours(4.0) + KilowattHours(1.0);
//! assert_eq!(stored.value(), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Macro to implement common arithmetic operations for unit types
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Div<$type> for $type {
            type Output = f64;
            fn div(self, rhs: $type) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.0, $unit_name),
                    None => write!(f, "{:.4} {}", self.0, $unit_name),
                }
            }
        }

        impl $type {
            pub const ZERO: Self = Self(0.0);

            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }

            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }
    };
}

/// Installed PV nameplate capacity in kilowatt-peak.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilowatts(pub f64);

impl_unit_ops!(Kilowatts, "kWp");

/// Energy in kilowatt-hours.
///
/// With hourly steps this is also the average power over a step, which is how
/// the per-step flows in the model are expressed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilowattHours(pub f64);

impl_unit_ops!(KilowattHours, "kWh");

/// Capital cost in euros.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Euros(pub f64);

impl_unit_ops!(Euros, "EUR");

impl Kilowatts {
    /// Energy produced over one hourly step at the given capacity factor.
    #[inline]
    pub fn energy_at(self, capacity_factor: f64) -> KilowattHours {
        KilowattHours(self.0 * capacity_factor)
    }

    /// Capital cost at a price per kWp.
    #[inline]
    pub fn cost_at(self, cost_per_kwp: f64) -> Euros {
        Euros(self.0 * cost_per_kwp)
    }
}

impl KilowattHours {
    /// Capital cost at a price per kWh of storage.
    #[inline]
    pub fn cost_at(self, cost_per_kwh: f64) -> Euros {
        Euros(self.0 * cost_per_kwh)
    }
}
