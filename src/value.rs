// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typed caller values and their canonical token strings.
//!
//! Builders accept anything convertible into a [`Value`]. The set of shapes is
//! closed: a sequence yields one token per element and a timestamp is rendered
//! as integer nanoseconds since the Unix epoch. Floats use the shortest digits
//! that round-trip, switching to exponent form (`1e+06`, `1e-05`) when the
//! decimal exponent is below -4 or at least 6. Every other scalar uses its
//! `Display` form.

use chrono::{DateTime, Utc};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Decimal exponents in `MIN_PLAIN_EXP..MAX_PLAIN_EXP` render without an exponent.
const MIN_PLAIN_EXP: i32 = -4;
const MAX_PLAIN_EXP: i32 = 6;

/// A value that can be turned into one or more tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    List(Vec<String>),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Rendered as nanoseconds since the Unix epoch.
    Time(DateTime<Utc>),
}

impl Value {
    /// Canonical token strings for this value.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Value::Str(s) => vec![s.clone()],
            Value::List(items) => items.clone(),
            Value::Int(n) => vec![n.to_string()],
            Value::UInt(n) => vec![n.to_string()],
            Value::Float(n) => vec![format_float(*n)],
            Value::Bool(b) => vec![b.to_string()],
            Value::Time(t) => vec![unix_nanos(t).to_string()],
        }
    }
}

/// Nanoseconds since the Unix epoch, exact even outside the `i64` range.
pub fn unix_nanos(t: &DateTime<Utc>) -> i128 {
    match t.timestamp_nanos_opt() {
        Some(nanos) => i128::from(nanos),
        None => {
            i128::from(t.timestamp()) * NANOS_PER_SEC + i128::from(t.timestamp_subsec_nanos())
        }
    }
}

/// Shortest round-trip rendering of `n`, in exponent form outside
/// `1e-4 <= |n| < 1e6`.
pub fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{:e}", n);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return n.to_string();
    };
    let exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => return n.to_string(),
    };

    if n == 0.0 || (MIN_PLAIN_EXP..MAX_PLAIN_EXP).contains(&exp) {
        n.to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<f32> for Value {
    /// Keeps the `f32`'s own shortest digits: `0.1f32` renders as `0.1`.
    fn from(n: f32) -> Self {
        let widened = format!("{:e}", n).parse().unwrap_or(f64::from(n));
        Value::Float(widened)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(i64::from(n))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::UInt(u64::from(n))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::UInt(n as u64)
    }
}

macro_rules! impl_from_scalar_seq {
    ($($t:ty),*) => {
        $(
            impl From<Vec<$t>> for Value {
                fn from(items: Vec<$t>) -> Self {
                    Value::from(items.as_slice())
                }
            }

            impl From<&[$t]> for Value {
                fn from(items: &[$t]) -> Self {
                    Value::List(
                        items
                            .iter()
                            .flat_map(|&item| Value::from(item).tokens())
                            .collect(),
                    )
                }
            }
        )*
    };
}

impl_from_scalar_seq!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, bool);
