//! RK-packed numbers.
//!
//! BIFF stores small numbers in 32 bits: bit 0 asks for a division by 100,
//! bit 1 selects an integer payload, and the remaining 30 bits carry either a
//! signed integer or the high-order bits of an IEEE-754 double.

use crate::error::{Error, Result};
use std::fmt;

/// A raw RK value as read from an RK or MULRK record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rk(pub u32);

/// The number an [`Rk`] decodes to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RkNumber {
    Integer(i64),
    Float(f64),
}

impl Rk {
    const DIV_100: u32 = 0x1;
    const INTEGER: u32 = 0x2;

    pub fn decode(self) -> RkNumber {
        let div_100 = self.0 & Self::DIV_100 != 0;
        let is_integer = self.0 & Self::INTEGER != 0;

        if !is_integer {
            let bits = u64::from(self.0 & 0xFFFF_FFFC) << 32;
            let value = f64::from_bits(bits);
            return RkNumber::Float(if div_100 { value / 100.0 } else { value });
        }

        let payload = (self.0 as i32) >> 2;
        if div_100 {
            RkNumber::Float(f64::from(payload) / 100.0)
        } else {
            RkNumber::Integer(i64::from(payload))
        }
    }

    /// The decoded value when it is a float; integer payloads are refused so
    /// callers branch on [`RkNumber`] instead.
    pub fn as_float(self) -> Result<f64> {
        match self.decode() {
            RkNumber::Float(f) => Ok(f),
            RkNumber::Integer(value) => Err(Error::NotAFloat { value }),
        }
    }
}

impl fmt::Display for Rk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.decode(), f)
    }
}

impl RkNumber {
    /// The value as an Excel serial, widening integers.
    pub fn as_serial(self) -> f64 {
        match self {
            RkNumber::Integer(i) => i as f64,
            RkNumber::Float(f) => f,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, RkNumber::Float(_))
    }
}

/// Integers print as base-10 digits, floats as the shortest text that
/// parses back to the same double, never in exponent form.
impl fmt::Display for RkNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RkNumber::Integer(i) => write!(f, "{i}"),
            RkNumber::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn int_rk(value: i32, div_100: bool) -> Rk {
        Rk(((value as u32) << 2) | 0x2 | u32::from(div_100))
    }

    fn float_rk(value: f64, div_100: bool) -> Rk {
        Rk(((value.to_bits() >> 32) as u32 & 0xFFFF_FFFC) | u32::from(div_100))
    }

    #[test]
    fn test_decode_integer() {
        assert_eq!(int_rk(42, false).decode(), RkNumber::Integer(42));
        assert_eq!(int_rk(-7, false).decode(), RkNumber::Integer(-7));
        assert_eq!(int_rk(0, false).decode(), RkNumber::Integer(0));
    }

    #[test]
    fn test_decode_integer_div_100_is_float() {
        assert_eq!(int_rk(12345, true).decode(), RkNumber::Float(123.45));
        assert_eq!(int_rk(-150, true).decode(), RkNumber::Float(-1.5));
    }

    #[test]
    fn test_decode_float() {
        assert_eq!(float_rk(1.0, false).decode(), RkNumber::Float(1.0));
        assert_eq!(float_rk(-2.5, false).decode(), RkNumber::Float(-2.5));
        assert_eq!(float_rk(45296.0, false).decode(), RkNumber::Float(45296.0));
        // 0x3FF00000 is 1.0 in the high word; with the /100 flag it becomes 0.01.
        assert_eq!(Rk(0x3FF0_0001).decode(), RkNumber::Float(0.01));
    }

    #[test]
    fn test_as_float() {
        assert_eq!(float_rk(0.5, false).as_float().unwrap(), 0.5);
        assert_eq!(int_rk(3, true).as_float().unwrap(), 0.03);
        assert!(matches!(
            int_rk(3, false).as_float(),
            Err(Error::NotAFloat { value: 3 })
        ));
    }

    #[test]
    fn test_render_decimal() {
        assert_eq!(int_rk(-536_870_912, false).to_string(), "-536870912");
        assert_eq!(int_rk(536_870_911, false).to_string(), "536870911");
        assert_eq!(int_rk(12345, true).to_string(), "123.45");
        assert_eq!(float_rk(1.0, false).to_string(), "1");
        assert_eq!(float_rk(2f64.powi(70), false).to_string(), "1180591620717411300000");
        assert_eq!(float_rk(2f64.powi(-20), false).to_string(), "0.00000095367431640625");
    }

    #[test]
    fn test_as_serial() {
        assert_eq!(RkNumber::Integer(45296).as_serial(), 45296.0);
        assert_eq!(RkNumber::Float(0.25).as_serial(), 0.25);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 1024,
            rng_seed: proptest::test_runner::RngSeed::Fixed(0),
            failure_persistence: None,
            .. ProptestConfig::default()
        })]

        #[test]
        fn decode_renders_and_reparses(raw in any::<u32>()) {
            let decoded = Rk(raw).decode();
            let text = decoded.to_string();
            prop_assert_eq!(&text, &Rk(raw).to_string());
            match decoded {
                RkNumber::Integer(i) => {
                    prop_assert_eq!(raw & 0x3, 0x2);
                    prop_assert_eq!(text.parse::<i64>().unwrap(), i);
                }
                RkNumber::Float(f) if f.is_nan() => {
                    prop_assert!(text.parse::<f64>().unwrap().is_nan());
                }
                RkNumber::Float(f) => {
                    prop_assert!(!text.contains('e'));
                    prop_assert_eq!(text.parse::<f64>().unwrap().to_bits(), f.to_bits());
                }
            }
        }

        #[test]
        fn div_100_flag_scales_the_unscaled_value(raw in any::<u32>()) {
            let unscaled = Rk(raw & !0x1).decode().as_serial();
            let scaled = Rk(raw | 0x1).decode();
            prop_assert!(scaled.is_float());
            let scaled = scaled.as_serial();
            if unscaled.is_nan() {
                prop_assert!(scaled.is_nan());
            } else {
                prop_assert_eq!(scaled.to_bits(), (unscaled / 100.0).to_bits());
            }
        }

        #[test]
        fn distinct_payloads_decode_to_distinct_numbers(a in any::<u32>(), b in any::<u32>(), flags in 0u32..4) {
            let a = (a & !0x3) | flags;
            let b = (b & !0x3) | flags;
            prop_assume!(a != b);
            let (da, db) = (Rk(a).decode(), Rk(b).decode());
            prop_assume!(!da.as_serial().is_nan() && !db.as_serial().is_nan());
            match (da, db) {
                (RkNumber::Integer(x), RkNumber::Integer(y)) => prop_assert_ne!(x, y),
                (RkNumber::Float(x), RkNumber::Float(y)) => prop_assert_ne!(x.to_bits(), y.to_bits()),
                _ => prop_assert!(false, "flags select the same kind"),
            }
        }
    }
}
