use core::fmt;

/// An AMQP decimal, `value / 10^scale`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default, Hash)]
pub struct Decimal {
    /// The number of decimal digits after the point
    pub scale: u8,

    /// The unscaled mantissa
    pub value: u32,
}

impl Decimal {
    /// Create a new Decimal
    #[inline]
    pub fn new(scale: u8, value: u32) -> Self {
        Self { scale, value }
    }

    /// Convert to the nearest f64
    pub fn to_f64(&self) -> f64 {
        f64::from(self.value) / 10f64.powi(i32::from(self.scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.value.to_string();
        let scale = usize::from(self.scale);

        if scale == 0 {
            f.write_str(&digits)
        } else if digits.len() <= scale {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        } else {
            let (whole, fraction) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", whole, fraction)
        }
    }
}

#[cfg(test)]
mod test {
    use super::Decimal;

    #[test]
    fn test_display() {
        assert_eq!(Decimal::new(2, 12345).to_string(), "123.45");
        assert_eq!(Decimal::new(0, 7).to_string(), "7");
        assert_eq!(Decimal::new(4, 12).to_string(), "0.0012");
        assert_eq!(Decimal::new(3, 500).to_string(), "0.500");
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Decimal::new(2, 12345).to_f64(), 123.45);
        assert_eq!(Decimal::new(0, 3).to_f64(), 3.0);
    }
}
