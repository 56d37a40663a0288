///
/// probability calculation
/// implements logaddexp
///
use crate::error::HmmError;
use approx::AbsDiffEq;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

///
/// Wrapper of f64 that represents probability `0 <= p <= 1`
///
/// The value is stored as a log probability, so products of many small
/// transition/emission probabilities along a long lattice do not underflow.
///
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, SerializeDisplay, DeserializeFromStr)]
pub struct Prob(f64);

///
/// short-hand of `Prob::from_prob`
///
pub fn p(p: f64) -> Prob {
    Prob::from_prob(p)
}

impl Prob {
    ///
    ///
    pub fn from_prob(value: f64) -> Prob {
        Prob(value.ln())
    }
    ///
    /// Create from a raw probability after checking it is a finite value in `[0, 1]`.
    ///
    pub fn checked(value: f64) -> Result<Prob, HmmError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Prob::from_prob(value))
        } else {
            Err(HmmError::InvalidProbability(value.to_string()))
        }
    }
    ///
    /// Get the probability (in `[0, 1]`)
    pub fn to_value(self) -> f64 {
        self.0.exp()
    }
    ///
    /// Is `p == 0` or not? (log p = -inf)
    ///
    pub fn is_zero(self) -> bool {
        self.0.is_infinite() && self.0.is_sign_negative()
    }
    ///
    /// Is `p == 1`? (log p = 0)
    ///
    pub fn is_one(self) -> bool {
        self.0 == 0.0
    }
    ///
    /// prob=0.0
    ///
    pub fn zero() -> Prob {
        Prob(f64::NEG_INFINITY)
    }
    ///
    /// prob=1.0
    ///
    pub fn one() -> Prob {
        Prob(0.0)
    }
    ///
    /// Is this a probability in `[0, 1]`? (log p is not NaN and `<= 0`)
    ///
    pub fn is_valid(self) -> bool {
        !self.0.is_nan() && self.0 <= 0.0
    }
}

/// p=0 (Prob(-inf)) as a default value
///
/// A missing table entry resolves to this value.
impl Default for Prob {
    fn default() -> Self {
        Prob::zero()
    }
}

// display in linear scale, same notation as the table files.
// rounded to 15 significant digits, so 0.3 prints as `0.3`.
impl std::fmt::Display for Prob {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let value = self.to_value();
        let rounded = format!("{:.14e}", value).parse::<f64>().unwrap_or(value);
        write!(f, "{}", rounded)
    }
}

///
/// Parse a decimal probability such as `0.25`.
/// Values outside `[0, 1]` are rejected.
///
impl FromStr for Prob {
    type Err = HmmError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| HmmError::InvalidProbability(s.to_string()))?;
        Prob::checked(value).map_err(|_| HmmError::InvalidProbability(s.to_string()))
    }
}

/// Addition of two probabilities `px + py` in log space
///
/// If `px > py`:
///
/// ```text
/// log(exp(x) + exp(y))
///  = log(exp(x) (1 + exp(y-x)))
///  = log(exp(x)) + log(1 + exp(y-x))
///  = x + log(1 + exp(y-x))
/// ```
impl std::ops::Add for Prob {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let x = self.0;
        let y = other.0;
        let (x, y) = if x >= y { (x, y) } else { (y, x) };
        if y == f64::NEG_INFINITY {
            // x + 0 = x
            Prob(x)
        } else if x == y {
            // x + x = 2x
            Prob(x + 2f64.ln())
        } else {
            Prob(x + (y - x).exp().ln_1p())
        }
    }
}

/// Multiplication of two probabilities `px * py` in log space
///
/// ```text
/// log(px * py) = log(px) + log(py)
/// ```
impl std::ops::Mul for Prob {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Prob(self.0 + other.0)
    }
}

// sum
impl std::iter::Sum for Prob {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Prob::zero(), |a, b| a + b)
    }
}
impl<'a> std::iter::Sum<&'a Self> for Prob {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Prob::zero(), |a, b| a + *b)
    }
}

/// for approx `assert_abs_diff_eq`
///
/// compares in linear scale, so that two zero probabilities are equal.
impl AbsDiffEq for Prob {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.to_value(), &other.to_value(), epsilon)
    }
}

impl Eq for Prob {}
impl Ord for Prob {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // log probs are never NaN as long as they come from `checked` values
        self.partial_cmp(other).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn prob_add_mul() {
        assert_eq!(p(0.0) + p(1.0), p(1.0));
        assert_eq!(p(0.0) * p(1.0), p(0.0));
        assert_abs_diff_eq!(p(0.3) + p(0.3), p(0.6), epsilon = 1e-12);
        assert_abs_diff_eq!(p(0.3) * p(0.3), p(0.09), epsilon = 1e-12);
        assert_abs_diff_eq!(p(0.5) * p(0.00001), p(0.000005), epsilon = 1e-12);
    }
    #[test]
    fn prob_sum() {
        let xs = vec![p(0.1), p(0.1), p(0.1)];
        let x: Prob = xs.iter().sum();
        assert_relative_eq!(x.to_value(), 0.3, epsilon = 1e-12);
        let y: Prob = xs.into_iter().sum();
        assert_relative_eq!(y.to_value(), 0.3, epsilon = 1e-12);

        // sum of zero element vec
        let xs: Vec<Prob> = vec![];
        let sum: Prob = xs.iter().sum();
        assert_eq!(sum, p(0.0));
    }
    #[test]
    fn prob_valid() {
        assert!(p(0.0).is_valid());
        assert!(p(0.3).is_valid());
        assert!(p(1.0).is_valid());
        assert!(!p(1.7).is_valid());
        assert!(!p(-0.2).is_valid());
        assert!(!p(f64::NAN).is_valid());
    }
    #[test]
    fn prob_display() {
        assert_eq!(p(0.3).to_string(), "0.3");
        assert_eq!(p(0.1).to_string(), "0.1");
        assert_eq!(p(0.05).to_string(), "0.05");
        assert_eq!(p(1.0).to_string(), "1");
        assert_eq!(p(0.0).to_string(), "0");
        // text form parses back to the same value
        for x in [0.3, 0.6, 0.123456789, 0.05] {
            let q: Prob = p(x).to_string().parse().unwrap();
            assert_eq!(q, p(x));
        }
    }
    #[test]
    fn prob_zero_one() {
        assert_eq!(Prob::one(), Prob::from_prob(1.0));
        assert_eq!(Prob::zero(), Prob::from_prob(0.0));
        assert_eq!(Prob::default(), Prob::zero());
        assert!(Prob::zero().is_zero());
        assert!(Prob::one().is_one());
        assert!(!p(0.00001).is_zero());
    }
    #[test]
    fn prob_max_min() {
        let ps = vec![p(0.9), p(0.2), p(0.5), p(0.1), p(1.0), p(0.0)];
        assert_eq!(*ps.iter().max().unwrap(), p(1.0));
        assert_eq!(*ps.iter().min().unwrap(), p(0.0));
        assert!(p(0.0) < p(0.01));
        assert!(p(0.1) > p(0.09999));
    }
    #[test]
    fn prob_parse() {
        assert_eq!(Prob::from_str("1").unwrap(), Prob::one());
        assert_eq!(Prob::from_str("0").unwrap(), Prob::zero());
        assert_abs_diff_eq!(Prob::from_str("0.25").unwrap(), p(0.25), epsilon = 1e-12);
        assert!(Prob::from_str("1.5").is_err());
        assert!(Prob::from_str("-0.1").is_err());
        assert!(Prob::from_str("NaN").is_err());
        assert!(Prob::from_str("meow").is_err());
    }
    #[test]
    fn prob_serialize() {
        let f = |p: Prob| {
            let json = serde_json::to_string(&p).unwrap();
            println!("p={} json={}", p, json);
            serde_json::from_str::<Prob>(&json).unwrap()
        };
        assert_eq!(f(Prob::one()), Prob::one());
        assert_eq!(f(Prob::zero()), Prob::zero());
        assert_abs_diff_eq!(f(p(0.5)), p(0.5), epsilon = 1e-12);
    }
}
