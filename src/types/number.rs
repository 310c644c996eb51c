//! Wrapper type for values that behave either as an integer or a decimal.

use std::cmp::Ordering;
use std::ops::Add;
use std::ops::Mul;

use rust_decimal::Decimal;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Number {
    Integer(i64),
    Decimal(Decimal),
}

impl Number {
    /// Does a comparison based on the numerical values represented.
    /// Whole value decimals will compare as equal to their integer counterparts.
    pub fn val_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l.cmp(r),
            (Self::Integer(l), Self::Decimal(r)) => Decimal::from(*l).cmp(r),
            (Self::Decimal(l), Self::Integer(r)) => l.cmp(&Decimal::from(*r)),
            (Self::Decimal(l), Self::Decimal(r)) => l.cmp(r),
        }
    }

    pub fn val_eq(&self, other: &Self) -> bool {
        self.val_cmp(other) == Ordering::Equal
    }

    /// Returns the larger of two numbers, based on their numerical values.
    /// If equal, returns the second value, to match Rust's behavior.
    pub fn val_max(self, other: Self) -> Self {
        match self.val_cmp(&other) {
            Ordering::Equal | Ordering::Less => other,
            Ordering::Greater => self,
        }
    }

    /// Returns the smaller of two numbers, based on their numerical values.
    /// If equal, returns the first value, to match Rust's behavior.
    pub fn val_min(self, other: Self) -> Self {
        match self.val_cmp(&other) {
            Ordering::Greater => other,
            Ordering::Equal | Ordering::Less => self,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<Decimal> for Number {
    fn from(n: Decimal) -> Self {
        Self::Decimal(n)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, other: Self) -> Self::Output {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => Self::Integer(l.add(r)),
            (Self::Integer(l), Self::Decimal(r)) => Self::Decimal(Decimal::from(l).add(r)),
            (Self::Decimal(l), Self::Integer(r)) => Self::Decimal(l.add(Decimal::from(r))),
            (Self::Decimal(l), Self::Decimal(r)) => Self::Decimal(l.add(r)),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, other: Self) -> Self::Output {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => Self::Integer(l.mul(r)),
            (Self::Integer(l), Self::Decimal(r)) => Self::Decimal(Decimal::from(l).mul(r)),
            (Self::Decimal(l), Self::Integer(r)) => Self::Decimal(l.mul(Decimal::from(r))),
            (Self::Decimal(l), Self::Decimal(r)) => Self::Decimal(l.mul(r)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cmp::Ordering;

    use rand::seq::SliceRandom;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn number_val_cmp() {
        for l in -3..=3 {
            let li = Number::Integer(l);
            let ld = Number::Decimal(l.into());

            for r in -3..=3 {
                let ri = Number::Integer(r);
                let rd = Number::Decimal(r.into());

                let expected = l.cmp(&r);

                assert_eq!(expected, li.val_cmp(&ri));
                assert_eq!(expected, li.val_cmp(&rd));
                assert_eq!(expected, ld.val_cmp(&ri));
                assert_eq!(expected, ld.val_cmp(&rd));
            }

            let lower_d = Number::Decimal(Decimal::from(l) - dec!(0.5));
            let upper_d = Number::Decimal(Decimal::from(l) + dec!(0.5));

            assert_eq!(Ordering::Greater, li.val_cmp(&lower_d));
            assert_eq!(Ordering::Greater, ld.val_cmp(&lower_d));
            assert_eq!(Ordering::Less, li.val_cmp(&upper_d));
            assert_eq!(Ordering::Less, ld.val_cmp(&upper_d));
        }

        // Should be able to sort a list of numbers.
        let expected = vec![
            Number::Decimal(dec!(-2.5)),
            Number::Integer(-2),
            Number::Decimal(dec!(-1.5)),
            Number::Integer(-1),
            Number::Decimal(dec!(-0.5)),
            Number::Integer(0),
            Number::Decimal(dec!(0.5)),
            Number::Integer(1),
            Number::Decimal(dec!(1.5)),
            Number::Integer(2),
            Number::Decimal(dec!(2.5)),
        ];

        let mut produced = expected.clone();
        produced.shuffle(&mut rand::thread_rng());

        produced.sort_by(Number::val_cmp);

        assert_eq!(expected, produced);
    }

    #[test]
    fn number_val_eq() {
        for l in -3..=3 {
            for r in -3..=3 {
                let li = Number::Integer(l);
                let ld = Number::Decimal(l.into());
                let ri = Number::Integer(r);
                let rd = Number::Decimal(r.into());

                let expected = l.eq(&r);

                assert_eq!(expected, li.val_eq(&ri));
                assert_eq!(expected, li.val_eq(&rd));
                assert_eq!(expected, ld.val_eq(&ri));
                assert_eq!(expected, ld.val_eq(&rd));
            }
        }
    }

    #[test]
    fn number_val_min_max() {
        assert_eq!(Number::Integer(-1), Number::Integer(-1).val_max(Number::Integer(-2)));
        assert_eq!(Number::Integer(-1), Number::Integer(-2).val_max(Number::Integer(-1)));
        assert_eq!(Number::Integer(1), Number::Integer(1).val_max(Number::Integer(0)));
        assert_eq!(Number::Integer(1), Number::Integer(0).val_max(Number::Integer(1)));

        assert_eq!(Number::Integer(-2), Number::Integer(-1).val_min(Number::Integer(-2)));
        assert_eq!(Number::Integer(-2), Number::Integer(-2).val_min(Number::Integer(-1)));
        assert_eq!(Number::Integer(0), Number::Integer(1).val_min(Number::Integer(0)));
        assert_eq!(Number::Integer(0), Number::Integer(0).val_min(Number::Integer(1)));

        // On equal values, max keeps the second operand and min the first.
        assert_eq!(Number::Decimal(dec!(1)), Number::Integer(1).val_max(Number::Decimal(dec!(1))));
        assert_eq!(Number::Integer(1), Number::Decimal(dec!(1)).val_max(Number::Integer(1)));
        assert_eq!(Number::Integer(1), Number::Integer(1).val_min(Number::Decimal(dec!(1))));
        assert_eq!(Number::Decimal(dec!(1)), Number::Decimal(dec!(1)).val_min(Number::Integer(1)));
    }

    #[test]
    fn number_add() {
        for l in -3..=3 {
            for r in -3..=3 {
                let li = Number::Integer(l);
                let ld = Number::Decimal(l.into());
                let ri = Number::Integer(r);
                let rd = Number::Decimal(r.into());

                let raw = l.add(r);
                let expected_i = Number::from(raw);
                let expected_d = Number::from(Decimal::from(raw));

                assert_eq!(expected_i, li.add(ri));
                assert_eq!(expected_d, li.add(rd));
                assert_eq!(expected_d, ld.add(ri));
                assert_eq!(expected_d, ld.add(rd));
            }
        }
    }

    #[test]
    fn number_mul() {
        for l in -3..=3 {
            for r in -3..=3 {
                let li = Number::Integer(l);
                let ld = Number::Decimal(l.into());
                let ri = Number::Integer(r);
                let rd = Number::Decimal(r.into());

                let raw = l.mul(r);
                let expected_i = Number::from(raw);
                let expected_d = Number::from(Decimal::from(raw));

                assert_eq!(expected_i, li.mul(ri));
                assert_eq!(expected_d, li.mul(rd));
                assert_eq!(expected_d, ld.mul(ri));
                assert_eq!(expected_d, ld.mul(rd));
            }
        }
    }
}
