use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::Rational64;
use num_traits::{One, Zero};

/// фиксированный набор символов: параметр кривой и координаты контрольных точек
pub const SYMBOLS: [&str; 7] = ["t", "x1", "x2", "x3", "y1", "y2", "y3"];

/// индекс символа в SYMBOLS
pub fn sym_index(name: &str) -> usize
{
    SYMBOLS
        .iter()
        .position(|&sym| sym == name)
        .unwrap_or_else(|| panic!("неизвестный символ: {}", name))
}

/// моном - степени символов в порядке SYMBOLS
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Monomial(pub [u8; 7]);

impl Monomial
{
    pub const ONE: Self = Self([0; 7]);

    /// произведение мономов - сумма степеней
    fn mul(&self, other: &Self) -> Self
    {
        let mut exponents = self.0;

        for (exponent, &other) in exponents.iter_mut().zip(other.0.iter()) {
            *exponent += other;
        }

        Self(exponents)
    }
}

/// многочлен над символами SYMBOLS с точными рациональными коэффициентами.
/// слагаемые хранятся в упорядоченном дереве - все обходы детерминированы
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Poly
{
    terms: BTreeMap<Monomial, Rational64>,
}

impl Poly
{
    pub fn constant(value: Rational64) -> Self
    {
        let mut poly = Self::default();
        poly.add_term(Monomial::ONE, value);

        poly
    }

    pub fn int(value: i64) -> Self
    {
        Self::constant(Rational64::from_integer(value))
    }

    /// многочлен из одного символа
    pub fn sym(name: &str) -> Self
    {
        let mut exponents = [0; 7];
        exponents[sym_index(name)] = 1;

        let mut poly = Self::default();
        poly.add_term(Monomial(exponents), Rational64::one());

        poly
    }

    fn add_term(&mut self, monomial: Monomial, coefficient: Rational64)
    {
        if coefficient.is_zero() {
            return;
        }

        let entry = self.terms.entry(monomial).or_insert_with(Rational64::zero);
        *entry += coefficient;

        if entry.is_zero() {
            self.terms.remove(&monomial);
        }
    }

    /// слагаемые в порядке мономов
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational64)>
    {
        self.terms.iter()
    }

    pub fn is_zero(&self) -> bool
    {
        self.terms.is_empty()
    }

    /// возведение в натуральную степень
    pub fn pow(&self, exponent: u32) -> Self
    {
        let mut result = Self::int(1);

        for _ in 0 .. exponent {
            result = result * self.clone();
        }

        result
    }

    /// частная производная по символу
    pub fn diff(&self, sym: &str) -> Self
    {
        let index = sym_index(sym);
        let mut result = Self::default();

        for (&monomial, &coefficient) in self.terms.iter() {
            let exponent = monomial.0[index];

            if exponent == 0 {
                continue;
            }

            let mut lowered = monomial;
            lowered.0[index] -= 1;

            result.add_term(lowered, coefficient * Rational64::from_integer(exponent as i64));
        }

        result
    }

    /// точный определённый интеграл по символу на отрезке [0, 1]
    pub fn integrate_01(&self, sym: &str) -> Self
    {
        let index = sym_index(sym);
        let mut result = Self::default();

        for (&monomial, &coefficient) in self.terms.iter() {
            let mut integrated = monomial;
            let exponent = integrated.0[index] as i64;
            integrated.0[index] = 0;

            result.add_term(integrated, coefficient / Rational64::from_integer(exponent + 1));
        }

        result
    }

    /// численное значение многочлена в точке; значения символов - в порядке SYMBOLS
    pub fn eval(&self, values: &[f64; 7]) -> f64
    {
        self.terms
            .iter()
            .map(|(monomial, coefficient)| {
                let factors: f64 = monomial
                    .0
                    .iter()
                    .zip(values.iter())
                    .map(|(&exponent, &value)| value.powi(exponent as i32))
                    .product();

                ratio_to_f64(coefficient) * factors
            })
            .sum()
    }
}

/// рациональный коэффициент как f64
pub fn ratio_to_f64(value: &Rational64) -> f64
{
    *value.numer() as f64 / *value.denom() as f64
}

impl Add for Poly
{
    type Output = Poly;

    fn add(mut self, other: Poly) -> Poly
    {
        for (monomial, coefficient) in other.terms {
            self.add_term(monomial, coefficient);
        }

        self
    }
}

impl Sub for Poly
{
    type Output = Poly;

    fn sub(self, other: Poly) -> Poly
    {
        self + (-other)
    }
}

impl Neg for Poly
{
    type Output = Poly;

    fn neg(mut self) -> Poly
    {
        for coefficient in self.terms.values_mut() {
            *coefficient = -*coefficient;
        }

        self
    }
}

impl Mul for Poly
{
    type Output = Poly;

    fn mul(self, other: Poly) -> Poly
    {
        let mut result = Poly::default();

        for (monomial, coefficient) in self.terms.iter() {
            for (other_monomial, other_coefficient) in other.terms.iter() {
                result.add_term(monomial.mul(other_monomial), coefficient * other_coefficient);
            }
        }

        result
    }
}

impl Mul<i64> for Poly
{
    type Output = Poly;

    fn mul(mut self, value: i64) -> Poly
    {
        let value = Rational64::from_integer(value);

        for coefficient in self.terms.values_mut() {
            *coefficient *= value;
        }

        self
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn integrate_monomial()
    {
        // ∫ t² dt на [0, 1] = 1/3
        assert_eq!(
            Poly::sym("t").pow(2).integrate_01("t"),
            Poly::constant(Rational64::new(1, 3))
        );
    }

    #[test]
    fn diff_monomial()
    {
        // (t³)' = 3t²
        assert_eq!(Poly::sym("t").pow(3).diff("t"), Poly::sym("t").pow(2) * 3);
    }

    #[test]
    fn binomial_expansion()
    {
        // (1 - t)³ = 1 - 3t + 3t² - t³
        let t = Poly::sym("t");

        let expanded = Poly::int(1) - t.clone() * 3 + t.pow(2) * 3 - t.pow(3);

        assert_eq!((Poly::int(1) - t).pow(3), expanded);
    }

    #[test]
    fn eval_point()
    {
        // (x1 + y1)² в точке x1 = 2, y1 = 3
        let sum = Poly::sym("x1") + Poly::sym("y1");

        let mut values = [0.0; 7];
        values[sym_index("x1")] = 2.0;
        values[sym_index("y1")] = 3.0;

        assert_eq!(sum.pow(2).eval(&values), 25.0);
    }
}
