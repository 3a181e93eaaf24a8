use num_rational::Rational64;

use crate::poly::{ratio_to_f64, Monomial, Poly};

/// множитель слагаемого: исходный символ (индекс в poly::SYMBOLS)
/// или вынесенная подстановка rN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor
{
    Sym(usize),
    Sub(usize),
}

/// слагаемое после подстановок
#[derive(Debug, Clone)]
pub struct Term
{
    pub coefficient: Rational64,
    pub factors: Vec<Factor>,
}

/// результат исключения общих подвыражений: подстановки-произведения
/// и исходные многочлены, переписанные через них
#[derive(Debug)]
pub struct Program
{
    /// rN = SYMBOLS[a] * SYMBOLS[b], N - позиция в списке
    pub bindings: Vec<(usize, usize)>,
    /// именованные результаты как суммы слагаемых
    pub results: Vec<(String, Vec<Term>)>,
}

impl Program
{
    /// численные значения всех результатов в точке;
    /// значения символов - в порядке poly::SYMBOLS
    pub fn eval(&self, values: &[f64; 7]) -> Vec<f64>
    {
        let subs: Vec<f64> = self
            .bindings
            .iter()
            .map(|&(a, b)| values[a] * values[b])
            .collect();

        self.results
            .iter()
            .map(|(_, terms)| {
                terms
                    .iter()
                    .map(|term| {
                        let factors: f64 = term
                            .factors
                            .iter()
                            .map(|factor| match factor {
                                Factor::Sym(index) => values[*index],
                                Factor::Sub(index) => subs[*index],
                            })
                            .product();

                        ratio_to_f64(&term.coefficient) * factors
                    })
                    .sum()
            })
            .collect()
    }
}

/// пары множителей монома: каждая различимая пара учитывается один раз
fn monomial_pairs(monomial: &Monomial) -> Vec<(usize, usize)>
{
    let mut pairs = vec![];

    for a in 0 .. monomial.0.len() {
        for b in a .. monomial.0.len() {
            let present = match a == b {
                true => monomial.0[a] >= 2,
                false => monomial.0[a] >= 1 && monomial.0[b] >= 1,
            };

            if present {
                pairs.push((a, b));
            }
        }
    }

    pairs
}

/// делится ли вектор степеней на пару множителей
fn divisible(exponents: &[u8; 7], a: usize, b: usize) -> bool
{
    match a == b {
        true => exponents[a] >= 2,
        false => exponents[a] >= 1 && exponents[b] >= 1,
    }
}

/// исключение общих подвыражений: произведения пар множителей, встречающиеся
/// минимум в двух слагаемых, выносятся в подстановки в порядке обнаружения;
/// слагаемые переписываются жадным делением на подстановки
pub fn eliminate(polys: &[(&str, &Poly)]) -> Program
{
    // подсчёт кандидатов по всем слагаемым всех многочленов

    let mut candidates: Vec<((usize, usize), usize)> = vec![];

    for (_, poly) in polys {
        for (monomial, _) in poly.terms() {
            for pair in monomial_pairs(monomial) {
                match candidates.iter_mut().find(|(seen, _)| *seen == pair) {
                    Some((_, count)) => *count += 1,
                    None => candidates.push((pair, 1)),
                }
            }
        }
    }

    let bindings: Vec<(usize, usize)> = candidates
        .iter()
        .filter(|(_, count)| *count >= 2)
        .map(|(pair, _)| *pair)
        .collect();

    // переписывание слагаемых

    let mut results = vec![];

    for (name, poly) in polys {
        let mut terms = vec![];

        for (monomial, coefficient) in poly.terms() {
            let mut exponents = monomial.0;
            let mut factors = vec![];

            for (index, &(a, b)) in bindings.iter().enumerate() {
                while divisible(&exponents, a, b) {
                    exponents[a] -= 1;
                    exponents[b] -= 1;
                    factors.push(Factor::Sub(index));
                }
            }

            for (sym, &exponent) in exponents.iter().enumerate() {
                for _ in 0 .. exponent {
                    factors.push(Factor::Sym(sym));
                }
            }

            terms.push(Term {
                coefficient: *coefficient,
                factors,
            });
        }

        results.push((name.to_string(), terms));
    }

    prune(bindings, results)
}

/// жадное переписывание может оставить подстановку без единого использования -
/// такие подстановки удаляются, остальные перенумеровываются
fn prune(bindings: Vec<(usize, usize)>, mut results: Vec<(String, Vec<Term>)>) -> Program
{
    let mut used = vec![false; bindings.len()];

    for (_, terms) in results.iter() {
        for term in terms {
            for factor in term.factors.iter() {
                if let Factor::Sub(index) = factor {
                    used[*index] = true;
                }
            }
        }
    }

    let mut remap = vec![usize::MAX; bindings.len()];
    let mut kept = vec![];

    for (index, pair) in bindings.into_iter().enumerate() {
        if used[index] {
            remap[index] = kept.len();
            kept.push(pair);
        }
    }

    for (_, terms) in results.iter_mut() {
        for term in terms.iter_mut() {
            for factor in term.factors.iter_mut() {
                if let Factor::Sub(index) = factor {
                    *factor = Factor::Sub(remap[*index]);
                }
            }
        }
    }

    Program {
        bindings: kept,
        results,
    }
}
