use std::fmt::Write;

use num_rational::Rational64;
use num_traits::{One, Signed};

use crate::cse::{Factor, Program, Term};
use crate::poly::SYMBOLS;

/// печать программы как фрагмента Rust-функции; фрагмент вставляется
/// в целевой проект вручную
pub fn function(name: &str, program: &Program) -> String
{
    let mut used = [false; 7];

    for &(a, b) in program.bindings.iter() {
        used[a] = true;
        used[b] = true;
    }

    for (_, terms) in program.results.iter() {
        for term in terms {
            for factor in term.factors.iter() {
                if let Factor::Sym(index) = factor {
                    used[*index] = true;
                }
            }
        }
    }

    let params = SYMBOLS
        .iter()
        .enumerate()
        .filter(|(index, _)| used[*index])
        .map(|(_, sym)| format!("{}: f64", sym))
        .collect::<Vec<_>>()
        .join(", ");

    let returns = match program.results.len() {
        1 => "f64".to_owned(),
        count => format!("({})", vec!["f64"; count].join(", ")),
    };

    let mut output = format!("fn {}({}) -> {} {{\n", name, params, returns);

    for (index, &(a, b)) in program.bindings.iter().enumerate() {
        writeln!(output, "    let r{} = {} * {};", index, SYMBOLS[a], SYMBOLS[b]).unwrap();
    }

    for (result, terms) in program.results.iter() {
        writeln!(output, "    let {} = {};", result, expression(terms)).unwrap();
    }

    let names: Vec<&str> = program
        .results
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();

    match names.len() {
        1 => writeln!(output, "    {}", names[0]).unwrap(),
        _ => writeln!(output, "    ({})", names.join(", ")).unwrap(),
    }

    output.push('}');
    output.push('\n');

    output
}

/// сумма слагаемых со знаками
fn expression(terms: &[Term]) -> String
{
    if terms.is_empty() {
        return "0.0".to_owned();
    }

    let mut output = String::new();

    for (index, term) in terms.iter().enumerate() {
        let negative = term.coefficient.is_negative();

        match index {
            0 => {
                if negative {
                    output.push('-');
                }
            }
            _ => output.push_str(match negative {
                true => " - ",
                false => " + ",
            }),
        }

        output.push_str(&magnitude(term));
    }

    output
}

/// слагаемое без знака: коэффициент и множители через умножение
fn magnitude(term: &Term) -> String
{
    let coefficient = term.coefficient.abs();
    let mut parts = vec![];

    if term.factors.is_empty() || !coefficient.is_one() {
        parts.push(coefficient_literal(&coefficient));
    }

    for factor in term.factors.iter() {
        parts.push(match factor {
            Factor::Sym(index) => SYMBOLS[*index].to_owned(),
            Factor::Sub(index) => format!("r{}", index),
        });
    }

    parts.join(" * ")
}

/// рациональный коэффициент как литерал f64
fn coefficient_literal(value: &Rational64) -> String
{
    match value.is_integer() {
        true => format!("{}.0", value.numer()),
        false => format!("({}.0 / {}.0)", value.numer(), value.denom()),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::cse::eliminate;
    use crate::poly::Poly;

    #[test]
    fn function_with_binding()
    {
        let poly = Poly::sym("x1") * Poly::sym("y1") * 3
            + Poly::sym("x1") * Poly::sym("y1") * Poly::sym("x2");

        let program = eliminate(&[("q", &poly)]);

        assert_eq!(
            function("q", &program),
            "\
fn q(x1: f64, x2: f64, y1: f64) -> f64 {
    let r0 = x1 * y1;
    let q = 3.0 * r0 + r0 * x2;
    q
}
"
        );
    }

    #[test]
    fn signs_and_fractions()
    {
        let poly = Poly::sym("x1") * (-1)
            + Poly::constant(Rational64::new(3, 35)) * Poly::sym("x2");

        let program = eliminate(&[("f", &poly)]);

        assert_eq!(
            function("f", &program),
            "\
fn f(x1: f64, x2: f64) -> f64 {
    let f = (3.0 / 35.0) * x2 - x1;
    f
}
"
        );
    }
}
