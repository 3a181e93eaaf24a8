pub mod cse;
pub mod poly;
pub mod rust_out;

use poly::Poly;

/// координатный многочлен кубической кривой Безье с первой контрольной
/// точкой в начале координат - слагаемое при ней обнуляется и выпадает
fn coordinate(c1: &str, c2: &str, c3: &str) -> Poly
{
    let t = Poly::sym("t");
    let one_minus_t = Poly::int(1) - t.clone();

    let first = Poly::sym(c1) * t.clone() * one_minus_t.pow(2) * 3;
    let second = Poly::sym(c2) * t.pow(2) * one_minus_t * 3;
    let third = Poly::sym(c3) * t.pow(3);

    first + second + third
}

/// знаковая площадь и первые моменты сегмента кривой, умноженные на 20, 840
/// и 420 - с этими множителями все коэффициенты становятся целыми
pub fn moment_integrals() -> (Poly, Poly, Poly)
{
    let x = coordinate("x1", "x2", "x3");
    let y = coordinate("y1", "y2", "y3");
    let dx = x.diff("t");

    let a = (y.clone() * dx.clone()).integrate_01("t") * 20;
    let xm = (x * y.clone() * dx.clone()).integrate_01("t") * 840;
    let ym = (y.clone() * y * dx).integrate_01("t") * 420;

    (a, xm, ym)
}

/// вспомогательный интеграл ∫ x·x′ dt, печатается без масштабирования
pub fn xx_integral() -> Poly
{
    let x = coordinate("x1", "x2", "x3");

    (x.clone() * x.diff("t")).integrate_01("t")
}
