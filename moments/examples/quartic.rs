use num_complex::Complex64;

/// коэффициенты нормированной квартики по её корням (формулы Виета);
/// печатаются вещественные части
fn vieta(x1: Complex64, x2: Complex64, x3: Complex64, x4: Complex64, case: u32)
{
    let a = -(x1 + x2 + x3 + x4);
    let b = x1 * (x2 + x3) + x2 * (x3 + x4) + x4 * (x1 + x3);
    let c = -x1 * x2 * (x3 + x4) - x3 * x4 * (x1 + x2);
    let d = x1 * x2 * x3 * x4;

    println!("case {}: {}, {}, {}, {}", case, a.re, b.re, c.re, d.re);
}

/// три контрольных набора корней с большим разбросом порядков -
/// проверка устойчивости решателя квартики на известных коэффициентах
fn main()
{
    let real = |value: f64| Complex64::new(value, 0.0);

    vieta(
        real(1e7),
        real(-1e6),
        Complex64::new(1.0, 1.0),
        Complex64::new(1.0, -1.0),
        6,
    );
    vieta(
        real(-7.0),
        real(-4.0),
        Complex64::new(-1e6, 1e5),
        Complex64::new(-1e6, -1e5),
        7,
    );
    vieta(
        real(1e8),
        real(11.0),
        Complex64::new(1e3, 1.0),
        Complex64::new(1e3, -1.0),
        8,
    );
}
