use bezier_moments::{cse, moment_integrals, rust_out, xx_integral};

/// вывод замкнутых формул знаковой площади и первых моментов сегмента
/// кубической кривой Безье с первой контрольной точкой в начале координат
fn main()
{
    env_logger::init();

    let (a, xm, ym) = moment_integrals();

    let program = cse::eliminate(&[("a", &a), ("xm", &xm), ("ym", &ym)]);

    log::info!("подстановок после исключения общих подвыражений: {}", program.bindings.len());

    print!("{}", rust_out::function("moment_integrals", &program));

    let xx = xx_integral();
    let program = cse::eliminate(&[("xx", &xx)]);

    print!("{}", rust_out::function("xx", &program));
}
