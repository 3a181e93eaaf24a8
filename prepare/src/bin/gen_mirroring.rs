use unicode_tables_prepare::mirroring_pair_tuples;
use unicode_tables_source::MIRRORING_PAIRS;

/// генератор таблицы зеркальных пар: кортежи символьных литералов
/// печатаются в stdout и вставляются в целевой проект вручную
fn main()
{
    env_logger::init();

    let pairs = &*MIRRORING_PAIRS;

    log::info!("зеркальных пар после схлопывания: {}", pairs.len());

    print!("{}", mirroring_pair_tuples(pairs));
}
