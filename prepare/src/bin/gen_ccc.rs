use unicode_tables_prepare::combining_class_arms;
use unicode_tables_source::COMBINING_CLASSES;

/// генератор таблицы классов комбинирования: строки match-выражения
/// печатаются в stdout и вставляются в целевой проект вручную
fn main()
{
    env_logger::init();

    let classes = &*COMBINING_CLASSES;

    log::info!("классов комбинирования: {}", classes.len());

    print!("{}", combining_class_arms(classes));
}
