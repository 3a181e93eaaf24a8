use std::fmt::Write;

use unicode_tables_source::{CombiningClass, MirroringPair, NOT_REORDERED};

/// строки match-выражения для таблицы классов комбинирования.
/// порядок строк повторяет порядок исходного файла; класс по умолчанию
/// в таблицу не попадает
pub fn combining_class_arms(classes: &[CombiningClass]) -> String
{
    let mut output = String::new();

    for class in classes {
        if class.name == NOT_REORDERED {
            continue;
        }

        for range in class.ranges.iter() {
            match range.to.as_deref() {
                Some(to) => writeln!(output, "0x{}..=0x{} => {},", range.from, to, class.name),
                None => writeln!(output, "0x{} => {},", range.from, class.name),
            }
            .unwrap();
        }
    }

    output
}

/// кортежи из двух символьных литералов для таблицы зеркальных пар
pub fn mirroring_pair_tuples(pairs: &[MirroringPair]) -> String
{
    let mut output = String::new();

    for pair in pairs {
        writeln!(output, "('\\u{{{}}}', '\\u{{{}}}'),", pair.before, pair.after).unwrap();
    }

    output
}
