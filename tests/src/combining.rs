use pretty_assertions::assert_eq;
use unicode_tables_prepare::combining_class_arms;
use unicode_tables_source::combining_classes::parse;

/// сокращённый DerivedCombiningClass.txt: шапка, класс по умолчанию,
/// диапазоны и одиночные кодпоинты
const FIXTURE: &str = "\
# DerivedCombiningClass-14.0.0.txt
# Date: 2021-06-04, 21:54:22 GMT
# ================================================

# Canonical_Combining_Class=Not_Reordered

0000..001F    ; 0 # Cc  [32] <control-0000>..<control-001F>
0020          ; 0 # Zs       SPACE

# Canonical_Combining_Class=Overlay

0334..0338    ; 1 # Mn   [5] COMBINING TILDE OVERLAY..COMBINING LONG SOLIDUS OVERLAY

# Canonical_Combining_Class=Above

0300..0314    ; 230 # Mn  [21] COMBINING GRAVE ACCENT..COMBINING REVERSED COMMA ABOVE
0363..036F    ; 230 # Mn  [13] COMBINING LATIN SMALL LETTER A..COMBINING LATIN SMALL LETTER X

# Canonical_Combining_Class=Iota_Subscript

0345          ; 240 # Mn       COMBINING GREEK YPOGEGRAMMENI

# EOF
";

/// классы идут в порядке появления в файле, ни один не теряется
#[test]
fn classes_follow_file_order()
{
    let classes = parse(FIXTURE);

    let names: Vec<&str> = classes.iter().map(|class| class.name.as_str()).collect();

    assert_eq!(names, vec!["NotReordered", "Overlay", "Above", "IotaSubscript"]);
}

/// диапазоны внутри класса сохраняют исходный порядок
#[test]
fn ranges_keep_file_order()
{
    let classes = parse(FIXTURE);
    let above = classes.iter().find(|class| class.name == "Above").unwrap();

    let ranges: Vec<&str> = above.ranges.iter().map(|range| range.from.as_str()).collect();

    assert_eq!(ranges, vec!["0300", "0363"]);
}

/// последний класс файла не теряется при конце ввода
#[test]
fn final_class_is_flushed()
{
    let input = "\
# Canonical_Combining_Class=Virama

094D          ; 9 # Mn       DEVANAGARI SIGN VIRAMA";

    let classes = parse(input);

    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].name, "Virama");
    assert_eq!(classes[0].ranges[0].from, "094D");
}

/// класс по умолчанию не попадает в таблицу, остальные строки - в порядке файла
#[test]
fn emitted_arms()
{
    assert_eq!(
        combining_class_arms(&parse(FIXTURE)),
        "\
0x0334..=0x0338 => Overlay,
0x0300..=0x0314 => Above,
0x0363..=0x036F => Above,
0x0345 => IotaSubscript,
"
    );
}

/// два объявления по одной строке данных - ровно две строки вывода,
/// каждая отнесена к своему классу
#[test]
fn two_classes_one_line_each()
{
    let input = "\
# Canonical_Combining_Class=Below

0316          ; 220 # Mn       COMBINING GRAVE ACCENT BELOW

# Canonical_Combining_Class=Above

0300          ; 230 # Mn       COMBINING GRAVE ACCENT
";

    assert_eq!(
        combining_class_arms(&parse(input)),
        "0x0316 => Below,\n0x0300 => Above,\n"
    );
}

/// повторный разбор того же файла даёт байт-в-байт тот же вывод
#[test]
fn reparse_is_deterministic()
{
    assert_eq!(
        combining_class_arms(&parse(FIXTURE)),
        combining_class_arms(&parse(FIXTURE))
    );
}
