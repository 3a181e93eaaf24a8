use pretty_assertions::assert_eq;
use unicode_tables_prepare::mirroring_pair_tuples;
use unicode_tables_source::mirroring::parse;

/// сокращённый BidiMirroring.txt с симметричными парами
const FIXTURE: &str = "\
# BidiMirroring-14.0.0.txt
# Date: 2021-06-04, 21:54:22 GMT
# ================================================

0028; 0029 # LEFT PARENTHESIS
0029; 0028 # RIGHT PARENTHESIS
003C; 003E # LESS-THAN SIGN
003E; 003C # GREATER-THAN SIGN
2215; 29F5 # DIVISION SLASH
";

/// из симметричной пары остаётся первое встреченное направление
#[test]
fn symmetric_pairs_collapse_to_first_direction()
{
    let pairs = parse(FIXTURE);

    let kept: Vec<(&str, &str)> = pairs
        .iter()
        .map(|pair| (pair.before.as_str(), pair.after.as_str()))
        .collect();

    assert_eq!(
        kept,
        vec![("0028", "0029"), ("003C", "003E"), ("2215", "29F5")]
    );
}

/// кортежи печатаются в порядке принятых пар
#[test]
fn emitted_tuples()
{
    assert_eq!(
        mirroring_pair_tuples(&parse(FIXTURE)),
        "\
('\\u{0028}', '\\u{0029}'),
('\\u{003C}', '\\u{003E}'),
('\\u{2215}', '\\u{29F5}'),
"
    );
}

/// пробелы внутри строки данных не влияют на разбор
#[test]
fn spaces_are_stripped()
{
    let pairs = parse("2208 ; 220B # ELEMENT OF\n");

    assert_eq!(pairs[0].before, "2208");
    assert_eq!(pairs[0].after, "220B");
}
