use std::fs;
use std::path::Path;

#[macro_use]
extern crate lazy_static;

pub use combining_classes::{CodepointRange, CombiningClass, NOT_REORDERED};
pub use fetch::{ensure_file, FetchError};
pub use mirroring::MirroringPair;

pub mod combining_classes;
pub mod fetch;
pub mod mirroring;

/// источник данных о классах комбинирования
const CCC_URL: &str =
    "https://www.unicode.org/Public/14.0.0/ucd/extracted/DerivedCombiningClass.txt";
const CCC_FILE: &str = "DerivedCombiningClass.txt";

/// источник данных о зеркальных парах
const MIRRORING_URL: &str = "https://www.unicode.org/Public/UNIDATA/BidiMirroring.txt";
const MIRRORING_FILE: &str = "BidiMirroring.txt";

lazy_static! {
    /// классы комбинирования из DerivedCombiningClass.txt, в порядке появления в файле
    pub static ref COMBINING_CLASSES: Vec<CombiningClass> = combining_classes();
    /// зеркальные пары из BidiMirroring.txt, симметричные пары схлопнуты
    pub static ref MIRRORING_PAIRS: Vec<MirroringPair> = mirroring_pairs();
}

/// скачиваем (при необходимости) и разбираем DerivedCombiningClass.txt
fn combining_classes() -> Vec<CombiningClass>
{
    combining_classes::parse(&read_or_fetch(CCC_FILE, CCC_URL))
}

/// скачиваем (при необходимости) и разбираем BidiMirroring.txt
fn mirroring_pairs() -> Vec<MirroringPair>
{
    mirroring::parse(&read_or_fetch(MIRRORING_FILE, MIRRORING_URL))
}

/// локальная копия справочного файла; единожды скачанный файл считается неизменяемым
fn read_or_fetch(file: &str, url: &str) -> String
{
    let path = Path::new(file);

    fetch::ensure_file(path, url).expect("не удалось получить справочный файл");

    fs::read_to_string(path).expect("не удалось прочитать справочный файл")
}
