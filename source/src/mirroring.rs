/// пара зеркальных кодпоинтов; шестнадцатеричные токены как в исходном файле
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroringPair
{
    pub before: String,
    pub after: String,
}

/// разбор BidiMirroring.txt со схлопыванием симметричных пар: пара
/// принимается, только если её левый кодпоинт ещё не встречался справа
/// в уже принятых парах. из (0028,0029) и (0029,0028) остаётся первая
pub fn parse(text: &str) -> Vec<MirroringPair>
{
    let mut pairs: Vec<MirroringPair> = vec![];

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // у строк данных всегда есть хвостовой комментарий с именем символа
        let (data, _) = line
            .split_once('#')
            .unwrap_or_else(|| panic!("строка данных без комментария: {:?}", line));

        let data = data.replace(' ', "");

        let (before, after) = data
            .split_once(';')
            .unwrap_or_else(|| panic!("строка данных без разделителя: {:?}", line));

        if pairs.iter().any(|pair| pair.after == before) {
            continue;
        }

        pairs.push(MirroringPair {
            before: before.to_owned(),
            after: after.to_owned(),
        });
    }

    pairs
}
