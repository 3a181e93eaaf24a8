/// префикс комментария, объявляющего очередной класс комбинирования
const CLASS_PREFIX: &str = "# Canonical_Combining_Class=";

/// класс по умолчанию - кодпоинты, не участвующие в переупорядочивании;
/// в итоговую таблицу он не попадает
pub const NOT_REORDERED: &str = "NotReordered";

/// кодпоинт или включительный диапазон кодпоинтов. шестнадцатеричные токены
/// храним как текст: для вывода числовое представление не требуется,
/// а преобразование потеряло бы ведущие нули
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRange
{
    pub from: String,
    pub to: Option<String>,
}

impl CodepointRange
{
    /// разбор токена: "0300..036F" - диапазон, "0315" - одиночный кодпоинт
    pub fn parse(token: &str) -> Self
    {
        match token.split_once("..") {
            Some((from, to)) => Self {
                from: from.to_owned(),
                to: Some(to.to_owned()),
            },
            None => Self {
                from: token.to_owned(),
                to: None,
            },
        }
    }
}

/// класс комбинирования и принадлежащие ему диапазоны в порядке следования в файле
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombiningClass
{
    pub name: String,
    pub ranges: Vec<CodepointRange>,
}

/// состояние разбора: запечатанные классы и текущий открытый класс.
/// состояние передаётся явно через свёртку по строкам - так нельзя забыть
/// запечатать последний класс в конце файла
#[derive(Default)]
struct Parser
{
    sealed: Vec<CombiningClass>,
    current: Option<CombiningClass>,
}

impl Parser
{
    /// обработка одной строки файла
    fn line(mut self, line: &str) -> Self
    {
        let line = line.trim();

        if line.is_empty() {
            return self;
        }

        if let Some(name) = line.strip_prefix(CLASS_PREFIX) {
            self.seal();
            self.current = Some(CombiningClass {
                name: name.replace('_', ""),
                ranges: vec![],
            });

            return self;
        }

        if line.starts_with('#') {
            return self;
        }

        let (token, _) = line
            .split_once(';')
            .unwrap_or_else(|| panic!("строка данных без разделителя: {:?}", line));

        let range = CodepointRange::parse(token.trim());

        match self.current.as_mut() {
            Some(class) => class.ranges.push(range),
            None => panic!("строка данных до первого объявления класса: {:?}", line),
        }

        self
    }

    /// перенести текущий класс в список запечатанных
    fn seal(&mut self)
    {
        if let Some(class) = self.current.take() {
            self.sealed.push(class);
        }
    }

    /// конец файла: последний класс запечатывается здесь
    fn finish(mut self) -> Vec<CombiningClass>
    {
        self.seal();
        self.sealed
    }
}

/// разбор DerivedCombiningClass.txt: классы в порядке появления в файле,
/// внутри класса - диапазоны в исходном порядке, без сортировки и слияния
pub fn parse(text: &str) -> Vec<CombiningClass>
{
    text.lines().fold(Parser::default(), Parser::line).finish()
}
