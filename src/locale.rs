//! Human-facing labels used by the text-oriented writers.
//!
//! JSON values and the PDF body are language-independent and do not go through here.

use clap::ValueEnum;

/// Language of the labels written into a report.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "ru")]
    Russian,
}

/// Fixed strings for one [`Language`].
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub folder: &'static str,
    pub file: &'static str,
    pub columns: [&'static str; 4],
    pub type_field: &'static str,
    pub size_field: &'static str,
    pub bytes_unit: &'static str,
    pub modified_field: &'static str,
    pub heading: &'static str,
}

const ENGLISH: Labels = Labels {
    folder: "Folder",
    file: "File",
    columns: ["Type", "Name", "Size/Type", "Modified"],
    type_field: "Type",
    size_field: "Size",
    bytes_unit: "bytes",
    modified_field: "Modified",
    heading: "File/Folder Structure Report",
};

const RUSSIAN: Labels = Labels {
    folder: "Папка",
    file: "Файл",
    columns: ["Тип", "Имя", "Размер/Тип", "Дата изменения"],
    type_field: "Тип",
    size_field: "Размер",
    bytes_unit: "байт",
    modified_field: "Дата изменения",
    heading: "Отчёт о структуре файлов и папок",
};

impl Language {
    /// Returns the label set for this language.
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Russian => &RUSSIAN,
        }
    }
}

impl Labels {
    /// Heading reduced to a legal worksheet name (no `\ / ? * [ ] :`, at most 31 chars).
    pub fn sheet_name(&self) -> String {
        self.heading
            .chars()
            .map(|c| match c {
                '\\' | '/' | '?' | '*' | '[' | ']' | ':' => '-',
                other => other,
            })
            .take(31)
            .collect()
    }
}
