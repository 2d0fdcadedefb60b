use serde::{Deserialize, Serialize};

use crate::data::model::SpectrumType;

// ---------------------------------------------------------------------------
// Interface languages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Kk,
    Ru,
}

impl Language {
    /// Menu order.
    pub const ALL: [Language; 3] = [Language::En, Language::Kk, Language::Ru];

    /// Code stored in the configuration file.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Kk => "kk",
            Language::Ru => "ru",
        }
    }

    /// Name of the language in itself, as shown in the language menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Kk => "Қазақша",
            Language::Ru => "Русский",
        }
    }

    fn column(self) -> usize {
        match self {
            Language::En => 0,
            Language::Kk => 1,
            Language::Ru => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Message catalogue
// ---------------------------------------------------------------------------

/// Every user-visible string of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    File,
    Edit,
    Help,
    Open,
    SavePlotPng,
    ExportCsv,
    Language,
    Settings,
    About,
    SelectDspFile,
    FindPeaks,
    RemovePeak,
    Wavelength,
    Absorbance,
    MolarConcentration,
    MolPerLitre,
    CalculateExtinction,
    Copy,
    EnterMolarConcentration,
    Uv,
    Visible,
    Nm,
    Step,
    UvVisBorder,
    DefaultConcentrations,
    Reset,
    Ok,
    CannotReadFile,
    InvalidSetting,
    NoSpectrum,
    AboutText,
}

impl Msg {
    /// `[English, Kazakh, Russian]`.
    fn entries(self) -> [&'static str; 3] {
        match self {
            Msg::File => ["File", "Файл", "Файл"],
            Msg::Edit => ["Edit", "Өңдеу", "Правка"],
            Msg::Help => ["Help", "Анықтама", "Справка"],
            Msg::Open => ["Open…", "Ашу…", "Открыть…"],
            Msg::SavePlotPng => [
                "Save plot as PNG…",
                "Графикті PNG ретінде сақтау…",
                "Сохранить график как PNG…",
            ],
            Msg::ExportCsv => [
                "Export data as CSV…",
                "Деректерді CSV-ге экспорттау…",
                "Экспорт данных в CSV…",
            ],
            Msg::Language => ["Language", "Тіл", "Язык"],
            Msg::Settings => ["Settings", "Баптаулар", "Настройки"],
            Msg::About => ["About", "Бағдарлама туралы", "О программе"],
            Msg::SelectDspFile => [
                "Select a .dsp file",
                ".dsp файлын таңдаңыз",
                "Выберите файл .dsp",
            ],
            Msg::FindPeaks => ["Find peaks", "Шыңдарды табу", "Найти пики"],
            Msg::RemovePeak => ["Remove peak", "Шыңды жою", "Удалить пик"],
            Msg::Wavelength => ["Wavelength", "Толқын ұзындығы", "Длина волны"],
            Msg::Absorbance => ["Absorbance", "Оптикалық тығыздық", "Оптическая плотность"],
            Msg::MolarConcentration => [
                "Molar concentration:",
                "Молярлық концентрация:",
                "Молярная концентрация:",
            ],
            Msg::MolPerLitre => ["mol/L", "моль/л", "моль/л"],
            Msg::CalculateExtinction => [
                "Calculate extinction",
                "Экстинкцияны есептеу",
                "Рассчитать экстинкцию",
            ],
            Msg::Copy => ["Copy", "Көшіру", "Копировать"],
            Msg::EnterMolarConcentration => [
                "Enter molar concentration!",
                "Молярлық концентрацияны енгізіңіз!",
                "Введите молярную концентрацию!",
            ],
            Msg::Uv => ["UV", "УК", "УФ"],
            Msg::Visible => ["visible", "көрінетін", "видимый"],
            Msg::Nm => ["nm", "нм", "нм"],
            Msg::Step => ["step", "қадам", "шаг"],
            Msg::UvVisBorder => [
                "UV-vis border",
                "УК және көрінетін аймақ шекарасы",
                "Граница УФ и видимой области",
            ],
            Msg::DefaultConcentrations => [
                "Default sample concentrations:",
                "Үлгілердің әдепкі концентрациялары:",
                "Концентрации образцов по умолчанию:",
            ],
            Msg::Reset => ["Reset", "Қалпына келтіру", "Сбросить"],
            Msg::Ok => ["OK", "OK", "OK"],
            Msg::CannotReadFile => [
                "File cannot be read",
                "Файлды оқу мүмкін емес",
                "Не удалось прочитать файл",
            ],
            Msg::InvalidSetting => [
                "Invalid setting",
                "Жарамсыз баптау",
                "Недопустимое значение настройки",
            ],
            Msg::NoSpectrum => [
                "Open a .dsp file to view the spectrum  (File → Open…)",
                "Спектрді көру үшін .dsp файлын ашыңыз  (Файл → Ашу…)",
                "Откройте файл .dsp для просмотра спектра  (Файл → Открыть…)",
            ],
            Msg::AboutText => [
                "Viewer for UV-vis spectral data files generated by VISIONlite Scan",
                "VISIONlite Scan жасаған УК және көрінетін спектр файлдарын қарау бағдарламасы",
                "Просмотрщик файлов УФ- и видимых спектров, созданных VISIONlite Scan",
            ],
        }
    }

    pub fn text(self, lang: Language) -> &'static str {
        self.entries()[lang.column()]
    }
}

/// Shorthand for [`Msg::text`].
pub fn tr(lang: Language, msg: Msg) -> &'static str {
    msg.text(lang)
}

/// Localised name of a spectrum type.
pub fn spectrum_type_label(lang: Language, spectrum_type: SpectrumType) -> &'static str {
    match spectrum_type {
        SpectrumType::Uv => tr(lang, Msg::Uv),
        SpectrumType::Visible => tr(lang, Msg::Visible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_serde() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
        }
    }

    #[test]
    fn lookups_per_language() {
        assert_eq!(tr(Language::En, Msg::Nm), "nm");
        assert_eq!(tr(Language::Ru, Msg::Nm), "нм");
        assert_eq!(spectrum_type_label(Language::Kk, SpectrumType::Uv), "УК");
    }
}
