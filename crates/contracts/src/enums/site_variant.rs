use crate::enums::toggle_id::ToggleId;
use crate::shared::sidebar::binding::{ButtonSpec, CreationPolicy, ElementLookup, ToggleBinding};
use serde::{Deserialize, Serialize};

const NAV_BUTTON_ID: &str = "toggle-nav";
const TOC_BUTTON_ID: &str = "toggle-toc";
const TOC_GLYPH: &str = "☰";

/// Варианты оформления сайта документации.
///
/// Оба варианта делают одно и то же и отличаются только идентификаторами
/// и именами классов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteVariant {
    /// Основная тема (`ui/`)
    #[default]
    Ui,
    /// Экспериментальная тема (`lab`)
    Lab,
}

impl SiteVariant {
    pub fn code(&self) -> &'static str {
        match self {
            SiteVariant::Ui => "ui",
            SiteVariant::Lab => "lab",
        }
    }

    pub fn all() -> [SiteVariant; 2] {
        [SiteVariant::Ui, SiteVariant::Lab]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ui" => Some(SiteVariant::Ui),
            "lab" => Some(SiteVariant::Lab),
            _ => None,
        }
    }

    /// Класс на `<body>`, который сворачивает указанный сайдбар
    pub fn collapsed_class(&self, toggle: ToggleId) -> &'static str {
        match (self, toggle) {
            (SiteVariant::Ui, ToggleId::Nav) => "collapsed-nav",
            (SiteVariant::Ui, ToggleId::Toc) => "collapsed-toc",
            (SiteVariant::Lab, ToggleId::Nav) => "lab--nav-collapsed",
            (SiteVariant::Lab, ToggleId::Toc) => "lab--toc-collapsed",
        }
    }

    /// Где на странице искать оглавление
    pub fn toc_container(&self) -> ElementLookup {
        match self {
            SiteVariant::Ui => ElementLookup::id("page-toc"),
            SiteVariant::Lab => ElementLookup::selector("aside.toc.sidebar"),
        }
    }

    /// Плавающая кнопка для оглавления
    pub fn toc_button(&self) -> ButtonSpec {
        let (class_name, title) = match self {
            SiteVariant::Ui => ("toc-toggle", "Toggle page contents"),
            SiteVariant::Lab => ("lab-toc-toggle", "Toggle contents"),
        };
        ButtonSpec {
            id: TOC_BUTTON_ID.to_string(),
            class_name: class_name.to_string(),
            title: title.to_string(),
            label: TOC_GLYPH.to_string(),
        }
    }

    /// Привязки для обоих сайдбаров: сначала навигация, затем оглавление
    pub fn bindings(&self) -> Vec<ToggleBinding> {
        vec![
            ToggleBinding {
                toggle: ToggleId::Nav,
                trigger: ElementLookup::id(NAV_BUTTON_ID),
                target_class: self.collapsed_class(ToggleId::Nav).to_string(),
                creation: CreationPolicy::Existing,
            },
            ToggleBinding {
                toggle: ToggleId::Toc,
                trigger: ElementLookup::id(TOC_BUTTON_ID),
                target_class: self.collapsed_class(ToggleId::Toc).to_string(),
                creation: CreationPolicy::CreateWhenPresent {
                    container: self.toc_container(),
                    button: self.toc_button(),
                },
            },
        ]
    }
}

impl std::fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
