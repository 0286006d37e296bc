use serde::{Deserialize, Serialize};

/// Какой сайдбар переключается
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleId {
    /// Левая навигация по компонентам
    Nav,
    /// Правое оглавление страницы
    Toc,
}

impl ToggleId {
    pub fn code(&self) -> &'static str {
        match self {
            ToggleId::Nav => "nav",
            ToggleId::Toc => "toc",
        }
    }

    pub fn all() -> [ToggleId; 2] {
        [ToggleId::Nav, ToggleId::Toc]
    }
}

impl std::fmt::Display for ToggleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
