use crate::enums::toggle_id::ToggleId;
use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};

/// Как искать элемент на странице
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum ElementLookup {
    /// `document.getElementById`
    Id(String),
    /// `document.querySelector`
    Selector(String),
}

impl ElementLookup {
    pub fn id(id: impl Into<String>) -> Self {
        ElementLookup::Id(id.into())
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        ElementLookup::Selector(selector.into())
    }

    /// CSS-селектор для того же элемента
    pub fn as_selector(&self) -> String {
        match self {
            ElementLookup::Id(id) => format!("#{id}"),
            ElementLookup::Selector(selector) => selector.clone(),
        }
    }
}

impl std::fmt::Display for ElementLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_selector())
    }
}

/// Кнопка, которая создаётся, если её нет в разметке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    pub id: String,
    pub class_name: String,
    pub title: String,
    pub label: String,
}

/// Откуда берётся кнопка переключателя
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum CreationPolicy {
    /// Кнопка должна быть в разметке, иначе переключатель пропускается
    #[default]
    Existing,
    /// Создать кнопку, если `container` есть на странице, а кнопки ещё нет
    CreateWhenPresent {
        container: ElementLookup,
        button: ButtonSpec,
    },
}

/// Один переключатель: какая кнопка его вызывает и какой класс `<body>` он меняет
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleBinding {
    pub toggle: ToggleId,
    pub trigger: ElementLookup,
    pub target_class: String,
    #[serde(default)]
    pub creation: CreationPolicy,
}

impl ToggleBinding {
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_class_name(&self.target_class)
            .map_err(|err| err.context(format!("toggle '{}': target_class", self.toggle)))?;

        match &self.trigger {
            ElementLookup::Id(id) => {
                ensure!(!id.trim().is_empty(), "toggle '{}': trigger id is empty", self.toggle)
            }
            ElementLookup::Selector(selector) => {
                ensure!(
                    !selector.trim().is_empty(),
                    "toggle '{}': trigger selector is empty",
                    self.toggle
                )
            }
        }

        if let CreationPolicy::CreateWhenPresent { button, .. } = &self.creation {
            ensure!(
                !button.id.trim().is_empty(),
                "toggle '{}': button id is empty",
                self.toggle
            );
            validate_class_name(&button.class_name)
                .map_err(|err| err.context(format!("toggle '{}': button class", self.toggle)))?;
            // Созданная кнопка должна находиться по trigger
            if self.trigger != ElementLookup::Id(button.id.clone()) {
                bail!(
                    "toggle '{}': trigger {} does not match created button #{}",
                    self.toggle,
                    self.trigger,
                    button.id
                );
            }
        }

        Ok(())
    }
}

/// `classList.toggle` не принимает пустые токены и токены с пробелами
fn validate_class_name(class: &str) -> anyhow::Result<()> {
    ensure!(!class.is_empty(), "class name is empty");
    ensure!(
        !class.chars().any(char::is_whitespace),
        "class name '{class}' contains whitespace"
    );
    Ok(())
}
