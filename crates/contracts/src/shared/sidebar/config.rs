use crate::enums::site_variant::SiteVariant;
use crate::shared::sidebar::binding::ToggleBinding;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Конфигурация по умолчанию, встроенная в бандл
pub const DEFAULT_CONFIG: &str = r#"{
    "variant": "ui",
    "log_level": "info"
}"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    #[serde(default)]
    pub variant: SiteVariant,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Если задано, заменяет привязки варианта
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<Vec<ToggleBinding>>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            variant: SiteVariant::default(),
            log_level: default_log_level(),
            bindings: None,
        }
    }
}

impl SidebarConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: SidebarConfig =
            serde_json::from_str(raw).context("Failed to parse sidebar toggle config")?;
        config.validate()?;
        Ok(config)
    }

    /// Определить конфигурацию по данным страницы
    ///
    /// Порядок поиска:
    /// 1. Встроенный JSON-элемент конфигурации
    /// 2. Атрибут `data-sidebar-variant` на `<body>`
    /// 3. Конфигурация по умолчанию
    pub fn resolve(raw_json: Option<&str>, variant_attr: Option<&str>) -> anyhow::Result<Self> {
        if let Some(raw) = raw_json.filter(|raw| !raw.trim().is_empty()) {
            return Self::from_json(raw);
        }

        let mut config = Self::from_json(DEFAULT_CONFIG)?;
        if let Some(code) = variant_attr {
            config.variant = SiteVariant::from_code(code)
                .with_context(|| format!("Unknown sidebar variant '{code}'"))?;
        }
        Ok(config)
    }

    pub fn resolved_bindings(&self) -> Vec<ToggleBinding> {
        self.bindings
            .clone()
            .unwrap_or_else(|| self.variant.bindings())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let bindings = self.resolved_bindings();
        let mut seen = HashSet::new();
        let mut triggers = HashSet::new();
        for binding in &bindings {
            ensure!(
                seen.insert(binding.toggle),
                "toggle '{}' is bound more than once",
                binding.toggle
            );
            // `Id("x")` и `Selector("#x")` указывают на одну кнопку
            ensure!(
                triggers.insert(binding.trigger.as_selector()),
                "toggle '{}': trigger {} is shared with another toggle",
                binding.toggle,
                binding.trigger
            );
            binding.validate()?;
        }
        Ok(())
    }
}
