//! Built-in catalog content.

use parley_types::catalog::Catalog;
use parley_types::config::ServiceConfig;
use parley_types::error::ConfigError;

const DEFAULT_CATALOG_TOML: &str = include_str!("../assets/default_catalog.toml");

/// Parse the catalog bundled with the binary.
pub fn default_catalog() -> Result<Catalog, ConfigError> {
    toml::from_str(DEFAULT_CATALOG_TOML)
        .map_err(|e| ConfigError::Parse(format!("built-in catalog: {e}")))
}

/// The configured catalog override, or the built-in one.
pub fn resolve_catalog(config: &ServiceConfig) -> Result<Catalog, ConfigError> {
    match &config.catalog {
        Some(catalog) => Ok(catalog.clone()),
        None => default_catalog(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::chat::prompt::render_system_prompt;
    use parley_types::catalog::Product;

    #[test]
    fn default_catalog_parses() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.brand, "Museballer.cl");
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.products[0].name, "Cortaviento Negro/Azul");
        assert_eq!(catalog.products[1].price, "$34.990 CLP");
        assert_eq!(catalog.faq.len(), 7);
        assert!(catalog.faq.iter().any(|f| f.topic == "Garantía"));
    }

    #[test]
    fn override_wins() {
        let config = ServiceConfig {
            catalog: Some(Catalog {
                brand: "Acme".to_string(),
                products: vec![Product {
                    name: "Widget".to_string(),
                    price: "$1".to_string(),
                    description: "Small.".to_string(),
                    features: Vec::new(),
                }],
                faq: Vec::new(),
            }),
            ..ServiceConfig::default()
        };
        let catalog = resolve_catalog(&config).unwrap();
        assert_eq!(catalog.brand, "Acme");
        assert_eq!(catalog.products.len(), 1);
    }

    #[test]
    fn falls_back_to_built_in() {
        let catalog = resolve_catalog(&ServiceConfig::default()).unwrap();
        assert_eq!(catalog.brand, "Museballer.cl");
    }

    #[test]
    fn default_prompt_uses_display_labels() {
        let prompt = render_system_prompt(&default_catalog().unwrap());
        assert!(prompt.starts_with("Eres un asistente conciso y claro de Museballer.cl."));
        for label in ["- Envíos:", "- Garantía:", "- Pago:", "- Técnico:", "- Contacto:"] {
            assert!(prompt.contains(label), "missing {label}");
        }
        assert!(!prompt.contains("- garantia:"));
    }
}
