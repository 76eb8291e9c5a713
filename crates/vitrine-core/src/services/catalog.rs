use serde::Serialize;

/// A service listed on the site and selectable in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

const SERVICES: [ServiceOffering; 11] = [
    ServiceOffering {
        id: "sites-profissionais",
        title: "Sites Profissionais",
        icon: "fas fa-globe",
    },
    ServiceOffering {
        id: "e-commerce",
        title: "E-commerce",
        icon: "fas fa-shopping-cart",
    },
    ServiceOffering {
        id: "landing-pages",
        title: "Landing Pages",
        icon: "fas fa-rocket",
    },
    ServiceOffering {
        id: "identidade-visual",
        title: "Identidade Visual",
        icon: "fas fa-paint-brush",
    },
    ServiceOffering {
        id: "criativos-ia",
        title: "Criativos com IA",
        icon: "fas fa-wand-magic-sparkles",
    },
    ServiceOffering {
        id: "trafego-pago",
        title: "Tráfego Pago",
        icon: "fas fa-chart-line",
    },
    ServiceOffering {
        id: "automacao",
        title: "Automação",
        icon: "fas fa-robot",
    },
    ServiceOffering {
        id: "paginas-vendas",
        title: "Páginas de Vendas",
        icon: "fas fa-file-invoice-dollar",
    },
    ServiceOffering {
        id: "sistemas-personalizados",
        title: "Sistemas Personalizados",
        icon: "fas fa-cogs",
    },
    ServiceOffering {
        id: "consultoria-digital",
        title: "Consultoria Digital",
        icon: "fas fa-lightbulb",
    },
    ServiceOffering {
        id: "presenca-online",
        title: "Presença Online",
        icon: "fas fa-share-nodes",
    },
];

/// All services, in display order
pub fn catalog() -> &'static [ServiceOffering] {
    &SERVICES
}

/// Look up a service by id
pub fn find(id: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_eleven_complete_entries() {
        let services = catalog();
        assert_eq!(services.len(), 11);
        for s in services {
            assert!(!s.id.is_empty());
            assert!(!s.title.is_empty());
            assert!(!s.icon.is_empty());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("automacao").map(|s| s.title), Some("Automação"));
        assert!(find("unknown").is_none());
    }
}
