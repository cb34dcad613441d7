//! Business-impact estimation
//!
//! Pure lookup by category. Four categories carry tailored assessments;
//! everything else gets a uniform low-impact default. No computation, no
//! side effects.

use crate::locale::Locale;
use crate::types::{BusinessImpact, ImpactLevel, ProblemCategory};

/// Estimate the qualitative business impact for a problem category
pub fn estimate_impact(category: ProblemCategory, locale: Locale) -> BusinessImpact {
    match category {
        ProblemCategory::Security => BusinessImpact {
            description: match locale {
                Locale::Es => {
                    "Riesgo de acceso no autorizado o fuga de datos".to_string()
                }
                Locale::En => "Risk of unauthorized access or data exposure".to_string(),
            },
            productivity_impact: ImpactLevel::Medium,
            security_risk: ImpactLevel::Critical,
            system_stability_risk: ImpactLevel::High,
            estimated_downtime: None,
        },
        ProblemCategory::Storage => BusinessImpact {
            description: match locale {
                Locale::Es => {
                    "Los servicios pueden detenerse si el disco se llena".to_string()
                }
                Locale::En => "Services may stop if the disk fills up".to_string(),
            },
            productivity_impact: ImpactLevel::High,
            security_risk: ImpactLevel::Low,
            system_stability_risk: ImpactLevel::Critical,
            estimated_downtime: Some(match locale {
                Locale::Es => "Posible interrupción si no se actúa".to_string(),
                Locale::En => "Possible outage if left unattended".to_string(),
            }),
        },
        ProblemCategory::Performance => BusinessImpact {
            description: match locale {
                Locale::Es => "Respuesta lenta para los usuarios".to_string(),
                Locale::En => "Slow response times for users".to_string(),
            },
            productivity_impact: ImpactLevel::High,
            security_risk: ImpactLevel::None,
            system_stability_risk: ImpactLevel::Medium,
            estimated_downtime: None,
        },
        ProblemCategory::Updates => BusinessImpact {
            description: match locale {
                Locale::Es => {
                    "Actualizaciones pendientes con correcciones de seguridad".to_string()
                }
                Locale::En => "Pending updates include security fixes".to_string(),
            },
            productivity_impact: ImpactLevel::Low,
            security_risk: ImpactLevel::Medium,
            system_stability_risk: ImpactLevel::Low,
            estimated_downtime: None,
        },
        // Uniform low-impact default for every other category
        _ => BusinessImpact {
            description: match locale {
                Locale::Es => "Impacto limitado en la operación diaria".to_string(),
                Locale::En => "Limited impact on day-to-day operation".to_string(),
            },
            productivity_impact: ImpactLevel::Low,
            security_risk: ImpactLevel::Low,
            system_stability_risk: ImpactLevel::Low,
            estimated_downtime: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_impact_is_critical_risk() {
        let impact = estimate_impact(ProblemCategory::Security, Locale::En);
        assert_eq!(impact.security_risk, ImpactLevel::Critical);
        assert_eq!(impact.system_stability_risk, ImpactLevel::High);
    }

    #[test]
    fn test_storage_impact_threatens_stability() {
        let impact = estimate_impact(ProblemCategory::Storage, Locale::Es);
        assert_eq!(impact.system_stability_risk, ImpactLevel::Critical);
        assert!(impact.estimated_downtime.is_some());
    }

    #[test]
    fn test_unlisted_categories_get_uniform_default() {
        for category in [
            ProblemCategory::Applications,
            ProblemCategory::Firewall,
            ProblemCategory::Network,
            ProblemCategory::System,
        ] {
            let impact = estimate_impact(category, Locale::En);
            assert_eq!(impact.productivity_impact, ImpactLevel::Low);
            assert_eq!(impact.security_risk, ImpactLevel::Low);
            assert_eq!(impact.system_stability_risk, ImpactLevel::Low);
            assert!(impact.estimated_downtime.is_none());
        }
    }

    #[test]
    fn test_descriptions_are_localized() {
        let es = estimate_impact(ProblemCategory::Performance, Locale::Es);
        let en = estimate_impact(ProblemCategory::Performance, Locale::En);
        assert_ne!(es.description, en.description);
    }
}
