//! Localized problem text resolution
//!
//! Titles and descriptions are resolved from per-(category, kind) template
//! dictionaries for each supported locale. Missing templates are not
//! errors: unmatched issues fall back to a generic localized
//! "problem detected" message, optionally extended with the raw technical
//! detail from the source depending on the configured technical level.

use crate::locale::{Locale, TriageConfig};
use crate::report::RawIssue;
use crate::types::ProblemCategory;

/// Localized display label for a category
pub fn category_label(category: ProblemCategory, locale: Locale) -> &'static str {
    match (category, locale) {
        (ProblemCategory::Storage, Locale::Es) => "almacenamiento",
        (ProblemCategory::Storage, Locale::En) => "storage",
        (ProblemCategory::Security, Locale::Es) => "seguridad",
        (ProblemCategory::Security, Locale::En) => "security",
        (ProblemCategory::Performance, Locale::Es) => "rendimiento",
        (ProblemCategory::Performance, Locale::En) => "performance",
        (ProblemCategory::Updates, Locale::Es) => "actualizaciones",
        (ProblemCategory::Updates, Locale::En) => "updates",
        (ProblemCategory::Applications, Locale::Es) => "aplicaciones",
        (ProblemCategory::Applications, Locale::En) => "applications",
        (ProblemCategory::Firewall, Locale::Es) => "cortafuegos",
        (ProblemCategory::Firewall, Locale::En) => "firewall",
        (ProblemCategory::Network, Locale::Es) => "red",
        (ProblemCategory::Network, Locale::En) => "network",
        (ProblemCategory::System, Locale::Es) => "sistema",
        (ProblemCategory::System, Locale::En) => "system",
    }
}

/// Specific title template for a known (category, kind) pair
fn specific_title(category: ProblemCategory, kind: &str, locale: Locale) -> Option<&'static str> {
    let title = match (category, kind, locale) {
        (ProblemCategory::Storage, "disk_full", Locale::Es) => "Disco casi lleno",
        (ProblemCategory::Storage, "disk_full", Locale::En) => "Disk almost full",
        (ProblemCategory::Security, "port_open", Locale::Es) => "Puerto expuesto a internet",
        (ProblemCategory::Security, "port_open", Locale::En) => "Port exposed to the internet",
        (ProblemCategory::Security, "weak_password", Locale::Es) => "Contraseña débil detectada",
        (ProblemCategory::Security, "weak_password", Locale::En) => "Weak password detected",
        (ProblemCategory::Updates, "updates_available", Locale::Es) => {
            "Actualizaciones disponibles"
        }
        (ProblemCategory::Updates, "updates_available", Locale::En) => "Updates available",
        (ProblemCategory::Applications, "service_down", Locale::Es) => "Servicio detenido",
        (ProblemCategory::Applications, "service_down", Locale::En) => "Service stopped",
        (ProblemCategory::Performance, "high_cpu", Locale::Es) => "Uso de CPU elevado",
        (ProblemCategory::Performance, "high_cpu", Locale::En) => "High CPU usage",
        (ProblemCategory::Performance, "high_memory", Locale::Es) => "Memoria casi agotada",
        (ProblemCategory::Performance, "high_memory", Locale::En) => "Memory nearly exhausted",
        _ => return None,
    };
    Some(title)
}

/// Resolve the user-facing title for an issue
pub fn resolve_title(category: ProblemCategory, issue: &RawIssue, locale: Locale) -> String {
    if let Some(kind) = issue.kind.as_deref() {
        if let Some(title) = specific_title(category, kind, locale) {
            return title.to_string();
        }
    }
    // Generic fallback: no template for this issue kind
    match locale {
        Locale::Es => format!(
            "Problema de {} detectado",
            category_label(category, locale)
        ),
        Locale::En => format!("{} problem detected", capitalize(category_label(category, locale))),
    }
}

/// Specific description template for a known (category, kind) pair
fn specific_description(
    category: ProblemCategory,
    kind: &str,
    locale: Locale,
) -> Option<&'static str> {
    let text = match (category, kind, locale) {
        (ProblemCategory::Storage, "disk_full", Locale::Es) => {
            "El disco de esta máquina está llegando a su límite. Cuando se llene, \
             los servicios dejarán de funcionar."
        }
        (ProblemCategory::Storage, "disk_full", Locale::En) => {
            "The disk on this machine is reaching its limit. Once it fills up, \
             services will stop working."
        }
        (ProblemCategory::Security, "port_open", Locale::Es) => {
            "Un puerto de esta máquina es accesible desde internet y podría ser \
             usado para un acceso no autorizado."
        }
        (ProblemCategory::Security, "port_open", Locale::En) => {
            "A port on this machine is reachable from the internet and could be \
             used for unauthorized access."
        }
        (ProblemCategory::Updates, "updates_available", Locale::Es) => {
            "Hay actualizaciones pendientes de instalar, incluidas correcciones \
             de seguridad."
        }
        (ProblemCategory::Updates, "updates_available", Locale::En) => {
            "There are pending updates to install, including security fixes."
        }
        (ProblemCategory::Applications, "service_down", Locale::Es) => {
            "Un servicio que debería estar funcionando se ha detenido."
        }
        (ProblemCategory::Applications, "service_down", Locale::En) => {
            "A service that should be running has stopped."
        }
        (ProblemCategory::Performance, "high_cpu", Locale::Es) => {
            "El procesador está trabajando al límite y la máquina responde lento."
        }
        (ProblemCategory::Performance, "high_cpu", Locale::En) => {
            "The processor is working at its limit and the machine responds slowly."
        }
        (ProblemCategory::Performance, "high_memory", Locale::Es) => {
            "La memoria está casi agotada; las aplicaciones pueden fallar."
        }
        (ProblemCategory::Performance, "high_memory", Locale::En) => {
            "Memory is nearly exhausted; applications may start failing."
        }
        _ => return None,
    };
    Some(text)
}

/// Resolve the user-facing description for an issue
///
/// For non-basic technical levels the raw detail line from the source is
/// appended so an operator can see what triggered the problem.
pub fn resolve_description(
    category: ProblemCategory,
    issue: &RawIssue,
    vm_name: &str,
    config: &TriageConfig,
) -> String {
    let mut text = issue
        .kind
        .as_deref()
        .and_then(|kind| specific_description(category, kind, config.locale))
        .map(|s| s.to_string())
        .unwrap_or_else(|| match config.locale {
            Locale::Es => format!(
                "Se detectó un problema de {} en {}.",
                category_label(category, config.locale),
                vm_name
            ),
            Locale::En => format!(
                "A {} problem was detected on {}.",
                category_label(category, config.locale),
                vm_name
            ),
        });

    if config.technical_level.wants_technical_detail() {
        if let Some(detail) = issue.description.as_deref() {
            if !detail.is_empty() {
                match config.locale {
                    Locale::Es => text.push_str(&format!(" Detalle técnico: {}", detail)),
                    Locale::En => text.push_str(&format!(" Technical detail: {}", detail)),
                }
            }
        }
    }

    text
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
