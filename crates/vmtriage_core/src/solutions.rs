//! Canned remediation plans
//!
//! Templates are keyed by (category, issue kind) first, then by
//! (category, severity) as a fallback. The lookup is an explicit match over
//! the closed enumerations so the no-template path is a visible code path,
//! not an accidental key miss. No match means no solutions, which is a
//! normal outcome - not every issue kind has a canned remediation.

use crate::locale::Locale;
use crate::report::RawIssue;
use crate::types::{Difficulty, ProblemCategory, Solution, SolutionStep, StepKind};

/// The canned plans this resolver knows how to expand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolutionTemplate {
    FreeDiskSpace,
    ClosePort,
    HardenSecurity,
    ApplyUpdates,
    RestartService,
    ReduceCpuLoad,
    FreeMemory,
}

/// Primary lookup: (category, issue kind)
fn template_for_kind(category: ProblemCategory, kind: &str) -> Option<SolutionTemplate> {
    match (category, kind) {
        (ProblemCategory::Storage, "disk_full") => Some(SolutionTemplate::FreeDiskSpace),
        (ProblemCategory::Security, "port_open") => Some(SolutionTemplate::ClosePort),
        (ProblemCategory::Updates, "updates_available") => Some(SolutionTemplate::ApplyUpdates),
        (ProblemCategory::Applications, "service_down") => Some(SolutionTemplate::RestartService),
        (ProblemCategory::Performance, "high_cpu") => Some(SolutionTemplate::ReduceCpuLoad),
        (ProblemCategory::Performance, "high_memory") => Some(SolutionTemplate::FreeMemory),
        _ => None,
    }
}

/// Fallback lookup: (category, severity)
fn template_for_severity(category: ProblemCategory, severity: &str) -> Option<SolutionTemplate> {
    match (category, severity) {
        (ProblemCategory::Storage, "critical" | "high") => Some(SolutionTemplate::FreeDiskSpace),
        (ProblemCategory::Security, "critical" | "high") => Some(SolutionTemplate::HardenSecurity),
        (ProblemCategory::Performance, "high") => Some(SolutionTemplate::ReduceCpuLoad),
        _ => None,
    }
}

/// Resolve remediation plans for an issue
///
/// Returns an empty list when no template matches.
pub fn resolve_solutions(
    category: ProblemCategory,
    issue: &RawIssue,
    problem_id: &str,
    problem_title: &str,
    locale: Locale,
) -> Vec<Solution> {
    let template = issue
        .kind
        .as_deref()
        .and_then(|kind| template_for_kind(category, kind))
        .or_else(|| {
            issue
                .severity
                .as_deref()
                .and_then(|severity| template_for_severity(category, severity))
        });

    match template {
        Some(template) => vec![expand(template, problem_id, problem_title, locale)],
        None => Vec::new(),
    }
}

/// Step text plus kind and minutes, before ids are assigned
struct StepSpec {
    title: &'static str,
    description: &'static str,
    kind: StepKind,
    minutes: u32,
}

/// Assign sequential "step-N" ids and freeze the step records
fn number_steps(specs: Vec<StepSpec>) -> Vec<SolutionStep> {
    specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| SolutionStep {
            id: format!("step-{}", i + 1),
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            kind: spec.kind,
            estimated_time: spec.minutes,
            is_completed: false,
            is_optional: false,
        })
        .collect()
}

/// Success criterion referencing the problem's computed title
fn success_criterion(problem_title: &str, locale: Locale) -> String {
    match locale {
        Locale::Es => format!(
            "\"{}\" ya no aparece en el próximo chequeo de salud",
            problem_title
        ),
        Locale::En => format!(
            "\"{}\" no longer appears on the next health check",
            problem_title
        ),
    }
}

fn expand(
    template: SolutionTemplate,
    problem_id: &str,
    problem_title: &str,
    locale: Locale,
) -> Solution {
    let id = format!("sol-{}", problem_id);
    let criteria = vec![success_criterion(problem_title, locale)];

    match (template, locale) {
        (SolutionTemplate::FreeDiskSpace, Locale::Es) => Solution::new(
            id,
            "Liberar espacio en disco",
            "Eliminar archivos innecesarios para recuperar espacio.",
            Difficulty::Easy,
            number_steps(vec![
                StepSpec {
                    title: "Revisar uso del disco",
                    description: "Identificar qué carpetas ocupan más espacio.",
                    kind: StepKind::Manual,
                    minutes: 5,
                },
                StepSpec {
                    title: "Vaciar archivos temporales",
                    description: "Ejecutar la limpieza automática de temporales y cachés.",
                    kind: StepKind::Automated,
                    minutes: 10,
                },
                StepSpec {
                    title: "Verificar espacio libre",
                    description: "Confirmar que el disco queda por debajo del umbral de alerta.",
                    kind: StepKind::Verification,
                    minutes: 2,
                },
            ]),
            vec![],
            vec!["No elimine archivos de sistema manualmente.".to_string()],
            criteria,
        ),
        (SolutionTemplate::FreeDiskSpace, Locale::En) => Solution::new(
            id,
            "Free up disk space",
            "Remove unnecessary files to reclaim space.",
            Difficulty::Easy,
            number_steps(vec![
                StepSpec {
                    title: "Review disk usage",
                    description: "Identify which folders take the most space.",
                    kind: StepKind::Manual,
                    minutes: 5,
                },
                StepSpec {
                    title: "Clear temporary files",
                    description: "Run the automatic cleanup of temp files and caches.",
                    kind: StepKind::Automated,
                    minutes: 10,
                },
                StepSpec {
                    title: "Verify free space",
                    description: "Confirm the disk is back below the alert threshold.",
                    kind: StepKind::Verification,
                    minutes: 2,
                },
            ]),
            vec![],
            vec!["Do not delete system files by hand.".to_string()],
            criteria,
        ),
        (SolutionTemplate::ClosePort, Locale::Es) => Solution::new(
            id,
            "Cerrar el puerto expuesto",
            "Bloquear el puerto con una regla de cortafuegos.",
            Difficulty::Moderate,
            number_steps(vec![
                StepSpec {
                    title: "Confirmar que el puerto no se necesita",
                    description: "Verificar con el responsable del servicio antes de bloquear.",
                    kind: StepKind::Manual,
                    minutes: 10,
                },
                StepSpec {
                    title: "Añadir regla de bloqueo",
                    description: "Crear la regla de cortafuegos que cierra el puerto.",
                    kind: StepKind::Automated,
                    minutes: 5,
                },
                StepSpec {
                    title: "Comprobar desde el exterior",
                    description: "Verificar que el puerto ya no responde desde internet.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec!["Acceso de administrador al cortafuegos".to_string()],
            vec!["Bloquear un puerto en uso puede interrumpir un servicio.".to_string()],
            criteria,
        ),
        (SolutionTemplate::ClosePort, Locale::En) => Solution::new(
            id,
            "Close the exposed port",
            "Block the port with a firewall rule.",
            Difficulty::Moderate,
            number_steps(vec![
                StepSpec {
                    title: "Confirm the port is not needed",
                    description: "Check with the service owner before blocking.",
                    kind: StepKind::Manual,
                    minutes: 10,
                },
                StepSpec {
                    title: "Add a blocking rule",
                    description: "Create the firewall rule that closes the port.",
                    kind: StepKind::Automated,
                    minutes: 5,
                },
                StepSpec {
                    title: "Check from the outside",
                    description: "Verify the port no longer answers from the internet.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec!["Administrator access to the firewall".to_string()],
            vec!["Blocking a port in use can interrupt a service.".to_string()],
            criteria,
        ),
        (SolutionTemplate::HardenSecurity, Locale::Es) => Solution::new(
            id,
            "Revisar la seguridad de la máquina",
            "Repasar accesos, contraseñas y servicios expuestos.",
            Difficulty::Advanced,
            number_steps(vec![
                StepSpec {
                    title: "Revisar accesos recientes",
                    description: "Buscar inicios de sesión no reconocidos.",
                    kind: StepKind::Manual,
                    minutes: 15,
                },
                StepSpec {
                    title: "Consultar la guía de seguridad",
                    description: "Seguir la guía de endurecimiento recomendada.",
                    kind: StepKind::ExternalLink,
                    minutes: 10,
                },
                StepSpec {
                    title: "Verificar el estado",
                    description: "Repetir el chequeo de seguridad tras aplicar los cambios.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec![],
            vec![],
            criteria,
        ),
        (SolutionTemplate::HardenSecurity, Locale::En) => Solution::new(
            id,
            "Review the machine's security",
            "Go over access, passwords, and exposed services.",
            Difficulty::Advanced,
            number_steps(vec![
                StepSpec {
                    title: "Review recent access",
                    description: "Look for sign-ins you do not recognize.",
                    kind: StepKind::Manual,
                    minutes: 15,
                },
                StepSpec {
                    title: "Consult the security guide",
                    description: "Follow the recommended hardening guide.",
                    kind: StepKind::ExternalLink,
                    minutes: 10,
                },
                StepSpec {
                    title: "Verify the state",
                    description: "Re-run the security check after applying changes.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec![],
            vec![],
            criteria,
        ),
        (SolutionTemplate::ApplyUpdates, Locale::Es) => Solution::new(
            id,
            "Instalar actualizaciones pendientes",
            "Aplicar las actualizaciones del sistema y sus correcciones de seguridad.",
            Difficulty::Easy,
            number_steps(vec![
                StepSpec {
                    title: "Instalar actualizaciones",
                    description: "Ejecutar la instalación de todas las actualizaciones pendientes.",
                    kind: StepKind::Automated,
                    minutes: 30,
                },
                StepSpec {
                    title: "Reiniciar si es necesario",
                    description: "Reiniciar la máquina si la actualización lo requiere.",
                    kind: StepKind::Manual,
                    minutes: 10,
                },
                StepSpec {
                    title: "Confirmar que todo funciona",
                    description: "Comprobar que los servicios volvieron a iniciarse.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec![],
            vec!["La máquina puede necesitar un reinicio.".to_string()],
            criteria,
        ),
        (SolutionTemplate::ApplyUpdates, Locale::En) => Solution::new(
            id,
            "Install pending updates",
            "Apply system updates and their security fixes.",
            Difficulty::Easy,
            number_steps(vec![
                StepSpec {
                    title: "Install updates",
                    description: "Run the installation of all pending updates.",
                    kind: StepKind::Automated,
                    minutes: 30,
                },
                StepSpec {
                    title: "Restart if needed",
                    description: "Restart the machine if the update requires it.",
                    kind: StepKind::Manual,
                    minutes: 10,
                },
                StepSpec {
                    title: "Confirm everything works",
                    description: "Check that services came back up.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec![],
            vec!["The machine may need a restart.".to_string()],
            criteria,
        ),
        (SolutionTemplate::RestartService, Locale::Es) => Solution::new(
            id,
            "Reiniciar el servicio detenido",
            "Volver a iniciar el servicio y comprobar que queda estable.",
            Difficulty::Easy,
            number_steps(vec![
                StepSpec {
                    title: "Reiniciar el servicio",
                    description: "Iniciar de nuevo el servicio detenido.",
                    kind: StepKind::Automated,
                    minutes: 2,
                },
                StepSpec {
                    title: "Comprobar que sigue activo",
                    description: "Esperar unos minutos y confirmar que no vuelve a caerse.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec![],
            vec![],
            criteria,
        ),
        (SolutionTemplate::RestartService, Locale::En) => Solution::new(
            id,
            "Restart the stopped service",
            "Bring the service back up and confirm it stays healthy.",
            Difficulty::Easy,
            number_steps(vec![
                StepSpec {
                    title: "Restart the service",
                    description: "Start the stopped service again.",
                    kind: StepKind::Automated,
                    minutes: 2,
                },
                StepSpec {
                    title: "Check it stays up",
                    description: "Wait a few minutes and confirm it does not crash again.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec![],
            vec![],
            criteria,
        ),
        (SolutionTemplate::ReduceCpuLoad, Locale::Es) => Solution::new(
            id,
            "Reducir la carga de CPU",
            "Identificar el proceso que consume el procesador y actuar sobre él.",
            Difficulty::Moderate,
            number_steps(vec![
                StepSpec {
                    title: "Identificar el proceso",
                    description: "Ver qué proceso está usando más CPU.",
                    kind: StepKind::Manual,
                    minutes: 5,
                },
                StepSpec {
                    title: "Reiniciar o ajustar el proceso",
                    description: "Reiniciar el proceso o reducir su carga de trabajo.",
                    kind: StepKind::Manual,
                    minutes: 10,
                },
                StepSpec {
                    title: "Verificar la carga",
                    description: "Confirmar que el uso de CPU vuelve a niveles normales.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec![],
            vec![],
            criteria,
        ),
        (SolutionTemplate::ReduceCpuLoad, Locale::En) => Solution::new(
            id,
            "Reduce CPU load",
            "Identify the process consuming the CPU and act on it.",
            Difficulty::Moderate,
            number_steps(vec![
                StepSpec {
                    title: "Identify the process",
                    description: "See which process is using the most CPU.",
                    kind: StepKind::Manual,
                    minutes: 5,
                },
                StepSpec {
                    title: "Restart or tune the process",
                    description: "Restart the process or reduce its workload.",
                    kind: StepKind::Manual,
                    minutes: 10,
                },
                StepSpec {
                    title: "Verify the load",
                    description: "Confirm CPU usage returns to normal levels.",
                    kind: StepKind::Verification,
                    minutes: 5,
                },
            ]),
            vec![],
            vec![],
            criteria,
        ),
        (SolutionTemplate::FreeMemory, Locale::Es) => Solution::new(
            id,
            "Liberar memoria",
            "Reiniciar los procesos que más memoria consumen.",
            Difficulty::Moderate,
            number_steps(vec![
                StepSpec {
                    title: "Identificar consumidores de memoria",
                    description: "Ver qué procesos retienen más memoria.",
                    kind: StepKind::Manual,
                    minutes: 5,
                },
                StepSpec {
                    title: "Reiniciar los procesos",
                    description: "Reiniciar los procesos que no liberan memoria.",
                    kind: StepKind::Automated,
                    minutes: 5,
                },
                StepSpec {
                    title: "Verificar memoria disponible",
                    description: "Confirmar que la memoria libre vuelve a ser suficiente.",
                    kind: StepKind::Verification,
                    minutes: 3,
                },
            ]),
            vec![],
            vec![],
            criteria,
        ),
        (SolutionTemplate::FreeMemory, Locale::En) => Solution::new(
            id,
            "Free memory",
            "Restart the processes holding the most memory.",
            Difficulty::Moderate,
            number_steps(vec![
                StepSpec {
                    title: "Identify memory consumers",
                    description: "See which processes hold the most memory.",
                    kind: StepKind::Manual,
                    minutes: 5,
                },
                StepSpec {
                    title: "Restart the processes",
                    description: "Restart processes that are not releasing memory.",
                    kind: StepKind::Automated,
                    minutes: 5,
                },
                StepSpec {
                    title: "Verify available memory",
                    description: "Confirm free memory is back to a healthy level.",
                    kind: StepKind::Verification,
                    minutes: 3,
                },
            ]),
            vec![],
            vec![],
            criteria,
        ),
    }
}
