//! Message catalogs for the planner's user-facing text.
//!
//! Templates use `{placeholder}` markers filled by [`fill`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::session::Weekday;

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
    Es,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Th,
        Language::Es,
        Language::Fr,
        Language::De,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    pub fn catalog(self) -> &'static Catalog {
        match self {
            Language::En => &EN,
            Language::Th => &TH,
            Language::Es => &ES,
            Language::Fr => &FR,
            Language::De => &DE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "language".to_string(),
                message: format!("unsupported language '{s}' (expected one of en, th, es, fr, de)"),
            })
    }
}

/// All translatable strings for one language.
#[derive(Debug)]
pub struct Catalog {
    pub days: [&'static str; 7],
    pub days_short: [&'static str; 7],
    pub queue_header: &'static str,
    pub output_header: &'static str,
    pub empty_queue: &'static str,
    pub items_count: &'static str,
    pub added: &'static str,
    pub deleted: &'static str,
    pub flushed: &'static str,
    pub confirm_flush: &'static str,
    pub invalid_interval: &'static str,
    pub exec_start: &'static str,
    pub accepted: &'static str,
    pub rejected: &'static str,
    pub complete: &'static str,
}

impl Catalog {
    pub fn day(&self, day: Weekday) -> &'static str {
        self.days[day.index()]
    }

    pub fn day_short(&self, day: Weekday) -> &'static str {
        self.days_short[day.index()]
    }
}

/// Replace each `{key}` in `template` with its value.
pub fn fill(template: &str, params: &[(&str, &dyn fmt::Display)]) -> String {
    params.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), &value.to_string())
    })
}

static EN: Catalog = Catalog {
    days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
    days_short: ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"],
    queue_header: "// RAW_QUEUE",
    output_header: "// OPTIMIZED_SCHEDULE_OUTPUT",
    empty_queue: "No subjects in queue",
    items_count: "{count} items",
    added: "Added [{name}] to queue.",
    deleted: "Deleted Item ID: {id}",
    flushed: "MEMORY FLUSHED.",
    confirm_flush: "Flush all memory? This cannot be undone.",
    invalid_interval: "Invalid Time: Start time must be before end time.",
    exec_start: "EXECUTION STARTED: Greedy Schedule",
    accepted: "[ACCEPTED] {day}: {name} ({start}-{end})",
    rejected: "[REJECTED] {day}: {name} (Conflict)",
    complete: "EXECUTION COMPLETE. Scheduled: {sch} | Rejected: {rej}",
};

static TH: Catalog = Catalog {
    days: ["วันจันทร์", "วันอังคาร", "วันพุธ", "วันพฤหัสบดี", "วันศุกร์", "วันเสาร์", "วันอาทิตย์"],
    days_short: ["จ.", "อ.", "พ.", "พฤ.", "ศ.", "ส.", "อา."],
    queue_header: "// คิวรายวิชา",
    output_header: "// ตารางเรียนที่จัดแล้ว",
    empty_queue: "ไม่มีวิชาในคิว",
    items_count: "{count} รายการ",
    added: "เพิ่ม [{name}] ลงในคิว",
    deleted: "ลบรายการ ID: {id}",
    flushed: "ล้างหน่วยความจำแล้ว",
    confirm_flush: "ล้างข้อมูลทั้งหมด? ไม่สามารถกู้คืนได้",
    invalid_interval: "เวลาไม่ถูกต้อง: เวลาเริ่มต้องมาก่อนเวลาจบ",
    exec_start: "เริ่มการประมวลผล: Greedy Schedule",
    accepted: "[ยอมรับ] {day}: {name} ({start}-{end})",
    rejected: "[ปฏิเสธ] {day}: {name} (ชนกัน)",
    complete: "เสร็จสิ้น. จัดได้: {sch} | ปฏิเสธ: {rej}",
};

static ES: Catalog = Catalog {
    days: ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"],
    days_short: ["LUN", "MAR", "MIE", "JUE", "VIE", "SAB", "DOM"],
    queue_header: "// COLA_BRUTA",
    output_header: "// HORARIO_OPTIMIZADO",
    empty_queue: "Sin asignaturas en cola",
    items_count: "{count} items",
    added: "Añadido [{name}] a la cola.",
    deleted: "Item Eliminado ID: {id}",
    flushed: "MEMORIA BORRADA.",
    confirm_flush: "¿Borrar toda la memoria? No se puede deshacer.",
    invalid_interval: "Tiempo Inválido: Inicio debe ser antes del fin.",
    exec_start: "EJECUCIÓN INICIADA: Planificador Voraz",
    accepted: "[ACEPTADO] {day}: {name} ({start}-{end})",
    rejected: "[RECHAZADO] {day}: {name} (Conflicto)",
    complete: "EJECUCIÓN COMPLETA. Programados: {sch} | Rechazados: {rej}",
};

static FR: Catalog = Catalog {
    days: ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"],
    days_short: ["LUN", "MAR", "MER", "JEU", "VEN", "SAM", "DIM"],
    queue_header: "// FILE_BRUTE",
    output_header: "// EMPLOI_DU_TEMPS_OPTIMISE",
    empty_queue: "Aucun sujet",
    items_count: "{count} éléments",
    added: "Ajouté [{name}] à la file.",
    deleted: "Supprimé ID: {id}",
    flushed: "MEMOIRE VIDE.",
    confirm_flush: "Vider la mémoire? Irréversible.",
    invalid_interval: "Invalide: Début doit être avant Fin.",
    exec_start: "EXECUTION: Planification Gloutonne",
    accepted: "[ACCEPTE] {day}: {name} ({start}-{end})",
    rejected: "[REJETE] {day}: {name} (Conflit)",
    complete: "TERMINE. Prévu: {sch} | Rejeté: {rej}",
};

static DE: Catalog = Catalog {
    days: ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag"],
    days_short: ["MO", "DI", "MI", "DO", "FR", "SA", "SO"],
    queue_header: "// ROH_WARTESCHLANGE",
    output_header: "// OPTIMIERTER_PLAN",
    empty_queue: "Keine Fächer",
    items_count: "{count} Elemente",
    added: "[{name}] zur Warteschlange hinzugefügt.",
    deleted: "Gelöscht ID: {id}",
    flushed: "SPEICHER GELEERT.",
    confirm_flush: "Alles löschen? Kann nicht rückgängig gemacht werden.",
    invalid_interval: "Ungültig: Start muss vor Ende sein.",
    exec_start: "AUSFÜHRUNG GESTARTET: Greedy",
    accepted: "[AKZEPTIERT] {day}: {name} ({start}-{end})",
    rejected: "[ABGELEHNT] {day}: {name} (Konflikt)",
    complete: "FERTIG. Geplant: {sch} | Abgelehnt: {rej}",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_every_placeholder() {
        let text = fill(
            Language::En.catalog().accepted,
            &[("day", &"Monday"), ("name", &"Math"), ("start", &"09:00"), ("end", &"10:00")],
        );
        assert_eq!(text, "[ACCEPTED] Monday: Math (09:00-10:00)");
    }

    #[test]
    fn fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{a} {b}", &[("a", &1)]), "1 {b}");
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert_eq!("DE".parse::<Language>().unwrap(), Language::De);
        assert!("jp".parse::<Language>().is_err());
    }

    #[test]
    fn every_catalog_names_seven_days() {
        for lang in Language::ALL {
            let catalog = lang.catalog();
            assert!(catalog.days.iter().all(|d| !d.is_empty()));
            assert_eq!(catalog.day(Weekday::Sunday), catalog.days[6]);
            assert!(catalog.accepted.contains("{name}"));
        }
    }
}
