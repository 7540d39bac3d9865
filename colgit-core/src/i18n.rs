//! Static translation tables.
//!
//! Lookup never fails: an unknown language reads from the English table, and a
//! key missing from a table falls back to English and then to the key itself.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
    Chinese,
    Hindi,
    Arabic,
    LatinAmericanSpanish,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::Chinese,
        Language::Hindi,
        Language::Arabic,
        Language::LatinAmericanSpanish,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Chinese => "zh",
            Language::Hindi => "hi",
            Language::Arabic => "ar",
            Language::LatinAmericanSpanish => "es-419",
        }
    }

    /// Name shown in the language picker, written in the language itself.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Chinese => "中文",
            Language::Hindi => "हिन्दी",
            Language::Arabic => "العربية",
            Language::LatinAmericanSpanish => "Español (Latinoamérica)",
        }
    }

    /// Accepts either a code ("es-419") or a display name ("Español"),
    /// ignoring case for the ASCII forms.
    pub fn resolve(value: &str) -> Option<Language> {
        let value = value.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.code().eq_ignore_ascii_case(value)
                || lang.display_name().eq_ignore_ascii_case(value)
        })
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::English => EN,
            Language::Spanish => ES,
            Language::Chinese => ZH,
            Language::Hindi => HI,
            Language::Arabic => AR,
            Language::LatinAmericanSpanish => ES_419,
        }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

pub fn get_text<'a>(key: &'a str, language: &str) -> &'a str {
    let language = Language::resolve(language).unwrap_or(Language::English);

    language
        .lookup(key)
        .or_else(|| Language::English.lookup(key))
        .unwrap_or(key)
}

static EN: &[(&str, &str)] = &[
    ("title", "ColGit"),
    ("settings", "Settings"),
    ("language", "Language"),
    ("theme", "Theme"),
    ("light", "Light"),
    ("dark", "Dark"),
    ("set_storage_limit", "Storage limit"),
    ("version_control", "Version Control"),
    ("calendar", "Calendar"),
    ("tasks", "Tasks"),
    ("notes", "Notes"),
    ("save", "Save"),
    ("commit", "Commit"),
    ("branch", "Branch"),
    ("merge", "Merge"),
    ("merge_not_implemented", "Merging is not implemented yet"),
    ("connect_github", "Connect to GitHub"),
    ("github_not_implemented", "Remote connection is not implemented yet"),
    ("calendar_sync_not_implemented", "Calendar sync is not implemented yet"),
    ("add_task", "Add task"),
    ("enter_task", "Enter a task"),
    ("task_added", "Task added:"),
    ("view_tasks", "View tasks"),
    ("no_tasks", "No tasks yet"),
    ("save_note", "Save note"),
    ("note_saved", "Note saved"),
    ("no_note", "No note for this date"),
    ("no_notes", "No notes yet"),
    ("no_markers", "No commits or branches yet"),
    ("reminders", "Reminders"),
    ("success", "Success"),
    ("error", "Error"),
    ("config_saved", "Settings saved"),
];

static ES: &[(&str, &str)] = &[
    ("title", "ColGit"),
    ("settings", "Configuración"),
    ("language", "Idioma"),
    ("theme", "Tema"),
    ("light", "Claro"),
    ("dark", "Oscuro"),
    ("set_storage_limit", "Límite de almacenamiento"),
    ("version_control", "Control de Versiones"),
    ("calendar", "Calendario"),
    ("tasks", "Tareas"),
    ("notes", "Notas"),
    ("save", "Guardar"),
    ("commit", "Confirmar"),
    ("branch", "Rama"),
    ("merge", "Fusionar"),
    ("merge_not_implemented", "La fusión aún no está implementada"),
    ("connect_github", "Conectar con GitHub"),
    ("github_not_implemented", "La conexión remota aún no está implementada"),
    ("calendar_sync_not_implemented", "La sincronización del calendario aún no está implementada"),
    ("add_task", "Añadir tarea"),
    ("enter_task", "Escribe una tarea"),
    ("task_added", "Tarea añadida:"),
    ("view_tasks", "Ver tareas"),
    ("no_tasks", "Aún no hay tareas"),
    ("save_note", "Guardar nota"),
    ("note_saved", "Nota guardada"),
    ("no_note", "No hay nota para esta fecha"),
    ("no_notes", "Aún no hay notas"),
    ("no_markers", "Aún no hay confirmaciones ni ramas"),
    ("reminders", "Recordatorios"),
    ("success", "Éxito"),
    ("error", "Error"),
    ("config_saved", "Configuración guardada"),
];

static ES_419: &[(&str, &str)] = &[
    ("title", "ColGit"),
    ("settings", "Configuración"),
    ("language", "Idioma"),
    ("version_control", "Control de Versiones"),
    ("calendar", "Calendario"),
    ("tasks", "Tareas"),
    ("notes", "Notas"),
    ("save", "Guardar"),
    ("add_task", "Agregar tarea"),
    ("task_added", "Tarea agregada:"),
];

static ZH: &[(&str, &str)] = &[
    ("title", "ColGit"),
    ("settings", "设置"),
    ("language", "语言"),
    ("version_control", "版本控制"),
    ("calendar", "日历"),
    ("tasks", "任务"),
    ("notes", "笔记"),
    ("save", "保存"),
];

static HI: &[(&str, &str)] = &[
    ("title", "ColGit"),
    ("settings", "सेटिंग्स"),
    ("language", "भाषा"),
    ("version_control", "संस्करण नियंत्रण"),
    ("calendar", "कैलेंडर"),
    ("tasks", "कार्य"),
    ("notes", "नोट्स"),
    ("save", "सहेजें"),
];

static AR: &[(&str, &str)] = &[
    ("title", "ColGit"),
    ("settings", "الإعدادات"),
    ("language", "اللغة"),
    ("version_control", "التحكم بالإصدارات"),
    ("calendar", "التقويم"),
    ("tasks", "المهام"),
    ("notes", "الملاحظات"),
    ("save", "حفظ"),
];
