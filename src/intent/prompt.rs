//! Few-shot prompt used to classify smart-home voice commands.

/// Token in [`FEW_SHOT_TEMPLATE`] that receives the user's utterance.
pub const PLACEHOLDER: &str = "<ФРАЗА>";

/// Closed set of labels the template asks the model to choose from.
pub const INTENT_LABELS: [&str; 15] = [
    "light_on",
    "light_off",
    "temperature_up",
    "temperature_down",
    "music_on",
    "music_off",
    "curtains_open",
    "curtains_close",
    "tv_on",
    "tv_off",
    "door_lock",
    "door_unlock",
    "sensor_check",
    "sensor_reset",
    "unknown",
];

pub const FEW_SHOT_TEMPLATE: &str = r#"Ты — голосовой ассистент умного дома.  
Твоя текущая задача — КЛАССИФИКАЦИЯ КОМАНД.

Правила ответа:
1. Прочти пользовательскую фразу.  
2. Верни **только** одну метку из списка ниже, без пробелов, комментариев и кавычек.  
3. Если фраза не подходит ни под один интент — верни `unknown`.

Справочник интентов:  
light_on, light_off, temperature_up, temperature_down,  
music_on, music_off, curtains_open, curtains_close,  
tv_on, tv_off, door_lock, door_unlock,  
sensor_check, sensor_reset, unknown

===== ПРИМЕРЫ =====
зажги подсветку               → light_on
свет включается               → light_on

погаси освещение              → light_off
лампу выключи                 → light_off

подними температуру           → temperature_up
становится прохладно          → temperature_up

остуди комнату                → temperature_down
температуру ниже              → temperature_down

воспроизведи музыку           → music_on
запусти трек                  → music_on

музыку останови               → music_off
плеер выкл                    → music_off

шторы раздвинь                → curtains_open
подними жалюзи                → curtains_open

затемни окна                  → curtains_close
оконные шторы опусти          → curtains_close

телевизор вкл                 → tv_on
включай тв                    → tv_on

тв отключить                  → tv_off
телевизор выруби              → tv_off

запри дверь                   → door_lock
вход заблокировать            → door_lock

дверь разблокируй             → door_unlock
открой вход                   → door_unlock

проверка сенсоров             → sensor_check
просканируй датчики           → sensor_check

сенсоры рестарт               → sensor_reset
датчики перезапусти           → sensor_reset

спой анекдот                  → unknown
что нового в мире             → unknown
сколько будет 2+2             → unknown
=====================
потеплей                → temperature_up
прикрой занавески       → curtains_close
открой дверь            → door_unlock
сними замок             → door_unlock
отпреси дверь           → door_unlock
погода на завтра        → unknown


Новая фраза: «<ФРАЗА>» →"#;

/// Inserts `text` in place of the template's placeholder.
///
/// Only the template's own placeholder is substituted; `text` is inserted
/// verbatim and never rescanned, so a placeholder inside it survives as-is.
pub fn build_prompt(text: &str) -> String {
    FEW_SHOT_TEMPLATE.replacen(PLACEHOLDER, text, 1)
}

pub fn is_known_label(label: &str) -> bool {
    INTENT_LABELS.contains(&label)
}
