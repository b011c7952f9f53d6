//! Platform abstraction layer
//!
//! Browser bindings: a `WebGame` handle the page's JavaScript drives with
//! commands and frame times. Every call returns the queued events as JSON so
//! the page can render, narrate and animate them. Audio cues are played here
//! so the page never has to map events to sounds.

#[cfg(target_arch = "wasm32")]
pub use web::WebGame;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use crate::audio::AudioManager;
    use crate::consts::CAPACITY;
    use crate::error::GameError;
    use crate::settings::Settings;
    use crate::sim::{Command, GameSession, Scheduler};

    #[wasm_bindgen(start)]
    pub fn wasm_start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }
        log::info!("Array Hack starting...");
    }

    #[wasm_bindgen]
    pub struct WebGame {
        session: GameSession,
        scheduler: Scheduler,
        settings: Settings,
        audio: AudioManager,
    }

    #[wasm_bindgen]
    impl WebGame {
        /// New game. `settings_json` may be empty for defaults.
        #[wasm_bindgen(constructor)]
        pub fn new(settings_json: &str) -> Self {
            let settings = if settings_json.trim().is_empty() {
                Settings::default()
            } else {
                Settings::from_json(settings_json).unwrap_or_else(|err| {
                    log::warn!("Ignoring settings: {}", err);
                    Settings::default()
                })
            };
            let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
            log::info!("Game initialized with seed: {}", seed);

            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_muted(!settings.sound_enabled);

            Self {
                session: GameSession::new(seed),
                scheduler: settings.scheduler(),
                settings,
                audio,
            }
        }

        pub fn insert(&mut self, index: i32, digit: i32) -> String {
            let command = match (to_index(index), to_digit(digit)) {
                (Ok(index), Ok(digit)) => Ok(Command::Insert { index, digit }),
                (Err(err), _) | (_, Err(err)) => Err(err),
            };
            self.run(command)
        }

        pub fn delete(&mut self, index: i32) -> String {
            self.run(to_index(index).map(|index| Command::Delete { index }))
        }

        /// `pattern` in `2,1,4` form
        pub fn search(&mut self, pattern: &str) -> String {
            let _ = self.session.search_text(pattern);
            self.flush()
        }

        pub fn reset(&mut self) -> String {
            self.run(Ok(Command::Reset))
        }

        #[wasm_bindgen(js_name = nextLevel)]
        pub fn next_level(&mut self) -> String {
            self.run(Ok(Command::NextLevel))
        }

        pub fn restart(&mut self) -> String {
            self.run(Ok(Command::Restart))
        }

        /// Advance timers by the frame's elapsed milliseconds
        pub fn update(&mut self, elapsed_ms: f64) -> String {
            let elapsed_ms = elapsed_ms.clamp(0.0, u32::MAX as f64) as u32;
            self.scheduler.advance(&mut self.session, elapsed_ms);
            self.flush()
        }

        #[wasm_bindgen(js_name = toggleSound)]
        pub fn toggle_sound(&mut self) -> bool {
            let enabled = self.settings.toggle_sound();
            self.audio.set_muted(!enabled);
            enabled
        }

        /// Full session summary as JSON
        pub fn snapshot(&self) -> String {
            serde_json::to_string(&self.session.snapshot()).unwrap_or_default()
        }

        fn run(&mut self, command: Result<Command, GameError>) -> String {
            // Argument failures still surface as an InvalidCommand event
            let _ = match command {
                Ok(command) => self.session.apply(command),
                Err(err) => self.session.reject(err),
            };
            self.flush()
        }

        fn flush(&mut self) -> String {
            let events = self.session.drain_events();
            self.audio.play_events(&events);
            serde_json::to_string(&events).unwrap_or_else(|_| "[]".into())
        }
    }

    fn to_index(index: i32) -> Result<usize, GameError> {
        usize::try_from(index)
            .ok()
            .filter(|i| *i < CAPACITY)
            .ok_or(GameError::IndexOutOfRange {
                index: i64::from(index),
                capacity: CAPACITY,
            })
    }

    fn to_digit(digit: i32) -> Result<u8, GameError> {
        u8::try_from(digit)
            .ok()
            .filter(|d| *d <= crate::consts::MAX_DIGIT)
            .ok_or(GameError::InvalidDigit(i64::from(digit)))
    }
}
