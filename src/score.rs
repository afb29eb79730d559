// Score tracking for the browser game page, persisted as JSON in localStorage

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::Storage;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub total: f64,
    pub current: f64,
    pub high_score: f64,
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

// Falls back to keeping scores in memory only when storage is unavailable
// (private browsing, no window)
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        LocalStorage { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            storage.set_item(key, value).ok();
        }
    }
}

pub struct ScoreManager<S> {
    store: S,
    scores: Scores,
}

impl<S: KeyValueStore> ScoreManager<S> {
    pub const KEY: &'static str = "scores";

    pub fn new(store: S) -> Self {
        let mut manager = ScoreManager {
            store,
            scores: Scores::default(),
        };
        manager.scores = manager.load();
        manager
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    // Missing or unreadable data loads as all zeros
    pub fn load(&self) -> Scores {
        self.store
            .get(Self::KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&mut self, scores: Scores) {
        self.scores = scores;
        if let Ok(json) = serde_json::to_string(&scores) {
            self.store.set(Self::KEY, &json);
        }
    }

    pub fn update_score(&mut self, points: f64) -> Scores {
        let mut scores = self.scores;
        scores.current += points;
        scores.total += points;
        if scores.current > scores.high_score {
            scores.high_score = scores.current;
        }
        self.save(scores);
        scores
    }

    pub fn reset_current_score(&mut self) -> Scores {
        let mut scores = self.scores;
        scores.current = 0.0;
        self.save(scores);
        scores
    }
}

/// Score readout bound to localStorage and the `#current-score`,
/// `#total-score` and `#high-score` elements of the page.
#[wasm_bindgen]
pub struct ScoreBoard {
    manager: ScoreManager<LocalStorage>,
}

#[wasm_bindgen]
impl ScoreBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScoreBoard {
        let board = ScoreBoard {
            manager: ScoreManager::new(LocalStorage::open()),
        };
        board.display();
        board
    }

    pub fn update_score(&mut self, points: f64) {
        self.manager.update_score(points);
        self.display();
    }

    pub fn reset_current_score(&mut self) {
        self.manager.reset_current_score();
        self.display();
    }

    pub fn current(&self) -> f64 {
        self.manager.scores().current
    }

    pub fn total(&self) -> f64 {
        self.manager.scores().total
    }

    pub fn high_score(&self) -> f64 {
        self.manager.scores().high_score
    }

    pub fn display(&self) {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };
        let scores = self.manager.scores();
        for (id, value) in [
            ("current-score", scores.current),
            ("total-score", scores.total),
            ("high-score", scores.high_score),
        ]
        .iter()
        {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(&value.to_string()));
            }
        }
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        ScoreBoard::new()
    }
}
