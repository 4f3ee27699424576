// src/view_models.rs

use crate::model::Difficulty;

#[derive(Clone, Debug)]
pub struct SubtopicCard {
    pub chapter: String,
    pub key: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct TierInfo {
    pub difficulty: Difficulty,
    pub completed: bool,
    pub answered: usize,
    pub total: usize,
}

impl TierInfo {
    pub fn badge(&self) -> String {
        let icono = match self.difficulty {
            Difficulty::Basic => "🔍",
            Difficulty::Intermediate => "🔎",
            Difficulty::Advanced => "🚨",
        };
        let estado = if self.completed { "✅" } else { "🔒" };
        format!("{icono} {} {estado}", self.difficulty.nombre())
    }
}

#[derive(Clone, Debug)]
pub struct ResponseRow {
    pub index_1based: usize,
    pub topic: String,
    pub selected: String,
    pub correct_option: String,
    pub is_correct: bool,
    pub time_spent: f64,
}
