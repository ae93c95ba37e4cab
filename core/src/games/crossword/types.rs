use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswordItem {
    pub question: String,
    pub answer: String,
}

impl CrosswordItem {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrosswordCell {
    pub clue_number: Option<usize>,
    pub input: Option<char>,
}
