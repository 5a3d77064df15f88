use kbase_interaction::SUGGESTED_QUESTIONS;

pub fn list() {
    for (i, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
        println!("{}. {}", i + 1, question);
    }
}
