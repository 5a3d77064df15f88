use colored::Colorize;
use kbase_interaction::DOCUMENTS;

pub fn list() {
    println!("{}", "Knowledge base documents:".bold());
    for document in DOCUMENTS.iter() {
        println!("  {} {}", document.id.cyan(), document.title);
        println!("      {}", document.snippet().bright_black());
    }
}
