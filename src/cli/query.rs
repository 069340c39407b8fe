use crate::query::{create_fallback_query, optimize_query, validate_query_length};

pub fn run(text: &str, add_film_context: bool) {
    let query = optimize_query(text, add_film_context);
    let validation = validate_query_length(&query);
    let status = if validation.is_valid { "valid" } else { "invalid" };

    println!("Query:    {}", query);
    println!(
        "Length:   {}/{} ({})",
        validation.length, validation.max_length, status
    );
    println!("Fallback: {}", create_fallback_query(text));
}
