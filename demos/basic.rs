use chrono::{Local, NaiveDate};
use dateserial::{DateSerialGenerator, EncodingRequest, ThreadRandom};

fn main() {
    // One-shot: random serial in [1, 999) and filler 1100
    let now = Local::now().naive_local();
    match DateSerialGenerator::quick_generate(now, &ThreadRandom) {
        Ok(id) => println!("Today's reference: {id}"),
        Err(err) => eprintln!("Could not generate: {err}"),
    }

    // Fixed inputs give fixed ids
    let date = NaiveDate::from_ymd_opt(2025, 5, 11).unwrap();
    let request = EncodingRequest::from_date(date, 102).unwrap();
    let budget = request.budget().unwrap();

    println!("\nRequest for {date} with serial {}:", request.serial());
    println!("  Date digits: {}", budget.date_len());
    println!("  Filler digits: {}", budget.filler_len());
    println!("  Allowed serial length: {}", budget.max_serial_len());
    println!("  ID: {}", request.generate().unwrap());
}
