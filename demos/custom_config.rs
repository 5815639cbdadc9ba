use chrono::NaiveDate;
use dateserial::{DateSerialError, DateSerialGenerator, SerialPadding, ThreadRandom};

fn main() {
    let date = NaiveDate::from_ymd_opt(2025, 5, 11)
        .unwrap()
        .and_hms_opt(22, 0, 0)
        .unwrap();

    // Start from a random request and add time and a source tag
    let request = DateSerialGenerator::get_generator(date, 1, 999, &ThreadRandom)
        .unwrap()
        .with_time()
        .with_filler(42)
        .unwrap();
    println!("With time and filler 42: {}", request.generate().unwrap());

    // Four-digit year plus time leaves only three serial digits once the
    // filler is in, and the fixed four-digit padding then overflows
    let full = request.with_full_year().with_filler(1100).unwrap();
    match full.generate() {
        Ok(id) => println!("Full year: {id}"),
        Err(DateSerialError::EncodingOverflow { digits, max }) => {
            println!("Full year overflows: {digits} > {max}");
        }
        Err(err) => println!("Full year failed: {err}"),
    }

    // Budget padding writes the serial in exactly the digits it was given
    let budgeted = full.with_padding(SerialPadding::Budget);
    println!(
        "Full year, budget padding: {} ({} serial digits)",
        budgeted.generate().unwrap(),
        budgeted.budget().unwrap().max_serial_len()
    );
}
