use thaitok_rs::{get_char_category, parse, Tokenizer};

fn main() {
    let input = "สวัสดีค่ะ ยินดีต้อนรับสู่เว็บไซต์ของเรา";
    println!("Input: {}", input);

    println!("\nChar categories:");
    for (i, c) in input.chars().enumerate() {
        println!("  {}: {:?} - {:?}", i, c, get_char_category(c));
    }

    let words = parse(Tokenizer::new(), input).expect("parse failed");
    println!("\nWords ({}):", words.len());
    match serde_json::to_string_pretty(&words) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing words: {}", e),
    }
}
