//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `aac_core` linkage.
//! - Print spoken forms for integer arguments, e.g. `aac_cli 42 -7`.

fn main() {
    println!("aac_core ping={}", aac_core::ping());
    println!("aac_core version={}", aac_core::core_version());

    for arg in std::env::args().skip(1) {
        match arg.trim().parse::<i64>() {
            Ok(value) => println!("{value} => {}", aac_core::number_to_words(value)),
            Err(_) => match aac_core::speech::number_words::digits_to_words(arg.trim()) {
                Some(words) => println!("{arg} => {words}"),
                None => eprintln!("{arg} => not an integer"),
            },
        }
    }
}
