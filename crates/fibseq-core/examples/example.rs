use fibseq_core::{generate, generate_checked, MAX_EXACT_TERMS};

fn main() {
    println!("Fibonacci sequence (first 10 terms):");
    println!("{:?}", generate(10));

    println!("\nexact range:");
    let exact = generate(MAX_EXACT_TERMS as i64);
    println!("{} terms, last = {:?}", exact.len(), exact.last());

    println!("\npast the exact range:");
    println!(
        "generate_checked({}) = {:?}",
        MAX_EXACT_TERMS + 1,
        generate_checked(MAX_EXACT_TERMS as i64 + 1)
    );
}
