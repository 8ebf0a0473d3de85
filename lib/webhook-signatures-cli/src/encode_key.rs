use crate::util::success_kaomoji;
use hex_simd::AsciiCase;
use webhook_signatures::crypto::parse;

pub fn do_it(hex: &str) -> miette::Result<()> {
    let public_key = parse::ed25519_public_key_from_hex(hex)?;

    println!("✅ Key is valid! {}", success_kaomoji());
    println!();
    println!(
        "{}",
        hex_simd::encode_to_string(public_key.as_der(), AsciiCase::Lower)
    );
    println!();
    print!("{}", public_key.to_pem()?);

    Ok(())
}
