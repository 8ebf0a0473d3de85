use crate::util::{error_kaomoji, success_kaomoji};
use owo_colors::{OwoColorize, Stream};
use webhook_signatures::verifier::ALGORITHM;

pub fn do_it(header: String) -> miette::Result<()> {
    let signature_header = match webhook_signatures::cavage::parse(&header) {
        Ok(signature_header) => signature_header,
        Err(err) => return Err(miette::Error::new(err).with_source_code(header)),
    };

    println!("✅ Header is valid! {}", success_kaomoji());
    for (key, value) in signature_header.iter() {
        println!(
            "  {}: {value}",
            key.if_supports_color(Stream::Stdout, |text| text.bold())
        );
    }

    if signature_header.signature().is_none() {
        println!("⚠️ Header has no signature {}", error_kaomoji());
    }

    match signature_header.algorithm() {
        Some(ALGORITHM) => {}
        Some(algorithm) => println!(
            "⚠️ Algorithm \"{algorithm}\" is not supported {}",
            error_kaomoji()
        ),
        None => println!("⚠️ Header has no algorithm {}", error_kaomoji()),
    }

    Ok(())
}
