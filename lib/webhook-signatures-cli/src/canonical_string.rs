use crate::{args::CanonicalStringArgs, util::success_kaomoji};
use http::Method;
use miette::{Context, IntoDiagnostic};
use std::fs;
use webhook_signatures::{cavage::signature_string, digest};

pub fn do_it(args: &CanonicalStringArgs) -> miette::Result<()> {
    let method = Method::from_bytes(args.method.as_bytes())
        .into_diagnostic()
        .wrap_err("Invalid HTTP method")?;
    let body = fs::read(&args.body_file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", args.body_file.display()))?;

    let digest = digest::Algorithm::Sha256.header_value(&body);
    let signature_string =
        signature_string::construct(&method, &args.path, &args.host, &args.date, &digest);

    println!("Digest: {digest} {}", success_kaomoji());
    println!();
    println!("{signature_string}");

    Ok(())
}
