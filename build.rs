use chrono::Datelike;

fn main() {
    // Capture the current year for the footer copyright
    let build_year = chrono::Utc::now().year();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Email delivery tokens are baked in at compile time
    println!("cargo:rerun-if-env-changed=PORTFOLIO_EMAIL_SERVICE_ID");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_EMAIL_TEMPLATE_ID");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_EMAIL_PUBLIC_KEY");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
