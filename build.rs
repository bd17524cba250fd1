use std::process::Command;

fn main() {
    // The wasm boundary reports which commit it was built from; fall back
    // to "unknown" outside a git checkout.
    let commit = Command::new("git")
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=BUILD_COMMIT={}", commit);
    println!("cargo:rerun-if-changed=.git/HEAD");
}
