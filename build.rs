use std::process::Command;

fn main() {
    println!("cargo:rustc-env=PACFIND_VERSION={}", version_from_git());
}

fn version_from_git() -> String {
    let attempts: [&[&str]; 2] = [
        &["describe", "--tags", "--always", "--dirty"],
        &["rev-parse", "--short", "HEAD"],
    ];

    for args in attempts.iter() {
        if let Ok(output) = Command::new("git").args(*args).output() {
            if output.status.success() {
                let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !version.is_empty() {
                    return version;
                }
            }
        }
    }

    "unknown".to_string()
}
