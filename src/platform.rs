//! # Platform-specific utilities
//!
//! Questo modulo centralizza la logica cross-platform per Ghostscript:
//! il nome dell'eseguibile e le istruzioni di installazione mostrate
//! quando il controllo preliminare fallisce.

/// Default Ghostscript executable for the current platform
pub fn default_engine_program() -> &'static str {
    if cfg!(windows) {
        "gswin64c"
    } else {
        "gs"
    }
}

/// Installation guidance for Ghostscript, one line per package manager
pub fn install_instructions() -> Vec<(&'static str, &'static str)> {
    vec![
        ("macOS", "brew install ghostscript"),
        ("Ubuntu/Debian", "sudo apt-get install ghostscript"),
        ("Fedora/RHEL", "sudo dnf install ghostscript"),
        ("Windows", "winget install ArtifexSoftware.GhostScript (or download from https://www.ghostscript.com/releases/gsdnld.html)"),
    ]
}

/// Full multi-line message shown when Ghostscript is not invocable
pub fn missing_engine_report(program: &str) -> String {
    let mut report = format!("Ghostscript ('{}') not found. Please install Ghostscript:\n", program);
    for (platform, command) in install_instructions() {
        report.push_str(&format!("   {}: {}\n", platform, command));
    }
    report
}

/// System information for debugging
pub fn system_info() -> SystemInfo {
    SystemInfo {
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        family: std::env::consts::FAMILY,
    }
}

/// System information structure
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: &'static str,
    pub arch: &'static str,
    pub family: &'static str,
}

impl std::fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.os, self.arch, self.family)
    }
}
