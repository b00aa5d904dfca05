use crate::error::Result;
use ffkit::engine::config::ForceFieldConfig;
use ffkit::engine::registry::ForceFieldRegistry;
use std::fmt::Write;

pub fn run() -> Result<()> {
    print!("{}", report()?);
    Ok(())
}

pub fn report() -> Result<String> {
    let registry = ForceFieldRegistry::new(ForceFieldConfig::default())?;
    let mut out = String::new();
    for name in registry.names() {
        let _ = writeln!(out, "{}", name);
    }
    Ok(out)
}
