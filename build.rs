use std::env;
use std::fs;
use std::path::Path;
use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;

    let cargo = CargoBuilder::default()
        .opt_level(true)
        .target_triple(true)
        .build()?;

    let rustc = RustcBuilder::default()
        .semver(true)
        .channel(true)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;

    copy_profiles()?;

    Ok(())
}

/// Copies every `config/*.toml` profile next to the built binary
/// (OUT_DIR is `target/<profile>/build/<crate>-<hash>/out`).
fn copy_profiles() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = env::var("OUT_DIR")?;
    let target_dir = Path::new(&out_dir)
        .parent()
        .and_then(|p| p.parent())
        .and_then(|p| p.parent())
        .ok_or("Could not determine target directory")?;

    let source_dir = Path::new("config");
    println!("cargo:rerun-if-changed=config");
    if !source_dir.is_dir() {
        return Ok(());
    }

    let dest_dir = target_dir.join("config");
    fs::create_dir_all(&dest_dir)?;

    for entry in fs::read_dir(source_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            if let Some(name) = path.file_name() {
                fs::copy(&path, dest_dir.join(name))?;
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }

    Ok(())
}
