//! Generates map conversions for `src/models.rs` into `OUT_DIR`.

fn main() -> anyhow::Result<()> {
    autoconvert_codegen::Builder::new()
        .source("src/models.rs")
        .runtime_crate("::autoconvert")
        .generate()?;

    Ok(())
}
