use vergen::EmitBuilder;

// Simple build script that just generates build information
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Emit build-related instructions (timestamp, rustc, etc.)
    EmitBuilder::builder().all_build().emit()?;

    Ok(())
}
