// src/bin/generate_cli_files.rs
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use clap_mangen::Man;
use std::{env, fs, io::Error, path::Path};

use formatted_duration::cli::Args;

const BIN_NAME: &str = "formatted-duration";

fn main() -> Result<(), Error> {
    // Output directory from the first argument, then OUT_DIR, then a default.
    let outdir = env::args_os()
        .nth(1)
        .or_else(|| env::var_os("OUT_DIR"))
        .unwrap_or_else(|| "target/generated".into());
    let out_path = Path::new(&outdir);
    fs::create_dir_all(out_path)?;

    let cmd = Args::command().name(BIN_NAME);

    // --- Man Page ---
    let man_path = out_path.join(format!("{BIN_NAME}.1"));
    let mut man_file = fs::File::create(&man_path)?;
    println!("Generating man page: {man_path:?}");
    Man::new(cmd.clone()).render(&mut man_file)?;

    // --- Shell Completions ---
    let shells = [
        (Shell::Bash, "bash"),
        (Shell::Elvish, "elv"),
        (Shell::Fish, "fish"),
        (Shell::PowerShell, "ps1"),
        (Shell::Zsh, "zsh"),
    ];

    for (shell, ext) in shells {
        let completions_path = out_path.join(format!("{BIN_NAME}.{ext}"));
        println!("Generating completion file: {completions_path:?}");
        let mut file = fs::File::create(&completions_path)?;
        generate(shell, &mut cmd.clone(), BIN_NAME, &mut file);
    }

    println!(
        "Successfully generated man page and completions in: {}",
        out_path.display()
    );
    Ok(())
}
