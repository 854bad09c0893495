use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// Read the whole input from `file` or stdin, honouring --max-size / --force.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    notice(
                        global,
                        &format!(
                            "processing large file ({} bytes, limit: {} bytes)",
                            file_size, global.max_size
                        ),
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if global.max_size > 0 && buffer.len() > global.max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use a FILE with --force for large inputs.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

/// Print an informational line on stderr unless --quiet.
pub fn notice(global: &GlobalArgs, message: &str) {
    if global.quiet {
        return;
    }
    if use_color(global) {
        eprintln!("\x1b[1;33mnote:\x1b[0m {}", message);
    } else {
        eprintln!("note: {}", message);
    }
}

fn use_color(global: &GlobalArgs) -> bool {
    !global.no_color && std::env::var("NO_COLOR").is_err() && io::stderr().is_terminal()
}
