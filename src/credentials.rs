use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const KEY_FILE: &str = ".stock_api_key";

pub fn api_key_path() -> io::Result<PathBuf> {
    key_path_in(dirs::home_dir())
}

fn key_path_in(home: Option<PathBuf>) -> io::Result<PathBuf> {
    home.map(|dir| dir.join(KEY_FILE)).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "cannot locate the home directory for the API key file",
        )
    })
}

/// First line of the key file, trimmed. `None` when the file is missing or blank.
pub fn read_api_key(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let key = contents.lines().next()?.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

pub fn save_api_key(path: &Path, key: &str) -> io::Result<()> {
    std::fs::write(path, key)
}

/// Returns the stored key, or runs the first-time prompt on stdin/stdout.
pub fn load_or_prompt(path: &Path) -> io::Result<String> {
    if let Some(key) = read_api_key(path) {
        log::debug!("using API key from {}", path.display());
        return Ok(key);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_api_key(path, &mut stdin.lock(), &mut stdout.lock())
}

/// Asks for a key, persists it, and returns it. A failed save only warns.
pub fn prompt_api_key<R, W>(path: &Path, input: &mut R, output: &mut W) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "First time setup: Please enter your Alpha Vantage API Key.")?;
    writeln!(output, "(It will be saved to {})", path.display())?;
    write!(output, "Key: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let key = line.trim().to_string();
    if key.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no API key entered",
        ));
    }

    match save_api_key(path, &key) {
        Ok(()) => writeln!(output, "Key saved successfully.\n")?,
        Err(e) => {
            log::debug!("saving {} failed: {}", path.display(), e);
            eprintln!("Warning: Could not save API key to file.");
        }
    }

    Ok(key)
}
